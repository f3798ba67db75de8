//! Switcher settings
//!
//! Settings live in `stagehand.toml`. A project-local file wins wholesale
//! over the global `~/.stagehand/stagehand.toml`; when neither exists the
//! defaults are written to the project file so they can be
//! version-controlled and shared across a team.

use serde::{Deserialize, Serialize};
use stagehand_core::{Result, StagehandError};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file name, both project-local and global
pub const SETTINGS_FILE: &str = "stagehand.toml";

/// User-tunable behavior of the switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitcherSettings {
    /// Capacity of the recents list (clamped to 5..=20 on load)
    #[serde(default = "default_max_recent")]
    pub max_recent_scenes: usize,

    /// Save the active scene on switch without prompting
    #[serde(default)]
    pub auto_save_on_switch: bool,

    /// Show `[index]` labels next to build scenes
    #[serde(default = "default_true")]
    pub show_build_index: bool,

    /// Minimum seconds between full catalog rescans
    #[serde(default = "default_refresh_secs")]
    pub min_refresh_interval_secs: u64,

    /// Enable quick-load-by-build-index shortcuts
    #[serde(default = "default_true")]
    pub enable_index_shortcuts: bool,
}

fn default_max_recent() -> usize {
    stagehand_catalog::DEFAULT_MAX_RECENTS
}

fn default_true() -> bool {
    true
}

fn default_refresh_secs() -> u64 {
    5
}

impl Default for SwitcherSettings {
    fn default() -> Self {
        Self {
            max_recent_scenes: default_max_recent(),
            auto_save_on_switch: false,
            show_build_index: true,
            min_refresh_interval_secs: default_refresh_secs(),
            enable_index_shortcuts: true,
        }
    }
}

impl SwitcherSettings {
    /// Load settings for a project, creating the project file with
    /// defaults when no settings exist anywhere.
    ///
    /// Precedence: project `stagehand.toml`, then global
    /// `~/.stagehand/stagehand.toml`, then defaults.
    pub fn load_or_create(project_root: &Path) -> Result<Self> {
        let local = project_root.join(SETTINGS_FILE);
        if local.exists() {
            return Self::load_file(&local);
        }

        if let Some(global) = Self::global_path() {
            if global.exists() {
                return Self::load_file(&global);
            }
        }

        let settings = Self::default();
        settings.save(&local)?;
        Ok(settings)
    }

    /// Load settings from a specific file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Self = toml::from_str(&content).map_err(|e| {
            StagehandError::SettingsError(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;
        settings.max_recent_scenes = settings
            .max_recent_scenes
            .clamp(stagehand_catalog::MIN_RECENTS, stagehand_catalog::MAX_RECENTS);
        Ok(settings)
    }

    /// Write settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn min_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.min_refresh_interval_secs)
    }

    fn global_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".stagehand").join(SETTINGS_FILE))
    }
}
