//! Project context: wires the switcher to the file-system host backends

use crate::host::{CliHost, NoPrompt};
use anyhow::{Context, Result};
use stagehand_host::{DirectoryAssets, JsonPrefs, TomlBuildList};
use stagehand_switcher::{SceneSwitcher, SwitcherSettings};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Build list file at the project root
pub const BUILD_FILE: &str = "build.toml";
/// Pref store location under the project root
pub const PREFS_FILE: &str = ".stagehand/prefs.json";

/// Assemble a ready-to-use switcher for the project at `root`.
///
/// Loads (or creates) settings, opens the pref store, and runs the
/// startup refresh.
pub fn open_project(root: &Path) -> Result<SceneSwitcher> {
    anyhow::ensure!(root.is_dir(), "Project directory not found: {}", root.display());

    let settings = SwitcherSettings::load_or_create(root)
        .with_context(|| format!("Failed to load settings for {}", root.display()))?;

    let prefs = Rc::new(RefCell::new(JsonPrefs::load(root.join(PREFS_FILE))));

    let mut switcher = SceneSwitcher::new(
        settings,
        Box::new(DirectoryAssets::new(root)),
        Box::new(TomlBuildList::new(root.join(BUILD_FILE))),
        Box::new(CliHost::new(Rc::clone(&prefs))),
        Box::new(NoPrompt),
        Box::new(prefs),
    );

    switcher
        .startup()
        .with_context(|| format!("Failed to scan project {}", root.display()))?;

    log::debug!(
        "Opened project {} with {} scenes",
        root.display(),
        switcher.catalog().len()
    );
    Ok(switcher)
}
