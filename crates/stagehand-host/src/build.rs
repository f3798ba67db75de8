//! Build list: the ordered registry of scenes included in a shipped build

use serde::{Deserialize, Serialize};
use stagehand_core::{Result, StagehandError};
use std::fs;
use std::path::{Path, PathBuf};

/// One entry in the host's build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEntry {
    pub path: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl BuildEntry {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            enabled: true,
        }
    }
}

/// The host's ordered build configuration list.
///
/// Mutation is read-modify-write through `set_entries`; order is
/// significant (the position of an entry is its build index).
pub trait BuildList {
    fn entries(&self) -> Result<Vec<BuildEntry>>;
    fn set_entries(&mut self, entries: Vec<BuildEntry>) -> Result<()>;
}

impl<T: BuildList> BuildList for std::rc::Rc<std::cell::RefCell<T>> {
    fn entries(&self) -> Result<Vec<BuildEntry>> {
        self.borrow().entries()
    }

    fn set_entries(&mut self, entries: Vec<BuildEntry>) -> Result<()> {
        self.borrow_mut().set_entries(entries)
    }
}

/// TOML file format for the build list
#[derive(Debug, Default, Serialize, Deserialize)]
struct BuildFile {
    #[serde(default)]
    scenes: Vec<BuildEntry>,
}

/// [`BuildList`] stored as `[[scenes]]` entries in a `build.toml` file.
///
/// A missing file reads as an empty list; writes replace the whole file.
#[derive(Debug, Clone)]
pub struct TomlBuildList {
    path: PathBuf,
}

impl TomlBuildList {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BuildList for TomlBuildList {
    fn entries(&self) -> Result<Vec<BuildEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: BuildFile = toml::from_str(&content).map_err(|e| {
            StagehandError::BuildListError(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(file.scenes)
    }

    fn set_entries(&mut self, entries: Vec<BuildEntry>) -> Result<()> {
        let content = toml::to_string_pretty(&BuildFile { scenes: entries })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory [`BuildList`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBuildList {
    entries: Vec<BuildEntry>,
}

impl MemoryBuildList {
    pub fn new(entries: impl IntoIterator<Item = BuildEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// List where every path is an enabled entry, in order
    pub fn from_paths(paths: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self::new(paths.into_iter().map(|p| BuildEntry::new(p.as_ref())))
    }
}

impl BuildList for MemoryBuildList {
    fn entries(&self) -> Result<Vec<BuildEntry>> {
        Ok(self.entries.clone())
    }

    fn set_entries(&mut self, entries: Vec<BuildEntry>) -> Result<()> {
        self.entries = entries;
        Ok(())
    }
}
