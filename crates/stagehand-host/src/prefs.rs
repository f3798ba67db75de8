//! Preference store: namespaced string key-value persistence

use stagehand_core::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous string key-value persistence, the editor-prefs analog.
///
/// Keys are namespaced by convention (`stagehand.favorites` etc.); values
/// are opaque strings, typically serialized JSON.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: PrefStore> PrefStore for std::rc::Rc<std::cell::RefCell<T>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.borrow_mut().set(key, value)
    }
}

/// [`PrefStore`] persisted as a flat JSON object in a single file.
///
/// Loading is lenient: a missing, unreadable, or unparsable file starts
/// the store empty. Every `set` rewrites the file.
#[derive(Debug)]
pub struct JsonPrefs {
    path: PathBuf,
    data: HashMap<String, String>,
}

impl JsonPrefs {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("Ignoring corrupt prefs file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, data }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PrefStore for JsonPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory [`PrefStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    data: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stagehand_prefs_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_set_persists_across_loads() {
        let dir = temp_dir();
        let path = dir.join("prefs.json");

        let mut prefs = JsonPrefs::load(&path);
        prefs.set("stagehand.favorites", "[\"a\"]").unwrap();

        let reloaded = JsonPrefs::load(&path);
        assert_eq!(reloaded.get("stagehand.favorites"), Some("[\"a\"]".to_string()));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = temp_dir();
        let prefs = JsonPrefs::load(dir.join("prefs.json"));
        assert_eq!(prefs.get("anything"), None);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = temp_dir();
        let path = dir.join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let prefs = JsonPrefs::load(&path);
        assert_eq!(prefs.get("anything"), None);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_memory_prefs_overwrite() {
        let mut prefs = MemoryPrefs::new();
        prefs.set("key", "one").unwrap();
        prefs.set("key", "two").unwrap();
        assert_eq!(prefs.get("key"), Some("two".to_string()));
    }
}
