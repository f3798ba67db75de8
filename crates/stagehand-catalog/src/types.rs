//! Scene record type

use stagehand_core::{normalize_path, scene_name};
use stagehand_host::BuildEntry;

/// A scene known to the catalog.
///
/// Identity is `path`. Only the build-membership fields change after
/// construction; everything else is derived from the path once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRecord {
    pub name: String,
    pub path: String,
    pub in_build: bool,
    /// Position in the build list, `-1` when not included
    pub build_index: i32,
}

impl SceneRecord {
    pub fn new(path: &str) -> Self {
        let path = normalize_path(path);
        Self {
            name: scene_name(&path),
            path,
            in_build: false,
            build_index: -1,
        }
    }

    /// Recompute build membership by linear scan over the ordered entries
    pub fn update_membership(&mut self, entries: &[BuildEntry]) {
        self.in_build = false;
        self.build_index = -1;

        for (i, entry) in entries.iter().enumerate() {
            if entry.path == self.path {
                self.in_build = true;
                self.build_index = i as i32;
                break;
            }
        }
    }

    /// Display label: `[index] name` for build scenes, plain name otherwise
    pub fn label(&self) -> String {
        if self.in_build {
            format!("[{}] {}", self.build_index, self.name)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_derives_name() {
        let record = SceneRecord::new("levels/Tavern.scene.toml");
        assert_eq!(record.name, "Tavern");
        assert_eq!(record.path, "levels/Tavern.scene.toml");
        assert!(!record.in_build);
        assert_eq!(record.build_index, -1);
    }

    #[test]
    fn test_new_record_normalizes_path() {
        let record = SceneRecord::new("levels\\Tavern.scene.toml");
        assert_eq!(record.path, "levels/Tavern.scene.toml");
    }

    #[test]
    fn test_membership_found() {
        let entries = vec![
            BuildEntry::new("levels/Main.scene.toml"),
            BuildEntry::new("levels/Tavern.scene.toml"),
        ];

        let mut record = SceneRecord::new("levels/Tavern.scene.toml");
        record.update_membership(&entries);

        assert!(record.in_build);
        assert_eq!(record.build_index, 1);
    }

    #[test]
    fn test_membership_cleared_when_removed() {
        let mut record = SceneRecord::new("levels/Tavern.scene.toml");
        record.update_membership(&[BuildEntry::new("levels/Tavern.scene.toml")]);
        assert!(record.in_build);

        record.update_membership(&[]);
        assert!(!record.in_build);
        assert_eq!(record.build_index, -1);
    }

    #[test]
    fn test_label() {
        let mut record = SceneRecord::new("levels/Tavern.scene.toml");
        assert_eq!(record.label(), "Tavern");

        record.update_membership(&[BuildEntry::new("levels/Tavern.scene.toml")]);
        assert_eq!(record.label(), "[0] Tavern");
    }
}
