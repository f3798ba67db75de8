//! Asset index: enumeration of scene assets

use stagehand_core::{normalize_path, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension that marks a file as a scene asset
pub const SCENE_EXTENSION: &str = ".scene.toml";

/// Queries the host's asset database for scene assets.
///
/// Paths are the catalog's identity keys, so implementations must return
/// them in the same form they expect in `scene_exists`. No ordering
/// guarantee; callers sort. An empty result is valid.
pub trait AssetIndex {
    fn find_scenes(&self) -> Result<Vec<String>>;

    /// Whether `path` still resolves to a scene asset
    fn scene_exists(&self, path: &str) -> bool;
}

/// [`AssetIndex`] backed by a recursive directory scan for `*.scene.toml`
/// files under a project root.
///
/// Paths are reported relative to the root (matching how the build list
/// refers to scenes); a missing root yields an empty list.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn scan(&self, dir: &Path, found: &mut Vec<String>) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                self.scan(&path, found)?;
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.ends_with(SCENE_EXTENSION))
                .unwrap_or(false)
            {
                let rel = path.strip_prefix(&self.root).unwrap_or(&path);
                found.push(normalize_path(&rel.to_string_lossy()));
            }
        }

        Ok(())
    }
}

impl AssetIndex for DirectoryAssets {
    fn find_scenes(&self) -> Result<Vec<String>> {
        let mut found = Vec::new();
        self.scan(&self.root, &mut found)?;
        found.sort();
        Ok(found)
    }

    fn scene_exists(&self, path: &str) -> bool {
        // join() keeps absolute paths absolute, so both forms resolve
        self.root.join(path).is_file()
    }
}

/// [`AssetIndex`] over a fixed list of paths. Existence is membership.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    paths: Vec<String>,
}

impl StaticAssets {
    pub fn new(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetIndex for StaticAssets {
    fn find_scenes(&self) -> Result<Vec<String>> {
        Ok(self.paths.clone())
    }

    fn scene_exists(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stagehand_assets_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_root_is_empty() {
        let index = DirectoryAssets::new("/nonexistent/stagehand/project");
        assert!(index.find_scenes().unwrap().is_empty());
    }

    #[test]
    fn test_scan_finds_nested_scenes_relative_to_root() {
        let root = temp_dir();
        fs::create_dir_all(root.join("levels/act1")).unwrap();
        fs::write(root.join("Main.scene.toml"), "[scene]\nname = \"Main\"\n").unwrap();
        fs::write(
            root.join("levels/act1/Tavern.scene.toml"),
            "[scene]\nname = \"Tavern\"\n",
        )
        .unwrap();
        fs::write(root.join("notes.toml"), "x = 1\n").unwrap();

        let scenes = DirectoryAssets::new(&root).find_scenes().unwrap();
        assert_eq!(scenes, vec!["Main.scene.toml", "levels/act1/Tavern.scene.toml"]);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_scene_exists_resolves_against_root() {
        let root = temp_dir();
        fs::write(root.join("Main.scene.toml"), "[scene]\n").unwrap();

        let index = DirectoryAssets::new(&root);
        assert!(index.scene_exists("Main.scene.toml"));
        assert!(!index.scene_exists("Gone.scene.toml"));

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_scan_output_is_sorted() {
        let root = temp_dir();
        fs::write(root.join("b.scene.toml"), "").unwrap();
        fs::write(root.join("a.scene.toml"), "").unwrap();

        let scenes = DirectoryAssets::new(&root).find_scenes().unwrap();
        assert_eq!(scenes, vec!["a.scene.toml", "b.scene.toml"]);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_static_assets_passthrough() {
        let index = StaticAssets::new(["b.scene.toml", "a.scene.toml"]);
        assert_eq!(index.find_scenes().unwrap(), vec!["b.scene.toml", "a.scene.toml"]);
        assert!(index.scene_exists("a.scene.toml"));
        assert!(!index.scene_exists("c.scene.toml"));
    }
}
