//! Favorites: ordered, deduplicated set of scene paths

/// Ordered set of favorite scene paths.
///
/// Insertion order is preserved; membership is keyed by the path string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    paths: Vec<String>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing path list, dropping duplicates
    pub fn from_paths(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut set = Self::new();
        for path in paths {
            let path = path.into();
            if !set.contains(&path) {
                set.paths.push(path);
            }
        }
        set
    }

    /// Add if absent, remove if present. Returns the new membership state.
    pub fn toggle(&mut self, path: &str) -> bool {
        if let Some(pos) = self.paths.iter().position(|p| p == path) {
            self.paths.remove(pos);
            false
        } else {
            self.paths.push(path.to_string());
            true
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.paths.len();
        self.paths.retain(|p| p != path);
        self.paths.len() != before
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }
}
