//! Recents: bounded most-recent-first list of scene paths

/// Default capacity of the recents list
pub const DEFAULT_MAX_RECENTS: usize = 10;
/// Smallest allowed capacity
pub const MIN_RECENTS: usize = 5;
/// Largest allowed capacity
pub const MAX_RECENTS: usize = 20;

/// Bounded most-recent-first scene list.
///
/// Re-adding a path moves it to the front without duplicating it; the list
/// never exceeds its capacity, which is clamped to 5..=20.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentsList {
    paths: Vec<String>,
    max: usize,
}

impl Default for RecentsList {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentsList {
    pub fn new() -> Self {
        Self::with_max(DEFAULT_MAX_RECENTS)
    }

    pub fn with_max(max: usize) -> Self {
        Self {
            paths: Vec::new(),
            max: max.clamp(MIN_RECENTS, MAX_RECENTS),
        }
    }

    /// Build from a most-recent-first path list, truncating to capacity
    pub fn from_paths(paths: impl IntoIterator<Item = impl Into<String>>, max: usize) -> Self {
        let mut list = Self::with_max(max);
        for path in paths {
            if list.paths.len() == list.max {
                break;
            }
            let path = path.into();
            if !list.paths.contains(&path) {
                list.paths.push(path);
            }
        }
        list
    }

    /// Record a scene visit: move-or-insert at the front, then truncate
    pub fn push(&mut self, path: &str) {
        self.paths.retain(|p| p != path);
        self.paths.insert(0, path.to_string());
        self.paths.truncate(self.max);
    }

    /// Change the capacity (clamped), truncating if it shrank
    pub fn set_max(&mut self, max: usize) {
        self.max = max.clamp(MIN_RECENTS, MAX_RECENTS);
        self.paths.truncate(self.max);
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Most-recent-first
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_inserts_at_front() {
        let mut recents = RecentsList::new();
        recents.push("a.scene.toml");
        recents.push("b.scene.toml");

        assert_eq!(recents.paths(), ["b.scene.toml", "a.scene.toml"]);
    }

    #[test]
    fn test_repush_moves_to_front_without_duplicate() {
        let mut recents = RecentsList::new();
        recents.push("a.scene.toml");
        recents.push("b.scene.toml");
        recents.push("a.scene.toml");

        assert_eq!(recents.paths(), ["a.scene.toml", "b.scene.toml"]);
        assert_eq!(recents.len(), 2);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut recents = RecentsList::new();
        for i in 0..15 {
            recents.push(&format!("scene_{i}.scene.toml"));
        }

        assert_eq!(recents.len(), DEFAULT_MAX_RECENTS);
        // The 10 most recent survive, most-recent-first
        assert_eq!(recents.paths()[0], "scene_14.scene.toml");
        assert_eq!(recents.paths()[9], "scene_5.scene.toml");
    }

    #[test]
    fn test_twelfth_push_into_full_list() {
        let mut recents = RecentsList::new();
        for i in 0..11 {
            recents.push(&format!("scene_{i}.scene.toml"));
        }
        recents.push("scene_11.scene.toml");

        assert_eq!(recents.len(), 10);
        assert_eq!(recents.paths()[0], "scene_11.scene.toml");
    }

    #[test]
    fn test_max_is_clamped() {
        assert_eq!(RecentsList::with_max(1).max(), MIN_RECENTS);
        assert_eq!(RecentsList::with_max(100).max(), MAX_RECENTS);
        assert_eq!(RecentsList::with_max(12).max(), 12);
    }

    #[test]
    fn test_set_max_truncates() {
        let mut recents = RecentsList::with_max(10);
        for i in 0..10 {
            recents.push(&format!("scene_{i}.scene.toml"));
        }

        recents.set_max(5);
        assert_eq!(recents.len(), 5);
        assert_eq!(recents.paths()[0], "scene_9.scene.toml");
    }

    #[test]
    fn test_from_paths_keeps_order_and_caps() {
        let paths: Vec<String> = (0..12).map(|i| format!("scene_{i}.scene.toml")).collect();
        let recents = RecentsList::from_paths(paths, 10);

        assert_eq!(recents.len(), 10);
        assert_eq!(recents.paths()[0], "scene_0.scene.toml");
    }
}
