//! Search filter over catalog scenes

use crate::types::SceneRecord;

/// Case-insensitive substring filter against scene name or path.
///
/// Pure projection: an empty or all-whitespace query returns every record;
/// matches keep the input order; the input is never modified.
pub fn filter_scenes<'a>(scenes: &'a [SceneRecord], query: &str) -> Vec<&'a SceneRecord> {
    let query = query.trim();
    if query.is_empty() {
        return scenes.iter().collect();
    }

    let needle = query.to_lowercase();
    scenes
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle) || s.path.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scenes() -> Vec<SceneRecord> {
        vec![
            SceneRecord::new("levels/Attic.scene.toml"),
            SceneRecord::new("levels/Bar.scene.toml"),
            SceneRecord::new("debug/BarFight.scene.toml"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let scenes = sample_scenes();
        let filtered = filter_scenes(&scenes, "");
        assert_eq!(filtered.len(), scenes.len());
        for (got, want) in filtered.iter().zip(scenes.iter()) {
            assert_eq!(got.path, want.path);
        }
    }

    #[test]
    fn test_whitespace_query_returns_all() {
        let scenes = sample_scenes();
        assert_eq!(filter_scenes(&scenes, "   ").len(), scenes.len());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let scenes = sample_scenes();
        let filtered = filter_scenes(&scenes, "BAR");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Bar");
        assert_eq!(filtered[1].name, "BarFight");
    }

    #[test]
    fn test_match_against_path() {
        let scenes = sample_scenes();
        let filtered = filter_scenes(&scenes, "debug/");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "BarFight");
    }

    #[test]
    fn test_no_match_is_empty() {
        let scenes = sample_scenes();
        assert!(filter_scenes(&scenes, "dungeon").is_empty());
    }

    #[test]
    fn test_result_is_subset_in_input_order() {
        let scenes = sample_scenes();
        let filtered = filter_scenes(&scenes, "scene");

        let mut last_pos = 0;
        for record in filtered {
            let pos = scenes.iter().position(|s| s.path == record.path).unwrap();
            assert!(pos >= last_pos);
            last_pos = pos;
        }
    }
}
