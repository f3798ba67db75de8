//! Persistence of the favorites and recents lists
//!
//! Both lists are stored as JSON arrays of path strings under fixed keys
//! in the host's preference store. Loading is deliberately lenient: a
//! corrupted payload resets the list to empty, and paths that no longer
//! resolve through the asset index are dropped without surfacing anything
//! to the user.

use crate::favorites::FavoritesSet;
use crate::recents::RecentsList;
use stagehand_core::Result;
use stagehand_host::{AssetIndex, PrefStore};

/// Preference key for the favorites list
pub const FAVORITES_KEY: &str = "stagehand.favorites";
/// Preference key for the recents list
pub const RECENTS_KEY: &str = "stagehand.recents";

pub fn save_favorites(prefs: &mut dyn PrefStore, favorites: &FavoritesSet) -> Result<()> {
    save_paths(prefs, FAVORITES_KEY, favorites.paths())
}

pub fn save_recents(prefs: &mut dyn PrefStore, recents: &RecentsList) -> Result<()> {
    save_paths(prefs, RECENTS_KEY, recents.paths())
}

/// Load favorites, dropping entries that no longer resolve
pub fn load_favorites(prefs: &dyn PrefStore, index: &dyn AssetIndex) -> FavoritesSet {
    FavoritesSet::from_paths(load_paths(prefs, index, FAVORITES_KEY))
}

/// Load recents with the given capacity, dropping stale entries
pub fn load_recents(prefs: &dyn PrefStore, index: &dyn AssetIndex, max: usize) -> RecentsList {
    RecentsList::from_paths(load_paths(prefs, index, RECENTS_KEY), max)
}

fn save_paths(prefs: &mut dyn PrefStore, key: &str, paths: &[String]) -> Result<()> {
    let payload = serde_json::to_string(paths)?;
    prefs.set(key, &payload)
}

fn load_paths(prefs: &dyn PrefStore, index: &dyn AssetIndex, key: &str) -> Vec<String> {
    let Some(payload) = prefs.get(key) else {
        return Vec::new();
    };

    let paths: Vec<String> = match serde_json::from_str(&payload) {
        Ok(paths) => paths,
        Err(e) => {
            // Lenient on purpose: a corrupt payload resets the list
            log::warn!("Ignoring corrupt payload under {key}: {e}");
            return Vec::new();
        }
    };

    paths
        .into_iter()
        .filter(|p| index.scene_exists(p))
        .collect()
}
