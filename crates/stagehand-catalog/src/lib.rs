//! Stagehand Catalog - Scene discovery and bookkeeping
//!
//! This crate holds the non-UI core of the scene switcher: the scene
//! catalog (discovery + build-list membership), the search filter, and the
//! favorites and recents lists with their preference-store persistence.

mod catalog;
mod favorites;
mod filter;
mod recents;
mod store;
mod types;

pub use catalog::SceneCatalog;
pub use favorites::FavoritesSet;
pub use filter::filter_scenes;
pub use recents::{RecentsList, DEFAULT_MAX_RECENTS, MAX_RECENTS, MIN_RECENTS};
pub use store::{
    load_favorites, load_recents, save_favorites, save_recents, FAVORITES_KEY, RECENTS_KEY,
};
pub use types::SceneRecord;
