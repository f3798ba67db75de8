//! CLI command implementations

pub mod build;
pub mod config;
pub mod favorite;
pub mod list;
pub mod open;
pub mod recent;
pub mod search;

use anyhow::{bail, Result};
use stagehand_switcher::SceneSwitcher;

/// Resolve a user-supplied scene argument to a catalog path.
///
/// Accepts an exact path key or a unique scene name (case-insensitive).
pub(crate) fn resolve_scene(switcher: &SceneSwitcher, query: &str) -> Result<String> {
    if let Some(record) = switcher.catalog().get(query) {
        return Ok(record.path.clone());
    }

    let matches: Vec<&str> = switcher
        .catalog()
        .all_scenes()
        .iter()
        .filter(|s| s.name.eq_ignore_ascii_case(query))
        .map(|s| s.path.as_str())
        .collect();

    match matches.as_slice() {
        [] => bail!("No scene named or at '{}'", query),
        [path] => Ok(path.to_string()),
        many => bail!(
            "Scene name '{}' is ambiguous ({} matches); use a path",
            query,
            many.len()
        ),
    }
}
