//! Scene path helpers
//!
//! Scene identity throughout Stagehand is the path string, so paths are
//! normalized to forward slashes before they are compared or stored.

use std::path::Path;

/// Normalize a path string for use as a scene key.
///
/// Converts backslashes to forward slashes and strips a leading `./`.
pub fn normalize_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .map(String::from)
        .unwrap_or(normalized)
}

/// Derive a display name from a scene path.
///
/// Takes the file stem and trims the `.scene` suffix that remains when the
/// file uses the double `.scene.toml` extension. An empty or extension-only
/// path yields `"Untitled"`.
pub fn scene_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.trim_end_matches(".scene"))
        .filter(|s| !s.is_empty())
        .unwrap_or("Untitled")
        .to_string()
}
