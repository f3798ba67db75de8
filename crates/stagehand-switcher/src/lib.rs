//! Stagehand Switcher - Scene switching orchestration
//!
//! Ties the catalog, the favorites/recents lists, and the host seams
//! together: safe scene switching behind the dirty-scene prompt, quick
//! loads by build index, build-list edits, and host event handling.

mod settings;
mod switcher;

pub use settings::SwitcherSettings;
pub use switcher::SceneSwitcher;
