//! CLI stand-in for a live editor host
//!
//! A CLI session has no open scene in memory, so the "active scene" is
//! just a pref entry and the dirty flag is always false. The prompt is
//! still wired so the contract holds if a real host is swapped in.

use stagehand_core::Result;
use stagehand_host::{DirtyPrompt, JsonPrefs, OpenMode, PrefStore, SaveChoice, SceneHost};
use std::cell::RefCell;
use std::rc::Rc;

/// Pref key tracking the last scene opened from the CLI
pub const ACTIVE_KEY: &str = "stagehand.active";

/// [`SceneHost`] that tracks the active scene in the shared pref store.
pub struct CliHost {
    prefs: Rc<RefCell<JsonPrefs>>,
}

impl CliHost {
    pub fn new(prefs: Rc<RefCell<JsonPrefs>>) -> Self {
        Self { prefs }
    }
}

impl SceneHost for CliHost {
    fn active_path(&self) -> Option<String> {
        self.prefs.borrow().get(ACTIVE_KEY)
    }

    fn is_dirty(&self) -> bool {
        false
    }

    fn open(&mut self, path: &str, mode: OpenMode) -> Result<()> {
        if mode == OpenMode::Replace {
            self.prefs.borrow_mut().set(ACTIVE_KEY, path)?;
        }
        Ok(())
    }

    fn save_open_scenes(&mut self) -> Result<()> {
        // Nothing is held in memory, nothing to save
        Ok(())
    }
}

/// [`DirtyPrompt`] for a host that can never be dirty.
///
/// Unreachable through `CliHost`; cancels if it is ever asked anyway.
pub struct NoPrompt;

impl DirtyPrompt for NoPrompt {
    fn ask(&mut self, _scene_name: &str) -> SaveChoice {
        SaveChoice::Cancel
    }
}
