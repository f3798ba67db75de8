//! Scene-management surface of the host editor

use stagehand_core::Result;
use std::collections::VecDeque;

/// How a scene should be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Replace the currently open scene
    Replace,
    /// Load alongside the currently open scene
    Additive,
}

/// The user's answer to the dirty-scene prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    DontSave,
    Cancel,
}

/// The scene-management operations a host editor must provide.
///
/// One editor object provides the active-scene accessor and the load/save
/// operations, so they live on a single trait.
pub trait SceneHost {
    /// Path of the currently active scene, `None` for an untitled scene
    fn active_path(&self) -> Option<String>;

    /// Whether the active scene has unsaved modifications
    fn is_dirty(&self) -> bool;

    /// Open the scene at `path`
    fn open(&mut self, path: &str, mode: OpenMode) -> Result<()>;

    /// Save all open scenes
    fn save_open_scenes(&mut self) -> Result<()>;
}

/// The user-facing decision point before a destructive scene switch.
///
/// Implementations show a three-way Save / Don't Save / Cancel choice; the
/// switcher never bypasses this when the active scene is dirty.
pub trait DirtyPrompt {
    fn ask(&mut self, scene_name: &str) -> SaveChoice;
}

// Shared-handle impls: the embedder keeps an `Rc` to the collaborator it
// hands the switcher, everything stays on the single host thread.
impl<T: SceneHost> SceneHost for std::rc::Rc<std::cell::RefCell<T>> {
    fn active_path(&self) -> Option<String> {
        self.borrow().active_path()
    }

    fn is_dirty(&self) -> bool {
        self.borrow().is_dirty()
    }

    fn open(&mut self, path: &str, mode: OpenMode) -> Result<()> {
        self.borrow_mut().open(path, mode)
    }

    fn save_open_scenes(&mut self) -> Result<()> {
        self.borrow_mut().save_open_scenes()
    }
}

impl<T: DirtyPrompt> DirtyPrompt for std::rc::Rc<std::cell::RefCell<T>> {
    fn ask(&mut self, scene_name: &str) -> SaveChoice {
        self.borrow_mut().ask(scene_name)
    }
}

/// In-memory [`SceneHost`] that records every operation.
#[derive(Debug, Default)]
pub struct RecordingHost {
    active: Option<String>,
    dirty: bool,
    /// Every `open` call in order
    pub opened: Vec<(String, OpenMode)>,
    /// Number of `save_open_scenes` calls
    pub saves: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with a given active scene, optionally dirty
    pub fn with_active(path: &str, dirty: bool) -> Self {
        Self {
            active: Some(path.to_string()),
            dirty,
            ..Self::default()
        }
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

impl SceneHost for RecordingHost {
    fn active_path(&self) -> Option<String> {
        self.active.clone()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn open(&mut self, path: &str, mode: OpenMode) -> Result<()> {
        self.opened.push((path.to_string(), mode));
        if mode == OpenMode::Replace {
            self.active = Some(path.to_string());
            self.dirty = false;
        }
        Ok(())
    }

    fn save_open_scenes(&mut self) -> Result<()> {
        self.saves += 1;
        self.dirty = false;
        Ok(())
    }
}

/// [`DirtyPrompt`] that answers from a scripted queue of choices.
///
/// Runs out of script? It cancels, which is the non-destructive answer.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    choices: VecDeque<SaveChoice>,
    /// Scene names the prompt was shown for
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(choices: impl IntoIterator<Item = SaveChoice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl DirtyPrompt for ScriptedPrompt {
    fn ask(&mut self, scene_name: &str) -> SaveChoice {
        self.asked.push(scene_name.to_string());
        self.choices.pop_front().unwrap_or(SaveChoice::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_replace_updates_active() {
        let mut host = RecordingHost::with_active("a.scene.toml", true);
        host.open("b.scene.toml", OpenMode::Replace).unwrap();

        assert_eq!(host.active_path(), Some("b.scene.toml".to_string()));
        assert!(!host.is_dirty());
        assert_eq!(host.opened.len(), 1);
    }

    #[test]
    fn test_recording_host_additive_keeps_active() {
        let mut host = RecordingHost::with_active("a.scene.toml", false);
        host.open("b.scene.toml", OpenMode::Additive).unwrap();

        assert_eq!(host.active_path(), Some("a.scene.toml".to_string()));
        assert_eq!(host.opened[0], ("b.scene.toml".to_string(), OpenMode::Additive));
    }

    #[test]
    fn test_recording_host_save_clears_dirty() {
        let mut host = RecordingHost::with_active("a.scene.toml", true);
        host.save_open_scenes().unwrap();

        assert!(!host.is_dirty());
        assert_eq!(host.saves, 1);
    }

    #[test]
    fn test_scripted_prompt_plays_in_order() {
        let mut prompt = ScriptedPrompt::new([SaveChoice::Save, SaveChoice::DontSave]);
        assert_eq!(prompt.ask("A"), SaveChoice::Save);
        assert_eq!(prompt.ask("B"), SaveChoice::DontSave);
        assert_eq!(prompt.asked, vec!["A", "B"]);
    }

    #[test]
    fn test_scripted_prompt_defaults_to_cancel() {
        let mut prompt = ScriptedPrompt::new([]);
        assert_eq!(prompt.ask("A"), SaveChoice::Cancel);
    }
}
