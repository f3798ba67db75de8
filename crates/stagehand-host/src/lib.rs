//! Stagehand Host - Host editor abstraction
//!
//! This crate defines the seams between Stagehand and the editor it runs
//! inside: the asset index, the build list, the scene-management surface,
//! the dirty-scene prompt, and the preference store. It also ships
//! file-system backed implementations (for the CLI and for headless use)
//! and in-memory implementations (for tests and embedders without files).

mod assets;
mod build;
mod events;
mod host;
mod prefs;

pub use assets::{AssetIndex, DirectoryAssets, StaticAssets, SCENE_EXTENSION};
pub use build::{BuildEntry, BuildList, MemoryBuildList, TomlBuildList};
pub use events::{HostEvent, Subscriptions};
pub use host::{DirtyPrompt, OpenMode, RecordingHost, SaveChoice, SceneHost, ScriptedPrompt};
pub use prefs::{JsonPrefs, MemoryPrefs, PrefStore};
