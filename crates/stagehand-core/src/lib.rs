//! Stagehand Core - Foundational types for the Stagehand scene switcher
//!
//! This crate provides the types every other Stagehand crate depends on:
//! - `StagehandError` and the `Result` alias
//! - Scene path helpers (`scene_name`, `normalize_path`)

mod error;
mod paths;

pub use error::{Result, StagehandError};
pub use paths::{normalize_path, scene_name};
