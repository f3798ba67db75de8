//! Effective configuration display

use crate::context::{BUILD_FILE, PREFS_FILE};
use anyhow::Result;
use stagehand_switcher::SceneSwitcher;
use std::path::Path;

pub fn run(switcher: &SceneSwitcher, project: &Path) -> Result<()> {
    println!("Project: {}", project.display());
    println!("Build list: {}", project.join(BUILD_FILE).display());
    println!("Prefs: {}", project.join(PREFS_FILE).display());
    println!();
    print!("{}", toml::to_string_pretty(switcher.settings())?);
    Ok(())
}
