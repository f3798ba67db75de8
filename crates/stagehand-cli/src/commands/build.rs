//! Build list operations

use crate::commands::resolve_scene;
use anyhow::Result;
use clap::Subcommand;
use stagehand_core::scene_name;
use stagehand_switcher::SceneSwitcher;

#[derive(Subcommand)]
pub enum BuildCommands {
    /// Append a scene to the build list
    Add {
        /// Scene path or name
        scene: String,
    },

    /// Remove a scene from the build list
    Remove {
        /// Scene path or name
        scene: String,
    },

    /// Show the build list with indices and enabled flags
    Show,
}

pub fn run(switcher: &mut SceneSwitcher, cmd: BuildCommands) -> Result<()> {
    match cmd {
        BuildCommands::Add { scene } => add(switcher, &scene),
        BuildCommands::Remove { scene } => remove(switcher, &scene),
        BuildCommands::Show => show(switcher),
    }
}

fn add(switcher: &mut SceneSwitcher, scene: &str) -> Result<()> {
    let path = resolve_scene(switcher, scene)?;
    switcher.add_to_build(&path)?;

    let index = switcher
        .catalog()
        .get(&path)
        .map(|s| s.build_index)
        .unwrap_or(-1);
    println!("Added to build list at index {}: {}", index, path);
    Ok(())
}

fn remove(switcher: &mut SceneSwitcher, scene: &str) -> Result<()> {
    let path = resolve_scene(switcher, scene)?;
    switcher.remove_from_build(&path)?;
    println!("Removed from build list: {}", path);
    Ok(())
}

fn show(switcher: &SceneSwitcher) -> Result<()> {
    let entries = switcher.build_entries()?;
    if entries.is_empty() {
        println!("Build list is empty.");
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        let flag = if entry.enabled { " " } else { "(disabled)" };
        println!("[{}] {:<28} {} {}", i, scene_name(&entry.path), entry.path, flag);
    }
    Ok(())
}
