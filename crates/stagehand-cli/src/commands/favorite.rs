//! Favorites

use crate::commands::resolve_scene;
use anyhow::Result;
use stagehand_core::scene_name;
use stagehand_switcher::SceneSwitcher;

pub fn run(switcher: &mut SceneSwitcher, scene: &str) -> Result<()> {
    let path = resolve_scene(switcher, scene)?;

    if switcher.toggle_favorite(&path)? {
        println!("Added to favorites: {}", path);
    } else {
        println!("Removed from favorites: {}", path);
    }
    Ok(())
}

pub fn run_list(switcher: &SceneSwitcher) -> Result<()> {
    let favorites = switcher.favorites();
    if favorites.is_empty() {
        println!("No favorite scenes.");
        return Ok(());
    }

    for path in favorites.paths() {
        println!("\u{2605} {:<28} {}", scene_name(path), path);
    }
    Ok(())
}
