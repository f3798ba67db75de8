//! Recently opened scenes

use anyhow::Result;
use stagehand_core::scene_name;
use stagehand_switcher::SceneSwitcher;

pub fn run(switcher: &SceneSwitcher) -> Result<()> {
    let recents = switcher.recents();
    if recents.is_empty() {
        println!("No recent scenes.");
        return Ok(());
    }

    for (i, path) in recents.paths().iter().enumerate() {
        println!("{:>2}. {:<28} {}", i + 1, scene_name(path), path);
    }
    Ok(())
}
