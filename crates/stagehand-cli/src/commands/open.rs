//! Scene opening

use crate::commands::resolve_scene;
use anyhow::Result;
use stagehand_switcher::SceneSwitcher;

pub fn run(switcher: &mut SceneSwitcher, scene: &str, additive: bool) -> Result<()> {
    let path = resolve_scene(switcher, scene)?;

    if additive {
        switcher.open_additive(&path)?;
        println!("Opened additively: {}", path);
        return Ok(());
    }

    if switcher.open_scene(&path)? {
        println!("Opened scene: {}", path);
    } else {
        println!("Switch canceled.");
    }
    Ok(())
}

pub fn run_index(switcher: &mut SceneSwitcher, index: usize) -> Result<()> {
    if !switcher.settings().enable_index_shortcuts {
        anyhow::bail!("Index shortcuts are disabled in settings");
    }

    if switcher.open_build_index(index)? {
        // The switch recorded the scene; report what is now active
        match switcher.active_scene() {
            Some(scene) => println!("Opened scene: {}", scene.path),
            None => println!("Opened build scene {}", index),
        }
    } else {
        println!("No loadable scene at build index {}.", index);
    }
    Ok(())
}
