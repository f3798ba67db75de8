//! Scene listing

use anyhow::Result;
use stagehand_catalog::SceneRecord;
use stagehand_switcher::SceneSwitcher;

pub fn run(switcher: &SceneSwitcher, build_only: bool) -> Result<()> {
    if build_only {
        let scenes = switcher.catalog().build_scenes();
        if scenes.is_empty() {
            println!("No scenes in the build list.");
            return Ok(());
        }

        for scene in scenes {
            print_scene(switcher, scene);
        }
        return Ok(());
    }

    let scenes = switcher.catalog().all_scenes();
    if scenes.is_empty() {
        println!("No scenes found in project.");
        return Ok(());
    }

    for scene in scenes {
        print_scene(switcher, scene);
    }
    println!();
    println!("Total: {} scenes", scenes.len());

    Ok(())
}

/// One listing line: favorite marker, label, path
pub(crate) fn print_scene(switcher: &SceneSwitcher, scene: &SceneRecord) {
    let marker = if switcher.is_favorite(&scene.path) {
        "\u{2605}" // ★
    } else {
        " "
    };
    let label = if switcher.settings().show_build_index {
        scene.label()
    } else {
        scene.name.clone()
    };
    println!("{} {:<28} {}", marker, label, scene.path);
}
