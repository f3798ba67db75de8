//! Scene search

use crate::commands::list::print_scene;
use anyhow::Result;
use stagehand_catalog::filter_scenes;
use stagehand_switcher::SceneSwitcher;

pub fn run(switcher: &SceneSwitcher, query: &str) -> Result<()> {
    let matches = filter_scenes(switcher.catalog().all_scenes(), query);

    if matches.is_empty() {
        println!("No scenes matching '{}'", query);
        return Ok(());
    }

    for scene in matches {
        print_scene(switcher, scene);
    }

    Ok(())
}
