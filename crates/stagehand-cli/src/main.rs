//! Stagehand CLI entry point

mod commands;
mod context;
mod host;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::build::BuildCommands;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(about = "Scene switcher for game projects", version)]
struct Cli {
    /// Project root directory
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List scenes in the project
    List {
        /// Only show scenes in the build list
        #[arg(long)]
        build: bool,
    },

    /// Filter scenes by a case-insensitive query
    Search {
        /// Matched against scene names and paths
        query: String,
    },

    /// Open a scene by path or name
    Open {
        /// Scene path or name
        scene: String,

        /// Load alongside the open scenes instead of replacing them
        #[arg(long)]
        additive: bool,
    },

    /// Open the scene at a build list index
    OpenIndex {
        /// Zero-based build list index
        index: usize,
    },

    /// Toggle a scene's favorite status
    Favorite {
        /// Scene path or name
        scene: String,
    },

    /// List favorite scenes
    Favorites,

    /// List recently opened scenes
    Recent,

    /// Manage the build list
    Build {
        #[command(subcommand)]
        command: BuildCommands,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut switcher = context::open_project(&cli.project)?;

    match cli.command {
        Commands::List { build } => commands::list::run(&switcher, build),
        Commands::Search { query } => commands::search::run(&switcher, &query),
        Commands::Open { scene, additive } => commands::open::run(&mut switcher, &scene, additive),
        Commands::OpenIndex { index } => commands::open::run_index(&mut switcher, index),
        Commands::Favorite { scene } => commands::favorite::run(&mut switcher, &scene),
        Commands::Favorites => commands::favorite::run_list(&switcher),
        Commands::Recent => commands::recent::run(&switcher),
        Commands::Build { command } => commands::build::run(&mut switcher, command),
        Commands::Config => commands::config::run(&switcher, &cli.project),
    }
}
