use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use taskmaster::board::TaskBoard;
use taskmaster::config::Config;
use taskmaster::logger::Logger;
use taskmaster::storage::{Persistence, SlotStorage};
use taskmaster::ui;

#[derive(Parser, Debug)]
#[command(name = "taskmaster", version, about = "Single-page task list manager for the terminal")]
struct Cli {
    /// Use this configuration file instead of the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Keep all state in memory; nothing is saved
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(target) = cli.generate_config {
        let path = match target {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if cli.in_memory {
        config.storage.in_memory = true;
        config.storage.database_path = None;
    }

    let logger = Logger::from_config(&config.logging)?;

    let storage = if config.storage.in_memory {
        SlotStorage::in_memory().await?
    } else {
        let path = match &config.storage.database_path {
            Some(path) => path.clone(),
            None => SlotStorage::default_path()?,
        };
        SlotStorage::open(&path).await?
    };
    if let Some(location) = storage.location() {
        logger.log(format!("Storage: {}", location.display()));
    } else {
        logger.log("Storage: in memory".to_string());
    }

    let persistence = Persistence::new(Arc::new(storage));
    let board = TaskBoard::load_with_theme_default(persistence, config.ui.default_dark_mode).await;

    // Run the TUI application
    ui::run_app(board, config, logger).await?;

    Ok(())
}
