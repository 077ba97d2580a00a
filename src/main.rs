use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use shoestock::config::Config;
use shoestock::shell::{Console, Session};
use shoestock::storage::TextFileStorage;

fn setup_logging(default_level: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shoestock")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("shoestock.log");

    // The console belongs to the menu, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(config: &Config) -> Result<()> {
    info!("Using inventory file: {}", config.inventory.path.display());

    let storage = TextFileStorage::new(&config.inventory.path);
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(storage, console, &config.display);

    session.load().context("Failed to load inventory")?;
    session.run().context("Session failed")?;

    info!("Session ended");
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_inventory_path(cli.file.as_ref());

    let default_level = if cli.is_verbose() {
        "debug".to_string()
    } else {
        config.log_level.clone().unwrap_or_else(|| "info".to_string())
    };
    setup_logging(&default_level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&config).context("Application failed")?;

    Ok(())
}
