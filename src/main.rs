use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{
    ConfigCommand, GoalCommand, LogCommand, ProfileCommand, RemindersCommand, StatsCommand,
    StatusCommand, UnitCommand,
};
use config::Config;
use hydralog_core::{FileStorage, HydrationStore};

#[derive(Parser)]
#[command(name = "hydra")]
#[command(version)]
#[command(about = "A hydration tracking CLI application", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a drink
    Log(LogCommand),

    /// Show today's progress and entries
    Status(StatusCommand),

    /// Show statistics for a time frame
    Stats(StatsCommand),

    /// View or change the daily goal
    Goal(GoalCommand),

    /// View or update the user profile
    Profile(ProfileCommand),

    /// Configure reminder settings
    Reminders(RemindersCommand),

    /// View or change the display unit
    Unit(UnitCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("HYDRALOG_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match &cli.command {
        Some(Commands::Log(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Status(cmd)) => {
            let store = open_store(&config);
            cmd.run(&store)?;
        }
        Some(Commands::Stats(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Goal(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Profile(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Reminders(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Unit(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Builds the store for the configured data directory, healing the saved
/// state for the current local date before any command runs.
fn open_store(config: &Config) -> HydrationStore<FileStorage> {
    tracing::debug!("Data directory: {}", config.data_dir.value.display());
    let storage = FileStorage::new(config.data_dir.value.clone());
    HydrationStore::load_or_initialize(storage, Local::now().date_naive())
}
