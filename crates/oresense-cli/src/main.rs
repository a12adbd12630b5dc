use anyhow::Result;
use clap::Parser;
use oresense_core::{config, Config};
use std::path::PathBuf;

mod commands;
mod logging;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "oresense", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (default: ~/.config/oresense/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Open the assessment dashboard (default)
    ///
    /// Starts the terminal UI. From the dashboard, press `n` to begin a new
    /// LCA assessment. The wizard walks through seven sections:
    ///
    /// 1. Metal information
    /// 2. Mining & ore extraction
    /// 3. Processing & energy
    /// 4. Transport & supply chain
    /// 5. Use phase
    /// 6. End-of-life / circularity
    /// 7. Impact metrics
    ///
    /// Completing the last section adds a report card to the dashboard.
    /// Reports live in memory only and are gone when the program exits.
    ///
    /// Logs are written to the configured log file while the UI is open.
    Run,
    /// List every input the assessment wizard collects
    Fields {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
    /// Print one setting, or the whole file when no key is given
    Get {
        key: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_file_path);
    let config = Config::load_from(&config_path)?;

    let command = cli.command.unwrap_or(Commands::Run);
    logging::init(&config, matches!(command, Commands::Run))?;

    match command {
        Commands::Run => {
            commands::run_dashboard(&config)?;
        }
        Commands::Fields { json } => {
            commands::list_fields(json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config, &config_path)?,
            ConfigAction::Path => commands::config::show_path(&config_path)?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config(&config_path)?,
            ConfigAction::Get { key } => commands::config::get_config(&config, &config_path, key)?,
        },
    }

    Ok(())
}
