use anyhow::{Context, Result};
use oresense_core::{config, Config};
use std::path::Path;

const VALID_KEYS: &str =
    "strict_validation, require_complete_steps, log_level, log_file, date_format";

/// Show the current effective configuration.
pub fn show_config(config: &Config, config_path: &Path) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  strict_validation: {}", config.strict_validation);
    println!("  require_complete_steps: {}", config.require_complete_steps);
    println!("  log_level: {}", config.log_level_filter());
    println!("  log_file: {}", config.log_file.display());
    println!("  date_format: {}", config.date_format);

    println!("\nPriority: CLI args > ENV vars (ORESENSE_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or print the whole file.
pub fn get_config(config: &Config, config_path: &Path, key: Option<String>) -> Result<()> {
    let Some(key) = key else {
        if config_path.exists() {
            let contents =
                std::fs::read_to_string(config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'oresense config init' to create it.");
        }
        return Ok(());
    };

    match key.as_str() {
        "strict_validation" => println!("{}", config.strict_validation),
        "require_complete_steps" => println!("{}", config.require_complete_steps),
        "log_level" => println!("{}", config.log_level),
        "log_file" => println!("{}", config.log_file.display()),
        "date_format" => println!("{}", config.date_format),
        _ => {
            anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
        }
    }

    Ok(())
}

/// Show the config file path.
pub fn show_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config(config_path: &Path) -> Result<()> {
    let created = config::ensure_config_file_at(config_path)?;

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure oresense.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
