use anyhow::{Context, Result};
use oresense_core::Config;
use std::fs::{self, OpenOptions};

/// Initialize the `log` backend.
///
/// The configured level applies unless `RUST_LOG` is set. With `to_file`,
/// output is appended to the configured log file instead of stderr so the
/// terminal UI is never drawn over.
pub fn init(config: &Config, to_file: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level_filter())
        .parse_default_env()
        .format_timestamp_secs();

    if to_file {
        if let Some(parent) = config.log_file.parent() {
            fs::create_dir_all(parent).context("Failed to create log directory")?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialize logger")?;

    log::debug!("logging initialized at {}", config.log_level_filter());
    Ok(())
}
