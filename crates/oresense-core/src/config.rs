use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::validation::Validation;
use crate::wizard::WizardOptions;

/// Configuration for oresense.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (ORESENSE_* prefix)
/// 3. Config file (~/.config/oresense/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject values that do not fit their field (numbers, percentages,
    /// closed vocabularies). When false, any text is stored as typed.
    ///
    /// Can be set via:
    /// - ENV: ORESENSE_STRICT_VALIDATION
    /// - Config: strict_validation = true
    #[serde(deserialize_with = "bool_or_string")]
    pub strict_validation: bool,

    /// Keep the wizard on a step until every field on it is filled.
    ///
    /// Can be set via:
    /// - ENV: ORESENSE_REQUIRE_COMPLETE_STEPS
    /// - Config: require_complete_steps = false
    #[serde(deserialize_with = "bool_or_string")]
    pub require_complete_steps: bool,

    /// Log level filter (error, warn, info, debug, trace).
    ///
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// File that receives log output while the terminal UI is running.
    pub log_file: PathBuf,

    /// `strftime` pattern for report creation dates.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_validation: true,
            require_complete_steps: false,
            log_level: "info".to_string(),
            log_file: default_log_file(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path` (if it exists) and environment variables.
    ///
    /// Environment variables use the ORESENSE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if path.exists() {
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("oresense");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Wizard behaviour derived from this configuration.
    #[must_use]
    pub fn wizard_options(&self) -> WizardOptions {
        WizardOptions {
            validation: if self.strict_validation {
                Validation::Strict
            } else {
                Validation::Permissive
            },
            require_complete_steps: self.require_complete_steps,
        }
    }

    /// Parsed log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(self.log_level.trim()).unwrap_or(log::LevelFilter::Info)
    }
}

/// Accept a TOML boolean or its string spelling.
///
/// Environment overrides always arrive as strings.
fn bool_or_string<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(de::Error::custom(format!(
                "expected a boolean, got {other:?}"
            ))),
        },
    }
}

/// Returns: <data_dir>/oresense/oresense.log
fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oresense")
        .join("oresense.log")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/oresense/config.toml
/// - macOS: ~/Library/Application Support/oresense/config.toml
/// - Windows: %APPDATA%\oresense\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oresense")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# OreSense Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (ORESENSE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Check values as they are entered: numbers must parse, percentages must lie
# in 0..100 and enumerated fields must use one of their listed values.
# Set to false to accept free text everywhere.
strict_validation = true

# Stay on a wizard step until all of its fields are filled.
require_complete_steps = false

# Log level: error, warn, info, debug, trace (RUST_LOG overrides)
log_level = "info"

# Where logs go while the terminal UI is open
#log_file = "/path/to/oresense.log"

# Date format for the report list (strftime)
date_format = "%Y-%m-%d"
"#
}

/// Create the config file at `path` if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
