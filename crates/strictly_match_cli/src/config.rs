//! Shell configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_match::{Marker, Side};
use tracing::{debug, info, instrument};

/// Defaults that let the shell skip prompts.
///
/// Every field is optional; a missing value means the player is asked.
#[derive(Debug, Clone, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ShellConfig {
    /// Marker for the human side.
    #[serde(default)]
    human_marker: Option<Marker>,

    /// Marker for the computer side.
    #[serde(default)]
    opponent_marker: Option<Marker>,

    /// Name for the human side.
    #[serde(default)]
    human_name: Option<String>,

    /// Name for the computer side.
    #[serde(default)]
    opponent_name: Option<String>,

    /// Who moves first every round ("human" or "opponent").
    #[serde(default)]
    first_mover: Option<Side>,

    /// Seed for the computer's random fallback moves.
    #[serde(default)]
    seed: Option<u64>,

    /// Clear the terminal between turns.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

#[instrument]
fn default_clear_screen() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            human_marker: None,
            opponent_marker: None,
            human_name: None,
            opponent_name: None,
            first_mover: None,
            seed: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
