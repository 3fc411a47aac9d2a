//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Optional settings for a match.
///
/// Every field has a default, so running without a config file plays a
/// normal match with both names asked at the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchConfig {
    /// Preset name for the `o` player; prompted for when absent.
    #[serde(default)]
    player_o: Option<String>,

    /// Preset name for the `x` player; prompted for when absent.
    #[serde(default)]
    player_x: Option<String>,

    /// Tracing filter directive (e.g. `"debug"`), used when `RUST_LOG`
    /// is unset.
    #[serde(default)]
    log_filter: Option<String>,
}

/// Filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_o = ?config.player_o,
            player_x = ?config.player_x,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces fields with any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_o: Option<String>,
        player_x: Option<String>,
        log_filter: Option<String>,
    ) -> Result<Self, ConfigError> {
        if player_o.is_some() {
            self.player_o = player_o;
        }
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if log_filter.is_some() {
            self.log_filter = log_filter;
        }
        self.validate()?;
        Ok(self)
    }

    /// Filter directive to use when `RUST_LOG` is unset.
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, name) in [("player_o", &self.player_o), ("player_x", &self.player_x)] {
            if name.as_deref().is_some_and(str::is_empty) {
                return Err(ConfigError::new(format!("{key} must not be empty")));
            }
        }
        Ok(())
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
