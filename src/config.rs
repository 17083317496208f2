//! Game configuration file.

use crate::games::magic_squares::PLACEHOLDER;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one game, read from an optional TOML file.
///
/// ```toml
/// player_one = "Ada"
/// player_two = "Grace"
/// placeholder = "_"
/// show_banner = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Name of player one; prompted for when absent.
    player_one: Option<String>,

    /// Name of player two; prompted for when absent.
    player_two: Option<String>,

    /// Glyph shown for unclaimed cells.
    placeholder: char,

    /// Whether to print the rules banner at startup.
    show_banner: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: None,
            player_two: None,
            placeholder: PLACEHOLDER,
            show_banner: true,
        }
    }
}

impl GameConfig {
    /// Loads the file at `path`, or the defaults when no path is given.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the names given on the command line.
    ///
    /// Blank names are ignored.
    pub fn with_names(mut self, player_one: Option<String>, player_two: Option<String>) -> Self {
        let given = |name: Option<String>| name.filter(|n| !n.trim().is_empty());
        if let Some(name) = given(player_one) {
            self.player_one = Some(name);
        }
        if let Some(name) = given(player_two) {
            self.player_two = Some(name);
        }
        self
    }

    /// Replaces the placeholder glyph if one is given.
    pub fn with_placeholder(mut self, placeholder: Option<char>) -> Result<Self, ConfigError> {
        if let Some(placeholder) = placeholder {
            self.placeholder = placeholder;
        }
        self.validate()?;
        Ok(self)
    }

    /// Turns the startup banner off.
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Both names, player one first.
    pub fn names(&self) -> [Option<String>; 2] {
        [self.player_one.clone(), self.player_two.clone()]
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.is_whitespace() || self.placeholder.is_ascii_digit() {
            return Err(ConfigError::new(format!(
                "Placeholder {:?} must be visible and not a digit",
                self.placeholder
            )));
        }
        for name in [&self.player_one, &self.player_two].into_iter().flatten() {
            if name.trim().is_empty() {
                return Err(ConfigError::new("Player names must not be blank"));
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
