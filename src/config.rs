//! Game configuration
//!
//! Loaded from an optional TOML file; command-line flags override individual fields.
//!
//! ```
//! use akshara_wordle::config::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     word_length = 4
//!     max_attempts = 8
//!
//!     [policy]
//!     flag_mismatch = true
//! "#).unwrap();
//!
//! assert_eq!(config.word_length, 4);
//! assert!(config.policy.degrade);
//! assert!(config.policy.flag_mismatch);
//! ```

use crate::core::ComparePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GameConfig {
    /// Number of aksharas in the secret word
    pub word_length: usize,

    /// Guesses allowed before the game is lost
    pub max_attempts: usize,

    /// Comma-separated word list; the embedded list is used when unset
    pub wordlist: Option<PathBuf>,

    /// Comma-separated list secrets are drawn from; the guess word list is used when unset
    pub secrets: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    pub seed: Option<u64>,

    pub policy: ComparePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 3,
            max_attempts: 10,
            wordlist: None,
            secrets: None,
            seed: None,
            policy: ComparePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is invalid TOML or fails validation.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the limits describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the word length or attempt limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::Invalid("word_length must be at least 1".into()));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}
