//! Game configuration.
//!
//! Consolidates the environment variable read and provides validated
//! configuration for the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{MAX_PLAYER_COUNT, MIN_PLAYER_COUNT, MIN_PLAYER_COUNT_ENV};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("{MIN_PLAYER_COUNT_ENV} is not a valid player count: \"{0}\"")]
    InvalidMinPlayerCount(String),
    #[error("min player count must be between 1 and {}", MAX_PLAYER_COUNT)]
    MinPlayerCountOutOfRange(usize),
}

/// Configuration consumed by the engine.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameConfig {
    /// Minimum number of players required to start a round.
    pub min_player_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_player_count: MIN_PLAYER_COUNT,
        }
    }
}

impl GameConfig {
    /// Loads configuration from the environment.
    ///
    /// `LINQ_MIN_PLAYER_COUNT` overrides the default minimum player count
    /// (development setups run with a lower minimum). A missing variable
    /// falls back to the default; a malformed or out-of-range value is an
    /// error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let min_player_count = match std::env::var(MIN_PLAYER_COUNT_ENV) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMinPlayerCount(raw.clone()))?,
            Err(_) => MIN_PLAYER_COUNT,
        };
        let config = Self { min_player_count };
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_player_count == 0 || self.min_player_count > MAX_PLAYER_COUNT {
            return Err(ConfigError::MinPlayerCountOutOfRange(
                self.min_player_count,
            ));
        }
        Ok(())
    }
}
