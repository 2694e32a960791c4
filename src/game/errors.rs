//! Game-domain error types.
//!
//! Every engine failure is reported as a distinguishable kind, raised
//! synchronously by the operation that detects the violation and never
//! preceded by a partial mutation. Hub failures
//! ([`HubError`](crate::hub::HubError)) are a distinct family and are never
//! conflated with these.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{MAX_PLAYER_COUNT, MAX_PLAYER_NAME_LENGTH, MAX_WORDS_PER_PLAYER};

/// Errors that can occur during game operations
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("game already started")]
    AlreadyStarted,
    #[error("max player count is {}", MAX_PLAYER_COUNT)]
    CapacityExceeded,
    #[error("player name already in use \"{0}\"")]
    DuplicateName(String),
    #[error("player name must be 1-{} characters", MAX_PLAYER_NAME_LENGTH)]
    InvalidName(String),
    #[error("need at least {needed} players")]
    InsufficientPlayers { needed: usize },
    #[error("game can only be started by master player \"{master}\"")]
    NotMaster { master: String },
    #[error("player already picked their {} words", MAX_WORDS_PER_PLAYER)]
    TooManyWords,
    #[error("player picked their own secret word")]
    OwnSecretWordPicked,
    #[error("player does not exist \"{0}\"")]
    UnknownPlayer(String),
}
