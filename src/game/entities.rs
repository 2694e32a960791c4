//! Game entities: players, roles, and standings.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{INITIAL_SCORE, MAX_PLAYER_NAME_LENGTH, MAX_WORDS_PER_PLAYER};
use super::errors::GameError;

/// A player's round role.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Holds the round's secret word and must avoid revealing it.
    Spy,
    /// Knows the round's common word.
    CounterSpy,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Spy => "spy",
            Self::CounterSpy => "counter-spy",
        };
        write!(f, "{repr}")
    }
}

/// A player in the game.
///
/// The name is validated at construction and immutable afterwards. Word
/// submission and role assignment are the only mutations; both are
/// performed through methods so the entity invariants hold (at most
/// [`MAX_WORDS_PER_PLAYER`] words, a spy never records its own secret
/// word).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    name: String,
    pub score: i32,
    role: Option<Role>,
    words: Vec<String>,
    secret_word: Option<String>,
}

impl Player {
    /// Creates a player with the initial score and no role.
    ///
    /// Fails with [`GameError::InvalidName`] if `name` is empty or longer
    /// than [`MAX_PLAYER_NAME_LENGTH`] characters.
    pub fn new(name: &str) -> Result<Self, GameError> {
        if name.is_empty() || name.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(GameError::InvalidName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            score: INITIAL_SCORE,
            role: None,
            words: Vec::with_capacity(MAX_WORDS_PER_PLAYER),
            secret_word: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_spy(&self) -> bool {
        self.role == Some(Role::Spy)
    }

    /// Words submitted so far this round, in submission order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The spy's secret word. `None` for counter-spies and unassigned
    /// players.
    pub fn secret_word(&self) -> Option<&str> {
        self.secret_word.as_deref()
    }

    /// Records a submitted word.
    ///
    /// Fails with [`GameError::OwnSecretWordPicked`] if a spy submits its
    /// own secret word, and [`GameError::TooManyWords`] once
    /// [`MAX_WORDS_PER_PLAYER`] words are already recorded.
    pub fn pick_word(&mut self, word: &str) -> Result<(), GameError> {
        if self.secret_word.as_deref() == Some(word) {
            return Err(GameError::OwnSecretWordPicked);
        }
        if self.words.len() == MAX_WORDS_PER_PLAYER {
            return Err(GameError::TooManyWords);
        }
        self.words.push(word.to_string());
        Ok(())
    }

    /// Makes this player the spy for a round, holding `secret_word`.
    pub fn make_spy(&mut self, secret_word: &str) {
        self.role = Some(Role::Spy);
        self.secret_word = Some(secret_word.to_string());
    }

    /// Makes this player a counter-spy, clearing any prior secret word.
    pub fn make_counter_spy(&mut self) {
        self.role = Some(Role::CounterSpy);
        self.secret_word = None;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player \"{}\"", self.name)
    }
}

/// One row of the player standings: a player's name and current score, in
/// join order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Standing {
    pub name: String,
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("foo").unwrap();
        assert_eq!(player.name(), "foo");
        assert_eq!(player.score, INITIAL_SCORE);
        assert_eq!(player.role(), None);
        assert!(player.words().is_empty());
        assert_eq!(player.secret_word(), None);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Player::new(""),
            Err(GameError::InvalidName(String::new()))
        );
    }

    #[test]
    fn test_name_length_limit() {
        assert!(Player::new("abcdefghijkl").is_ok());
        let too_long = "abcdefghijklm";
        assert_eq!(
            Player::new(too_long),
            Err(GameError::InvalidName(too_long.to_string()))
        );
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // 12 characters, more than 12 bytes.
        assert!(Player::new(&"é".repeat(12)).is_ok());
        assert!(Player::new(&"é".repeat(13)).is_err());
    }

    #[test]
    fn test_pick_word() {
        let mut player = Player::new("foo").unwrap();
        player.pick_word("bar").unwrap();
        player.pick_word("baz").unwrap();
        assert_eq!(player.words(), ["bar", "baz"]);
    }

    #[test]
    fn test_pick_third_word_rejected() {
        let mut player = Player::new("foo").unwrap();
        player.pick_word("one").unwrap();
        player.pick_word("two").unwrap();
        assert_eq!(player.pick_word("three"), Err(GameError::TooManyWords));
        assert_eq!(player.words().len(), 2);
    }

    #[test]
    fn test_spy_cannot_pick_own_secret_word() {
        let mut player = Player::new("foo").unwrap();
        player.make_spy("secret");
        assert_eq!(
            player.pick_word("secret"),
            Err(GameError::OwnSecretWordPicked)
        );
        assert!(player.words().is_empty());
        player.pick_word("innocuous").unwrap();
    }

    #[test]
    fn test_role_assignment() {
        let mut player = Player::new("foo").unwrap();
        player.make_spy("secret");
        assert!(player.is_spy());
        assert_eq!(player.secret_word(), Some("secret"));

        player.make_counter_spy();
        assert_eq!(player.role(), Some(Role::CounterSpy));
        assert_eq!(player.secret_word(), None);
    }
}
