//! Fixed limits and tunable defaults for a Linq game.

/// Default minimum number of players required to start a round. Tunable via
/// the `LINQ_MIN_PLAYER_COUNT` environment variable (see
/// [`GameConfig::from_env`](crate::game::config::GameConfig::from_env)).
pub const MIN_PLAYER_COUNT: usize = 4;

/// Maximum number of players in a game.
pub const MAX_PLAYER_COUNT: usize = 8;

/// Number of spies assigned each round.
pub const SPIES_COUNT: usize = 2;

/// Maximum length of a player name, in characters.
pub const MAX_PLAYER_NAME_LENGTH: usize = 12;

/// Maximum number of words a player may submit per round.
pub const MAX_WORDS_PER_PLAYER: usize = 2;

/// Score every player starts with.
pub const INITIAL_SCORE: i32 = 3;

/// Built-in pool of round topic words. The word drawn for a round becomes
/// the secret word of that round's spies.
pub const TOPIC_WORDS: &[&str] = &[
    "airport", "bakery", "camping", "carnival", "casino", "circus", "cruise", "desert",
    "embassy", "glacier", "harbor", "hospital", "jungle", "library", "lighthouse", "museum",
    "orchard", "pirate", "submarine", "theater", "vineyard", "volcano", "waterfall", "zeppelin",
];

/// Environment variable overriding the minimum player count.
pub const MIN_PLAYER_COUNT_ENV: &str = "LINQ_MIN_PLAYER_COUNT";
