//! # Linq Engine
//!
//! The game-state engine for Linq, a social deduction party game: players
//! join a lobby, the first joiner becomes the master, the master starts a
//! round, players privately submit words, and a fixed number of players are
//! secretly assigned the spy role.
//!
//! The engine is the sole authority over game state. Every state-changing
//! operation validates first, mutates second, and finally publishes a typed
//! [`GameEvent`] through the engine's embedded [`EventHub`], so a transport
//! layer can react to state changes without being coupled to the engine's
//! internals.
//!
//! ## Architecture
//!
//! - [`hub`]: a generic publish/subscribe registry scoped to a closed,
//!   pre-declared set of event kinds. Owns no domain knowledge.
//! - [`game`]: the game entities, lifecycle transitions, validation rules,
//!   and the event kinds the engine emits.
//!
//! The engine models exactly one active game and runs single-threaded:
//! every operation runs validate → mutate → emit to completion before
//! returning, and emissions are synchronous in-process calls. A concurrent
//! host must serialize access behind a single lock.
//!
//! ## Example
//!
//! ```
//! use linq_engine::{EventKind, Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default());
//! game.bind(EventKind::NewPlayer, "greeter", |event| {
//!     println!("{event}");
//!     Ok(())
//! })
//! .unwrap();
//!
//! game.add_player("alice").unwrap();
//! assert_eq!(game.player_count(), 1);
//! ```

/// Generic publish/subscribe event hub.
pub mod hub;
pub use hub::{EventHub, HandlerResult, HubError};

/// Core game logic, entities, and lifecycle transitions.
pub mod game;
pub use game::{
    config::{ConfigError, GameConfig},
    constants,
    engine::{EventKind, Game, GameEvent},
    entities::{Player, Role, Standing},
    errors::GameError,
};
