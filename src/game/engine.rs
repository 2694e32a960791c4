//! The Linq game engine.
//!
//! Sole authority over game state. The lifecycle cycles between two
//! phases: the lobby (not started, accepting players) and an active round
//! (started, roles assigned). Every state-changing operation validates
//! first, mutates second, and finally publishes a [`GameEvent`] through
//! the embedded [`EventHub`], so the order is always
//! validate → mutate → emit.

use std::fmt;

use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::hub::{EventHub, HandlerResult, HubError};

use super::config::GameConfig;
use super::constants::{MAX_PLAYER_COUNT, SPIES_COUNT, TOPIC_WORDS};
use super::entities::{Player, Role, Standing};
use super::errors::GameError;

/// The closed set of event kinds the engine emits.
///
/// `GameFinished` and `RoundResolved` are declared so transports can bind
/// to them ahead of time; the round-resolution flow that emits them is
/// driven by the host.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    GameStarted,
    GameFinished,
    GameAborted,
    NewPlayer,
    NewMaster,
    PlayerQuit,
    NewRound,
    PlayerPickedWord,
    PlayerRoleAssigned,
    RoundResolved,
}

impl EventKind {
    /// Every declared kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::GameStarted,
        Self::GameFinished,
        Self::GameAborted,
        Self::NewPlayer,
        Self::NewMaster,
        Self::PlayerQuit,
        Self::NewRound,
        Self::PlayerPickedWord,
        Self::PlayerRoleAssigned,
        Self::RoundResolved,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GameStarted => "game_started",
            Self::GameFinished => "game_finished",
            Self::GameAborted => "game_aborted",
            Self::NewPlayer => "new_player",
            Self::NewMaster => "new_master",
            Self::PlayerQuit => "player_quit",
            Self::NewRound => "new_round",
            Self::PlayerPickedWord => "player_picked_word",
            Self::PlayerRoleAssigned => "player_role_assigned",
            Self::RoundResolved => "round_resolved",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A state-change notification published by the engine.
///
/// Player payloads are owned snapshots taken at emission time, so handlers
/// never re-borrow the engine during an emission. `PlayerRoleAssigned` is
/// broadcast for every player; a consumer must check whether it is the
/// role-owner before revealing secret data.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum GameEvent {
    GameStarted,
    GameAborted,
    NewPlayer(Player),
    NewMaster(Player),
    PlayerQuit(Player),
    NewRound(u32),
    PlayerPickedWord(Player, String),
    PlayerRoleAssigned(Player),
}

impl GameEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::GameStarted => EventKind::GameStarted,
            Self::GameAborted => EventKind::GameAborted,
            Self::NewPlayer(_) => EventKind::NewPlayer,
            Self::NewMaster(_) => EventKind::NewMaster,
            Self::PlayerQuit(_) => EventKind::PlayerQuit,
            Self::NewRound(_) => EventKind::NewRound,
            Self::PlayerPickedWord(..) => EventKind::PlayerPickedWord,
            Self::PlayerRoleAssigned(_) => EventKind::PlayerRoleAssigned,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::GameStarted => "game started".to_string(),
            Self::GameAborted => "game aborted".to_string(),
            Self::NewPlayer(player) => format!("{player} joined"),
            Self::NewMaster(player) => format!("{player} is the new master"),
            Self::PlayerQuit(player) => format!("{player} quit"),
            Self::NewRound(round) => format!("round {round} begins"),
            Self::PlayerPickedWord(player, word) => {
                format!("{player} picked \"{word}\"")
            }
            Self::PlayerRoleAssigned(player) => format!("{player} got a role"),
        };
        write!(f, "{repr}")
    }
}

/// A Linq game: the lobby, the master, and the active round.
///
/// The hosting process owns its single instance; there is no ambient
/// global state. The engine is designed for single-threaded cooperative
/// invocation - a concurrent host must serialize operations behind one
/// lock.
#[derive(Debug)]
pub struct Game {
    /// Players in join order. Names are unique.
    players: Vec<Player>,
    /// Name of the master player. Always a current member of `players`
    /// when set.
    master: Option<String>,
    started: bool,
    round_played: u32,
    config: GameConfig,
    hub: EventHub<EventKind, GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            players: Vec::with_capacity(MAX_PLAYER_COUNT),
            master: None,
            started: false,
            round_played: 0,
            config,
            hub: EventHub::new(EventKind::ALL),
        }
    }

    /// Registers `handler` for every future emission of `kind`. See
    /// [`EventHub::bind`].
    pub fn bind<F>(&mut self, kind: EventKind, id: &str, handler: F) -> Result<(), HubError>
    where
        F: FnMut(&GameEvent) -> HandlerResult + Send + 'static,
    {
        self.hub.bind(kind, id, handler)
    }

    /// Removes the handler bound under `id` for `kind`.
    pub fn unbind(&mut self, kind: EventKind, id: &str) -> Result<(), HubError> {
        self.hub.unbind(kind, id)
    }

    /// Removes every handler bound to `kind`.
    pub fn unbind_all(&mut self, kind: EventKind) -> Result<(), HubError> {
        self.hub.unbind_all(kind)
    }

    /// Adds a player to the lobby and returns it.
    ///
    /// The first joiner is elected master (`NewMaster` is emitted before
    /// `NewPlayer`). Fails with [`GameError::AlreadyStarted`] mid-round,
    /// [`GameError::CapacityExceeded`] at the player cap,
    /// [`GameError::DuplicateName`] for a name already in use, and
    /// [`GameError::InvalidName`] for an empty or over-long name.
    pub fn add_player(&mut self, name: &str) -> Result<&Player, GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() == MAX_PLAYER_COUNT {
            return Err(GameError::CapacityExceeded);
        }
        if self.find_player(name).is_some() {
            return Err(GameError::DuplicateName(name.to_string()));
        }

        let player = Player::new(name)?;
        let snapshot = player.clone();
        let index = self.players.len();
        self.players.push(player);
        if self.master.is_none() {
            self.master = Some(name.to_string());
            self.publish(GameEvent::NewMaster(snapshot.clone()));
        }
        self.publish(GameEvent::NewPlayer(snapshot));
        Ok(&self.players[index])
    }

    /// Removes a player, in any phase.
    ///
    /// Mid-round, removing any player aborts the whole game - the game
    /// cannot continue with a player missing, so the full clean-up runs
    /// and `GameAborted` is emitted. In the lobby the player is deleted
    /// and `PlayerQuit` is emitted; if the master left and players
    /// remain, the next player in join order is elected (`NewMaster`),
    /// and if nobody remains the master is cleared without an emission.
    pub fn remove_player(&mut self, name: &str) -> Result<(), GameError> {
        let index = self
            .position(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

        if self.started {
            self.abort();
            return Ok(());
        }

        let removed = self.players.remove(index);
        let was_master = self.master.as_deref() == Some(removed.name());
        self.publish(GameEvent::PlayerQuit(removed));

        if was_master {
            match self.players.first() {
                Some(next) => {
                    let snapshot = next.clone();
                    self.master = Some(snapshot.name().to_string());
                    self.publish(GameEvent::NewMaster(snapshot));
                }
                None => self.master = None,
            }
        }
        Ok(())
    }

    /// Starts a round: marks the game started, bumps the round counter,
    /// emits `GameStarted` and `NewRound`, then assigns roles.
    ///
    /// Only the master may start. Fails with
    /// [`GameError::InsufficientPlayers`] below the configured minimum or
    /// with fewer players than spies-plus-one.
    pub fn start(&mut self, player_name: &str) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        // Role assignment needs more players than spies even when the
        // configured minimum is lower.
        let needed = self.config.min_player_count.max(SPIES_COUNT + 1);
        if self.players.len() < needed {
            return Err(GameError::InsufficientPlayers { needed });
        }
        match self.master.as_deref() {
            Some(master) if master == player_name => {}
            Some(master) => {
                return Err(GameError::NotMaster {
                    master: master.to_string(),
                });
            }
            None => return Err(GameError::UnknownPlayer(player_name.to_string())),
        }

        self.started = true;
        self.round_played += 1;
        log::info!("round {} started by \"{player_name}\"", self.round_played);
        self.publish(GameEvent::GameStarted);
        self.publish(GameEvent::NewRound(self.round_played));
        self.assign_player_roles();
        Ok(())
    }

    /// Assigns exactly [`SPIES_COUNT`] spies and the remainder
    /// counter-spies, by unbiased shuffle, to players in join order.
    ///
    /// Each `PlayerRoleAssigned` is emitted immediately after that
    /// player's role is set, not batched after the loop; listeners rely
    /// on the interleaved per-player notification.
    fn assign_player_roles(&mut self) {
        let mut rng = rand::rng();
        let secret_word = TOPIC_WORDS
            .choose(&mut rng)
            .copied()
            .unwrap_or_default()
            .to_string();

        let mut roles = vec![Role::CounterSpy; self.players.len()];
        roles[..SPIES_COUNT].fill(Role::Spy);
        roles.shuffle(&mut rng);

        for (index, role) in roles.into_iter().enumerate() {
            let snapshot = {
                let player = &mut self.players[index];
                match role {
                    Role::Spy => player.make_spy(&secret_word),
                    Role::CounterSpy => player.make_counter_spy(),
                }
                player.clone()
            };
            self.publish(GameEvent::PlayerRoleAssigned(snapshot));
        }
    }

    /// Records a word submission for a player and emits
    /// `PlayerPickedWord`. Meaningful only during a round, but not gated
    /// on it.
    pub fn player_picks_word(&mut self, player_name: &str, word: &str) -> Result<(), GameError> {
        let index = self
            .position(player_name)
            .ok_or_else(|| GameError::UnknownPlayer(player_name.to_string()))?;
        let snapshot = {
            let player = &mut self.players[index];
            player.pick_word(word)?;
            player.clone()
        };
        self.publish(GameEvent::PlayerPickedWord(snapshot, word.to_string()));
        Ok(())
    }

    /// Aborts the game: the full clean-up (players, master, started flag,
    /// round counter) runs before `GameAborted` is emitted, so listeners
    /// observe a fully reset state.
    pub fn abort(&mut self) {
        self.players.clear();
        self.master = None;
        self.started = false;
        self.round_played = 0;
        log::info!("game aborted");
        self.publish(GameEvent::GameAborted);
    }

    /// Each player's name and current score, in join order.
    #[must_use]
    pub fn player_standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|player| Standing {
                name: player.name().to_string(),
                score: player.score,
            })
            .collect()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of rounds started since the last clean-up.
    #[must_use]
    pub fn round_played(&self) -> u32 {
        self.round_played
    }

    /// The current master player, if any.
    #[must_use]
    pub fn master(&self) -> Option<&Player> {
        self.master
            .as_deref()
            .and_then(|name| self.find_player(name))
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.find_player(name)
    }

    /// Mutable access to a player, for score updates during round
    /// resolution driven by the host.
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.name() == name)
    }

    /// Players in join order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.name() == name)
    }

    /// Emits through the hub. All kinds are declared at construction, so
    /// the only possible failures come from handlers; those are logged
    /// and kept out of game-domain results.
    fn publish(&mut self, event: GameEvent) {
        if let Err(err) = self.hub.emit(event.kind(), &event) {
            log::error!("emission failed: {err}");
        }
    }
}
