/// Property-based tests for the game engine using proptest
///
/// These tests verify the capacity, standings, and role-assignment
/// invariants across randomly generated player rosters.
use std::collections::HashSet;

use linq_engine::{
    Game, GameConfig,
    constants::{MAX_PLAYER_COUNT, SPIES_COUNT},
};
use proptest::prelude::*;

// Strategy to generate a roster of distinct, valid player names
fn roster_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,12}", min..=max)
        .prop_map(|names| names.into_iter().collect())
}

proptest! {
    #[test]
    fn test_player_count_equals_successful_adds_capped(
        names in roster_strategy(1, 20),
    ) {
        let mut game = Game::default();
        let mut successful = 0;
        for name in &names {
            if game.add_player(name).is_ok() {
                successful += 1;
            }
        }
        prop_assert_eq!(game.player_count(), successful);
        prop_assert_eq!(successful, names.len().min(MAX_PLAYER_COUNT));
    }

    #[test]
    fn test_standings_preserve_join_order(
        names in roster_strategy(1, MAX_PLAYER_COUNT),
    ) {
        let mut game = Game::default();
        for name in &names {
            game.add_player(name).unwrap();
        }
        let standings = game.player_standings();
        let standing_names: Vec<&str> =
            standings.iter().map(|standing| standing.name.as_str()).collect();
        let joined: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(standing_names, joined);
    }

    #[test]
    fn test_role_assignment_always_yields_exact_spy_count(
        names in roster_strategy(SPIES_COUNT + 1, MAX_PLAYER_COUNT),
    ) {
        let mut game = Game::new(GameConfig {
            min_player_count: SPIES_COUNT + 1,
        });
        for name in &names {
            game.add_player(name).unwrap();
        }
        game.start(&names[0]).unwrap();

        let spies: Vec<_> = game.players().filter(|player| player.is_spy()).collect();
        prop_assert_eq!(spies.len(), SPIES_COUNT);
        prop_assert!(game.players().all(|player| player.role().is_some()));

        // All spies share the round's secret word; counter-spies hold none.
        let words: HashSet<&str> =
            spies.iter().filter_map(|spy| spy.secret_word()).collect();
        prop_assert_eq!(words.len(), 1);
        prop_assert!(
            game.players()
                .filter(|player| !player.is_spy())
                .all(|player| player.secret_word().is_none())
        );
    }

    #[test]
    fn test_abort_always_fully_resets(
        names in roster_strategy(SPIES_COUNT + 1, MAX_PLAYER_COUNT),
        start_first in any::<bool>(),
    ) {
        let mut game = Game::new(GameConfig {
            min_player_count: SPIES_COUNT + 1,
        });
        for name in &names {
            game.add_player(name).unwrap();
        }
        if start_first {
            game.start(&names[0]).unwrap();
        }

        game.abort();
        prop_assert!(!game.is_started());
        prop_assert_eq!(game.player_count(), 0);
        prop_assert!(game.master().is_none());
        prop_assert_eq!(game.round_played(), 0);
    }
}
