//! Property-based tests for engine sequencing: snapshots, undo and reset.

use proptest::prelude::*;

use crate::domain::commands::Command;
use crate::domain::state::{MatchState, Player};
use crate::domain::{test_gens, test_prelude};
use crate::services::match_engine::MatchEngine;

fn replay(commands: &[Command]) -> MatchEngine {
    let mut engine = MatchEngine::new();
    for &c in commands {
        engine.apply(c);
    }
    engine
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: from any reachable state, a recorded command followed by
    /// undo restores that state exactly.
    #[test]
    fn prop_recorded_command_then_undo_is_identity(
        script in test_gens::commands(60),
        last in test_gens::command(),
    ) {
        prop_assume!(last.records_snapshot());
        let mut engine = replay(&script);
        let s = *engine.state();
        let len = engine.history().len();

        engine.apply(last);
        prop_assert_eq!(engine.undo(), s);
        prop_assert_eq!(engine.history().len(), len);
    }

    /// Property: reset from any reachable state yields the initial state.
    #[test]
    fn prop_reset_from_anywhere(script in test_gens::commands(60)) {
        let mut engine = replay(&script);
        prop_assert_eq!(engine.reset_match(), MatchState::initial());
        prop_assert!(engine.history().is_empty());
    }

    /// Property: no-op commands are safe to repeat.
    #[test]
    fn prop_noops_are_idempotent(script in test_gens::commands(60)) {
        let mut engine = replay(&script);
        let s = *engine.state();
        if s.winner.is_none() {
            prop_assert_eq!(engine.start_next_game(), s);
            prop_assert_eq!(engine.start_next_game(), s);
        } else {
            prop_assert_eq!(engine.award_point(Player::One), s);
            prop_assert_eq!(engine.award_point(Player::Two), s);
        }
    }

    /// Property: history grows only through recorded commands.
    #[test]
    fn prop_history_len_tracks_recorded_commands(script in test_gens::commands(60)) {
        let mut engine = MatchEngine::new();
        let mut expected = 0usize;
        for c in script {
            match c {
                Command::ResetMatch => expected = 0,
                Command::Undo => expected = expected.saturating_sub(1),
                c if c.records_snapshot() => expected += 1,
                _ => {}
            }
            engine.apply(c);
            prop_assert_eq!(engine.history().len(), expected);
        }
    }
}
