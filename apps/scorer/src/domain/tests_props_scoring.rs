//! Property-based tests for scoring and transition invariants.

use proptest::prelude::*;

use crate::domain::rules::{game_winner, serving_court, ServingCourt, SCORE_CAP};
use crate::domain::scoring::award_point;
use crate::domain::state::MatchState;
use crate::domain::transitions::{exchange_sides, start_next_game};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a single game never runs past the cap, the winner is set
    /// exactly when the rules say so, and games_won moves at most once.
    #[test]
    fn prop_single_game_invariants(rallies in test_gens::rallies(80)) {
        let mut state = MatchState::initial();
        for p in rallies {
            let before = state;
            state = award_point(&state, p);

            let (s1, s2) = state.scores();
            prop_assert!(s1 <= SCORE_CAP && s2 <= SCORE_CAP);

            if before.winner.is_some() {
                prop_assert_eq!(state, before);
                continue;
            }
            prop_assert_eq!(state.serving_player, p);
            prop_assert_eq!(state.winner, game_winner(s1, s2));

            let total_games = state.player1.games_won + state.player2.games_won;
            prop_assert_eq!(total_games, u32::from(state.winner.is_some()));
        }
    }

    /// Property: the winner always leads by two, or won 30-29.
    #[test]
    fn prop_winner_leads(rallies in test_gens::rallies(80)) {
        let mut state = MatchState::initial();
        for p in rallies {
            state = award_point(&state, p);
        }
        if let Some(w) = state.winner {
            let mine = state.standing(w).score;
            let theirs = state.standing(w.other()).score;
            prop_assert!(mine > theirs);
            prop_assert!(mine - theirs >= 2 || (mine == 30 && theirs == 29));
        }
    }

    /// Property: exchanging sides twice is the identity.
    #[test]
    fn prop_double_exchange_identity(rallies in test_gens::rallies(40)) {
        let mut state = MatchState::initial();
        for p in rallies {
            state = award_point(&state, p);
        }
        prop_assert_eq!(exchange_sides(&exchange_sides(&state)), state);
    }

    /// Property: starting a new game preserves games won across many games.
    #[test]
    fn prop_games_won_counts_completed_games(rallies in test_gens::rallies(200)) {
        let mut state = MatchState::initial();
        let mut completed = 0u32;
        for p in rallies {
            state = award_point(&state, p);
            if state.winner.is_some() {
                completed += 1;
                state = start_next_game(&state);
                prop_assert_eq!(state.scores(), (0, 0));
            }
        }
        prop_assert_eq!(state.player1.games_won + state.player2.games_won, completed);
    }

    #[test]
    fn prop_serving_court_parity(score in any::<u32>()) {
        let expected = if score % 2 == 0 { ServingCourt::Right } else { ServingCourt::Left };
        prop_assert_eq!(serving_court(score), expected);
    }
}
