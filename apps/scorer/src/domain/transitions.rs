//! Whole-state transitions other than scoring a rally.

use crate::domain::state::{MatchState, PlayerStanding};

/// Swap the two standings between slots and flip the server.
///
/// Applies whether or not the current game is concluded.
pub fn exchange_sides(state: &MatchState) -> MatchState {
    MatchState {
        player1: state.player2,
        player2: state.player1,
        serving_player: state.serving_player.other(),
        winner: state.winner,
    }
}

/// Begin the next game of the match.
///
/// Only valid once the current game has a winner; otherwise the state is
/// returned unchanged. Scores reset, games won carry over, and the previous
/// game's winner serves first.
pub fn start_next_game(state: &MatchState) -> MatchState {
    let Some(winner) = state.winner else {
        return *state;
    };
    MatchState {
        player1: PlayerStanding {
            score: 0,
            games_won: state.player1.games_won,
        },
        player2: PlayerStanding {
            score: 0,
            games_won: state.player2.games_won,
        },
        serving_player: winner,
        winner: None,
    }
}

/// Full match restart.
#[inline]
pub fn reset_match() -> MatchState {
    MatchState::initial()
}
