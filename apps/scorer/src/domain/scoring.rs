use crate::domain::rules::game_winner;
use crate::domain::state::{MatchState, Player};

/// Award the rally to `player` under rally-point scoring.
///
/// The scorer serves next. If the new score satisfies a win condition the
/// winner is recorded and their `games_won` increments in the same step.
/// A concluded game ignores further points and returns the state unchanged.
pub fn award_point(state: &MatchState, player: Player) -> MatchState {
    if state.winner.is_some() {
        return *state;
    }

    let mut next = *state;
    next.standing_mut(player).score += 1;
    next.serving_player = player;

    let (s1, s2) = next.scores();
    if let Some(winner) = game_winner(s1, s2) {
        next.winner = Some(winner);
        next.standing_mut(winner).games_won += 1;
    }
    next
}
