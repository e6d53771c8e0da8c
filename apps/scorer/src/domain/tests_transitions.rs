use crate::domain::scoring::award_point;
use crate::domain::state::{MatchState, Player};
use crate::domain::test_state_helpers::{at_score, make_match_state, MakeMatchStateArgs};
use crate::domain::transitions::{exchange_sides, reset_match, start_next_game};

#[test]
fn exchange_swaps_standings_and_flips_server() {
    let state = make_match_state(MakeMatchStateArgs {
        scores: (7, 4),
        games_won: (1, 0),
        serving_player: Player::One,
        winner: None,
    });
    let next = exchange_sides(&state);
    assert_eq!(next.player1, state.player2);
    assert_eq!(next.player2, state.player1);
    assert_eq!(next.serving_player, Player::Two);
    assert_eq!(next.winner, None);
}

#[test]
fn exchange_twice_restores_original() {
    let state = make_match_state(MakeMatchStateArgs {
        scores: (12, 9),
        games_won: (0, 1),
        serving_player: Player::Two,
        winner: None,
    });
    assert_eq!(exchange_sides(&exchange_sides(&state)), state);
}

#[test]
fn exchange_applies_after_a_win() {
    let won = make_match_state(MakeMatchStateArgs {
        scores: (21, 10),
        games_won: (1, 0),
        serving_player: Player::One,
        winner: Some(Player::One),
    });
    let next = exchange_sides(&won);
    assert_eq!(next.player1.score, 10);
    assert_eq!(next.player2.score, 21);
    assert_eq!(next.serving_player, Player::Two);
    // Winner is a slot and is left as-is.
    assert_eq!(next.winner, Some(Player::One));
}

#[test]
fn next_game_requires_winner() {
    let state = at_score(15, 14, Player::One);
    assert_eq!(start_next_game(&state), state);
    assert_eq!(start_next_game(&MatchState::initial()), MatchState::initial());
}

#[test]
fn next_game_keeps_games_and_winner_serves() {
    let won = make_match_state(MakeMatchStateArgs {
        scores: (17, 21),
        games_won: (1, 1),
        serving_player: Player::Two,
        winner: Some(Player::Two),
    });
    let next = start_next_game(&won);
    assert_eq!(next.scores(), (0, 0));
    assert_eq!(next.player1.games_won, 1);
    assert_eq!(next.player2.games_won, 1);
    assert_eq!(next.winner, None);
    assert_eq!(next.serving_player, Player::Two);
}

#[test]
fn next_game_server_is_winner_not_last_server() {
    let won = make_match_state(MakeMatchStateArgs {
        scores: (21, 12),
        games_won: (1, 0),
        serving_player: Player::Two,
        winner: Some(Player::One),
    });
    assert_eq!(start_next_game(&won).serving_player, Player::One);
}

#[test]
fn reset_returns_initial_state() {
    let mut state = at_score(0, 0, Player::One);
    for _ in 0..21 {
        state = award_point(&state, Player::Two);
    }
    state = start_next_game(&state);
    state = award_point(&state, Player::One);
    assert_ne!(state, MatchState::initial());
    assert_eq!(reset_match(), MatchState::initial());
}
