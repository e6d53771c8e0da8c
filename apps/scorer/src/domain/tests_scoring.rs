use crate::domain::scoring::award_point;
use crate::domain::state::{MatchState, Player};
use crate::domain::test_state_helpers::{at_score, make_match_state, MakeMatchStateArgs};

fn play(mut state: MatchState, rallies: &[Player]) -> MatchState {
    for &p in rallies {
        state = award_point(&state, p);
    }
    state
}

#[test]
fn point_increments_scorer_and_gives_serve() {
    let state = at_score(3, 5, Player::Two);
    let next = award_point(&state, Player::One);
    assert_eq!(next.scores(), (4, 5));
    assert_eq!(next.serving_player, Player::One);
    assert_eq!(next.winner, None);
    // The input value is untouched.
    assert_eq!(state.scores(), (3, 5));
}

#[test]
fn win_at_21() {
    let state = at_score(20, 19, Player::Two);
    let next = award_point(&state, Player::One);
    assert_eq!(next.scores(), (21, 19));
    assert_eq!(next.winner, Some(Player::One));
    assert_eq!(next.player1.games_won, 1);
    assert_eq!(next.player2.games_won, 0);
    assert_eq!(next.serving_player, Player::One);
}

#[test]
fn deuce_extends_until_two_point_lead() {
    let state = at_score(20, 20, Player::One);
    let state = play(state, &[Player::One, Player::Two, Player::One, Player::Two]);
    assert_eq!(state.scores(), (22, 22));
    assert_eq!(state.winner, None);

    let state = play(state, &[Player::Two]);
    assert_eq!(state.scores(), (22, 23));
    assert_eq!(state.winner, None);

    let state = play(state, &[Player::Two]);
    assert_eq!(state.scores(), (22, 24));
    assert_eq!(state.winner, Some(Player::Two));
    assert_eq!(state.player2.games_won, 1);
}

#[test]
fn cap_rule_ends_game_at_30_29() {
    let state = at_score(29, 29, Player::Two);
    let next = award_point(&state, Player::One);
    assert_eq!(next.scores(), (30, 29));
    assert_eq!(next.winner, Some(Player::One));
    assert_eq!(next.player1.games_won, 1);

    let next = award_point(&state, Player::Two);
    assert_eq!(next.scores(), (29, 30));
    assert_eq!(next.winner, Some(Player::Two));
    assert_eq!(next.player2.games_won, 1);
}

#[test]
fn points_ignored_once_game_is_won() {
    let won = make_match_state(MakeMatchStateArgs {
        scores: (21, 15),
        games_won: (1, 0),
        serving_player: Player::One,
        winner: Some(Player::One),
    });
    for p in Player::ALL {
        let again = award_point(&won, p);
        assert_eq!(again, won, "award_point({p}) must be ignored after a win");
    }
}

#[test]
fn games_won_increments_once_per_game() {
    let state = play(MatchState::initial(), &[Player::One; 21]);
    assert_eq!(state.scores(), (21, 0));
    assert_eq!(state.player1.games_won, 1);

    // Further taps change nothing.
    let state = play(state, &[Player::One; 5]);
    assert_eq!(state.player1.games_won, 1);
    assert_eq!(state.scores(), (21, 0));
}

#[test]
fn games_won_carried_into_win() {
    let state = make_match_state(MakeMatchStateArgs {
        scores: (19, 20),
        games_won: (1, 1),
        serving_player: Player::Two,
        winner: None,
    });
    let next = award_point(&state, Player::Two);
    assert_eq!(next.winner, Some(Player::Two));
    assert_eq!(next.player1.games_won, 1);
    assert_eq!(next.player2.games_won, 2);
}
