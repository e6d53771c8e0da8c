use crate::domain::rules::ServingCourt;
use crate::domain::scoreboard::{scoreboard_view, PrimaryAction};
use crate::domain::state::{MatchState, Player};
use crate::domain::test_state_helpers::{at_score, make_match_state, MakeMatchStateArgs};

#[test]
fn initial_view_player_one_serves_from_right() {
    let view = scoreboard_view(&MatchState::initial());
    assert_eq!(view.side(Player::One).label, "PLAYER 1");
    assert_eq!(view.side(Player::One).serving, Some(ServingCourt::Right));
    assert_eq!(view.side(Player::Two).serving, None);
    assert_eq!(view.primary_action, PrimaryAction::Reset);
    assert_eq!(view.winner, None);
}

#[test]
fn serving_court_uses_servers_own_score() {
    let view = scoreboard_view(&at_score(4, 7, Player::Two));
    assert_eq!(view.side(Player::Two).serving, Some(ServingCourt::Left));
    assert_eq!(view.side(Player::One).serving, None);
}

#[test]
fn no_serving_indicator_after_win() {
    let won = make_match_state(MakeMatchStateArgs {
        scores: (21, 19),
        games_won: (1, 0),
        serving_player: Player::One,
        winner: Some(Player::One),
    });
    let view = scoreboard_view(&won);
    assert!(view.sides.iter().all(|s| s.serving.is_none()));
    assert_eq!(view.primary_action, PrimaryAction::NextGame);
    assert_eq!(view.winner, Some(Player::One));
    assert_eq!(view.side(Player::One).games_won, 1);
}

#[test]
fn json_omits_absent_serving_indicator() {
    let view = scoreboard_view(&at_score(1, 0, Player::One));
    let json = serde_json::to_value(&view).expect("serialize");
    assert_eq!(json["sides"][0]["serving"], "left");
    assert!(json["sides"][1].get("serving").is_none());
    assert_eq!(json["primary_action"], "reset");
}
