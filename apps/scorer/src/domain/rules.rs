use serde::{Deserialize, Serialize};

use crate::domain::state::Player;

/// Points needed to take a game, subject to the margin rule.
pub const GAME_POINT: u32 = 21;
/// Lead required to win once `GAME_POINT` is reached.
pub const WIN_MARGIN: u32 = 2;
/// Hard cap: at 29-29 the next rally decides the game.
pub const SCORE_CAP: u32 = 30;

/// Service box the server stands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingCourt {
    Left,
    Right,
}

/// Even score serves from the right court, odd from the left.
#[inline]
pub fn serving_court(score: u32) -> ServingCourt {
    if score % 2 == 0 {
        ServingCourt::Right
    } else {
        ServingCourt::Left
    }
}

// Checks are evaluated in a fixed order: margin wins first, then the cap.
pub fn game_winner(s1: u32, s2: u32) -> Option<Player> {
    if s1 >= GAME_POINT && s1.saturating_sub(s2) >= WIN_MARGIN {
        return Some(Player::One);
    }
    if s2 >= GAME_POINT && s2.saturating_sub(s1) >= WIN_MARGIN {
        return Some(Player::Two);
    }
    if s1 == SCORE_CAP && s2 == SCORE_CAP - 1 {
        return Some(Player::One);
    }
    if s2 == SCORE_CAP && s1 == SCORE_CAP - 1 {
        return Some(Player::Two);
    }
    None
}
