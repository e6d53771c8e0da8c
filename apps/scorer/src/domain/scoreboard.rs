//! Read-only scoreboard projection of a `MatchState` for rendering.

use serde::Serialize;

use crate::domain::rules::{serving_court, ServingCourt};
use crate::domain::state::{MatchState, Player};

/// Public info about one side of the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SideView {
    pub player: Player,
    pub label: String,
    pub score: u32,
    pub games_won: u32,
    /// Court to serve from; only present for the server while the game is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving: Option<ServingCourt>,
}

/// The single match-level action offered next to undo/exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAction {
    /// Game concluded: move on to the next one.
    NextGame,
    /// Game in progress: restart the match (confirmation required).
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreboardView {
    pub sides: [SideView; 2],
    pub winner: Option<Player>,
    pub primary_action: PrimaryAction,
}

impl ScoreboardView {
    pub fn side(&self, player: Player) -> &SideView {
        match player {
            Player::One => &self.sides[0],
            Player::Two => &self.sides[1],
        }
    }
}

pub fn player_label(player: Player) -> String {
    format!("PLAYER {}", player.number())
}

fn side_view(state: &MatchState, player: Player) -> SideView {
    let standing = state.standing(player);
    let serving = (state.serving_player == player && !state.is_game_over())
        .then(|| serving_court(standing.score));
    SideView {
        player,
        label: player_label(player),
        score: standing.score,
        games_won: standing.games_won,
        serving,
    }
}

pub fn scoreboard_view(state: &MatchState) -> ScoreboardView {
    ScoreboardView {
        sides: [side_view(state, Player::One), side_view(state, Player::Two)],
        winner: state.winner,
        primary_action: if state.is_game_over() {
            PrimaryAction::NextGame
        } else {
            PrimaryAction::Reset
        },
    }
}
