use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::rules::{serving_court, ServingCourt};
use crate::errors::domain::DomainError;

/// Scoreboard slot (1 or 2).
///
/// Slots are positional: `ExchangeSides` moves standings between slots, so a
/// slot does not permanently identify a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The opposing slot.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based slot number.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl From<Player> for u8 {
    fn from(p: Player) -> Self {
        p.number()
    }
}

impl TryFrom<u8> for Player {
    type Error = DomainError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(DomainError::InvalidPlayer(other)),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.number())
    }
}

/// Score within the current game plus games won so far in the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub score: u32,
    pub games_won: u32,
}

/// Entire match snapshot.
///
/// Plain `Copy` value: transitions produce a new value, and undo snapshots
/// never share storage with the live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player1: PlayerStanding,
    pub player2: PlayerStanding,
    /// Slot that serves the next rally.
    pub serving_player: Player,
    /// Winner of the current game, once concluded.
    /// - None while the game is in progress
    pub winner: Option<Player>,
}

impl MatchState {
    /// Fresh match: zeroed standings, player 1 serving, no winner.
    pub const fn initial() -> Self {
        Self {
            player1: PlayerStanding {
                score: 0,
                games_won: 0,
            },
            player2: PlayerStanding {
                score: 0,
                games_won: 0,
            },
            serving_player: Player::One,
            winner: None,
        }
    }

    #[inline]
    pub fn standing(&self, player: Player) -> &PlayerStanding {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    #[inline]
    pub(crate) fn standing_mut(&mut self, player: Player) -> &mut PlayerStanding {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    /// Current game score as `(player1, player2)`.
    #[inline]
    pub fn scores(&self) -> (u32, u32) {
        (self.player1.score, self.player2.score)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Court the serving player serves from, derived from their own score.
    pub fn serving_court(&self) -> ServingCourt {
        serving_court(self.standing(self.serving_player).score)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::initial()
    }
}
