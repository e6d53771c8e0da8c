use serde::{Deserialize, Serialize};

use crate::domain::state::Player;

/// Closed set of commands a session can issue against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "player", rename_all = "snake_case")]
pub enum Command {
    /// Rally won by the given slot.
    AwardPoint(Player),
    /// Players change ends; standings swap slots.
    ExchangeSides,
    /// Begin the next game after a win.
    StartNextGame,
    /// Restart the whole match.
    ResetMatch,
    /// Restore the state before the last recorded command.
    Undo,
}

impl Command {
    /// Stable name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Command::AwardPoint(_) => "award_point",
            Command::ExchangeSides => "exchange_sides",
            Command::StartNextGame => "start_next_game",
            Command::ResetMatch => "reset_match",
            Command::Undo => "undo",
        }
    }

    /// Whether the pre-command state is pushed onto the undo history.
    pub const fn records_snapshot(&self) -> bool {
        matches!(self, Command::AwardPoint(_) | Command::ExchangeSides)
    }
}
