use serde::Serialize;

use crate::domain::commands::Command;
use crate::domain::state::{MatchState, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Explicit: a rally was awarded.
    PointScored { player: Player, score: u32 },

    /// Edge-triggered: service passed to the other slot after a rally.
    ServiceOver { player: Player },

    /// Edge-triggered: the current game got a winner.
    GameWon { player: Player, games_won: u32 },

    /// Explicit: standings swapped slots.
    SidesExchanged,

    /// Explicit: a new game began.
    NextGameStarted { server: Player },

    /// Explicit: the match restarted from scratch.
    MatchReset,

    /// Explicit: the last recorded command was reverted.
    Undone,
}

/// Derive events for a command from the states around it.
///
/// A command that left the state untouched produces no events.
pub fn derive_match_events(
    command: &Command,
    before: &MatchState,
    after: &MatchState,
) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    if before == after {
        return events;
    }

    match *command {
        Command::AwardPoint(player) => {
            events.push(MatchEvent::PointScored {
                player,
                score: after.standing(player).score,
            });
            if before.serving_player != after.serving_player {
                events.push(MatchEvent::ServiceOver {
                    player: after.serving_player,
                });
            }
            if let (None, Some(winner)) = (before.winner, after.winner) {
                events.push(MatchEvent::GameWon {
                    player: winner,
                    games_won: after.standing(winner).games_won,
                });
            }
        }
        Command::ExchangeSides => events.push(MatchEvent::SidesExchanged),
        Command::StartNextGame => events.push(MatchEvent::NextGameStarted {
            server: after.serving_player,
        }),
        Command::ResetMatch => events.push(MatchEvent::MatchReset),
        Command::Undo => events.push(MatchEvent::Undone),
    }

    events
}
