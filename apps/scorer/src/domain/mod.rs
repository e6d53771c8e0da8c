//! Domain layer: pure match scoring types, rules and transitions.

pub mod commands;
pub mod match_events;
pub mod rules;
pub mod scoreboard;
pub mod scoring;
pub mod state;
pub mod transitions;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoreboard;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_transitions;

// Re-exports for ergonomics
pub use commands::Command;
pub use match_events::{derive_match_events, MatchEvent};
pub use rules::{game_winner, serving_court, ServingCourt};
pub use scoreboard::{scoreboard_view, PrimaryAction, ScoreboardView, SideView};
pub use scoring::award_point;
pub use state::{MatchState, Player, PlayerStanding};
pub use transitions::{exchange_sides, reset_match, start_next_game};
