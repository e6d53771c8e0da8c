//! Stateful services built on the pure domain layer.

pub mod match_engine;
pub mod undo_history;

#[cfg(test)]
mod tests_props_engine;

pub use match_engine::{CommandOutcome, EngineOptions, MatchEngine};
pub use undo_history::UndoHistory;
