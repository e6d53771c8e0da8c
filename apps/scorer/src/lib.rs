#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use config::ScorerConfig;
pub use console::{ConsoleOptions, ConsoleSession};
pub use domain::{Command, MatchState, Player, PlayerStanding, ServingCourt};
pub use error::AppError;
pub use errors::DomainError;
pub use services::{EngineOptions, MatchEngine, UndoHistory};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorer_test_support::logging::init();
}
