//! Terminal front-end: turns typed gestures into engine commands and renders
//! the scoreboard after each one.

pub mod input;
pub mod render;
pub mod session;

use crate::config::OutputMode;

pub use input::ConsoleInput;
pub use session::ConsoleSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub output: OutputMode,
    /// Ask before issuing a match reset.
    pub confirm_reset: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            output: OutputMode::Text,
            confirm_reset: true,
        }
    }
}
