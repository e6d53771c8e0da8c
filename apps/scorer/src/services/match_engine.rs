//! Match engine service - owns the live match state and its undo history.
//!
//! Each session creates its own engine. All transitions are delegated to the
//! pure functions in `crate::domain`; this layer only sequences snapshots and
//! logs what happened.

use tracing::{debug, info};

use crate::domain::commands::Command;
use crate::domain::match_events::{derive_match_events, MatchEvent};
use crate::domain::rules::ServingCourt;
use crate::domain::scoring::award_point;
use crate::domain::state::{MatchState, Player};
use crate::domain::transitions::{exchange_sides, reset_match, start_next_game};
use crate::services::undo_history::UndoHistory;

/// Engine behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Drop the undo history when the match is reset, so undo cannot
    /// reach back into the previous match.
    pub clear_history_on_reset: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            clear_history_on_reset: true,
        }
    }
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// State after the command (unchanged if the command was a no-op).
    pub state: MatchState,
    /// Events derived from the before/after states.
    pub events: Vec<MatchEvent>,
}

impl CommandOutcome {
    /// True when the command left the state untouched.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    state: MatchState,
    history: UndoHistory,
    options: EngineOptions,
}

impl MatchEngine {
    /// New match with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            state: MatchState::initial(),
            history: UndoHistory::new(),
            options,
        }
    }

    /// Current match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Court the current server serves from.
    pub fn serving_court(&self) -> ServingCourt {
        self.state.serving_court()
    }

    pub fn award_point(&mut self, player: Player) -> MatchState {
        self.execute(Command::AwardPoint(player)).state
    }

    pub fn exchange_sides(&mut self) -> MatchState {
        self.execute(Command::ExchangeSides).state
    }

    pub fn start_next_game(&mut self) -> MatchState {
        self.execute(Command::StartNextGame).state
    }

    pub fn reset_match(&mut self) -> MatchState {
        self.execute(Command::ResetMatch).state
    }

    pub fn undo(&mut self) -> MatchState {
        self.execute(Command::Undo).state
    }

    /// Apply a command and return the resulting state.
    pub fn apply(&mut self, command: Command) -> MatchState {
        self.execute(command).state
    }

    /// Apply a command, returning the new state and the derived events.
    ///
    /// Recorded commands push the pre-command state before the transition is
    /// applied, so `Undo` always restores the state as it was immediately
    /// before the last recorded command.
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        let before = self.state;

        if command.records_snapshot() {
            self.history.push(before);
        }

        let after = match command {
            Command::AwardPoint(player) => award_point(&before, player),
            Command::ExchangeSides => exchange_sides(&before),
            Command::StartNextGame => start_next_game(&before),
            Command::ResetMatch => {
                if self.options.clear_history_on_reset {
                    self.history.clear();
                }
                reset_match()
            }
            Command::Undo => self.history.pop().unwrap_or(before),
        };
        self.restore(after);

        let events = derive_match_events(&command, &before, &after);
        self.log_outcome(&command, &events);

        CommandOutcome {
            state: after,
            events,
        }
    }

    /// Replace the whole live state.
    fn restore(&mut self, snapshot: MatchState) {
        self.state = snapshot;
    }

    fn log_outcome(&self, command: &Command, events: &[MatchEvent]) {
        let (s1, s2) = self.state.scores();
        if events.is_empty() {
            debug!(
                command = command.name(),
                score1 = s1,
                score2 = s2,
                "Command ignored, state unchanged"
            );
            return;
        }

        debug!(
            command = command.name(),
            score1 = s1,
            score2 = s2,
            serving = %self.state.serving_player,
            history_len = self.history.len(),
            "Command applied"
        );

        for event in events {
            match event {
                MatchEvent::GameWon { player, games_won } => info!(
                    winner = %player,
                    games_won,
                    score1 = s1,
                    score2 = s2,
                    "Game won"
                ),
                MatchEvent::MatchReset => info!(
                    history_cleared = self.options.clear_history_on_reset,
                    "Match reset"
                ),
                MatchEvent::NextGameStarted { server } => {
                    info!(server = %server, "Next game started")
                }
                _ => {}
            }
        }
    }
}
