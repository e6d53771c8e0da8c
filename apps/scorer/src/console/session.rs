//! Interactive read-render loop over any line source and sink.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::OutputMode;
use crate::console::input::{is_confirmation, ConsoleInput};
use crate::console::render::{render_json, render_text, HELP};
use crate::console::ConsoleOptions;
use crate::domain::commands::Command;
use crate::domain::match_events::MatchEvent;
use crate::domain::scoreboard::{player_label, scoreboard_view};
use crate::error::AppError;
use crate::services::match_engine::{CommandOutcome, MatchEngine};

pub struct ConsoleSession<R, W> {
    engine: MatchEngine,
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(engine: MatchEngine, input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            engine,
            input,
            output,
            options,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn into_parts(self) -> (MatchEngine, W) {
        (self.engine, self.output)
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.render()?;
        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                debug!("Input closed, ending session");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ConsoleInput>() {
                Ok(ConsoleInput::Quit) => break,
                Ok(ConsoleInput::Help) => writeln!(self.output, "{HELP}")?,
                Ok(ConsoleInput::Command(Command::ResetMatch)) => {
                    if self.confirm_reset()? {
                        self.dispatch(Command::ResetMatch)?;
                    } else {
                        debug!("Reset declined");
                        self.notice("reset cancelled")?;
                    }
                }
                Ok(ConsoleInput::Command(command)) => self.dispatch(command)?,
                Err(e) => {
                    let err = AppError::from(e);
                    warn!(code = err.code(), input = line.trim(), "Rejected console input");
                    self.report_error(&err)?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        let history_len = self.engine.history().len();
        let outcome = self.engine.execute(command);
        self.announce(&command, &outcome, history_len)?;
        self.render()
    }

    fn announce(
        &mut self,
        command: &Command,
        outcome: &CommandOutcome,
        history_len: usize,
    ) -> Result<(), AppError> {
        if outcome.is_noop() {
            let reason = match command {
                Command::AwardPoint(_) => "game already won, start the next game or undo",
                Command::StartNextGame => "no winner yet",
                Command::Undo if history_len == 0 => "nothing to undo",
                // Popped a snapshot equal to the live state (an ignored point).
                Command::Undo => "state unchanged",
                _ => return Ok(()),
            };
            return self.notice(&format!("ignored: {reason}"));
        }
        for event in &outcome.events {
            match event {
                MatchEvent::GameWon { player, games_won } => self.notice(&format!(
                    "{} wins the game ({} won)",
                    player_label(*player),
                    games_won
                ))?,
                MatchEvent::MatchReset => self.notice("match reset")?,
                _ => {}
            }
        }
        Ok(())
    }

    fn confirm_reset(&mut self) -> Result<bool, AppError> {
        if !self.options.confirm_reset {
            return Ok(true);
        }
        match self.options.output {
            OutputMode::Text => self.prompt("reset all scores and games? [y/N] ")?,
            OutputMode::Json => {
                let frame = serde_json::json!({ "confirm": "reset" });
                writeln!(self.output, "{frame}")?;
                self.output.flush()?;
            }
        }
        Ok(self
            .read_line()?
            .map(|answer| is_confirmation(&answer))
            .unwrap_or(false))
    }

    fn render(&mut self) -> Result<(), AppError> {
        let state = *self.engine.state();
        match self.options.output {
            OutputMode::Text => writeln!(self.output, "{}", render_text(&scoreboard_view(&state)))?,
            OutputMode::Json => writeln!(self.output, "{}", render_json(&state)?)?,
        }
        Ok(())
    }

    // Prompts are text-mode only so JSON output stays one frame per line.
    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        if self.options.output == OutputMode::Text {
            write!(self.output, "{text}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<(), AppError> {
        match self.options.output {
            OutputMode::Text => writeln!(self.output, "{text}")?,
            OutputMode::Json => {
                let frame = serde_json::json!({ "notice": text });
                writeln!(self.output, "{frame}")?
            }
        }
        Ok(())
    }

    fn report_error(&mut self, err: &AppError) -> Result<(), AppError> {
        match self.options.output {
            OutputMode::Text => writeln!(self.output, "error: {err}")?,
            OutputMode::Json => {
                let frame = serde_json::json!({ "error": err.code(), "detail": err.to_string() });
                writeln!(self.output, "{frame}")?
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
