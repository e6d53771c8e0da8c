use std::str::FromStr;

use crate::domain::commands::Command;
use crate::domain::state::Player;
use crate::errors::domain::DomainError;

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    Command(Command),
    Help,
    Quit,
}

impl FromStr for ConsoleInput {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_ascii_lowercase();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(DomainError::validation("empty input"));
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(DomainError::unknown_command(s.trim()));
        }

        let input = match (head, arg) {
            ("1" | "p1", None) => ConsoleInput::Command(Command::AwardPoint(Player::One)),
            ("2" | "p2", None) => ConsoleInput::Command(Command::AwardPoint(Player::Two)),
            ("point", Some(n)) => {
                let n: u8 = n
                    .parse()
                    .map_err(|_| DomainError::validation(format!("not a player number: {n}")))?;
                ConsoleInput::Command(Command::AwardPoint(Player::try_from(n)?))
            }
            ("u" | "undo", None) => ConsoleInput::Command(Command::Undo),
            ("x" | "swap" | "exchange", None) => ConsoleInput::Command(Command::ExchangeSides),
            ("n" | "next", None) => ConsoleInput::Command(Command::StartNextGame),
            ("r" | "reset", None) => ConsoleInput::Command(Command::ResetMatch),
            ("h" | "help" | "?", None) => ConsoleInput::Help,
            ("q" | "quit" | "exit", None) => ConsoleInput::Quit,
            _ => return Err(DomainError::unknown_command(s.trim())),
        };
        Ok(input)
    }
}

/// Accepts `y`/`yes` only; anything else declines.
pub fn is_confirmation(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
