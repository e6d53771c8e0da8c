//! Domain-level error type for parsing and validating scorer inputs.
//!
//! Engine operations never fail: an inapplicable command is a silent no-op.
//! This type only covers values crossing into the domain from outside
//! (player numbers, command words). Callers at the application boundary
//! convert it into `crate::error::AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Player slot outside `1..=2`.
    InvalidPlayer(u8),
    /// Input word that does not name a command.
    UnknownCommand(String),
    /// Any other rejected input.
    Validation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidPlayer(n) => write!(f, "invalid player: {n} (expected 1 or 2)"),
            DomainError::UnknownCommand(s) => write!(f, "unknown command: {s}"),
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand(input.into())
    }
}
