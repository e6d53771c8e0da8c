use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),
    #[error("Render error: {detail}")]
    Render { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Stable machine-readable code for this error variant
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Domain(DomainError::InvalidPlayer(_)) => "INVALID_PLAYER",
            AppError::Domain(DomainError::UnknownCommand(_)) => "UNKNOWN_COMMAND",
            AppError::Domain(DomainError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Render { .. } => "RENDER_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn render(detail: String) -> Self {
        Self::Render { detail }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::render(format!("json error: {e}"))
    }
}
