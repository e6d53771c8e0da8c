use std::env;

use crate::console::ConsoleOptions;
use crate::error::AppError;
use crate::services::match_engine::EngineOptions;

/// Log line format for the binary's tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

/// Scoreboard rendering on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerConfig {
    pub log_format: LogFormat,
    pub output: OutputMode,
    pub confirm_reset: bool,
    pub clear_history_on_reset: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            output: OutputMode::Text,
            confirm_reset: true,
            clear_history_on_reset: true,
        }
    }
}

impl ScorerConfig {
    /// Build config from `SCORER_*` environment variables; unset keys use defaults
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            log_format: log_format()?.unwrap_or(defaults.log_format),
            output: output_mode()?.unwrap_or(defaults.output),
            confirm_reset: bool_var("SCORER_CONFIRM_RESET")?.unwrap_or(defaults.confirm_reset),
            clear_history_on_reset: bool_var("SCORER_CLEAR_HISTORY_ON_RESET")?
                .unwrap_or(defaults.clear_history_on_reset),
        })
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            clear_history_on_reset: self.clear_history_on_reset,
        }
    }

    pub fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions {
            output: self.output,
            confirm_reset: self.confirm_reset,
        }
    }
}

/// Get log format from environment (defaults to pretty)
fn log_format() -> Result<Option<LogFormat>, AppError> {
    let Some(raw) = optional_var("SCORER_LOG_FORMAT") else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(Some(LogFormat::Pretty)),
        "json" => Ok(Some(LogFormat::Json)),
        _ => Err(AppError::config(format!(
            "SCORER_LOG_FORMAT must be 'pretty' or 'json', but got: '{raw}'"
        ))),
    }
}

/// Get scoreboard output mode from environment (defaults to text)
fn output_mode() -> Result<Option<OutputMode>, AppError> {
    let Some(raw) = optional_var("SCORER_OUTPUT") else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "text" => Ok(Some(OutputMode::Text)),
        "json" => Ok(Some(OutputMode::Json)),
        _ => Err(AppError::config(format!(
            "SCORER_OUTPUT must be 'text' or 'json', but got: '{raw}'"
        ))),
    }
}

fn bool_var(name: &str) -> Result<Option<bool>, AppError> {
    let Some(raw) = optional_var(name) else {
        return Ok(None);
    };
    parse_bool(&raw).map(Some).ok_or_else(|| {
        AppError::config(format!(
            "Environment variable '{name}' must be a boolean, but got: '{raw}'"
        ))
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get environment variable, treating empty values as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
