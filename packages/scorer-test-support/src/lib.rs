//! Shared test utilities for the scorer workspace.

pub mod logging;
