//! Error handling for the scorer.

pub mod domain;

pub use domain::DomainError;
