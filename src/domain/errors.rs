//! Domain error types
//!
//! This module defines the error hierarchy for phi-scrub. Scanning and
//! redaction never fail on input text; errors only come from configuration,
//! pattern libraries, name dictionaries and I/O around them.

use thiserror::Error;

/// Main phi-scrub error type
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (bad regex, unknown category, bad confidence)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Name dictionary errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Background task failures during batch processing
    #[error("Task error: {0}")]
    Task(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for ScrubError {
    fn from(err: std::io::Error) -> Self {
        ScrubError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScrubError {
    fn from(err: serde_json::Error) -> Self {
        ScrubError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ScrubError {
    fn from(err: toml::de::Error) -> Self {
        ScrubError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<regex::Error> for ScrubError {
    fn from(err: regex::Error) -> Self {
        ScrubError::Pattern(format!("Invalid regex: {err}"))
    }
}

impl From<tokio::task::JoinError> for ScrubError {
    fn from(err: tokio::task::JoinError) -> Self {
        ScrubError::Task(err.to_string())
    }
}
