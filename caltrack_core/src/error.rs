//! Error types for the caltrack_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for caltrack_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Biometric input that cannot produce a BMI (e.g. zero height)
    #[error("Invalid biometric: {0}")]
    InvalidBiometric(String),

    /// Session lookup or lifecycle error
    #[error("Session error: {0}")]
    Session(String),

    /// Unparseable user-facing value (gender, intake kind, ...)
    #[error("Parse error: {0}")]
    Parse(String),
}
