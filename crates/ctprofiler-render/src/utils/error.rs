//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in commands and the CLI.
//!
//! Rendering itself only fails when the output sink rejects a write. Those
//! failures surface as plain `std::io::Error` so the caller sees the sink's
//! error unmodified.

use thiserror::Error;

/// Errors that can occur while reading or validating profiling input
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read profile: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Timer path segment is empty (below '{parent}')")]
    EmptySegment { parent: String },

    #[error("Root node '{name}' has level {level}, expected 0")]
    RootLevel { name: String, level: usize },

    #[error("Node '{name}' has level {actual}, expected {expected} below its parent")]
    LevelMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors that can occur while loading render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid render configuration: {0}")]
    InvalidOption(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
