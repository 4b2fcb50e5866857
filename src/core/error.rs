//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::color::ColorError;

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` must be a positive integer")]
    Zero(&'static str),
}

/// Top-level error type bubbled up by public APIs.
///
/// Every variant is fatal: the binary prints the message and exits with 1.
#[derive(Debug, Error)]
pub enum HistError {
    #[error("File \"{path}\" not found")]
    FileNotFound { path: String },
    #[error("Missing argument for flag {flag}")]
    MissingFlagArgument { flag: String },
    #[error("Invalid argument for flag {flag}")]
    InvalidFlagArgument { flag: String },
    /// Any other command-line fault clap reports (unknown flag, stray value).
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
