//! Error types for the Coldfind harness.
//!
//! All fallible operations return [`Result`], built on the [`ColdfindError`]
//! enum. Search correctness violations are deliberately *not* errors: the
//! sweeps report them on stderr and keep measuring.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Coldfind operations.
#[derive(Error, Debug)]
pub enum ColdfindError {
    /// I/O errors (writing reports to a stream, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid sweep or CLI parameters
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Benchmark execution errors
    #[error("Benchmark error: {0}")]
    Benchmark(String),

    /// Report construction errors (mismatched result tables, etc.)
    #[error("Report error: {0}")]
    Report(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ColdfindError.
pub type Result<T> = std::result::Result<T, ColdfindError>;

impl ColdfindError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ColdfindError::InvalidArgument(msg.into())
    }

    /// Create a new benchmark error.
    pub fn benchmark<S: Into<String>>(msg: S) -> Self {
        ColdfindError::Benchmark(msg.into())
    }

    /// Create a new report error.
    pub fn report<S: Into<String>>(msg: S) -> Self {
        ColdfindError::Report(msg.into())
    }
}
