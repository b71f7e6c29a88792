//! Error types for exploratory statistical analysis
//!
//! Provides a unified error type for all explore-stats crates.

use thiserror::Error;

/// Core error type for exploratory statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a function (unknown mode, bad width, wrong arity)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Chart rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for an invalid probability
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidArgument(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for an invalid significance level
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidArgument(format!("Significance level {alpha} must be in (0, 1)"))
    }

    /// Create an error for a negative or non-finite whisker width
    pub fn invalid_width(k: f64) -> Self {
        Self::InvalidArgument(format!("Whisker width {k} must be finite and non-negative"))
    }

    /// Create an error for a test called with the wrong number of columns
    pub fn arity(test: &str, expected: &str, actual: usize) -> Self {
        Self::InvalidArgument(format!(
            "{test} requires {expected} columns, got {actual}"
        ))
    }

    /// Create an error for paired columns of different lengths
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Wrap a failure reported by a distribution constructor
    pub fn distribution(err: impl std::fmt::Display) -> Self {
        Self::Computation(format!("distribution error: {err}"))
    }
}
