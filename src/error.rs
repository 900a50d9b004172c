//! Error types for point loading and the conjunction statistic

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a single conjunction test run
#[derive(Error, Debug)]
pub enum ConjunctionError {
    /// Input path is missing or names a directory
    #[error("No such file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A line does not hold exactly two non-negative integers (1-based)
    #[error("Wrong value in line {line}!")]
    LineFormat { line: usize },

    /// Data is not a rectangular two-column set of non-negative integers
    #[error("Expected a set of 2D points. {0}")]
    Shape(String),

    /// Fewer points than the statistic needs
    #[error("Monotone conjunction test expects at least 9 points in a set! Got {count} points")]
    InsufficientData { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for conjunction test operations
pub type Result<T> = std::result::Result<T, ConjunctionError>;
