//! Error types for the Sentia library.
//!
//! All errors are represented by the [`SentiaError`] enum. Training
//! preconditions (empty corpus, a single label) and vocabulary misuse are
//! reported through their own variants so callers can tell them apart from
//! I/O or configuration problems.
//!
//! # Examples
//!
//! ```
//! use sentia::error::{SentiaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentia operations.
#[derive(Error, Debug)]
pub enum SentiaError {
    /// I/O errors (dataset and configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (normalization, tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Vocabulary misuse (empty vocabulary, mixed vocabularies)
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Training precondition violations
    #[error("Training error: {0}")]
    Training(String),

    /// Errors raised while scoring a feature vector
    #[error("Classification error: {0}")]
    Classification(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset parsing errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentiaError.
pub type Result<T> = std::result::Result<T, SentiaError>;

impl SentiaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiaError::Analysis(msg.into())
    }

    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        SentiaError::Vocabulary(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        SentiaError::Training(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        SentiaError::Classification(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        SentiaError::Dataset(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SentiaError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SentiaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentiaError::Other(msg.into())
    }
}
