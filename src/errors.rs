//! Error types for loading annotated text.
//!
//! Only reading from disk can fail. Decoding, grouping and scoring work on
//! whatever was loaded and never return errors.

use thiserror::Error;

/// Errors that can occur while loading sentences, corpora or configuration.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// A sentence file or corpus directory could not be read.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// A configuration file exists but could not be read or parsed.
    #[error("invalid configuration {path}: {message}")]
    Config { path: String, message: String },
}

impl AnnotationError {
    pub fn load(path: impl AsRef<std::path::Path>, message: impl ToString) -> Self {
        AnnotationError::Load {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    pub fn config(path: impl AsRef<std::path::Path>, message: impl ToString) -> Self {
        AnnotationError::Config {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }
}

/// Result type for loading operations.
pub type AnnotationResult<T> = Result<T, AnnotationError>;
