//! Quiz engine error types.
//!
//! Insufficient content is never an error: the engine returns a shorter quiz
//! instead. These variants only cover caller misuse.

use thiserror::Error;

/// Errors that can occur when configuring or invoking the quiz engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A negative question count was requested.
    #[error("invalid question count: {0} (must be >= 0)")]
    InvalidCount(i64),

    /// The engine configuration is unusable.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// A keyword could not be compiled into a word pattern.
    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl QuizError {
    /// Returns `true` if the error stems from the arguments of a single call
    /// rather than from the engine setup.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, QuizError::InvalidCount(_) | QuizError::Pattern(_))
    }
}

/// Convenience alias for results produced by the quiz engine.
pub type Result<T> = std::result::Result<T, QuizError>;
