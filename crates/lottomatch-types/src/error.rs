//! Error types for the Lottomatch engine.
//!
//! All errors use the `LM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input / boundary errors
//! - 2xx: Result store errors
//! - 3xx: Aggregation errors
//! - 9xx: General / internal errors
//!
//! An entry without a published result is *not* an error: validation
//! reports it as `validated: false`.

use thiserror::Error;

use crate::DrawKey;

/// Central error enum for all Lottomatch operations.
#[derive(Debug, Error)]
pub enum LottomatchError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// A boundary record has the wrong shape or a type-invalid field.
    #[error("LM_ERR_100: Invalid input: {reason}")]
    InvalidInput { reason: String },

    // =================================================================
    // Result Store Errors (2xx)
    // =================================================================
    /// No result is stored for the requested draw.
    #[error("LM_ERR_200: No result stored for {0}")]
    ResultNotFound(DrawKey),

    // =================================================================
    // Aggregation Errors (3xx)
    // =================================================================
    /// The configured prize pool cannot be divided.
    #[error("LM_ERR_300: Invalid prize pool: {reason}")]
    PrizePoolInvalid { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("LM_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("LM_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("LM_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LottomatchError>;

impl From<serde_json::Error> for LottomatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl LottomatchError {
    /// Shorthand for [`LottomatchError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
