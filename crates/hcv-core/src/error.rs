//! # Error Types
//!
//! Foundational errors shared across the verifier workspace. Stage-specific
//! errors (disclosure, certificate envelope, business rules) live with the
//! stage that raises them and wrap these where needed.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Validation failures for domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country codes are two uppercase ASCII letters.
    #[error("invalid country code {0:?}: expected two uppercase ASCII letters")]
    InvalidCountryCode(String),

    /// A timestamp could not be parsed or is out of range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A calendar date could not be parsed.
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
}
