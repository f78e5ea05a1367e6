//! # Verification Result
//!
//! The single value handed back to callers. Exactly one of three outcomes:
//! success with [`VerificationDetails`], failure with an error message, or
//! an unrecognized payload prefix with neither.
//!
//! ## Wire Format
//!
//! ```json
//! {"status": "SUCCESS", "details": {"credentialVersion": "2", ...}}
//! {"status": "FAILED_ERROR", "error": "could not verify ..."}
//! {"status": "FAILED_UNRECOGNIZED_PREFIX"}
//! ```
//!
//! Numeric codes (`1`, `2`, `3`) are stable for bindings that exchange the
//! status as an integer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::details::VerificationDetails;
use crate::error::VerifyError;

/// Outcome category of a verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Success,
    FailedUnrecognizedPrefix,
    FailedError,
}

/// A numeric status code outside the defined set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown verification status code {0}")]
pub struct UnknownStatusCode(pub u8);

impl VerificationStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 1,
            Self::FailedUnrecognizedPrefix => 2,
            Self::FailedError => 3,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, UnknownStatusCode> {
        match code {
            1 => Ok(Self::Success),
            2 => Ok(Self::FailedUnrecognizedPrefix),
            3 => Ok(Self::FailedError),
            other => Err(UnknownStatusCode(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::FailedUnrecognizedPrefix => "FAILED_UNRECOGNIZED_PREFIX",
            Self::FailedError => "FAILED_ERROR",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of one verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationResult {
    Success { details: VerificationDetails },
    FailedUnrecognizedPrefix,
    FailedError { error: String },
}

impl VerificationResult {
    pub fn status(&self) -> VerificationStatus {
        match self {
            Self::Success { .. } => VerificationStatus::Success,
            Self::FailedUnrecognizedPrefix => VerificationStatus::FailedUnrecognizedPrefix,
            Self::FailedError { .. } => VerificationStatus::FailedError,
        }
    }

    /// Details of a successful verification.
    pub fn details(&self) -> Option<&VerificationDetails> {
        match self {
            Self::Success { details } => Some(details),
            _ => None,
        }
    }

    /// Message of a failed verification.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::FailedError { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self::FailedError { error: message.into() }
    }
}

impl From<VerifyError> for VerificationResult {
    fn from(err: VerifyError) -> Self {
        Self::failed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> VerificationDetails {
        VerificationDetails {
            credential_version: "2".to_string(),
            is_specimen: "0".to_string(),
            issuer_country_code: Some("NL".to_string()),
            first_name_initial: "A".to_string(),
            last_name_initial: "R".to_string(),
            birth_day: "20".to_string(),
            birth_month: "10".to_string(),
        }
    }

    #[test]
    fn status_codes_are_stable() {
        for status in [
            VerificationStatus::Success,
            VerificationStatus::FailedUnrecognizedPrefix,
            VerificationStatus::FailedError,
        ] {
            assert_eq!(VerificationStatus::from_code(status.code()), Ok(status));
        }
        assert_eq!(VerificationStatus::Success.code(), 1);
        assert_eq!(VerificationStatus::FailedUnrecognizedPrefix.code(), 2);
        assert_eq!(VerificationStatus::FailedError.code(), 3);
        assert_eq!(VerificationStatus::from_code(0), Err(UnknownStatusCode(0)));
    }

    #[test]
    fn exactly_one_of_details_or_error() {
        let ok = VerificationResult::Success { details: details() };
        assert!(ok.details().is_some() && ok.error().is_none());

        let failed = VerificationResult::failed("boom");
        assert!(failed.details().is_none());
        assert_eq!(failed.error(), Some("boom"));

        let unrecognized = VerificationResult::FailedUnrecognizedPrefix;
        assert!(unrecognized.details().is_none() && unrecognized.error().is_none());
    }

    #[test]
    fn wire_format() {
        let json = serde_json::to_value(VerificationResult::Success { details: details() }).unwrap();
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["details"]["issuerCountryCode"], "NL");
        assert!(json.get("error").is_none());

        let json = serde_json::to_value(VerificationResult::failed("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "FAILED_ERROR", "error": "boom"}));

        let json = serde_json::to_value(VerificationResult::FailedUnrecognizedPrefix).unwrap();
        assert_eq!(json, serde_json::json!({"status": "FAILED_UNRECOGNIZED_PREFIX"}));
    }

    #[test]
    fn status_serializes_like_result_tag() {
        let json = serde_json::to_value(VerificationStatus::FailedUnrecognizedPrefix).unwrap();
        assert_eq!(json, "FAILED_UNRECOGNIZED_PREFIX");
        assert_eq!(VerificationStatus::FailedError.to_string(), "FAILED_ERROR");
    }

    #[test]
    fn result_parses_back() {
        let original = VerificationResult::Success { details: details() };
        let text = serde_json::to_string(&original).unwrap();
        let parsed: VerificationResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.status(), VerificationStatus::Success);
        assert_eq!(parsed, original);
    }
}
