//! # Issuer Country Codes
//!
//! [`CountryCode`] identifies the jurisdiction that issued a credential.
//! It drives two behaviours: the domestic path stamps the local code onto
//! its results, and the dispatcher uses it to recognise international
//! certificates issued by the local jurisdiction.
//!
//! ## Validation
//!
//! Two uppercase ASCII letters (ISO 3166-1 alpha-2). Validated at
//! construction and on deserialization.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An ISO 3166-1 alpha-2 country code, e.g. `NL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating the two-letter uppercase shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] for anything other
    /// than exactly two ASCII uppercase letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.len() == 2 && value.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidCountryCode(value))
        }
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `other` names this country. Comparison is exact; issuer
    /// fields in certificates are already upper case.
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_uppercase_letters() {
        let cc = CountryCode::new("NL").unwrap();
        assert_eq!(cc.as_str(), "NL");
        assert_eq!(cc.to_string(), "NL");
    }

    #[test]
    fn rejects_other_shapes() {
        for bad in ["", "N", "nl", "NLD", "N1", "ÑL"] {
            assert!(CountryCode::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn matches_is_exact() {
        let cc = CountryCode::new("NL").unwrap();
        assert!(cc.matches("NL"));
        assert!(!cc.matches("nl"));
        assert!(!cc.matches("DE"));
    }

    #[test]
    fn deserialize_validates() {
        let ok: CountryCode = serde_json::from_str("\"DE\"").unwrap();
        assert_eq!(ok.as_str(), "DE");
        assert!(serde_json::from_str::<CountryCode>("\"de\"").is_err());
    }
}
