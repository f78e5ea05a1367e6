//! # Domestic Verification Path
//!
//! Verifies a domestic disclosure proof through the [`DisclosureVerifier`]
//! collaborator, then enforces the issuer-defined validity window
//! `[validFrom, validFrom + validForHours)` against the verification time.
//!
//! The window is half-open: a credential whose window ends exactly at `now`
//! is no longer valid.

use hcv_core::Timestamp;
use hcv_zkp::{AttributeMap, DisclosureError, DisclosureVerifier};
use thiserror::Error;

use crate::config::VerifierConfig;
use crate::details::{attr, required, MissingAttribute, VerificationDetails};

/// Failure on the domestic path.
#[derive(Error, Debug)]
pub enum DomesticError {
    #[error(transparent)]
    Disclosure(#[from] DisclosureError),

    #[error(transparent)]
    MissingAttribute(#[from] MissingAttribute),

    #[error("invalid attribute {name}: {reason}")]
    InvalidAttribute { name: &'static str, reason: String },

    #[error("credential is not valid until {valid_from}")]
    NotYetValid { valid_from: String },

    #[error("credential stopped being valid at {valid_until}")]
    Expired { valid_until: String },
}

/// The issuer-defined window during which a disclosure is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    pub valid_from: Timestamp,
    /// Exclusive.
    pub valid_until: Timestamp,
}

impl ValidityWindow {
    /// Read `validFrom` (epoch seconds) and `validForHours` from disclosed attributes.
    pub fn from_attributes(attributes: &AttributeMap) -> Result<Self, DomesticError> {
        let from_secs: i64 = parse_attribute(attributes, attr::VALID_FROM)?;
        let hours: u32 = parse_attribute(attributes, attr::VALID_FOR_HOURS)?;

        let valid_from = Timestamp::from_epoch_secs(from_secs).map_err(|e| DomesticError::InvalidAttribute {
            name: attr::VALID_FROM,
            reason: e.to_string(),
        })?;
        let valid_until = valid_from
            .plus_hours(i64::from(hours))
            .map_err(|e| DomesticError::InvalidAttribute {
                name: attr::VALID_FOR_HOURS,
                reason: e.to_string(),
            })?;

        Ok(Self { valid_from, valid_until })
    }

    pub fn contains(&self, now: Timestamp) -> bool {
        self.valid_from <= now && now < self.valid_until
    }

    /// `Ok` when `now` lies inside the window.
    pub fn check(&self, now: Timestamp) -> Result<(), DomesticError> {
        if now < self.valid_from {
            return Err(DomesticError::NotYetValid {
                valid_from: self.valid_from.to_iso8601(),
            });
        }
        if now >= self.valid_until {
            return Err(DomesticError::Expired {
                valid_until: self.valid_until.to_iso8601(),
            });
        }
        Ok(())
    }
}

fn parse_attribute<T>(attributes: &AttributeMap, name: &'static str) -> Result<T, DomesticError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    required(attributes, name)?
        .parse()
        .map_err(|e: T::Err| DomesticError::InvalidAttribute {
            name,
            reason: e.to_string(),
        })
}

/// Verify a domestic payload (prefix included) at `now`.
pub fn verify_domestic(
    payload: &[u8],
    now: Timestamp,
    config: &VerifierConfig,
    disclosure: &impl DisclosureVerifier,
) -> Result<VerificationDetails, DomesticError> {
    let attributes = disclosure.verify_disclosure(payload, &config.domestic_issuers)?;

    ValidityWindow::from_attributes(&attributes)?.check(now)?;

    Ok(VerificationDetails::from_domestic(&attributes, &config.local_country_code)?)
}
