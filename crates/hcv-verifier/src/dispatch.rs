//! # Dispatcher
//!
//! [`Verifier`] is the one entry point for a scanned payload. It classifies
//! the payload by prefix, routes it to the domestic or international path,
//! and folds every outcome into a [`VerificationResult`].
//!
//! International certificates issued by the local country are not accepted
//! here: their holders must present the domestic credential instead.

use std::sync::Arc;

use hcv_core::Timestamp;
use hcv_vc::{CertificateVerifier, Ed25519CertificateVerifier, INTERNATIONAL_PREFIX};
use hcv_zkp::{DisclosureVerifier, MockDisclosureSystem, DOMESTIC_PREFIX};

use crate::config::VerifierConfig;
use crate::details::VerificationDetails;
use crate::domestic::verify_domestic;
use crate::error::VerifyError;
use crate::european::{verify_european, EuropeanOutcome};
use crate::result::VerificationResult;

/// Message reported for international certificates from the local issuer.
pub const LOCAL_ISSUER_MESSAGE: &str =
    "international certificate from the local issuer must be presented as a domestic credential";

/// Credential family identified by the payload prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Domestic,
    International,
}

impl CredentialKind {
    /// Classify a payload by its leading bytes. Matching is case-sensitive.
    pub fn classify(payload: &[u8]) -> Option<Self> {
        if payload.starts_with(DOMESTIC_PREFIX) {
            Some(Self::Domestic)
        } else if payload.starts_with(INTERNATIONAL_PREFIX) {
            Some(Self::International)
        } else {
            None
        }
    }

    pub fn prefix(self) -> &'static [u8] {
        match self {
            Self::Domestic => DOMESTIC_PREFIX,
            Self::International => INTERNATIONAL_PREFIX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::International => "international",
        }
    }
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`Verifier::dispatch()`] before it is flattened into a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Verified {
        kind: CredentialKind,
        details: VerificationDetails,
    },
    /// A valid-looking international certificate from the local country.
    LocalIssuer,
    /// Neither known prefix.
    Unrecognized,
}

/// Verifies scanned payloads against a fixed configuration.
///
/// Generic over the two cryptographic collaborators; the defaults are the
/// mock disclosure system and the Ed25519 certificate envelope.
#[derive(Debug, Clone)]
pub struct Verifier<D = MockDisclosureSystem, C = Ed25519CertificateVerifier> {
    config: Arc<VerifierConfig>,
    disclosure: D,
    certificates: C,
}

impl Verifier {
    pub fn new(config: impl Into<Arc<VerifierConfig>>) -> Self {
        Self::with_collaborators(config, MockDisclosureSystem, Ed25519CertificateVerifier)
    }
}

impl<D: DisclosureVerifier, C: CertificateVerifier> Verifier<D, C> {
    pub fn with_collaborators(config: impl Into<Arc<VerifierConfig>>, disclosure: D, certificates: C) -> Self {
        Self {
            config: config.into(),
            disclosure,
            certificates,
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Route `payload` to its verification path and report the typed outcome.
    pub fn dispatch(&self, payload: &[u8], now: Timestamp) -> Result<Dispatched, VerifyError> {
        let Some(kind) = CredentialKind::classify(payload) else {
            return Ok(Dispatched::Unrecognized);
        };
        tracing::debug!(kind = %kind, len = payload.len(), "dispatching payload");

        match kind {
            CredentialKind::Domestic => {
                let details = verify_domestic(payload, now, &self.config, &self.disclosure)?;
                Ok(Dispatched::Verified { kind, details })
            }
            CredentialKind::International => {
                match verify_european(payload, now, &self.config, &self.certificates)? {
                    EuropeanOutcome::LocalIssuer => Ok(Dispatched::LocalIssuer),
                    EuropeanOutcome::Verified(details) => Ok(Dispatched::Verified { kind, details }),
                }
            }
        }
    }

    /// Verify `payload` at `now`.
    pub fn verify(&self, payload: &[u8], now: Timestamp) -> VerificationResult {
        match self.dispatch(payload, now) {
            Ok(Dispatched::Verified { kind, details }) => {
                tracing::info!(kind = %kind, specimen = %details.is_specimen, "verification succeeded");
                VerificationResult::Success { details }
            }
            Ok(Dispatched::LocalIssuer) => {
                tracing::info!("international certificate from local issuer refused");
                VerificationResult::failed(LOCAL_ISSUER_MESSAGE)
            }
            Ok(Dispatched::Unrecognized) => {
                tracing::info!(len = payload.len(), "unrecognized payload prefix");
                VerificationResult::FailedUnrecognizedPrefix
            }
            Err(e) => {
                tracing::warn!(error = %e, "verification failed");
                VerificationResult::from(e)
            }
        }
    }

    /// Verify `payload` at the current time.
    pub fn verify_now(&self, payload: &[u8]) -> VerificationResult {
        self.verify(payload, Timestamp::now())
    }
}
