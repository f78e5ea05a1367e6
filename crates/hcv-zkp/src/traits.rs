//! # Disclosure Verifier Trait
//!
//! The interface the domestic verification path calls. Implementations
//! must be `Send + Sync`: one verifier instance is shared across all
//! concurrent verification calls and holds no per-call state.

use std::collections::BTreeMap;

use hcv_crypto::IssuerKeyRing;
use thiserror::Error;

/// Disclosed attributes, name → value. Always includes the credential
/// version marker alongside the disclosed domain attributes.
pub type AttributeMap = BTreeMap<String, String>;

/// Failure to verify a disclosure proof.
#[derive(Error, Debug)]
pub enum DisclosureError {
    /// The payload could not be decoded into a disclosure proof.
    #[error("malformed disclosure: {0}")]
    Malformed(String),

    /// The proof names an issuer key that is not trusted.
    #[error("untrusted issuer: {0}")]
    UntrustedIssuer(String),

    /// The proof does not verify against the issuer key.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}

/// Verifies a disclosure proof and yields the disclosed attributes.
pub trait DisclosureVerifier: Send + Sync {
    /// Verify `payload` against `issuer_keys`.
    ///
    /// `payload` is the complete scanned payload, prefix included.
    fn verify_disclosure(
        &self,
        payload: &[u8],
        issuer_keys: &IssuerKeyRing,
    ) -> Result<AttributeMap, DisclosureError>;
}
