//! # Certificate Envelope Verification
//!
//! Signature checking of international certificates is performed by an
//! external verifier behind the [`CertificateVerifier`] trait. The rule
//! engine only ever sees a [`HealthCertificate`] that came out of one.
//!
//! ## Ed25519 Reference Envelope
//!
//! [`Ed25519CertificateVerifier`] and [`CertificateSigner`] implement a
//! simple envelope used for development, fixtures and tests:
//!
//! ```text
//! HC1:{"kid":"<key id>","hcert":{...},"signature":"<hex>"}
//! ```
//!
//! The signature covers `CanonicalBytes` of `{"kid", "hcert"}`.

use hcv_core::CanonicalBytes;
use hcv_crypto::{Ed25519KeyPair, Ed25519Signature, IssuerKeyRing};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hcert::HealthCertificate;

/// Prefix identifying an international certificate payload.
pub const INTERNATIONAL_PREFIX: &[u8] = b"HC1:";

/// Failure to verify or decode a certificate envelope.
#[derive(Error, Debug)]
pub enum CertificateError {
    /// The payload could not be decoded.
    #[error("malformed certificate: {0}")]
    Malformed(String),

    /// The signing key is not in the trusted key ring.
    #[error("untrusted certificate issuer: {0}")]
    UntrustedIssuer(String),

    /// The signature does not verify.
    #[error("invalid certificate signature: {0}")]
    InvalidSignature(String),
}

/// Verifies a scanned international payload and decodes its certificate.
pub trait CertificateVerifier: Send + Sync {
    /// Verify `payload` (prefix included) against `trusted_issuers`.
    fn verify_and_decode(
        &self,
        payload: &[u8],
        trusted_issuers: &IssuerKeyRing,
    ) -> Result<HealthCertificate, CertificateError>;
}

/// The signed envelope around a health certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificateEnvelope {
    pub kid: String,
    pub hcert: HealthCertificate,
    pub signature: Ed25519Signature,
}

#[derive(Serialize)]
struct SigningInput<'a> {
    kid: &'a str,
    hcert: &'a HealthCertificate,
}

fn signing_input(kid: &str, hcert: &HealthCertificate) -> Result<CanonicalBytes, CertificateError> {
    CanonicalBytes::new(&SigningInput { kid, hcert })
        .map_err(|e| CertificateError::Malformed(format!("cannot canonicalize certificate: {e}")))
}

/// Produces signed `HC1:` payloads. Fixture and test use.
#[derive(Debug)]
pub struct CertificateSigner {
    key_pair: Ed25519KeyPair,
    kid: String,
}

impl CertificateSigner {
    /// A signer whose key id is derived from its public key.
    pub fn new(key_pair: Ed25519KeyPair) -> Self {
        let kid = key_pair.public_key().key_id();
        Self { key_pair, kid }
    }

    /// Key id placed in every envelope.
    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// A key ring trusting exactly this signer.
    pub fn key_ring(&self) -> IssuerKeyRing {
        let mut ring = IssuerKeyRing::new();
        ring.insert_with_id(self.kid.clone(), self.key_pair.public_key());
        ring
    }

    /// Sign `hcert` and render the scannable payload.
    pub fn sign(&self, hcert: &HealthCertificate) -> Result<Vec<u8>, CertificateError> {
        let input = signing_input(&self.kid, hcert)?;
        let envelope = CertificateEnvelope {
            kid: self.kid.clone(),
            hcert: hcert.clone(),
            signature: self.key_pair.sign(&input),
        };
        let body = serde_json::to_vec(&envelope)
            .map_err(|e| CertificateError::Malformed(format!("cannot encode envelope: {e}")))?;
        let mut payload = INTERNATIONAL_PREFIX.to_vec();
        payload.extend_from_slice(&body);
        Ok(payload)
    }
}

/// Verifies Ed25519 certificate envelopes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519CertificateVerifier;

impl CertificateVerifier for Ed25519CertificateVerifier {
    fn verify_and_decode(
        &self,
        payload: &[u8],
        trusted_issuers: &IssuerKeyRing,
    ) -> Result<HealthCertificate, CertificateError> {
        let body = payload
            .strip_prefix(INTERNATIONAL_PREFIX)
            .ok_or_else(|| CertificateError::Malformed("missing HC1: prefix".to_string()))?;

        let envelope: CertificateEnvelope = serde_json::from_slice(body)
            .map_err(|e| CertificateError::Malformed(format!("cannot decode envelope: {e}")))?;

        let key = trusted_issuers
            .get(&envelope.kid)
            .map_err(|e| CertificateError::UntrustedIssuer(e.to_string()))?;

        let input = signing_input(&envelope.kid, &envelope.hcert)?;
        key.verify(&input, &envelope.signature)
            .map_err(|e| CertificateError::InvalidSignature(e.to_string()))?;

        Ok(envelope.hcert)
    }
}
