//! # Mock Disclosure System
//!
//! A transparent stand-in for the anonymous-credential proof system.
//!
//! ## How It Works
//!
//! - [`MockIssuer::issue()`] adds the credential version marker to the
//!   supplied attributes and signs the canonical form of
//!   `{ "issuerPkId", "attributes" }` with the issuer's Ed25519 key.
//! - [`MockIssuer::disclose()`] renders the credential as
//!   `NL2:` followed by its JSON encoding.
//! - [`MockDisclosureSystem::verify_disclosure()`] strips the prefix,
//!   resolves `issuerPkId` in the trusted key ring, recomputes the
//!   canonical signing input, and checks the signature.
//!
//! ## Security Warning
//!
//! **NOT PRIVATE.** All attributes are disclosed in the clear and the same
//! signature appears in every presentation of a credential.

use hcv_core::CanonicalBytes;
use hcv_crypto::{Ed25519KeyPair, Ed25519Signature, IssuerKeyRing};
use serde::{Deserialize, Serialize};

use crate::traits::{AttributeMap, DisclosureError, DisclosureVerifier};
use crate::{CREDENTIAL_VERSION_ATTRIBUTE, DOMESTIC_CREDENTIAL_VERSION, DOMESTIC_PREFIX};

/// A signed domestic credential as held by the holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MockCredential {
    /// Key id of the issuer key that signed the attributes.
    pub issuer_pk_id: String,
    /// Signed attributes, including the version marker.
    pub attributes: AttributeMap,
    /// Ed25519 signature over the canonical signing input.
    pub proof: Ed25519Signature,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SigningInput<'a> {
    issuer_pk_id: &'a str,
    attributes: &'a AttributeMap,
}

fn signing_input(issuer_pk_id: &str, attributes: &AttributeMap) -> Result<CanonicalBytes, DisclosureError> {
    CanonicalBytes::new(&SigningInput {
        issuer_pk_id,
        attributes,
    })
    .map_err(|e| DisclosureError::Malformed(format!("cannot canonicalize attributes: {e}")))
}

/// Issues mock domestic credentials. Test and fixture use only.
#[derive(Debug)]
pub struct MockIssuer {
    key_pair: Ed25519KeyPair,
    issuer_pk_id: String,
}

impl MockIssuer {
    /// Issuer whose key id is derived from the public key.
    pub fn new(key_pair: Ed25519KeyPair) -> Self {
        let issuer_pk_id = key_pair.public_key().key_id();
        Self { key_pair, issuer_pk_id }
    }

    /// Issuer registered under an explicit key id (e.g. `"testPk"`).
    pub fn with_key_id(key_pair: Ed25519KeyPair, issuer_pk_id: impl Into<String>) -> Self {
        Self {
            key_pair,
            issuer_pk_id: issuer_pk_id.into(),
        }
    }

    /// The key id this issuer signs under.
    pub fn issuer_pk_id(&self) -> &str {
        &self.issuer_pk_id
    }

    /// A key ring trusting exactly this issuer.
    pub fn key_ring(&self) -> IssuerKeyRing {
        let mut ring = IssuerKeyRing::new();
        ring.insert_with_id(self.issuer_pk_id.clone(), self.key_pair.public_key());
        ring
    }

    /// Sign `attributes` into a credential, adding the version marker.
    pub fn issue(&self, attributes: &AttributeMap) -> Result<MockCredential, DisclosureError> {
        let mut attributes = attributes.clone();
        attributes.insert(
            CREDENTIAL_VERSION_ATTRIBUTE.to_string(),
            DOMESTIC_CREDENTIAL_VERSION.to_string(),
        );
        let input = signing_input(&self.issuer_pk_id, &attributes)?;
        Ok(MockCredential {
            issuer_pk_id: self.issuer_pk_id.clone(),
            proof: self.key_pair.sign(&input),
            attributes,
        })
    }

    /// The attributes of a held credential, version marker included.
    pub fn read_credential(credential: &MockCredential) -> AttributeMap {
        credential.attributes.clone()
    }

    /// Render a held credential as a scannable `NL2:` payload.
    pub fn disclose(credential: &MockCredential) -> Result<Vec<u8>, DisclosureError> {
        let body = serde_json::to_vec(credential)
            .map_err(|e| DisclosureError::Malformed(format!("cannot encode credential: {e}")))?;
        let mut payload = DOMESTIC_PREFIX.to_vec();
        payload.extend_from_slice(&body);
        Ok(payload)
    }
}

/// Verifies mock disclosures. Stateless; trust comes from the key ring.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDisclosureSystem;

impl DisclosureVerifier for MockDisclosureSystem {
    fn verify_disclosure(
        &self,
        payload: &[u8],
        issuer_keys: &IssuerKeyRing,
    ) -> Result<AttributeMap, DisclosureError> {
        let body = payload
            .strip_prefix(DOMESTIC_PREFIX)
            .ok_or_else(|| DisclosureError::Malformed("missing NL2: prefix".to_string()))?;

        let credential: MockCredential = serde_json::from_slice(body)
            .map_err(|e| DisclosureError::Malformed(format!("cannot decode disclosure: {e}")))?;

        let key = issuer_keys
            .get(&credential.issuer_pk_id)
            .map_err(|e| DisclosureError::UntrustedIssuer(e.to_string()))?;

        let input = signing_input(&credential.issuer_pk_id, &credential.attributes)?;
        key.verify(&input, &credential.proof)
            .map_err(|e| DisclosureError::InvalidProof(e.to_string()))?;

        Ok(credential.attributes)
    }
}
