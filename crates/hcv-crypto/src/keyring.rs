//! # Issuer Key Rings
//!
//! A read-only map from key identifier to trusted public key. One ring is
//! loaded per credential family at initialization and shared by every
//! verification call afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ed25519::Ed25519PublicKey;
use crate::error::CryptoError;

/// Trusted issuer public keys indexed by key identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuerKeyRing {
    keys: BTreeMap<String, Ed25519PublicKey>,
}

impl IssuerKeyRing {
    /// An empty ring; every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` under its derived key identifier, returning the id.
    pub fn insert(&mut self, key: Ed25519PublicKey) -> String {
        let kid = key.key_id();
        self.keys.insert(kid.clone(), key);
        kid
    }

    /// Register `key` under an explicit identifier.
    pub fn insert_with_id(&mut self, kid: impl Into<String>, key: Ed25519PublicKey) {
        self.keys.insert(kid.into(), key);
    }

    /// Look up a trusted key.
    ///
    /// # Errors
    ///
    /// [`CryptoError::UnknownKeyId`] when no key is registered under `kid`.
    pub fn get(&self, kid: &str) -> Result<&Ed25519PublicKey, CryptoError> {
        self.keys
            .get(kid)
            .ok_or_else(|| CryptoError::UnknownKeyId(kid.to_string()))
    }

    /// Number of trusted keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the ring holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over `(kid, key)` pairs in key-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ed25519PublicKey)> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<Ed25519PublicKey> for IssuerKeyRing {
    fn from_iter<I: IntoIterator<Item = Ed25519PublicKey>>(iter: I) -> Self {
        let mut ring = Self::new();
        for key in iter {
            ring.insert(key);
        }
        ring
    }
}
