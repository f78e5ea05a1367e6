//! # hcv-crypto: Cryptographic Primitives
//!
//! The signature layer beneath both credential families:
//!
//! - **Ed25519** issuer keys and signatures over `CanonicalBytes`.
//! - **Key identifiers** derived as the first 8 bytes of SHA-256 over the
//!   public key, the same truncation health certificates use for `kid`.
//! - **Issuer key rings** mapping key identifiers to trusted public keys.
//!
//! ## Crate Policy
//!
//! - Depends only on `hcv-core` internally.
//! - Private keys are never serialized or logged.
//! - Tests use real Ed25519; nothing here is mocked.

pub mod ed25519;
pub mod error;
pub mod keyring;

pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use error::CryptoError;
pub use keyring::IssuerKeyRing;
