//! # hcv-zkp: Disclosure Proofs for Domestic Credentials
//!
//! Domestic credentials are anonymous credentials: the holder presents a
//! disclosure proof revealing a chosen subset of attributes. Creating and
//! mathematically verifying those proofs belongs to an external proof
//! system; this crate defines the seam the verifier calls through.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): [`DisclosureVerifier`] takes the scanned
//!   payload and the trusted issuer keys, and returns the disclosed
//!   [`AttributeMap`] or a [`DisclosureError`].
//!
//! - **Mock** (`mock.rs`, feature `mock`): [`MockDisclosureSystem`] and
//!   [`MockIssuer`] stand in for the real proof system during development.
//!   Attribute sets are Ed25519-signed and sent in the clear.
//!
//! ## Security Notice
//!
//! The mock provides NO zero-knowledge property: every attribute travels in
//! plain text and the signature links presentations together. It exists so
//! the verification pipeline can be exercised end to end.

#[cfg(feature = "mock")]
pub mod mock;
pub mod traits;

#[cfg(feature = "mock")]
pub use mock::{MockCredential, MockDisclosureSystem, MockIssuer};
pub use traits::{AttributeMap, DisclosureError, DisclosureVerifier};

/// Prefix identifying a domestic disclosure payload.
pub const DOMESTIC_PREFIX: &[u8] = b"NL2:";

/// Attribute carrying the credential version marker.
pub const CREDENTIAL_VERSION_ATTRIBUTE: &str = "credentialVersion";

/// Version marker of the current domestic credential format.
pub const DOMESTIC_CREDENTIAL_VERSION: &str = "2";
