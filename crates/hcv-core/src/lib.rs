//! # hcv-core: Foundational Types for the Health Certificate Verifier
//!
//! Defines the primitives every other crate in the workspace builds on.
//! Depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **UTC-only timestamps.** [`Timestamp`] is seconds-precision UTC. Every
//!    temporal validity check (credential windows, certificate expiry,
//!    statement delays) is expressed in terms of it, and "now" is always an
//!    explicit argument so verification stays deterministic.
//!
//! 2. **Newtype wrappers for domain primitives.** [`CountryCode`] is validated
//!    at construction and on deserialization. No bare strings for issuers.
//!
//! 3. **`CanonicalBytes` newtype.** Every signing input (disclosed attribute
//!    sets, certificate envelopes) flows through `CanonicalBytes::new()`, so
//!    issuer and verifier agree byte-for-byte on what was signed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hcv-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod identity;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use error::{CanonicalizationError, ValidationError};
pub use identity::CountryCode;
pub use temporal::Timestamp;
