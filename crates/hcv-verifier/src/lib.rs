//! # hcv-verifier: Health Certificate Verification Engine
//!
//! Turns a scanned payload into a minimal, privacy-preserving verification
//! result. Cryptography is delegated to the collaborators in `hcv-zkp`
//! (disclosure proofs) and `hcv-vc` (certificate signatures); this crate
//! owns the semantic and policy decisions.
//!
//! ## Pipeline
//!
//! ```text
//! payload ──► Dispatcher ──┬─► Domestic path ──────────────┐
//!                          │   (disclosure proof, window)   ├─► Normalizer ─► VerificationResult
//!                          └─► International path ─────────┘
//!                              (signature, metadata, rules)
//! ```
//!
//! - **Configuration** (`config.rs`): [`VerifierConfig`] and
//!   [`EuropeanVerificationRules`], loaded once and read-only afterwards.
//! - **Dispatcher** (`dispatch.rs`): [`Verifier`], the single entry point.
//! - **Domestic path** (`domestic.rs`): disclosure verification and the
//!   issuer-defined validity window.
//! - **International path** (`european.rs`): certificate metadata and DCC
//!   validation; per-statement business rules live in `rules.rs`.
//! - **Normalizer** (`details.rs`): [`VerificationDetails`].
//!
//! ## Concurrency
//!
//! A [`Verifier`] is `Send + Sync` and holds its configuration behind an
//! `Arc`. Verification calls share nothing mutable and may run on any
//! number of threads at once.

pub mod config;
pub mod details;
pub mod dispatch;
pub mod domestic;
pub mod error;
pub mod european;
pub mod result;
pub mod rules;

pub use config::{ConfigError, EuropeanVerificationRules, VerifierConfig};
pub use details::{VerificationDetails, DOB_EMPTY_VALUE};
pub use dispatch::{CredentialKind, Dispatched, Verifier, LOCAL_ISSUER_MESSAGE};
pub use domestic::DomesticError;
pub use error::VerifyError;
pub use european::{DccError, EuropeanError, HcertError};
pub use result::{UnknownStatusCode, VerificationResult, VerificationStatus};
pub use rules::StatementError;

#[cfg(test)]
pub(crate) mod testing;
