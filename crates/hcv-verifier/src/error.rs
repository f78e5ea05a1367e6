//! # Verification Errors
//!
//! [`VerifyError`] is what a failed verification carries before it is
//! folded into a [`VerificationResult`](crate::VerificationResult). Each
//! path prefixes its own failures so the final message tells the operator
//! which credential family was rejected and at which stage.
//!
//! ## Privacy Invariant
//!
//! No variant in this tree formats a name, a full date of birth or a raw
//! payload into its message.

use thiserror::Error;

use crate::domestic::DomesticError;
use crate::european::EuropeanError;

/// Failure to verify a recognized payload.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("could not verify domestic credential: {0}")]
    Domestic(#[from] DomesticError),

    #[error("could not verify international certificate: {0}")]
    European(#[from] EuropeanError),
}
