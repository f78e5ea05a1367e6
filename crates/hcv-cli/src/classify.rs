//! # Classify
//!
//! `hcv classify <PAYLOAD>` prints `domestic`, `international` or
//! `unrecognized` for a payload, judged by its prefix alone. Nothing is
//! verified.

use anyhow::Result;
use clap::Args;

use hcv_verifier::CredentialKind;

/// Arguments for `hcv classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Scanned payload text.
    pub payload: String,
}

/// Label for a payload's credential family.
pub fn classify(payload: &str) -> &'static str {
    CredentialKind::classify(payload.trim().as_bytes())
        .map(CredentialKind::as_str)
        .unwrap_or("unrecognized")
}

pub fn run_classify(args: &ClassifyArgs) -> Result<u8> {
    println!("{}", classify(&args.payload));
    Ok(0)
}
