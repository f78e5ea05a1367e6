//! # Verify
//!
//! `hcv verify` runs one payload through the verifier and prints the
//! [`VerificationResult`] as JSON on stdout. The exit code mirrors the
//! result status so scripts can branch without parsing the output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use hcv_core::Timestamp;
use hcv_verifier::{VerificationResult, VerificationStatus, Verifier, VerifierConfig};

/// Arguments for `hcv verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Scanned payload text, prefix included.
    #[arg(long, conflicts_with = "payload_file", required_unless_present = "payload_file")]
    pub payload: Option<String>,

    /// File holding the scanned payload. Surrounding whitespace is ignored.
    #[arg(long)]
    pub payload_file: Option<PathBuf>,

    /// Verification time as RFC 3339 (any offset). Defaults to now.
    #[arg(long)]
    pub now: Option<String>,

    /// Print compact single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Exit code for a verification status.
pub fn exit_code(status: VerificationStatus) -> u8 {
    match status {
        VerificationStatus::Success => 0,
        VerificationStatus::FailedError => 1,
        VerificationStatus::FailedUnrecognizedPrefix => 2,
    }
}

fn read_payload(args: &VerifyArgs) -> Result<Vec<u8>> {
    let raw = match (&args.payload, &args.payload_file) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(path)) => std::fs::read(path)
            .with_context(|| format!("failed to read payload from {}", path.display()))?,
        (None, None) => anyhow::bail!("one of --payload or --payload-file is required"),
    };
    let start = raw.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(raw.len());
    let end = raw.iter().rposition(|b| !b.is_ascii_whitespace()).map_or(start, |i| i + 1);
    Ok(raw[start..end].to_vec())
}

fn verification_time(now: Option<&str>) -> Result<Timestamp> {
    match now {
        Some(s) => Timestamp::parse_lenient(s).with_context(|| format!("invalid --now value {s:?}")),
        None => Ok(Timestamp::now()),
    }
}

/// Verify the payload named by `args` against `config`.
pub fn verify(args: &VerifyArgs, config: VerifierConfig) -> Result<VerificationResult> {
    let payload = read_payload(args)?;
    let now = verification_time(args.now.as_deref())?;
    tracing::debug!(now = %now, "verifying payload");
    Ok(Verifier::new(config).verify(&payload, now))
}

pub fn run_verify(args: &VerifyArgs, config: Option<&Path>) -> Result<u8> {
    let config = crate::load_config(config)?;
    let result = verify(args, config)?;

    let rendered = if args.compact {
        serde_json::to_string(&result)
    } else {
        serde_json::to_string_pretty(&result)
    }
    .context("failed to render verification result")?;
    println!("{rendered}");

    Ok(exit_code(result.status()))
}
