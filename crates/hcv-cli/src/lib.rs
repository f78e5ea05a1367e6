//! # hcv-cli: Health Certificate Verifier CLI
//!
//! Provides the `hcv` command-line interface around `hcv-verifier`.
//!
//! ## Subcommands
//!
//! - `hcv verify`: Verify one scanned payload and print the result as JSON.
//! - `hcv classify`: Report which credential family a payload belongs to.
//! - `hcv rules`: Print the effective international business rules.
//!
//! ```bash
//! hcv verify --config verifier.yaml --payload-file scan.txt
//! hcv verify --config verifier.yaml --payload 'NL2:...' --now 2021-07-01T12:00:00Z
//! hcv classify 'HC1:...'
//! hcv rules --config verifier.yaml
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | `SUCCESS`                                 |
//! | 1    | `FAILED_ERROR`                            |
//! | 2    | `FAILED_UNRECOGNIZED_PREFIX`              |
//! | 3    | The command itself failed (config, I/O)   |

pub mod classify;
pub mod rules;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use hcv_verifier::VerifierConfig;

/// Exit code for a command that could not run to completion.
pub const EXIT_COMMAND_FAILED: u8 = 3;

/// Load the verifier configuration named by `--config`.
pub fn load_config(path: Option<&Path>) -> Result<VerifierConfig> {
    let path = path.context("--config <FILE> is required for this command")?;
    VerifierConfig::load(path).with_context(|| format!("failed to load verifier config from {}", path.display()))
}
