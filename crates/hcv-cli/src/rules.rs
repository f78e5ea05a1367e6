//! # Rules
//!
//! `hcv rules --config <FILE>` prints the validated international business
//! rules as YAML, in the same shape the config file uses.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use hcv_verifier::EuropeanVerificationRules;

/// Arguments for `hcv rules`.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Print JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

pub fn render_rules(rules: &EuropeanVerificationRules, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(rules).context("failed to render rules as JSON")
    } else {
        serde_yaml::to_string(rules).context("failed to render rules as YAML")
    }
}

pub fn run_rules(args: &RulesArgs, config: Option<&Path>) -> Result<u8> {
    let config = crate::load_config(config)?;
    print!("{}", render_rules(&config.european_rules, args.json)?);
    if args.json {
        println!();
    }
    Ok(0)
}
