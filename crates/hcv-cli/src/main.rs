//! # hcv CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Logs go to stderr so stdout carries only command output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hcv_cli::classify::{run_classify, ClassifyArgs};
use hcv_cli::rules::{run_rules, RulesArgs};
use hcv_cli::verify::{run_verify, VerifyArgs};
use hcv_cli::EXIT_COMMAND_FAILED;

/// Health certificate verifier.
///
/// Verifies domestic disclosure proofs and international health
/// certificates against a local policy and key configuration.
#[derive(Parser, Debug)]
#[command(name = "hcv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to the verifier configuration (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify a scanned payload and print the result as JSON.
    Verify(VerifyArgs),

    /// Print which credential family a payload belongs to.
    Classify(ClassifyArgs),

    /// Print the effective international business rules.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Verify(args) => run_verify(args, config),
        Commands::Classify(args) => run_classify(args),
        Commands::Rules(args) => run_rules(args, config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_COMMAND_FAILED)
        }
    }
}
