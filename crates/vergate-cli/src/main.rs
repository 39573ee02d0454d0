//! vergate - version bump gate
//!
//! Compares the crate version in the working copy against the version on a
//! reference branch and fails unless the working copy carries a strictly
//! greater version. Intended as a gating job on non-default branches.
//!
//! With no arguments it reads `./Cargo.toml` and `main:./Cargo.toml`.
//!
//! ## Exit codes
//!
//! - `0`: candidate version is greater than the reference
//! - `1`: candidate version is equal, older, or not a valid version
//! - `2`: a manifest or git revision could not be read

mod git;
mod report;
mod source;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use vergate_core::{exit_codes, Verdict};

use crate::report::GateReport;
use crate::source::{read_candidate, read_reference, ReferenceSource};

#[derive(Parser)]
#[command(name = "vergate")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Fail unless the crate version is bumped past the reference branch",
    long_about = None
)]
struct Cli {
    /// Manifest holding the candidate version
    #[arg(long, env = "VERGATE_MANIFEST", default_value = "Cargo.toml")]
    manifest: PathBuf,

    /// Git revision holding the reference version of the same manifest
    #[arg(long, env = "VERGATE_BASE_REF", default_value = "main")]
    base_ref: String,

    /// Read the reference version from this manifest instead of git
    /// (takes precedence over --base-ref)
    #[arg(long, env = "VERGATE_REFERENCE_MANIFEST")]
    reference_manifest: Option<PathBuf>,

    /// Print the decision as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn reference_source(&self) -> ReferenceSource {
        match &self.reference_manifest {
            Some(path) => ReferenceSource::File(path.clone()),
            None => ReferenceSource::GitRevision {
                rev: self.base_ref.clone(),
                manifest: self.manifest.clone(),
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    vergate_core::init_tracing(cli.log_json, level);

    match run(&cli) {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_codes::INPUT_ERROR)
        }
    }
}

/// Read both versions, decide, report. Errors are input errors only; a
/// failing gate is a successful run.
fn run(cli: &Cli) -> Result<Verdict> {
    let candidate =
        read_candidate(&cli.manifest).context("could not determine candidate version")?;
    let reference = read_reference(&cli.reference_source())
        .context("could not determine reference version")?;
    debug!(candidate = %candidate.origin, reference = %reference.origin, "versions loaded");

    let decision = vergate_core::decide(&candidate.version, &reference.version);
    let report = GateReport::new(&candidate, &reference, &decision);

    let mut stdout = io::stdout().lock();
    if cli.json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_text(&mut stdout)?;
    }

    Ok(decision.verdict)
}
