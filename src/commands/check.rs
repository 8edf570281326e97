//! # Check Command Implementation
//!
//! Regenerates the merged header in memory and compares it with the file on
//! disk. Exits with an error when the file is missing or differs, which makes
//! it suitable for CI jobs guarding a committed single header.
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;

use amalgamate::output::Reporter;
use amalgamate::phases::orchestrator;

use super::SourceArgs;
use crate::cli::GlobalArgs;

/// Verify that the merged header is up to date
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Suppress the success message
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs, global: &GlobalArgs) -> Result<()> {
    let config = args.source.load_config(global)?;
    let amalgamation = orchestrator::amalgamate(&config, &Reporter::silent())?;
    let output = &amalgamation.output;

    let existing = match fs::read_to_string(output) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!(
                "{} does not exist; run `amalgamate build` to create it",
                output.display()
            )
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", output.display()));
        }
    };

    if existing != amalgamation.text {
        bail!(
            "{} is out of date; run `amalgamate build` to regenerate it",
            output.display()
        );
    }

    let reporter = Reporter::new(&global.color, args.quiet);
    reporter.line(&up_to_date_line(&reporter, output, amalgamation.order.len()));
    Ok(())
}

fn up_to_date_line(reporter: &Reporter, output: &Path, headers: usize) -> String {
    format!(
        "{} {} is up to date ({} headers)",
        reporter.emoji("✅", "[OK]"),
        output.display(),
        headers
    )
}
