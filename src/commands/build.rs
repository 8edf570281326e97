//! Build command implementation
//!
//! The build command runs the whole pipeline:
//! 1. Discovery of the headers
//! 2. Extraction of includes and bodies
//! 3. Ordering, failing on cycles and unresolved includes
//! 4. Rendering of the merged header
//! 5. Writing to the output path
//!
//! With `--dry-run` the merged header is printed to stdout instead of being
//! written, and progress lines are suppressed so stdout holds only the header.

use anyhow::Result;
use clap::Args;

use amalgamate::output::Reporter;
use amalgamate::phases::orchestrator;

use super::SourceArgs;
use crate::cli::GlobalArgs;

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the merged header to stdout instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs, global: &GlobalArgs) -> Result<()> {
    let config = args.source.load_config(global)?;

    if args.dry_run {
        let amalgamation = orchestrator::amalgamate(&config, &Reporter::silent())?;
        print!("{}", amalgamation.text);
        return Ok(());
    }

    let reporter = Reporter::new(&global.color, args.quiet);
    orchestrator::execute(&config, &reporter)?;
    Ok(())
}
