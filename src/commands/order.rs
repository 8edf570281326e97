//! # Order Command Implementation
//!
//! Prints the emission order of the headers, one file name per line, without
//! writing anything. Useful for scripting and for inspecting why a body lands
//! where it does in the merged header.

use anyhow::Result;
use clap::Args;

use amalgamate::output::Reporter;
use amalgamate::phases::orchestrator;

use super::SourceArgs;
use crate::cli::GlobalArgs;

/// Print the emission order
#[derive(Args, Debug, Default)]
pub struct OrderArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the `order` command.
pub fn execute(args: OrderArgs, global: &GlobalArgs) -> Result<()> {
    let config = args.source.load_config(global)?;
    let amalgamation = orchestrator::amalgamate(&config, &Reporter::silent())?;

    for filename in amalgamation.order.iter() {
        println!("{}", filename);
    }
    Ok(())
}
