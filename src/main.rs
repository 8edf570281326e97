//! # Amalgamate CLI
//!
//! This is the binary entry point for the `amalgamate` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the appropriate command based on the parsed arguments.
//!
//! The merge itself lives in the `amalgamate` library crate, so the binary
//! is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
