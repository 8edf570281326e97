//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// Amalgamate - Merge mutually-including C++ headers into a single header
///
/// Without a subcommand, `build` runs with the configured defaults.
#[derive(Parser, Debug)]
#[command(name = "amalgamate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file (defaults to .amalgamate.yaml when present)
    #[arg(long, global = true, value_name = "FILE", env = "AMALGAMATE_CONFIG")]
    config: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge the headers and write the single header
    Build(commands::build::BuildArgs),

    /// Print the emission order, one header per line
    Order(commands::order::OrderArgs),

    /// Display the headers as a dependency tree
    Tree(commands::tree::TreeArgs),

    /// Verify that the single header is up to date
    Check(commands::check::CheckArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub color: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;

        let global = GlobalArgs {
            config: self.config,
            color: self.color,
        };

        match self.command {
            None => commands::build::execute(commands::build::BuildArgs::default(), &global),
            Some(Commands::Build(args)) => commands::build::execute(args, &global),
            Some(Commands::Order(args)) => commands::order::execute(args, &global),
            Some(Commands::Tree(args)) => commands::tree::execute(args, &global),
            Some(Commands::Check(args)) => commands::check::execute(args, &global),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("Invalid log level '{}'", level))?;

    // A second initialisation (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_target(false)
        .format_timestamp(None)
        .try_init();
    Ok(())
}
