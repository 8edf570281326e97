//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `amalgamate` command-line tool, one file per command.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct defining the command-specific options, derived with `clap`.
//! - An `execute` function that loads the configuration and calls into the
//!   `amalgamate` library.
//!
//! The options selecting which headers to merge are shared through
//! [`SourceArgs`].

pub mod build;
pub mod check;
pub mod completions;
pub mod order;
pub mod tree;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use amalgamate::config::{self, Config, Overrides};

use crate::cli::GlobalArgs;

/// Options selecting the header family, overriding the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory containing the headers
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Glob pattern selecting the headers (defaults to '<prefix>*.h')
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// File name prefix shared by the sibling headers
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Path of the merged header (relative paths are resolved against --dir)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the configuration and apply these overrides on top of it.
    pub fn load_config(&self, global: &GlobalArgs) -> Result<Config> {
        let mut config = config::load(global.config.as_deref())?;
        config.apply_overrides(Overrides {
            directory: self.directory.clone(),
            pattern: self.pattern.clone(),
            prefix: self.prefix.clone(),
            output: self.output.clone(),
        });
        config.validate()?;
        Ok(config)
    }
}
