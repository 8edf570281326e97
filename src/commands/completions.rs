//! # Completions Command Implementation
//!
//! Prints a completion script for the `amalgamate` command tree. The script
//! covers every subcommand and the shared `--dir`/`--prefix`/`--output` flags.
//!
//! ```bash
//! amalgamate completions bash > ~/.local/share/bash-completion/completions/amalgamate
//! amalgamate completions zsh > ~/.zfunc/_amalgamate
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

const BIN_NAME: &str = "amalgamate";

/// Print a shell completion script
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout().lock())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
    out.flush()?;
    Ok(())
}
