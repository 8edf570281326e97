//! # Error Handling
//!
//! This module defines the centralized error type for the `amalgamate`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers every way a run can fail, each variant carrying enough context
//! (usually a file name) to locate the offending header.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum covering configuration, scanning, reading,
//!   dependency resolution and writing failures.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! No error is recoverable: any of them aborts the whole run before the
//! output file is opened.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for amalgamation runs
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.amalgamate.yaml` configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A header could not be read, or the output could not be written.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A header was re-entered while its own dependencies were still being
    /// visited.
    #[error("Circular dependency detected at {file}: {cycle}")]
    CycleDetected {
        /// The header at which the cycle closed
        file: String,
        /// The include chain, e.g. `a.h -> b.h -> a.h`
        cycle: String,
    },

    /// Nothing in the directory matched the header pattern.
    #[error("No headers matching '{pattern}' found in '{}'", .directory.display())]
    NoHeaders { directory: PathBuf, pattern: String },

    /// A sibling include names a header that is not part of the scanned set.
    #[error("Unresolved dependency: {file} includes \"{include}\", which was not found among the scanned headers")]
    UnresolvedDependency { file: String, include: String },

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An entry matched by the glob pattern could not be inspected.
    #[error("Glob iteration error: {0}")]
    GlobIteration(#[from] glob::GlobError),
}

impl Error {
    /// Wrap an `std::io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
