//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.amalgamate.yaml` configuration file and the logic for loading it.
//!
//! ## Key Components
//!
//! - **`Config`**: where the headers live, which of them belong to the family,
//!   where the merged header goes and which boilerplate surrounds it.
//!
//! - **`NamespaceConfig`**: the two nested namespaces that wrap the mergeable
//!   body of every header.
//!
//! - **`Overrides`**: values supplied on the command line, applied on top of
//!   whatever the file provided.
//!
//! Every key is optional. An absent or empty file yields `Config::default()`,
//! which reproduces the original `af_xloper` build.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

const VALID_KEYS_HINT: &str =
    "Valid keys are: directory, prefix, pattern, output, preamble, namespace (outer, inner)";

/// The namespace wrapper around each header's body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamespaceConfig {
    /// Outer namespace name, e.g. `autotelica`
    pub outer: String,
    /// Inner namespace name, e.g. `xloper`
    pub inner: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            outer: defaults::NAMESPACE_OUTER.to_string(),
            inner: defaults::NAMESPACE_INNER.to_string(),
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory scanned for headers.
    pub directory: PathBuf,
    /// File name prefix identifying sibling headers.
    pub prefix: String,
    /// Glob pattern for candidate headers. Defaults to `<prefix>*.h`.
    pub pattern: Option<String>,
    /// Target file. Relative paths are resolved against `directory`.
    pub output: PathBuf,
    /// Text emitted before the foreign includes.
    pub preamble: String,
    /// Namespace wrapper marker.
    pub namespace: NamespaceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: defaults::PREFIX.to_string(),
            pattern: None,
            output: PathBuf::from(defaults::OUTPUT),
            preamble: defaults::PREAMBLE.to_string(),
            namespace: NamespaceConfig::default(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub directory: Option<PathBuf>,
    pub pattern: Option<String>,
    pub prefix: Option<String>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// The effective glob pattern.
    pub fn pattern(&self) -> String {
        self.pattern
            .clone()
            .unwrap_or_else(|| defaults::pattern_for_prefix(&self.prefix))
    }

    /// The effective output path.
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.directory.join(&self.output)
        }
    }

    /// Apply command-line overrides in place.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(directory) = overrides.directory {
            self.directory = directory;
        }
        if let Some(pattern) = overrides.pattern {
            self.pattern = Some(pattern);
        }
        if let Some(prefix) = overrides.prefix {
            self.prefix = prefix;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
    }

    /// Reject values that would make every match meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::ConfigParse {
                message: "prefix must not be empty".to_string(),
                hint: Some("Set 'prefix:' to the file name prefix shared by the headers".to_string()),
            });
        }
        if self.pattern.as_deref().is_some_and(str::is_empty) {
            return Err(Error::ConfigParse {
                message: "pattern must not be empty".to_string(),
                hint: Some("Remove 'pattern:' to use '<prefix>*.h'".to_string()),
            });
        }
        if self.namespace.outer.trim().is_empty() || self.namespace.inner.trim().is_empty() {
            return Err(Error::ConfigParse {
                message: "namespace names must not be empty".to_string(),
                hint: Some("Set both 'namespace.outer' and 'namespace.inner'".to_string()),
            });
        }
        Ok(())
    }
}

/// Parse a YAML string into a `Config`
///
/// An empty document (or one holding only comments) yields the defaults.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content).map_err(Error::Yaml)?;
    if value.is_null() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_value(value).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(VALID_KEYS_HINT.to_string()),
    })?;
    config.validate()?;
    Ok(config)
}

/// Load a configuration file
///
/// A relative `directory` is interpreted relative to the file's location.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut config = parse(&content)?;

    if config.directory.is_relative() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.directory = parent.join(&config.directory);
        }
    }
    Ok(config)
}

/// Load the configuration for a run
///
/// An explicit path must exist. Without one, `.amalgamate.yaml` in the
/// current directory is used when present, otherwise the defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => from_file(path),
        None => {
            let default_path = Path::new(defaults::CONFIG_FILE);
            if default_path.is_file() {
                log::debug!("Using configuration file {}", default_path.display());
                from_file(default_path)
            } else {
                log::debug!("No {} found, using defaults", defaults::CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}
