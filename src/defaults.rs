//! Default values for amalgamate configuration.
//!
//! This module provides centralized default values used by the config layer
//! and the CLI. Together they reproduce the `af_xloper` single-header build
//! when the tool is run without a config file from the header directory.

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".amalgamate.yaml";

/// File name prefix shared by every header of the family.
pub const PREFIX: &str = "af_xloper";

/// Where the merged header is written, relative to the scanned directory.
pub const OUTPUT: &str = "../af_xloper_single_header/af_xloper.h";

/// Boilerplate emitted before the foreign includes.
pub const PREAMBLE: &str = "\n#pragma once\n#define WIN32_LEAN_AND_MEAN   \n\n";

/// Outer namespace of the wrapper marker.
pub const NAMESPACE_OUTER: &str = "autotelica";

/// Inner namespace of the wrapper marker.
pub const NAMESPACE_INNER: &str = "xloper";

/// Returns the glob pattern used when none is configured: `<prefix>*.h`.
pub fn pattern_for_prefix(prefix: &str) -> String {
    format!("{}*.h", glob::Pattern::escape(prefix))
}
