//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out a small header family in a
//! temporary directory, plus helpers to run the `amalgamate` binary in it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_config(configs::ACME)
//!         .with_header("lib_a.h", &["<vector>"], "A;");
//!     fixture.command().arg("build").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// A `lib` family wrapped in `namespace acme { namespace lib {`,
    /// merged into `single/lib.h`.
    pub const ACME: &str = r##"
prefix: lib
output: single/lib.h
preamble: "#pragma once\n"
namespace:
  outer: acme
  inner: lib
"##;

    /// Same family, merged next to its sources.
    pub const ACME_IN_PLACE: &str = r##"
prefix: lib
output: lib_all.h
preamble: "#pragma once\n"
namespace:
  outer: acme
  inner: lib
"##;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "prefix: [unclosed";

    /// A misspelled key.
    pub const UNKNOWN_KEY: &str = "prefx: lib\n";
}

/// A temporary directory holding headers and an optional config file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.amalgamate.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".amalgamate.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a header wrapped in `namespace acme { namespace lib {`.
    ///
    /// `includes` are written verbatim after `#include `, so quote sibling
    /// headers (`"\"lib_b.h\""`) and bracket system ones (`"<vector>"`).
    pub fn with_header(self, name: &str, includes: &[&str], body: &str) -> Self {
        let mut text = String::from("#pragma once\n");
        for include in includes {
            text.push_str(&format!("#include {}\n", include));
        }
        text.push_str(&format!(
            "\nnamespace acme {{\n\tnamespace lib {{\n{}\n\t}}\n}}\n",
            body
        ));
        self.with_file(name, &text)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file from the fixture, relative to its root.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join(".amalgamate.yaml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("amalgamate");
        cmd.current_dir(self.path())
            .env_remove("AMALGAMATE_CONFIG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_header() {
        let fixture = TestFixture::new().with_header("lib_a.h", &["<vector>"], "A;");
        let text = fixture.read("lib_a.h");
        assert!(text.contains("#include <vector>\n"));
        assert!(text.contains("namespace acme {"));
    }

    #[test]
    fn test_configs_parse() {
        for config in [configs::ACME, configs::ACME_IN_PLACE] {
            amalgamate::config::parse(config).expect("Config should parse");
        }
        assert!(amalgamate::config::parse(configs::INVALID_YAML).is_err());
        assert!(amalgamate::config::parse(configs::UNKNOWN_KEY).is_err());
    }
}
