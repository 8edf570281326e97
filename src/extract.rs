//! # Header Extraction
//!
//! Lightweight textual matching over a header's source. This is not a C++
//! parser: three regular expressions pick out what the merge needs.
//!
//! - **Sibling includes**: `#include "<prefix>..."` lines. Their targets
//!   become the header's parents in the dependency graph.
//! - **Foreign includes**: any other `#include ` line not mentioning the
//!   prefix. These are hoisted to the top of the merged header.
//! - **Body**: the text inside `namespace <outer> { namespace <inner> {` and
//!   the last pair of closing braces.
//!
//! The rules sit behind the [`Extractor`] trait so the graph and ordering
//! code never depend on how headers are matched.

use regex::Regex;

use crate::config::Config;
use crate::error::Result;

/// What one header contributes to the merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Sibling include targets in source order, duplicates kept
    pub parents: Vec<String>,
    /// Trimmed non-sibling include lines in source order, duplicates removed
    pub foreign_includes: Vec<String>,
    /// Text inside the namespace wrapper, empty when there is none
    pub content: String,
}

impl Extraction {
    /// Whether the header had a namespace wrapper with anything inside.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

/// Splits a header's text into parents, foreign includes and body
pub trait Extractor {
    fn extract(&self, text: &str) -> Extraction;
}

/// Regex-based extractor for one header family
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    prefix: String,
    sibling_include: Regex,
    any_include: Regex,
    content: Regex,
}

impl PatternExtractor {
    /// Compile the matching rules for a prefix and namespace pair.
    pub fn new(prefix: &str, outer: &str, inner: &str) -> Result<Self> {
        let sibling_include = Regex::new(&format!(
            r#"#include "({}[^"]*)""#,
            regex::escape(prefix)
        ))?;
        let any_include = Regex::new(r"(?m)^[ \t]*(#include [^\r\n]*)")?;
        let content = Regex::new(&format!(
            r"namespace\s+{}\s*\{{\s*namespace\s+{}\s*\{{(\s*[\s\S]*)\}}\s*\}}",
            regex::escape(outer.trim()),
            regex::escape(inner.trim())
        ))?;

        Ok(Self {
            prefix: prefix.to_string(),
            sibling_include,
            any_include,
            content,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.prefix,
            &config.namespace.outer,
            &config.namespace.inner,
        )
    }

    fn parents(&self, text: &str) -> Vec<String> {
        self.sibling_include
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    fn foreign_includes(&self, text: &str) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        for caps in self.any_include.captures_iter(text) {
            let line = caps[1].trim();
            if line.contains(self.prefix.as_str()) {
                continue;
            }
            if !lines.iter().any(|seen| seen == line) {
                lines.push(line.to_string());
            }
        }
        lines
    }

    fn content(&self, text: &str) -> String {
        self.content
            .captures(text)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default()
    }
}

impl Extractor for PatternExtractor {
    fn extract(&self, text: &str) -> Extraction {
        Extraction {
            parents: self.parents(text),
            foreign_includes: self.foreign_includes(text),
            content: self.content(text),
        }
    }
}
