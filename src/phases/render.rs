//! Phase 4: Rendering
//!
//! Builds the merged header text:
//!
//! ```text
//! <preamble>
//! <foreign includes, one per line>
//!
//! namespace <outer> {
//! namespace <inner> {
//! <body of each header, in emission order>
//! }
//! }
//! ```

use super::EmissionOrder;
use crate::config::NamespaceConfig;
use crate::graph::{DependencyGraph, ForeignIncludes};

/// The lines opening the namespace wrapper.
pub fn namespace_open(namespace: &NamespaceConfig) -> String {
    format!(
        "\nnamespace {} {{\nnamespace {} {{\n",
        namespace.outer.trim(),
        namespace.inner.trim()
    )
}

/// The lines closing the namespace wrapper.
pub fn namespace_close() -> &'static str {
    "\n}\n}\n"
}

/// Execute Phase 4: concatenate everything into one header
///
/// Every name in `order` is expected to be a key of `graph`; the ordering
/// phase only produces such names.
pub fn execute(
    preamble: &str,
    foreign_includes: &ForeignIncludes,
    order: &EmissionOrder,
    graph: &DependencyGraph,
    namespace: &NamespaceConfig,
) -> String {
    let mut text = String::from(preamble);

    text.push_str(&foreign_includes.lines().join("\n"));
    text.push('\n');
    text.push_str(&namespace_open(namespace));

    for filename in order.iter() {
        if let Some(node) = graph.get(filename) {
            text.push_str(&node.content);
        }
    }

    text.push_str(namespace_close());
    text
}
