//! # Header Amalgamation Library
//!
//! This library merges a family of C++ headers that `#include` one another
//! into a single header, emitting each file's body after the bodies of the
//! headers it depends on. It is used by the `amalgamate` command-line tool
//! but can be driven directly.
//!
//! ## Quick Example
//!
//! ```
//! use amalgamate::graph::{DependencyGraph, FileNode};
//! use amalgamate::phases::ordering;
//!
//! let graph: DependencyGraph = vec![
//!     FileNode::new("a.h", vec!["b.h".to_string()], "A;"),
//!     FileNode::new("b.h", vec![], "B;"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let order = ordering::execute(&graph).unwrap();
//! assert_eq!(order.order, vec!["b.h", "a.h"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: where the headers live, the sibling prefix,
//!   the namespace wrapper and the output path, loaded from `.amalgamate.yaml`.
//! - **Extraction (`extract`)**: regex matching that splits a header into
//!   sibling includes, foreign includes and its namespace body.
//! - **Graph (`graph`)**: file nodes keyed by name, plus the deduplicated
//!   foreign include set.
//! - **Phases (`phases`)**: discovery, extraction, ordering, rendering and
//!   writing, coordinated by `phases::orchestrator`.
//!
//! ## Execution Flow
//!
//! 1.  **Discovery**: Glob the header directory, skipping the output file.
//!     Finding no headers at all is an error.
//! 2.  **Extraction**: Read each header and build the dependency graph.
//! 3.  **Ordering**: Depth-first topological sort with cycle detection.
//! 4.  **Rendering**: Preamble, foreign includes, wrapped bodies.
//! 5.  **Writing**: Replace the output file.

pub mod config;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod graph;
pub mod output;
pub mod phases;

#[cfg(test)]
mod ordering_proptest;
