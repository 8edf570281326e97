//! Implementation of the phases of an amalgamation run.
//!
//! ## Overview
//!
//! A run follows 5 phases:
//! 1. Discovery - Find the candidate headers, excluding the output file
//! 2. Extraction - Read each header and build the dependency graph
//! 3. Ordering - Topologically sort the graph, detecting cycles
//! 4. Rendering - Concatenate preamble, foreign includes and bodies
//! 5. Writing - Write the merged header to disk
//!
//! Phases 1-4 are pure with respect to the output file, so any failure
//! before phase 5 leaves a previously generated header untouched.

use std::path::PathBuf;

use crate::graph::{DependencyGraph, ForeignIncludes};

// Phase modules
pub mod discovery;
pub mod extraction;
pub mod orchestrator;
pub mod ordering;
pub mod render;
pub mod write;

pub use discovery as phase1;
pub use extraction as phase2;
pub use ordering as phase3;
pub use render as phase4;
pub use write as phase5;

/// Emission order for the merged header
///
/// Every scanned header appears exactly once, after all of its parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionOrder {
    pub order: Vec<String>,
}

impl EmissionOrder {
    pub fn new(order: Vec<String>) -> Self {
        Self { order }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Position of a header in the order.
    pub fn position(&self, filename: &str) -> Option<usize> {
        self.order.iter().position(|name| name == filename)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

/// Result of phases 1-4: everything needed to write or inspect the header
#[derive(Debug, Clone)]
pub struct Amalgamation {
    /// The scanned headers and their sibling includes
    pub graph: DependencyGraph,
    /// Emission order of the scanned headers
    pub order: EmissionOrder,
    /// Include lines hoisted above the namespace wrapper
    pub foreign_includes: ForeignIncludes,
    /// The merged header text
    pub text: String,
    /// Where the merged header belongs
    pub output: PathBuf,
}
