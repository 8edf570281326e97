//! Phase 3: Determining Emission Order
//!
//! This is the third phase of the amalgamation pipeline. It orders the
//! headers so that every header is emitted after each header it includes.
//!
//! ## Process
//!
//! 1.  **Full Coverage**: Every node of the graph is used as a starting point
//!     in insertion order, so disconnected groups of headers are all emitted.
//!
//! 2.  **Depth-First Post-Order**: Parents are visited in the order their
//!     include directives appear, and a header is appended once all of its
//!     parents have been.
//!
//! 3.  **Three-State Marking**: Each header is unvisited, in progress or
//!     done. Reaching a header that is still in progress means the include
//!     chain loops back on itself; the chain is reported as a cycle.
//!
//! 4.  **Unresolved Includes**: A sibling include naming a header outside the
//!     scanned set fails with the including header and the missing name.

use std::collections::HashMap;

use super::EmissionOrder;
use crate::error::{Error, Result};
use crate::graph::DependencyGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Execute Phase 3: topologically sort the dependency graph
pub fn execute(graph: &DependencyGraph) -> Result<EmissionOrder> {
    let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(graph.len());
    let mut path: Vec<&str> = Vec::new();
    let mut order = Vec::with_capacity(graph.len());

    for node in graph.nodes() {
        visit(graph, &node.filename, &mut marks, &mut path, &mut order)?;
    }

    Ok(EmissionOrder::new(order))
}

fn visit<'g>(
    graph: &'g DependencyGraph,
    filename: &'g str,
    marks: &mut HashMap<&'g str, Mark>,
    path: &mut Vec<&'g str>,
    order: &mut Vec<String>,
) -> Result<()> {
    match marks.get(filename) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => {
            let start = path.iter().position(|name| *name == filename).unwrap_or(0);
            let mut cycle: Vec<&str> = path[start..].to_vec();
            cycle.push(filename);
            return Err(Error::CycleDetected {
                file: filename.to_string(),
                cycle: cycle.join(" -> "),
            });
        }
        None => {}
    }

    // The includer is the header on top of the path.
    let Some(node) = graph.get(filename) else {
        return Err(Error::UnresolvedDependency {
            file: path.last().copied().unwrap_or(filename).to_string(),
            include: filename.to_string(),
        });
    };

    marks.insert(filename, Mark::InProgress);
    path.push(filename);

    for parent in &node.parents {
        visit(graph, parent, marks, path, order)?;
    }

    path.pop();
    marks.insert(filename, Mark::Done);
    order.push(filename.to_string());
    Ok(())
}
