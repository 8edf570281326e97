//! Phase 2: Extraction
//!
//! Reads every discovered header, splits it with an [`Extractor`] and builds
//! the dependency graph plus the global set of foreign includes.
//!
//! Missing parents are not checked here; the ordering phase reports them
//! with the name of the header that asked for them.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use super::discovery::file_key;
use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::graph::{DependencyGraph, FileNode, ForeignIncludes};
use crate::output::Reporter;

/// Executes Phase 2: read and split each header
///
/// Foreign includes are merged in file order, then source order, keeping the
/// first occurrence of each line. The first unreadable file aborts the run.
pub fn execute(
    files: &[PathBuf],
    extractor: &dyn Extractor,
    reporter: &Reporter,
) -> Result<(DependencyGraph, ForeignIncludes)> {
    let mut graph = DependencyGraph::new();
    let mut foreign_includes = ForeignIncludes::new();

    for path in files {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        reporter.processing(path);

        let filename = file_key(path);
        let extraction = extractor.extract(&text);

        if !extraction.has_content() {
            if extraction.parents.is_empty() {
                warn!("{} has no namespace wrapper; it contributes no body", filename);
            } else {
                debug!("{} only gathers sibling headers; it contributes no body", filename);
            }
        }
        debug!("{} depends on {:?}", filename, extraction.parents);

        foreign_includes.extend(extraction.foreign_includes);
        graph.insert(FileNode::new(filename, extraction.parents, extraction.content));
    }

    Ok((graph, foreign_includes))
}
