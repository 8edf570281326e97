//! Phase 1: Discovery
//!
//! This is the first phase of the amalgamation pipeline. It finds the headers
//! that take part in the merge.
//!
//! ## Process
//!
//! 1.  **Glob Matching**: The configured pattern (e.g. `af_xloper*.h`) is
//!     applied inside the configured directory. The directory itself is
//!     escaped so that brackets or stars in its name are taken literally.
//!
//! 2.  **Output Exclusion**: The merged header may live next to its sources
//!     and match the same pattern. It is skipped, comparing paths literally and
//!     then canonically when both exist.
//!
//! 3.  **Sorting**: The `glob` crate yields matches in sorted order, which
//!     fixes the insertion order of the dependency graph and therefore the
//!     emission order for a given directory.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Executes Phase 1: list candidate headers in `directory` matching `pattern`
///
/// Directories that happen to match are skipped. An unreadable entry fails
/// the whole run.
pub fn execute(directory: &Path, pattern: &str, output: &Path) -> Result<Vec<PathBuf>> {
    let escaped_dir = glob::Pattern::escape(&directory.to_string_lossy());
    let full_pattern = Path::new(&escaped_dir).join(pattern);
    debug!("Scanning {}", full_pattern.display());

    let mut files = Vec::new();
    for entry in glob::glob(&full_pattern.to_string_lossy())? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if is_same_file(&path, output) {
            debug!("Skipping output file {}", path.display());
            continue;
        }
        files.push(path);
    }

    Ok(files)
}

/// The graph key for a scanned path: its file name.
pub fn file_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn is_same_file(candidate: &Path, output: &Path) -> bool {
    if candidate == output {
        return true;
    }
    match (candidate.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
