//! Phase 5: Writing to Disk
//!
//! The final phase writes the merged header. Missing parent directories are
//! created first. The target is truncated and rewritten in place; it is only
//! opened once every earlier phase has succeeded.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Execute Phase 5: write `text` as the complete contents of `output_path`
pub fn execute(output_path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::write(output_path, text).map_err(|e| Error::io(output_path, e))
}
