//! Orchestrator for a complete amalgamation run
//!
//! This module coordinates all phases behind two entry points:
//! [`amalgamate`] runs phases 1-4 and returns the merged header in memory,
//! [`execute`] additionally writes it to the configured output path.

use log::info;

use super::{phase1, phase2, phase3, phase4, phase5, Amalgamation};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::PatternExtractor;
use crate::output::Reporter;

/// Run phases 1-4 without touching the output file
///
/// 1. Discover candidate headers (fails when there are none)
/// 2. Extract parents, foreign includes and bodies
/// 3. Sort into emission order (fails on cycles and unresolved includes)
/// 4. Render the merged text
pub fn amalgamate(config: &Config, reporter: &Reporter) -> Result<Amalgamation> {
    config.validate()?;
    let output = config.output_path();
    let extractor = PatternExtractor::from_config(config)?;

    // Phase 1: Discovery
    let files = phase1::execute(&config.directory, &config.pattern(), &output)?;
    if files.is_empty() {
        return Err(Error::NoHeaders {
            directory: config.directory.clone(),
            pattern: config.pattern(),
        });
    }
    info!(
        "Found {} header(s) matching {} in {}",
        files.len(),
        config.pattern(),
        config.directory.display()
    );

    // Phase 2: Extraction
    let (graph, foreign_includes) = phase2::execute(&files, &extractor, reporter)?;

    // Phase 3: Ordering
    let order = phase3::execute(&graph)?;
    reporter.sorted(&order);

    // Phase 4: Rendering
    let text = phase4::execute(
        &config.preamble,
        &foreign_includes,
        &order,
        &graph,
        &config.namespace,
    );

    Ok(Amalgamation {
        graph,
        order,
        foreign_includes,
        text,
        output,
    })
}

/// Run the complete pipeline and write the merged header
pub fn execute(config: &Config, reporter: &Reporter) -> Result<Amalgamation> {
    let amalgamation = amalgamate(config, reporter)?;

    // Phase 5: Writing
    phase5::execute(&amalgamation.output, &amalgamation.text)?;
    reporter.written(&amalgamation.output);

    Ok(amalgamation)
}
