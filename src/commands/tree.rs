//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the header
//! family as a dependency tree: each top-level header (one no sibling
//! includes) with the headers it includes beneath it.
//!
//! ## Functionality
//!
//! - **Dependency Visualization**: Shared headers appear under every header
//!   that includes them
//! - **Depth Control**: Supports `--depth` to limit the tree depth
//!
//! The graph is sorted first, so cycles and unresolved includes are reported
//! exactly as `build` reports them. This command does not modify any files.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};

use amalgamate::graph::{DependencyGraph, FileNode};
use amalgamate::output::Reporter;
use amalgamate::phases::orchestrator;

use super::SourceArgs;
use crate::cli::GlobalArgs;

/// Display the header dependency tree
#[derive(Args, Debug, Default)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    /// Use 0 to show only the top-level headers.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, global: &GlobalArgs) -> Result<()> {
    let config = args.source.load_config(global)?;
    let amalgamation = orchestrator::amalgamate(&config, &Reporter::silent())?;

    let root = build_tree(
        &amalgamation.graph,
        &amalgamation.output.display().to_string(),
        args.depth.unwrap_or(usize::MAX),
    );
    print_tree(&root).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;

    Ok(())
}

/// Build the display tree: the output file on top, top-level headers below
fn build_tree(graph: &DependencyGraph, label: &str, max_depth: usize) -> TreeNode {
    TreeNode {
        label: label.to_string(),
        children: graph
            .roots()
            .into_iter()
            .map(|node| build_tree_node(graph, node, max_depth, 0))
            .collect(),
    }
}

fn build_tree_node(
    graph: &DependencyGraph,
    node: &FileNode,
    max_depth: usize,
    current_depth: usize,
) -> TreeNode {
    let mut children = Vec::new();
    if current_depth < max_depth {
        let mut seen = Vec::new();
        for parent in &node.parents {
            if seen.contains(&parent) {
                continue;
            }
            seen.push(parent);
            if let Some(parent_node) = graph.get(parent) {
                children.push(build_tree_node(graph, parent_node, max_depth, current_depth + 1));
            }
        }
    }

    TreeNode {
        label: node.filename.clone(),
        children,
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone, Debug)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
