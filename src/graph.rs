//! # Dependency Graph
//!
//! In-memory model of one amalgamation run: every scanned header becomes a
//! [`FileNode`] keyed by its file name, and the include lines that point
//! outside the header family are gathered in a [`ForeignIncludes`] set.
//!
//! Both containers preserve insertion order. The scanner yields headers in a
//! sorted, reproducible order, so traversal and emission are deterministic
//! for a given directory.

use std::collections::{HashMap, HashSet};

/// One scanned header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// File name, unique within a graph
    pub filename: String,
    /// Sibling headers named by this file's include directives, in source
    /// order, duplicates kept
    pub parents: Vec<String>,
    /// Body found inside the namespace wrapper, empty when there is none
    pub content: String,
}

impl FileNode {
    pub fn new(filename: impl Into<String>, parents: Vec<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            parents,
            content: content.into(),
        }
    }
}

/// Mapping from file name to node, in insertion order
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<FileNode>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. A node with the same file name replaces the earlier one
    /// but keeps its position.
    pub fn insert(&mut self, node: FileNode) {
        match self.index.get(&node.filename) {
            Some(&position) => self.nodes[position] = node,
            None => {
                self.index.insert(node.filename.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn get(&self, filename: &str) -> Option<&FileNode> {
        self.index.get(filename).map(|&position| &self.nodes[position])
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.index.contains_key(filename)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &FileNode> {
        self.nodes.iter()
    }

    /// Nodes that no other node lists as a parent, in insertion order.
    ///
    /// These are the top-level headers of the family.
    pub fn roots(&self) -> Vec<&FileNode> {
        let referenced: HashSet<&str> = self
            .nodes
            .iter()
            .flat_map(|node| node.parents.iter().map(String::as_str))
            .collect();

        self.nodes
            .iter()
            .filter(|node| !referenced.contains(node.filename.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<FileNode> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = FileNode>>(iter: I) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}

/// Distinct non-sibling include lines in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForeignIncludes {
    lines: Vec<String>,
    seen: HashSet<String>,
}

impl ForeignIncludes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line; returns `false` when it was already present.
    pub fn insert(&mut self, line: impl Into<String>) -> bool {
        let line = line.into();
        if self.seen.contains(&line) {
            return false;
        }
        self.seen.insert(line.clone());
        self.lines.push(line);
        true
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.insert(line);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
