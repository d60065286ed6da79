//! Link graph node and the parsed document it owns.

use std::collections::BTreeSet;

/// Set of root-relative paths, either referenced somewhere or known to exist.
pub type PathSet = BTreeSet<String>;

/// A parsed documentation file.
///
/// Holds the decoded source text and every link destination found in it, in
/// document order, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    destinations: Vec<String>,
}

impl Document {
    /// Creates a document from its text and raw link destinations.
    pub fn new(text: impl Into<String>, destinations: Vec<String>) -> Self {
        Self {
            text: text.into(),
            destinations,
        }
    }

    /// Returns the decoded source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns every link destination in document order.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }
}

/// A documentation file in the link graph.
///
/// The relative path never contains `.` or `..` segments, and neither do the
/// links, which are normalized relative to the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraphNode {
    relative_path: String,
    document: Document,
    links: Vec<String>,
}

impl LinkGraphNode {
    /// Creates a node. `links` must already be normalized.
    pub fn new(relative_path: impl Into<String>, document: Document, links: Vec<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            document,
            links,
        }
    }

    /// Path of the file from the tree root.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// The parsed document this node was built from.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Normalized local links, in document order, duplicates included.
    pub fn links(&self) -> &[String] {
        &self.links
    }
}

/// Returns the set of every link found in the passed nodes.
pub fn build_path_set(nodes: &[LinkGraphNode]) -> PathSet {
    nodes
        .iter()
        .flat_map(|node| node.links().iter().cloned())
        .collect()
}
