//! Report types produced by validation.
//!
//! Orphans and dead links are findings, not errors: a report always lists
//! every one of them and leaves the pass/fail decision to the caller.

use std::collections::BTreeMap;

use crate::domain::LinkGraphNode;

/// Quality report for a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport<'a> {
    /// The underlying node.
    pub node: &'a LinkGraphNode,
    /// Local links of this node whose target does not exist, in link order.
    pub dead_links: Vec<String>,
    /// Whether no document links to this node.
    pub is_orphan: bool,
}

impl NodeReport<'_> {
    /// Returns the node's relative path.
    pub fn path(&self) -> &str {
        self.node.relative_path()
    }

    /// Returns true if the node is neither orphaned nor has dead links.
    pub fn is_clean(&self) -> bool {
        !self.is_orphan && self.dead_links.is_empty()
    }
}

/// Reports for every node of a graph, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct LinkReport<'a> {
    reports: BTreeMap<String, NodeReport<'a>>,
    exemption: Option<String>,
}

impl<'a> LinkReport<'a> {
    /// Creates an empty report using the given orphan exemption.
    pub fn new(exemption: Option<&str>) -> Self {
        Self {
            reports: BTreeMap::new(),
            exemption: exemption.map(str::to_string),
        }
    }

    /// Adds a node report, replacing any previous report for the same path.
    pub fn insert(&mut self, report: NodeReport<'a>) {
        self.reports.insert(report.path().to_string(), report);
    }

    /// Looks up the report of a node by relative path.
    pub fn get(&self, path: &str) -> Option<&NodeReport<'a>> {
        self.reports.get(path)
    }

    /// Returns true if a report exists for the path.
    pub fn contains(&self, path: &str) -> bool {
        self.reports.contains_key(path)
    }

    /// Number of node reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if the report covers no node.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// The orphan exemption used to build this report.
    pub fn exemption(&self) -> Option<&str> {
        self.exemption.as_deref()
    }

    /// Iterates over all node reports in path order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeReport<'a>> {
        self.reports.values()
    }

    /// Orphaned documents, in path order.
    pub fn orphans(&self) -> impl Iterator<Item = &NodeReport<'a>> {
        self.iter().filter(|r| r.is_orphan && !self.is_exempt(r.path()))
    }

    /// Documents with at least one dead link, in path order.
    pub fn with_dead_links(&self) -> impl Iterator<Item = &NodeReport<'a>> {
        self.iter().filter(|r| !r.dead_links.is_empty())
    }

    /// Total number of dead links across all documents.
    pub fn dead_link_count(&self) -> usize {
        self.iter().map(|r| r.dead_links.len()).sum()
    }

    /// Returns true if no document has dead links and no non-exempt document is orphaned.
    pub fn is_valid(&self) -> bool {
        self.orphans().next().is_none() && self.with_dead_links().next().is_none()
    }

    fn is_exempt(&self, path: &str) -> bool {
        self.exemption.as_deref() == Some(path)
    }
}
