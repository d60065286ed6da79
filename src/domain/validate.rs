//! Validation functions for the link graph.
//!
//! This module provides pure functions that check graph nodes against the
//! resolved set of existing paths, detecting orphaned documents and dead
//! links. None of them perform I/O.

use std::collections::HashMap;

use crate::domain::{LinkGraphNode, PathSet};

/// Finds, for each node, whether anything links to it.
///
/// A node is an orphan when its relative path is absent from the resolved
/// set, unless it is the exempt path. A node linking to itself counts as
/// linked.
///
/// # Arguments
///
/// * `resolved` - Every existing link target, after implicit index resolution
/// * `nodes` - The graph nodes to check
/// * `exemption` - Relative path never reported as orphan
///
/// # Returns
///
/// A map from each node's relative path to its orphan flag.
pub fn find_orphans<'a>(
    resolved: &PathSet,
    nodes: &'a [LinkGraphNode],
    exemption: Option<&str>,
) -> HashMap<&'a str, bool> {
    nodes
        .iter()
        .map(|node| {
            let path = node.relative_path();
            let exempt = exemption == Some(path);
            (path, !exempt && !resolved.contains(path))
        })
        .collect()
}

/// Finds the dead links of each node.
///
/// A link is dead when its target is absent from the resolved set. The
/// returned lists keep the order (and duplicates) of the node's links and
/// may be empty.
///
/// # Arguments
///
/// * `resolved` - Every existing link target, after implicit index resolution
/// * `nodes` - The graph nodes to check
///
/// # Returns
///
/// A map from each node's relative path to its dead links.
pub fn find_dead_links<'a>(
    resolved: &PathSet,
    nodes: &'a [LinkGraphNode],
) -> HashMap<&'a str, Vec<String>> {
    nodes
        .iter()
        .map(|node| {
            let dead = node
                .links()
                .iter()
                .filter(|link| !resolved.contains(link.as_str()))
                .cloned()
                .collect();
            (node.relative_path(), dead)
        })
        .collect()
}
