//! Report construction and logging.

use std::path::Path;

use tracing::{error, info};

use crate::domain::{
    LinkGraphNode, LinkReport, NodeReport, build_path_set, find_dead_links, find_orphans,
};
use crate::graph::resolve_implicit_paths;

/// Builds a report for every node.
///
/// The links of all nodes form the raw path set, which is resolved against
/// the file system (see [`resolve_implicit_paths`]) before orphans and dead
/// links are computed from it. `exemption` is never reported as an orphan.
pub fn build_report<'a>(
    tree_root: &Path,
    nodes: &'a [LinkGraphNode],
    implicit_indexes: &[String],
    exemption: Option<&str>,
) -> LinkReport<'a> {
    let raw = build_path_set(nodes);
    let resolved = resolve_implicit_paths(tree_root, implicit_indexes, &raw);
    info!(
        referenced = raw.len(),
        existing = resolved.len(),
        "resolved link targets"
    );

    let mut dead_links = find_dead_links(&resolved, nodes);
    let orphans = find_orphans(&resolved, nodes, exemption);

    let mut report = LinkReport::new(exemption);
    for node in nodes {
        let path = node.relative_path();
        report.insert(NodeReport {
            node,
            dead_links: dead_links.remove(path).unwrap_or_default(),
            is_orphan: orphans.get(path).copied().unwrap_or(false),
        });
    }
    report
}

/// Logs the findings of a report and returns whether it is valid.
///
/// Checks that there are no orphaned documents (except the exemption) and
/// that every local link points to something that exists.
pub fn validate_report(report: &LinkReport<'_>) -> bool {
    info!("checking for orphaned documents");
    let orphans: Vec<_> = report.orphans().map(|r| r.path()).collect();
    if orphans.is_empty() {
        info!("no orphans found");
    } else {
        error!(count = orphans.len(), "located orphan documents");
        for orphan in &orphans {
            error!(document = %orphan, "orphan");
        }
    }

    info!("checking for dead links");
    let mut dead = 0;
    for node in report.with_dead_links() {
        for link in &node.dead_links {
            error!(document = %node.path(), link = %link, "dead link");
            dead += 1;
        }
    }
    if dead == 0 {
        info!("no dead links found");
    }

    report.is_valid()
}
