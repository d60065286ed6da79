//! Verify command handler.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::cli::VerifyArgs;
use crate::cli::output::{Output, OutputFormat, VerifyListing};
use crate::domain::{CheckConfig, LinkReport};
use crate::graph::{build_link_graph_nodes, build_report, validate_report};
use crate::infra::CommonMarkExtractor;

pub fn handle_verify(args: &VerifyArgs, tree_root: &Path, config: &CheckConfig) -> Result<()> {
    info!(root = %tree_root.display(), "running verify");
    info!(
        base_names = ?config.base_names,
        extensions = ?config.extensions,
        "considering documents"
    );

    // 1. Build the graph; any failure here aborts the run
    let nodes = build_link_graph_nodes(tree_root, config, &CommonMarkExtractor).with_context(
        || format!("could not build the link graph for tree root {}", tree_root.display()),
    )?;
    debug!(count = nodes.len(), "found nodes");
    for node in &nodes {
        debug!(document = %node.relative_path(), "node");
    }

    // 2. Check every node against the resolved path set
    let report = build_report(
        tree_root,
        &nodes,
        &config.implicit_indexes,
        config.exemption(),
    );
    let valid = validate_report(&report);

    // 3. Display results
    match args.format {
        OutputFormat::Human => print_human(&report),
        OutputFormat::Json => {
            let listing = VerifyListing::from_report(tree_root.display().to_string(), &report);
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
        OutputFormat::Paths => {
            for document in report.iter().filter(|r| !r.is_clean()) {
                println!("{}", document.path());
            }
        }
    }

    // 4. Exit code: fail on any finding
    if !valid {
        bail!("verify failed on tree root {}", tree_root.display());
    }
    info!(root = %tree_root.display(), "validated documentation tree");
    Ok(())
}

fn print_human(report: &LinkReport<'_>) {
    if report.is_valid() {
        println!("All {} document(s) OK.", report.len());
        return;
    }

    for orphan in report.orphans() {
        println!("orphan: {}", orphan.path());
    }
    for document in report.with_dead_links() {
        for link in &document.dead_links {
            println!("dead link: {} -> {}", document.path(), link);
        }
    }
    println!(
        "\nChecked {} document(s): {} orphan(s), {} dead link(s)",
        report.len(),
        report.orphans().count(),
        report.dead_link_count()
    );
}
