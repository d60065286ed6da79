//! Catlinks command handler.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CatlinksArgs;
use crate::domain::{CheckConfig, PathSet, build_path_set};
use crate::graph::{build_link_graph_nodes, ensure_directories_end_with_slash};
use crate::infra::{CommonMarkExtractor, write_atomic};

/// Suffixes of link targets that are documentation rather than referenced files.
const DOCUMENT_SUFFIXES: [&str; 4] = [".md", "/", "README", "CHANGELOG"];

/// Handle the catlinks command - list the local files the documentation links to.
///
/// Links to documents and to directories are left out; what remains are the
/// sources, images and other files the documentation refers to, whether or
/// not they exist.
pub fn handle_catlinks(args: &CatlinksArgs, tree_root: &Path, config: &CheckConfig) -> Result<()> {
    debug!(
        base_names = ?config.base_names,
        extensions = ?config.extensions,
        "building links using configured base names and extensions"
    );
    let nodes = build_link_graph_nodes(tree_root, config, &CommonMarkExtractor).with_context(
        || format!("could not build the link graph for tree root {}", tree_root.display()),
    )?;

    let paths = ensure_directories_end_with_slash(tree_root, &build_path_set(&nodes))?;
    let listing: String = filter_links(&paths)
        .into_iter()
        .map(|path| format!("{path}\n"))
        .collect();

    match &args.output {
        Some(output) => {
            write_atomic(output, &listing)?;
            info!(path = %output.display(), "wrote link listing");
        }
        None => print!("{listing}"),
    }
    Ok(())
}

/// Keeps the paths that are not documentation, in order.
pub fn filter_links(paths: &PathSet) -> Vec<&str> {
    paths
        .iter()
        .map(String::as_str)
        .filter(|path| !discard_path(path))
        .collect()
}

/// Returns true for links to documents or directories.
pub fn discard_path(path: &str) -> bool {
    DOCUMENT_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}
