//! Link graph builder: documents on disk to graph nodes.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{
    CheckConfig, LinkGraphNode, filter_local_links, normalize_links_to_root, to_slash,
};
use crate::graph::GraphError;
use crate::infra::{
    FsError, GitIgnoreMatcher, IgnoreMatcher, LinkExtractor, find_matching_files, read_document,
    validate_index_names,
};

/// Builds one graph node per document found below `tree_root`.
///
/// Documents are searched by `config.base_names` and `config.extensions`,
/// then filtered through the tree's `.gitignore` files when
/// `config.respect_gitignore` is set. Every node may link to files that have
/// no node of their own, or that do not exist at all. Nodes keep the
/// discovery order and are not deduplicated.
///
/// # Errors
///
/// Returns `GraphError::Discover` for invalid search parameters or index
/// names (checked before any I/O), `GraphError::IgnoreMatcherUnavailable` if ignore rules
/// cannot be loaded, and any error of [`parse_files_and_build_graph`].
pub fn build_link_graph_nodes(
    tree_root: &Path,
    config: &CheckConfig,
    extractor: &dyn LinkExtractor,
) -> Result<Vec<LinkGraphNode>, GraphError> {
    validate_index_names(&config.implicit_indexes)?;
    let found = find_matching_files(tree_root, &config.base_names, &config.extensions)?;
    debug!(count = found.len(), "discovered documents");

    let documents = if config.respect_gitignore {
        let matcher =
            GitIgnoreMatcher::new(tree_root).map_err(|e| GraphError::IgnoreMatcherUnavailable {
                root: e.root,
                reason: e.reason,
            })?;
        filter_ignored(found, &matcher)
    } else {
        found
    };

    let nodes = parse_files_and_build_graph(&documents, tree_root, extractor)?;
    info!(nodes = nodes.len(), root = %tree_root.display(), "built link graph");
    Ok(nodes)
}

/// Drops every path flagged by the ignore matcher, keeping the order of the rest.
pub fn filter_ignored(paths: Vec<PathBuf>, matcher: &dyn IgnoreMatcher) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| {
            let ignored = matcher.is_ignored(path);
            if ignored {
                debug!(path = %path.display(), "ignored by ignore rules");
            }
            !ignored
        })
        .collect()
}

/// Parses each document and assembles its node, in the order given.
///
/// `documents` must be absolute paths below `tree_root`.
///
/// # Errors
///
/// Returns `GraphError::DocumentOutsideRoot` for a path not below the root,
/// `GraphError::Parse` if a document cannot be read or parsed, and
/// `GraphError::PathEscapesRoot` if any link leaves the tree. The first
/// failure aborts the whole build.
pub fn parse_files_and_build_graph(
    documents: &[PathBuf],
    tree_root: &Path,
    extractor: &dyn LinkExtractor,
) -> Result<Vec<LinkGraphNode>, GraphError> {
    documents
        .iter()
        .map(|path| build_node(path, tree_root, extractor))
        .collect()
}

fn build_node(
    path: &Path,
    tree_root: &Path,
    extractor: &dyn LinkExtractor,
) -> Result<LinkGraphNode, GraphError> {
    let relative_path = path
        .strip_prefix(tree_root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .map(to_slash)
        .ok_or_else(|| GraphError::DocumentOutsideRoot {
            path: path.to_path_buf(),
            root: tree_root.to_path_buf(),
        })?;

    let parse_error = |source: FsError| GraphError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let bytes = read_document(path).map_err(parse_error)?;
    let document = extractor.parse(bytes, path).map_err(parse_error)?;

    let local = filter_local_links(document.destinations().iter().cloned());
    let links = normalize_links_to_root(tree_root, &relative_path, &local)?;
    debug!(document = %relative_path, links = links.len(), "parsed document");

    Ok(LinkGraphNode::new(relative_path, document, links))
}
