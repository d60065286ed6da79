//! Link graph construction, implicit path resolution and reporting.
//!
//! The pipeline runs in three explicit stages:
//!
//! 1. [`build_link_graph_nodes`] discovers documents and turns each one into a
//!    [`LinkGraphNode`](crate::domain::LinkGraphNode) with normalized links.
//! 2. [`resolve_implicit_paths`] turns the raw set of referenced paths into
//!    the set of paths that exist, expanding directories to their index files.
//! 3. [`build_report`] checks every node against that resolved set.

mod builder;
mod report;
mod resolve;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::NormalizeError;
use crate::infra::{DiscoverError, FsError};

pub use builder::{build_link_graph_nodes, filter_ignored, parse_files_and_build_graph};
pub use report::{build_report, validate_report};
pub use resolve::{ensure_directories_end_with_slash, resolve_implicit_paths};

/// Errors that abort the construction of the link graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Invalid search parameters, or the tree could not be walked.
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    /// Ignore filtering was requested but the rules could not be loaded.
    #[error("failed to load ignore rules; is the tree root a repository? root: {}: {reason}", root.display())]
    IgnoreMatcherUnavailable { root: PathBuf, reason: String },

    /// A link resolved outside of the tree root.
    #[error(transparent)]
    PathEscapesRoot(#[from] NormalizeError),

    /// A document could not be read or parsed.
    #[error("failed to parse document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A document path handed to the builder is not below the tree root.
    #[error("document {} is not below the tree root {}", path.display(), root.display())]
    DocumentOutsideRoot { path: PathBuf, root: PathBuf },
}

impl GraphError {
    /// Returns true for errors caused by the configuration rather than the tree content.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GraphError::Discover(e) if e.is_configuration())
    }
}
