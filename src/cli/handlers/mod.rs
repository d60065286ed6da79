//! Command handlers for the CLI.

mod catlinks;
mod completions;
mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::infra::repository_root;

pub use catlinks::{discard_path, filter_links, handle_catlinks};
pub use completions::handle_completions;
pub use verify::handle_verify;

/// Returns the absolute tree root to check.
///
/// With `use_git_root`, the top-level directory of the git repository
/// containing `root` is used instead; this fails outside of a repository.
pub fn resolve_tree_root(root: &Path, use_git_root: bool) -> Result<PathBuf> {
    let absolute = root
        .canonicalize()
        .with_context(|| format!("could not convert {} to an absolute path", root.display()))?;

    if !use_git_root {
        debug!(root = %absolute.display(), "using given tree root");
        return Ok(absolute);
    }

    let repo_root = repository_root(&absolute).with_context(|| {
        format!("failed to find git repo root from path {}", root.display())
    })?;
    info!(root = %repo_root.display(), "using git repository root");
    Ok(repo_root)
}
