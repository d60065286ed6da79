//! Implicit path resolution: from referenced paths to existing paths.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::domain::PathSet;
use crate::infra::FsError;

/// Resolves the raw set of referenced paths into the set of existing targets.
///
/// For every path of `path_set`, relative to `tree_root`:
/// - a path that does not exist is dropped;
/// - a directory is kept, and every `implicit_indexes` entry that exists as a
///   regular file inside it is added as well (all of them, not just the first);
/// - a regular file is kept.
///
/// Links to an existing directory are valid even without any index file.
pub fn resolve_implicit_paths(
    tree_root: &Path,
    implicit_indexes: &[String],
    path_set: &PathSet,
) -> PathSet {
    let mut resolved = PathSet::new();

    for path in path_set {
        let Some(metadata) = stat(&tree_root.join(path)) else {
            trace!(path = %path, "dropping missing path");
            continue;
        };

        if metadata.is_dir() {
            for index in implicit_indexes {
                let index_path = format!("{path}/{index}");
                if stat(&tree_root.join(&index_path)).is_some_and(|m| m.is_file()) {
                    debug!(directory = %path, index = %index_path, "resolved implicit index");
                    resolved.insert(index_path);
                }
            }
        }

        resolved.insert(path.clone());
    }

    resolved
}

/// Returns a copy of `path_set` where every existing directory ends with `/`.
///
/// # Errors
///
/// Returns `FsError` when a path exists but cannot be inspected.
pub fn ensure_directories_end_with_slash(
    tree_root: &Path,
    path_set: &PathSet,
) -> Result<PathSet, FsError> {
    path_set
        .iter()
        .map(|path| {
            let full = tree_root.join(path);
            match fs::metadata(&full) {
                Ok(m) if m.is_dir() && !path.ends_with('/') => Ok(format!("{path}/")),
                Ok(_) => Ok(path.clone()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.clone()),
                Err(e) => Err(FsError::from_io(&full, e)),
            }
        })
        .collect()
}

/// Stats a path, treating any failure as "does not exist".
fn stat(path: &Path) -> Option<fs::Metadata> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot inspect link target, treating as missing");
            None
        }
    }
}
