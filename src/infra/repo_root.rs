//! Locating the top-level directory of a git repository.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors while asking git for the repository root.
#[derive(Debug, Error)]
pub enum RepoRootError {
    #[error("failed to run git in {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not inside a git repository: {message}", path.display())]
    NotARepository { path: PathBuf, message: String },
}

/// Returns the top-level directory of the git repository containing `path`.
///
/// Runs `git rev-parse --show-toplevel` from `path`.
///
/// # Errors
///
/// Returns `RepoRootError::Spawn` if git cannot be executed and
/// `RepoRootError::NotARepository` if git reports an error.
pub fn repository_root(path: &Path) -> Result<PathBuf, RepoRootError> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(path)
        .output()
        .map_err(|e| RepoRootError::Spawn {
            path: path.to_path_buf(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(RepoRootError::NotARepository {
            path: path.to_path_buf(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let top_level = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(PathBuf::from(top_level))
}
