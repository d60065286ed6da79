//! `.gitignore` support for document discovery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;
use tracing::debug;

const GITIGNORE_FILE: &str = ".gitignore";

/// Decides whether an absolute path is excluded by ignore rules.
pub trait IgnoreMatcher {
    /// Returns true if `path` matches an ignore rule.
    fn is_ignored(&self, path: &Path) -> bool;
}

/// The ignore matcher could not be built for a tree root.
#[derive(Debug, Error)]
#[error("cannot read ignore rules under {}: {reason}", root.display())]
pub struct IgnoreError {
    pub root: PathBuf,
    pub reason: String,
}

/// Ignore matcher following the `.gitignore` files of a tree.
///
/// The tree is walked once with git's rules: a nested `.gitignore` overrides
/// shallower ones for its subtree, and an ignored directory is never entered,
/// so nothing below it can be re-included. Only files inside the tree are
/// consulted; global excludes and `.git/info/exclude` are not. The matcher is
/// a snapshot: paths created after [`GitIgnoreMatcher::new`] count as ignored.
#[derive(Debug)]
pub struct GitIgnoreMatcher {
    root: PathBuf,
    visible: HashSet<PathBuf>,
    rule_files: usize,
}

impl GitIgnoreMatcher {
    /// Walks `root` and records every path the ignore rules leave visible.
    ///
    /// # Errors
    ///
    /// Returns `IgnoreError` if `root` is not an existing directory, if the
    /// tree cannot be walked, or if a `.gitignore` file cannot be parsed.
    pub fn new(root: &Path) -> Result<Self, IgnoreError> {
        let fail = |reason: String| IgnoreError {
            root: root.to_path_buf(),
            reason,
        };

        if !root.is_dir() {
            return Err(fail("not an existing directory".to_string()));
        }

        let walker = WalkBuilder::new(root)
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .filter_entry(|e| e.file_name() != ".git")
            .build();

        let mut visible = HashSet::new();
        let mut rule_files = 0;
        for entry in walker {
            let entry = entry.map_err(|e| fail(e.to_string()))?;
            if let Some(err) = entry.error() {
                return Err(fail(err.to_string()));
            }
            if entry.depth() == 0 {
                continue;
            }
            if entry.file_name() == GITIGNORE_FILE {
                debug!(file = %entry.path().display(), "applying ignore rules");
                rule_files += 1;
            }
            visible.insert(entry.into_path());
        }

        Ok(Self {
            root: root.to_path_buf(),
            visible,
            rule_files,
        })
    }

    /// Number of `.gitignore` files in effect.
    pub fn len(&self) -> usize {
        self.rule_files
    }

    /// Returns true if no `.gitignore` file is in effect.
    pub fn is_empty(&self) -> bool {
        self.rule_files == 0
    }
}

impl IgnoreMatcher for GitIgnoreMatcher {
    fn is_ignored(&self, path: &Path) -> bool {
        if !path.starts_with(&self.root) || path == self.root {
            return false;
        }
        !self.visible.contains(path)
    }
}
