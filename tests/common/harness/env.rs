//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several suites
#![allow(dead_code)]

use super::{CheckdocCommand, TestDoc};
use crate::common::SAMPLE_TREE;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Isolated test environment with a temporary documentation tree.
///
/// The tree lives in a `docs/` directory of a temp directory that is cleaned
/// up on drop; the user config directory points to an empty sibling, so no
/// config from the machine running the tests leaks in.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the documentation tree
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new environment with an empty documentation tree.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("docs");
        std::fs::create_dir(&root).expect("Failed to create docs directory");
        Self { temp_dir, root }
    }

    /// Creates an environment holding the shared sample tree.
    pub fn with_sample_tree() -> Self {
        let env = Self::new();
        for (path, content) in SAMPLE_TREE {
            env.write_file(path, content);
        }
        env
    }

    /// Returns the path to the documentation tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory used as user config directory.
    pub fn config_home(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    /// Adds a document below the tree root and returns its path.
    pub fn add_doc(&self, relative: &str, doc: &TestDoc) -> PathBuf {
        self.write_file(relative, &doc.render())
    }

    /// Writes a file below the tree root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a directory below the tree root.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Removes a file below the tree root.
    pub fn remove_file(&self, relative: &str) {
        std::fs::remove_file(self.root.join(relative)).expect("Failed to remove file");
    }

    /// Turns the tree root into a git repository.
    ///
    /// Returns false when git is not available.
    pub fn init_git(&self) -> bool {
        Command::new("git")
            .args(["init", "--quiet"])
            .current_dir(&self.root)
            .status()
            .is_ok_and(|status| status.success())
    }

    /// Creates a CheckdocCommand for this tree, without git root lookup.
    pub fn cmd(&self) -> CheckdocCommand {
        CheckdocCommand::new()
            .root(&self.root)
            .no_git_root()
            .config_home(&self.config_home())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "tree root should be a directory");
        assert!(!env.config_home().starts_with(env.root()));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_doc_creates_parents() {
        let env = TestEnv::new();
        let path = env.add_doc("a/b/guide.md", &TestDoc::new().link_to("../README.md"));

        assert!(path.is_file());
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("(../README.md)"));
    }

    #[test]
    fn test_env_sample_tree_is_written() {
        let env = TestEnv::with_sample_tree();
        for (path, _) in SAMPLE_TREE {
            assert!(env.root().join(path).is_file(), "{path} should exist");
        }
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args();
        assert_eq!(args[0], "--root");
        assert_eq!(args[1], env.root().to_string_lossy());
        assert_eq!(&args[2..4], ["--use-git-root", "false"]);
    }
}
