//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several suites
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `checkdoc` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
///
/// `--root` and `--use-git-root` are kept apart from the other arguments so
/// that setting them again replaces the earlier value instead of repeating
/// the flag.
pub struct CheckdocCommand {
    root: Option<PathBuf>,
    use_git_root: Option<bool>,
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl CheckdocCommand {
    /// Creates a new command for the `checkdoc` binary.
    pub fn new() -> Self {
        Self {
            root: None,
            use_git_root: None,
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--root` option to specify the documentation tree.
    pub fn root(mut self, path: &Path) -> Self {
        self.root = Some(path.to_path_buf());
        self
    }

    /// Disables the lookup of the git repository root.
    pub fn no_git_root(mut self) -> Self {
        self.use_git_root = Some(false);
        self
    }

    /// Enables the lookup of the git repository root.
    pub fn git_root(mut self) -> Self {
        self.use_git_root = Some(true);
        self
    }

    /// Points the user config directory somewhere private to the test.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the arguments the binary will be run with.
    pub fn get_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(root) = &self.root {
            args.push("--root".to_string());
            args.push(root.to_string_lossy().to_string());
        }
        if let Some(use_git_root) = self.use_git_root {
            args.push("--use-git-root".to_string());
            args.push(use_git_root.to_string());
        }
        args.extend(self.args.iter().cloned());
        args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("checkdoc").expect("Failed to find checkdoc binary");
        cmd.args(self.get_args()).env_remove("RUST_LOG");
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home).env("HOME", home);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects failure, and returns stdout as a string.
    pub fn output_failure(self) -> String {
        let output = self.assert().failure().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command regardless of its exit status and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.assert().get_output().stdout.clone();
        serde_json::from_slice(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `verify` command.
    pub fn verify(self) -> Self {
        self.args(["verify"])
    }

    /// Configures for the `catlinks` command.
    pub fn catlinks(self) -> Self {
        self.args(["catlinks"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for CheckdocCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        CheckdocCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_root() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckdocCommand::new().root(temp.path());
        let args = cmd.get_args();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], "--root");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_root_set_twice_keeps_last() {
        let cmd = CheckdocCommand::new()
            .root(Path::new("/first"))
            .no_git_root()
            .root(Path::new("/second"))
            .git_root();
        assert_eq!(cmd.get_args(), ["--root", "/second", "--use-git-root", "true"]);
    }

    #[test]
    fn test_command_output_success() {
        let output = CheckdocCommand::new().args(["--help"]).output_success();
        assert!(output.contains("checkdoc"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = CheckdocCommand::new().verify().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"verify".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
