//! Configuration file support.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::domain::CheckConfig;

/// Name of the per-tree configuration file, looked up in the tree root.
pub const TREE_CONFIG_FILE: &str = ".checkdoc.toml";

/// Application configuration loaded from config file.
#[derive(Debug, Default)]
pub struct Config {
    /// Engine settings read from the file, or defaults
    pub check: CheckConfig,

    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration for a tree.
    ///
    /// Lookup order:
    /// 1. `explicit`, which must exist
    /// 2. `.checkdoc.toml` in the tree root
    /// 3. the user config file (see [`Config::config_path`])
    /// 4. built-in defaults
    pub fn load(tree_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            return Self::load_from(path);
        }

        let tree_config = tree_root.join(TREE_CONFIG_FILE);
        if tree_config.exists() {
            return Self::load_from(&tree_config);
        }

        let user_config = Self::config_path();
        if user_config.exists() {
            return Self::load_from(&user_config);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let mut check: CheckConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        // TOML has no null; an empty string disables the exemption.
        if check.root_document.as_deref() == Some("") {
            check.root_document = None;
        }

        Ok(Self {
            check,
            source: Some(path.to_path_buf()),
        })
    }

    /// Returns the path to the user config file.
    ///
    /// Default: `~/.config/checkdoc/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("checkdoc")
            .join("config.toml")
    }

    /// Resolve the engine configuration, with CLI flags taking precedence.
    ///
    /// List flags replace the configured list when given at least once.
    pub fn resolve(&self, cli: &Cli) -> CheckConfig {
        let mut check = self.check.clone();

        if !cli.base_names.is_empty() {
            check.base_names = cli.base_names.clone();
        }
        if !cli.extensions.is_empty() {
            check.extensions = cli.extensions.clone();
        }
        if !cli.implicit_indexes.is_empty() {
            check.implicit_indexes = cli.implicit_indexes.clone();
        }
        if let Some(respect) = cli.respect_git_ignore {
            check.respect_gitignore = respect;
        }
        if cli.no_root_document {
            check.root_document = None;
        } else if let Some(root_document) = &cli.root_document {
            check.root_document = Some(root_document.clone());
        }

        check
    }
}
