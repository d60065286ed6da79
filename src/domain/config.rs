//! Engine configuration passed explicitly into every graph operation.

use serde::{Deserialize, Serialize};

/// What to look for and how to judge it.
///
/// Every engine call receives one of these by reference; nothing is read from
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Exact file names to treat as documents (e.g. `README`, `CHANGELOG`).
    pub base_names: Vec<String>,

    /// File extensions to treat as documents, each starting with a dot.
    pub extensions: Vec<String>,

    /// File names looked up inside a linked directory, in order.
    pub implicit_indexes: Vec<String>,

    /// Drop discovered documents matched by `.gitignore` rules.
    pub respect_gitignore: bool,

    /// Root-relative path never reported as an orphan.
    pub root_document: Option<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            base_names: Vec::new(),
            extensions: vec![".md".to_string()],
            implicit_indexes: vec!["README.md".to_string()],
            respect_gitignore: true,
            root_document: Some("README.md".to_string()),
        }
    }
}

impl CheckConfig {
    /// Returns the orphan exemption as a string slice.
    pub fn exemption(&self) -> Option<&str> {
        self.root_document.as_deref()
    }
}
