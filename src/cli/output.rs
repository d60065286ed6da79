//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{LinkReport, NodeReport};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain paths of documents with findings, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Result of a `verify` run.
#[derive(Debug, Serialize)]
pub struct VerifyListing {
    pub root: String,
    pub valid: bool,
    pub orphans: usize,
    pub dead_links: usize,
    pub documents: Vec<DocumentListing>,
}

impl VerifyListing {
    pub fn from_report(root: impl Into<String>, report: &LinkReport<'_>) -> Self {
        Self {
            root: root.into(),
            valid: report.is_valid(),
            orphans: report.orphans().count(),
            dead_links: report.dead_link_count(),
            documents: report
                .iter()
                .map(DocumentListing::from_report)
                .collect(),
        }
    }
}

/// A single document in `verify` output.
#[derive(Debug, Serialize)]
pub struct DocumentListing {
    pub path: String,
    pub orphan: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dead_links: Vec<String>,
}

impl DocumentListing {
    fn from_report(report: &NodeReport<'_>) -> Self {
        Self {
            path: report.path().to_string(),
            orphan: report.is_orphan,
            dead_links: report.dead_links.clone(),
        }
    }
}
