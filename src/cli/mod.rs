//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// checkdoc - finds orphaned documents and dead links in a markdown tree
#[derive(Parser, Debug)]
#[command(name = "checkdoc", version, about, long_about = None)]
pub struct Cli {
    /// Root of the documentation hierarchy to check
    #[arg(short = 'r', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Replace the root by the top-level directory of its git repository
    #[arg(
        short = 'g',
        long,
        global = true,
        action = ArgAction::Set,
        default_value_t = true,
        value_name = "BOOL"
    )]
    pub use_git_root: bool,

    /// Skip documents matched by .gitignore rules (overrides config file)
    #[arg(long, global = true, action = ArgAction::Set, value_name = "BOOL")]
    pub respect_git_ignore: Option<bool>,

    /// Exact file name to treat as a document (can be specified multiple times)
    #[arg(long = "basename", global = true, action = ArgAction::Append)]
    pub base_names: Vec<String>,

    /// File extension to treat as a document, e.g. ".md" (can be specified multiple times)
    #[arg(long = "extension", global = true, action = ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Index file looked up in linked directories (can be specified multiple times)
    #[arg(long = "index", global = true, action = ArgAction::Append)]
    pub implicit_indexes: Vec<String>,

    /// Root-relative document never reported as an orphan
    #[arg(long, global = true, conflicts_with = "no_root_document")]
    pub root_document: Option<String>,

    /// Report every unreferenced document, including the root document
    #[arg(long, global = true)]
    pub no_root_document: bool,

    /// Configuration file (default: .checkdoc.toml in the root, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the tree for orphaned documents and dead links
    Verify(VerifyArgs),

    /// List the local non-document files referenced by the documentation
    Catlinks(CatlinksArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `verify` command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `catlinks` command
#[derive(Parser, Debug)]
pub struct CatlinksArgs {
    /// File to write the listing to (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
