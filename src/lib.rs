//! checkdoc - finds orphaned documents and dead links in a markdown tree

pub mod cli;
pub mod domain;
pub mod graph;
pub mod infra;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_catlinks, handle_completions, handle_verify, resolve_tree_root},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let tree_root = resolve_tree_root(&cli.root, cli.use_git_root)?;
    let config = Config::load(&tree_root, cli.config.as_deref())?;
    if let Some(source) = &config.source {
        tracing::debug!(path = %source.display(), "loaded config file");
    }
    let check = config.resolve(&cli);

    match &cli.command {
        Command::Verify(args) => handle_verify(args, &tree_root, &check),
        Command::Catlinks(args) => handle_catlinks(args, &tree_root, &check),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .without_time()
                .with_target(false),
        )
        .init();
}
