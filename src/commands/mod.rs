// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations shared by the CLI entry point

pub mod repl;
pub mod search;
pub mod stats;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{IndexArgs, OutputFormat};
use wuzzer::config::{Config, ConfigOutputFormat};
use wuzzer::indexer::{FileIndex, IndexBuilder};

/// CLI flag wins, then the config file, then text.
pub fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli_format.unwrap_or(match config.output_format() {
        Some(ConfigOutputFormat::Json) => OutputFormat::Json,
        Some(ConfigOutputFormat::Text) | None => OutputFormat::Text,
    })
}

fn resolve_root(path: Option<&str>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(PathBuf::from(path)),
        None => std::env::current_dir().context("Failed to resolve current directory"),
    }
}

/// Walk the requested root with the merged walk policy.
pub fn build_index(args: &IndexArgs, config: &Config) -> Result<FileIndex> {
    let root = resolve_root(args.path.as_deref())?;
    let policy = config.walk_policy(&args.globs)?;
    debug!(
        root = %root.display(),
        patterns = ?policy.patterns().collect::<Vec<_>>(),
        "building index"
    );

    IndexBuilder::new(&root)
        .with_policy(policy)
        .build()
        .with_context(|| format!("Failed to index {}", root.display()))
}
