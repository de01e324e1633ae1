// SPDX-License-Identifier: MIT OR Apache-2.0

//! wuzzer - fuzzy line search tool
//!
//! Indexes a directory tree line by line and ranks lines against a query by
//! word and word-prefix overlap.

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;
use wuzzer::config::Config;

const LOG_ENV: &str = "WUZZER_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load();
    let format = commands::resolve_format(cli.format, &config);
    let compact = cli.compact;

    match cli.command {
        Commands::Search {
            query,
            index,
            max_results,
        } => {
            commands::search::run(&query, &index, max_results, format, compact, &config)?;
        }
        Commands::Repl { index, max_results } => {
            commands::repl::run(&index, max_results, format, compact, &config)?;
        }
        Commands::Stats { index } => {
            commands::stats::run(&index, format, compact, &config)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "wuzzer", &mut std::io::stdout());
        }
    }

    Ok(())
}
