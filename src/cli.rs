// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// wuzzer - fuzzy line search over a directory tree
///
/// Indexes every matching file line by line, then ranks lines by how many of
/// the query's words (or word prefixes) they contain.
#[derive(Parser, Debug)]
#[command(name = "wuzzer")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  wuzzer search \"red apple\"\n  wuzzer search -p docs -g '*.md' \"install guide\"\n  wuzzer repl -g '*.rs'"
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where to index and which files to read.
#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Directory to index (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// File-name glob to index (repeatable, e.g. -g '*.rs' -g '*.md')
    #[arg(short = 'g', long = "glob")]
    pub globs: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a directory and run one query
    #[command(visible_alias = "s")]
    Search {
        /// Search query (words or word prefixes)
        query: String,

        #[command(flatten)]
        index: IndexArgs,

        /// Maximum number of results to show
        #[arg(short, long)]
        max_results: Option<usize>,
    },

    /// Index a directory once, then answer queries interactively
    Repl {
        #[command(flatten)]
        index: IndexArgs,

        /// Maximum number of results to show per query
        #[arg(short, long)]
        max_results: Option<usize>,
    },

    /// Index a directory and report what was scanned and skipped
    Stats {
        #[command(flatten)]
        index: IndexArgs,
    },

    /// Generate shell completion script
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_globs() {
        let cli = Cli::try_parse_from([
            "wuzzer", "search", "-g", "*.rs", "-g", "*.md", "-p", "src", "fuzzy",
        ])
        .expect("parse");

        match cli.command {
            Commands::Search {
                query,
                index,
                max_results,
            } => {
                assert_eq!(query, "fuzzy");
                assert_eq!(index.globs, vec!["*.rs", "*.md"]);
                assert_eq!(index.path.as_deref(), Some("src"));
                assert_eq!(max_results, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_format_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["wuzzer", "stats", "--format", "json"]).expect("parse");
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
