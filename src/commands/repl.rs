// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive query loop over a single index

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::cli::{IndexArgs, OutputFormat};
use wuzzer::config::Config;
use wuzzer::highlight::HighlightStyle;
use wuzzer::indexer::FileIndex;
use wuzzer::matcher::Query;
use wuzzer::output::{write_json, write_matches, MatchJson};

const QUIT_COMMAND: &str = "quit";

/// Settings for one interactive session.
pub struct ReplOptions {
    pub max_results: usize,
    pub format: OutputFormat,
    pub compact: bool,
    pub style: HighlightStyle,
}

pub fn run(
    index_args: &IndexArgs,
    max_results: Option<usize>,
    format: OutputFormat,
    compact: bool,
    config: &Config,
) -> Result<()> {
    let index = super::build_index(index_args, config)?;
    let options = ReplOptions {
        max_results: config.merge_max_results(max_results),
        format,
        compact,
        style: HighlightStyle::Bold,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(&index, stdin.lock(), &mut stdout.lock(), &options)
}

/// Prompt, read a query, print results; until `quit` or end of input.
pub fn run_loop<R: BufRead, W: Write>(
    index: &FileIndex,
    mut input: R,
    out: &mut W,
    options: &ReplOptions,
) -> Result<()> {
    if options.format == OutputFormat::Text {
        writeln!(out, "Indexed {} lines", index.len())?;
    }

    let mut line = String::new();
    loop {
        if options.format == OutputFormat::Text {
            writeln!(out, "\nEnter a search query (or '{}' to exit):", QUIT_COMMAND)?;
            out.flush()?;
        }

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read query")?;
        if read == 0 {
            break;
        }
        let query = line.trim();
        if query == QUIT_COMMAND {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let mut matches = Query::new(query).rank(index.lines());
        matches.truncate(options.max_results);

        match options.format {
            OutputFormat::Json => {
                let json: Vec<MatchJson<'_>> = matches.iter().map(MatchJson::from_match).collect();
                write_json(out, &json, options.compact)?;
            }
            OutputFormat::Text => {
                writeln!(out, "\nSearch results for query '{}':\n", query)?;
                if matches.is_empty() {
                    writeln!(out, "{}", "No results".yellow())?;
                }
                write_matches(out, &matches, &options.style)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn sample_index() -> FileIndex {
        let mut index = FileIndex::new();
        index.push_line(PathBuf::from("a.txt"), 1, "red apple".to_string());
        index.push_line(PathBuf::from("a.txt"), 2, "green pear".to_string());
        index.push_line(PathBuf::from("b.txt"), 1, "apple cider".to_string());
        index
    }

    fn options(format: OutputFormat, max_results: usize) -> ReplOptions {
        ReplOptions {
            max_results,
            format,
            compact: true,
            style: HighlightStyle::Plain,
        }
    }

    fn run_session(input: &str, options: &ReplOptions) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_loop(&sample_index(), Cursor::new(input), &mut out, options).expect("repl");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn answers_queries_until_quit() {
        let text = run_session("apple\nquit\npear\n", &options(OutputFormat::Text, 10));

        assert!(text.starts_with("Indexed 3 lines\n"));
        assert!(text.contains("Search results for query 'apple':"));
        assert!(text.contains("1. (Score: 1.00) a.txt:1\nred apple\n"));
        assert!(text.contains("2. (Score: 1.00) b.txt:1\napple cider\n"));
        assert!(!text.contains("pear'"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let text = run_session("", &options(OutputFormat::Text, 10));
        assert_eq!(
            text,
            "Indexed 3 lines\n\nEnter a search query (or 'quit' to exit):\n"
        );
    }

    #[test]
    fn blank_lines_reprompt_and_limit_applies() {
        let text = run_session("\n  \napple\n", &options(OutputFormat::Text, 1));
        assert_eq!(text.matches("Enter a search query").count(), 4);
        assert!(text.contains("1. (Score: 1.00) a.txt:1"));
        assert!(!text.contains("2. "));
    }

    #[test]
    fn no_results_is_reported_not_an_error() {
        let text = run_session("zebra\n", &options(OutputFormat::Text, 10));
        assert!(text.contains("No results"));
    }

    #[test]
    fn json_mode_prints_one_array_per_query() {
        let text = run_session("apple\nzebra\n", &options(OutputFormat::Json, 10));
        let arrays: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).expect("json line"))
            .collect();

        assert_eq!(arrays.len(), 2);
        assert_eq!(arrays[0].as_array().map(Vec::len), Some(2));
        assert_eq!(arrays[0][0]["path"], "a.txt");
        assert_eq!(arrays[1].as_array().map(Vec::len), Some(0));
    }
}
