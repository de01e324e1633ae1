// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot search command

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::cli::{IndexArgs, OutputFormat};
use wuzzer::config::Config;
use wuzzer::errors::suggestions;
use wuzzer::highlight::HighlightStyle;
use wuzzer::matcher::{IndexedMatch, Query};
use wuzzer::output::{print_json, write_matches, MatchJson};

pub fn run(
    query: &str,
    index_args: &IndexArgs,
    max_results: Option<usize>,
    format: OutputFormat,
    compact: bool,
    config: &Config,
) -> Result<()> {
    let index = super::build_index(index_args, config)?;
    let limit = config.merge_max_results(max_results);
    let compiled = Query::new(query);

    let mut matches = compiled.rank(index.lines());
    matches.truncate(limit);

    match format {
        OutputFormat::Json => {
            let json: Vec<MatchJson<'_>> = matches.iter().map(MatchJson::from_match).collect();
            print_json(&json, compact)?;
        }
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            print_text(&mut out, query, &compiled, &matches)?;
        }
    }

    Ok(())
}

fn print_text<W: Write>(
    out: &mut W,
    query: &str,
    compiled: &Query,
    matches: &[IndexedMatch<'_>],
) -> Result<()> {
    if compiled.is_empty() {
        writeln!(out, "{}", suggestions::empty_query_suggestion(query).yellow())?;
        return Ok(());
    }
    if matches.is_empty() {
        writeln!(out, "{}", suggestions::no_results_suggestion(query).yellow())?;
        return Ok(());
    }

    writeln!(out, "Search results for query '{}':\n", query)?;
    write_matches(out, matches, &HighlightStyle::Bold)
}
