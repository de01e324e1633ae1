// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result and statistics rendering (text and JSON)

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::highlight::{highlight, HighlightStyle};
use crate::indexer::FileIndex;
use crate::matcher::IndexedMatch;

/// Scanned directories listed by [`write_stats`].
const STATS_DIR_PREVIEW: usize = 10;

/// Serialize `value` to stdout as JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, value, compact)
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    compact: bool,
) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// JSON shape of one indexed match.
#[derive(Debug, Serialize)]
pub struct MatchJson<'a> {
    pub path: String,
    pub line: usize,
    #[serde(rename = "match")]
    pub text: &'a str,
    pub score: f64,
    pub matched_words: &'a [String],
}

impl<'a> MatchJson<'a> {
    pub fn from_match(m: &'a IndexedMatch<'_>) -> Self {
        Self {
            path: m.candidate.path.display().to_string(),
            line: m.candidate.line_number,
            text: &m.candidate.content,
            score: m.score,
            matched_words: &m.matched_words,
        }
    }
}

/// Write ranked matches as numbered entries, the line highlighted below each.
pub fn write_matches<W: Write>(
    out: &mut W,
    matches: &[IndexedMatch<'_>],
    style: &HighlightStyle,
) -> Result<()> {
    for (i, m) in matches.iter().enumerate() {
        writeln!(
            out,
            "{}. (Score: {:.2}) {}:{}",
            i + 1,
            m.score,
            m.candidate.path.display().to_string().cyan(),
            m.candidate.line_number
        )?;
        writeln!(out, "{}", highlight(&m.candidate.content, &m.matched_words, style))?;
    }
    Ok(())
}

/// JSON shape of index statistics.
#[derive(Debug, Serialize)]
pub struct StatsJson {
    pub files_scanned: usize,
    pub lines_indexed: usize,
    pub dirs_scanned: usize,
    pub dirs_skipped: usize,
    pub scanned_dirs: Vec<String>,
    pub skipped_dirs: Vec<String>,
}

impl StatsJson {
    pub fn from_index(index: &FileIndex) -> Self {
        let stats = index.stats();
        Self {
            files_scanned: stats.files_scanned,
            lines_indexed: stats.lines_indexed,
            dirs_scanned: stats.dirs_scanned,
            dirs_skipped: stats.dirs_skipped,
            scanned_dirs: display_all(index.scanned_dirs()),
            skipped_dirs: display_all(index.skipped_dirs()),
        }
    }
}

fn display_all(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// Totals, the first scanned directories and every skipped directory.
pub fn write_stats<W: Write>(out: &mut W, index: &FileIndex) -> Result<()> {
    let stats = index.stats();
    writeln!(out, "Total files scanned: {}", stats.files_scanned)?;
    writeln!(out, "Total lines indexed: {}", stats.lines_indexed)?;
    writeln!(out, "Scanned directories: {}", stats.dirs_scanned)?;
    writeln!(out, "Skipped directories: {}", stats.dirs_skipped)?;

    writeln!(out, "\nTop {} scanned directories:", STATS_DIR_PREVIEW)?;
    for dir in index.scanned_dirs().iter().take(STATS_DIR_PREVIEW) {
        writeln!(out, "  {}", dir.display())?;
    }

    writeln!(out, "\nSkipped directories:")?;
    for dir in index.skipped_dirs() {
        writeln!(out, "  {}", dir.display().to_string().dimmed())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::fuzzy_match_indexed;
    use std::path::PathBuf;

    fn sample_index() -> FileIndex {
        let mut index = FileIndex::new();
        index.push_line(PathBuf::from("notes.txt"), 1, "Red Apple".to_string());
        index.push_line(PathBuf::from("notes.txt"), 2, "blue sky".to_string());
        index
    }

    #[test]
    fn match_json_uses_original_field_names() {
        let index = sample_index();
        let matches = fuzzy_match_indexed("apple", &index);
        let json: Vec<MatchJson<'_>> = matches.iter().map(MatchJson::from_match).collect();

        let mut buf = Vec::new();
        write_json(&mut buf, &json, true).expect("json");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("parse");

        assert_eq!(value[0]["path"], "notes.txt");
        assert_eq!(value[0]["line"], 1);
        assert_eq!(value[0]["match"], "Red Apple");
        assert_eq!(value[0]["matched_words"][0], "apple");
    }

    #[test]
    fn text_matches_are_numbered_with_two_decimal_scores() {
        colored::control::set_override(false);
        let index = sample_index();
        let matches = fuzzy_match_indexed("apple", &index);
        let style = HighlightStyle::Markers {
            open: "<".to_string(),
            close: ">".to_string(),
        };

        let mut buf = Vec::new();
        write_matches(&mut buf, &matches, &style).expect("write");
        let text = String::from_utf8(buf).expect("utf8");

        assert_eq!(text, "1. (Score: 1.00) notes.txt:1\nRed <Apple>\n");
    }

    #[test]
    fn stats_list_counts_and_directories() {
        colored::control::set_override(false);
        let index = sample_index();
        let mut buf = Vec::new();
        write_stats(&mut buf, &index).expect("write");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.contains("Total lines indexed: 2"));
        assert!(text.contains("Skipped directories: 0"));
    }
}
