// SPDX-License-Identifier: MIT OR Apache-2.0

//! Highlighting of matched words inside a result line

use colored::Colorize;
use regex::RegexBuilder;

/// How matched words are marked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HighlightStyle {
    /// Leave the line untouched.
    Plain,
    /// Terminal bold via `colored` (respects `NO_COLOR` and tty detection).
    #[default]
    Bold,
    /// Wrap each match in literal markers.
    Markers { open: String, close: String },
}

impl HighlightStyle {
    fn mark(&self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Bold => text.bold().to_string(),
            Self::Markers { open, close } => format!("{open}{text}{close}"),
        }
    }
}

/// Mark `words` in `line`, in order, each searched after the previous match.
///
/// Matching ignores case so the original casing of the line is kept. A word
/// that cannot be found after the previous match is skipped.
pub fn highlight<S: AsRef<str>>(line: &str, words: &[S], style: &HighlightStyle) -> String {
    if *style == HighlightStyle::Plain {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut last = 0;

    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            continue;
        }
        let Ok(re) = RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        if let Some(found) = re.find_at(line, last) {
            out.push_str(&line[last..found.start()]);
            out.push_str(&style.mark(found.as_str()));
            last = found.end();
        }
    }

    out.push_str(&line[last..]);
    out
}
