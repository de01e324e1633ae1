// SPDX-License-Identifier: MIT OR Apache-2.0

//! Word tokenization and prefix matching

use regex::Regex;
use std::sync::LazyLock;

/// A word is a run of Unicode letters (`L*`) and numbers (`N*`). Combining
/// marks and symbols such as circled letters separate words.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid"));

/// Split text into lowercase word tokens.
///
/// Lowercasing is per character with no final-sigma context, so `Σ` always
/// becomes `σ`. Everything between words is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered: String = text.chars().flat_map(char::to_lowercase).collect();
    WORD_RE
        .find_iter(&lowered)
        .map(|word| word.as_str().to_string())
        .collect()
}

/// True when `query` equals `target` or is a non-empty prefix of it.
///
/// Both words are expected to be lowercased already (see [`tokenize`]).
pub fn match_word(query: &str, target: &str) -> bool {
    if query == target {
        return true;
    }
    !query.is_empty() && query.len() <= target.len() && target.starts_with(query)
}
