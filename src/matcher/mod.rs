// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matcher module - tokenization, word matching, scoring and ranking

pub mod engine;
pub mod score;
pub mod tokenize;

pub use engine::{fuzzy_match, fuzzy_match_indexed, IndexedMatch, Match, Query, Ranked, Scored};
pub use score::score;
pub use tokenize::{match_word, tokenize};
