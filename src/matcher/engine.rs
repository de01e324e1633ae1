// SPDX-License-Identifier: MIT OR Apache-2.0

//! Match engine: pairs query tokens with candidate tokens and ranks candidates

use serde::Serialize;
use std::cmp::Ordering;

use super::score::score;
use super::tokenize::{match_word, tokenize};
use crate::indexer::{FileIndex, IndexedLine};

/// A query tokenized once and reusable across many candidate sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

/// Token pairing for one candidate, before it is attached to the candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub positions: Vec<usize>,
    pub matched_words: Vec<String>,
}

/// One ranked candidate, borrowed from the caller's collection.
#[derive(Debug, PartialEq)]
pub struct Ranked<'a, T: ?Sized> {
    pub candidate: &'a T,
    pub score: f64,
    pub matched_words: Vec<String>,
}

/// Ranked result over an indexed corpus.
pub type IndexedMatch<'a> = Ranked<'a, IndexedLine>;

/// Ranked result over plain strings, owning its text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    #[serde(rename = "match")]
    pub text: String,
    pub score: f64,
    pub matched_words: Vec<String>,
}

impl Query {
    pub fn new(query: &str) -> Self {
        Self {
            tokens: tokenize(query),
        }
    }

    /// True when the query produced no tokens and can never match.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Pair each query token with the first target token it matches.
    ///
    /// Every query token scans the target from the start, so one target
    /// token can satisfy several query tokens ("app apple" against "apple"
    /// matches position 0 twice). Returns `None` when nothing matched.
    pub fn score_text(&self, text: &str) -> Option<Scored> {
        if self.tokens.is_empty() {
            return None;
        }

        let target_tokens = tokenize(text);
        let mut positions = Vec::with_capacity(self.tokens.len());
        let mut matched_words = Vec::with_capacity(self.tokens.len());

        for query_token in &self.tokens {
            if let Some((idx, target_token)) = target_tokens
                .iter()
                .enumerate()
                .find(|(_, target_token)| match_word(query_token, target_token))
            {
                positions.push(idx);
                matched_words.push(target_token.clone());
            }
        }

        if positions.is_empty() {
            return None;
        }

        Some(Scored {
            score: score(&self.tokens, &target_tokens, &positions),
            positions,
            matched_words,
        })
    }

    /// Rank candidates by descending score, dropping those with no match.
    ///
    /// Equal scores keep the order the candidates were supplied in.
    pub fn rank<'a, T>(&self, candidates: impl IntoIterator<Item = &'a T>) -> Vec<Ranked<'a, T>>
    where
        T: AsRef<str> + ?Sized + 'a,
    {
        if self.tokens.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<Ranked<'a, T>> = candidates
            .into_iter()
            .filter_map(|candidate| {
                self.score_text(candidate.as_ref()).map(|scored| Ranked {
                    candidate,
                    score: scored.score,
                    matched_words: scored.matched_words,
                })
            })
            .collect();

        sort_by_score_desc(&mut ranked);
        ranked
    }
}

/// Stable descending sort; ties keep their relative order.
fn sort_by_score_desc<T: ?Sized>(results: &mut [Ranked<'_, T>]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Fuzzy-match `query` against plain text candidates.
pub fn fuzzy_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<Match> {
    let texts: Vec<&str> = candidates.iter().map(AsRef::as_ref).collect();
    Query::new(query)
        .rank(texts.iter().copied())
        .into_iter()
        .map(|ranked| Match {
            text: ranked.candidate.to_string(),
            score: ranked.score,
            matched_words: ranked.matched_words,
        })
        .collect()
}

/// Fuzzy-match `query` against every line of an indexed corpus.
pub fn fuzzy_match_indexed<'a>(query: &str, index: &'a FileIndex) -> Vec<IndexedMatch<'a>> {
    Query::new(query).rank(index.lines())
}
