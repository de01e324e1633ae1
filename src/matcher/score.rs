// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relevance scoring for a single candidate

/// Weight applied to coverage on top of coverage itself.
const COMPLETENESS_WEIGHT: f64 = 0.5;
/// Bonus for each adjacent pair of matches that keeps query order.
const ORDER_BONUS: f64 = 0.01;
/// Penalty for each target token beyond the query's token count.
const EXTRA_WORD_PENALTY: f64 = 0.05;

/// Score a candidate from the positions its query tokens matched at.
///
/// `matched_positions` holds, in query-token order, the target index chosen
/// for every query token that matched. The result is clamped to `[0.0, 1.0]`.
/// An empty query scores `0.0`.
pub fn score<Q, T>(query_tokens: &[Q], target_tokens: &[T], matched_positions: &[usize]) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }

    let coverage = matched_positions.len() as f64 / query_tokens.len() as f64;
    let completeness_bonus = coverage * COMPLETENESS_WEIGHT;

    let in_order = matched_positions
        .windows(2)
        .filter(|pair| pair[1] > pair[0])
        .count();
    let order_bonus = ORDER_BONUS * in_order as f64;

    let extra_words = target_tokens.len().saturating_sub(query_tokens.len());
    let length_penalty = EXTRA_WORD_PENALTY * extra_words as f64;

    let raw = coverage + completeness_bonus + order_bonus - length_penalty;
    raw.clamp(0.0, 1.0)
}
