//! Per-candidate similarity metrics.

use crate::distance::dl_distance;

/// Similarity of one candidate against the query, as plain data.
///
/// Produced fresh per (query, candidate) pair; carries no identity and no
/// shared state, so batches can be computed concurrently and compared
/// however the consumer likes. Higher `prefix_matches` and lower
/// `edit_distance` both mean "more similar".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Length of the common literal prefix, in chars.
    pub prefix_matches: usize,
    /// `dl_distance` between the query and the candidate's leading window.
    pub edit_distance: usize,
}

/// Scores `word` against the query `cword`.
///
/// `prefix_matches` compares char-by-char from index 0, case-sensitively.
/// `edit_distance` is computed against the leading window of `word` sized
/// to the query: typing `"ab"` should not penalize a candidate `"abab"`
/// for the text the user has not typed yet.
pub fn metrics(cword: &str, word: &str) -> Metrics {
    let prefix_matches = cword
        .chars()
        .zip(word.chars())
        .take_while(|(l, r)| l == r)
        .count();

    let query_len = cword.chars().count();
    let window: String = word.chars().take(query_len).collect();

    Metrics {
        prefix_matches,
        edit_distance: dl_distance(cword, &window),
    }
}
