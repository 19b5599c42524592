//! Cheap similarity pre-filter.

use std::collections::HashMap;

/// Frequency-overlap similarity in `[0, 1]`, symmetric.
///
/// Both strings are truncated to the shorter one's length in chars (the
/// leading window — for completion, the typed prefix against the head of a
/// candidate) and the ratio is the per-character multiset overlap of the
/// two windows. Position inside the window is ignored, so this
/// over-estimates: it is an upper bound on alignment-based similarity and
/// is only good for discarding clearly dissimilar candidates before paying
/// for `dl_distance`, never for promoting one candidate over another.
///
/// A degenerate window (either string empty) is 1.0: an empty query carries
/// no evidence of dissimilarity.
pub fn quick_ratio(lhs: &str, rhs: &str) -> f64 {
    let a: Vec<char> = lhs.chars().collect();
    let b: Vec<char> = rhs.chars().collect();
    let window = a.len().min(b.len());
    if window == 0 {
        return 1.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for &c in &a[..window] {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut matches = 0;
    for &c in &b[..window] {
        if let Some(n) = counts.get_mut(&c) {
            if *n > 0 {
                *n -= 1;
                matches += 1;
            }
        }
    }

    // 2·matches / (len + len) over two equal-sized windows.
    matches as f64 / window as f64
}
