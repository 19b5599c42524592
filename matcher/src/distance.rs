//! Transposition-aware edit distance.
//!
//! A Damerau–Levenshtein-style distance: insertions, deletions and
//! substitutions cost 1, and swapping two characters is cheaper than the
//! two substitutions it would otherwise take (`"ab"` → `"ba"` is 1, not 2).
//! The alignment is anchored at the front of both strings — completion
//! queries and candidate labels are compared head-on, so a mismatch in the
//! leading characters is never waived by sliding one string along the
//! other. Distances therefore run a little hotter than the textbook metric
//! for strings that only differ by a shifted prefix, which is exactly the
//! penalty wanted when ranking candidates against a typed prefix.

use std::collections::HashMap;
use std::mem::swap;

/// Edit distance between two strings, counted in Unicode scalar values.
///
/// Symmetric (`dl_distance(a, b) == dl_distance(b, a)`) and zero exactly
/// when the two strings are identical. Runs in O(|a|·|b|) time and space.
pub fn dl_distance(lhs: &str, rhs: &str) -> usize {
    let mut a: Vec<char> = lhs.chars().collect();
    let mut b: Vec<char> = rhs.chars().collect();
    // The DP below is direction-sensitive; canonical operand order makes
    // both argument orders resolve to the same computation.
    if (a.len(), &a) > (b.len(), &b) {
        swap(&mut a, &mut b);
    }

    let (la, lb) = (a.len(), b.len());
    let max_dist = la + lb;

    // Flat matrix over prefix lengths -1..=la × -1..=lb, every index offset
    // by one so the virtual -1 row and column exist. Cells default to
    // `max_dist`; only the origin is seeded, which anchors every alignment
    // at the first characters. The empty-string cases fall out of the
    // default: the final cell is never written and `max_dist` is then the
    // length of the non-empty side.
    let width = lb + 2;
    let mut d = vec![max_dist; (la + 2) * width];
    let at = move |i: usize, j: usize| i * width + j;
    d[at(1, 1)] = 0;

    // Last row registered for transposition pairing, keyed by the trailing
    // character of `b`.
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=la {
        // Column of the most recent match in this row.
        let mut db = 0;
        for j in 1..=lb {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = db;
            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };

            let substitute = d[at(i, j)] + cost;
            let insert = d[at(i + 1, j)] + 1;
            let delete = d[at(i, j + 1)] + 1;
            let transpose = d[at(k, l)] + (i - k - 1) + 1 + (j - l - 1);

            d[at(i + 1, j + 1)] = substitute.min(insert).min(delete).min(transpose);
        }
        if let Some(&tail) = b.last() {
            last_row.insert(tail, i);
        }
    }

    d[at(la + 1, lb + 1)]
}
