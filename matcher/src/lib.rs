//! Pure string-similarity scoring for completion ranking.
//!
//! Pipeline: query + candidate text → `quick_ratio` pre-filter →
//! `metrics` (common prefix + edit distance) → composite ordering in the
//! `ranker` crate. Everything here is a stateless transform over Unicode
//! scalar values: no caches, no globals, safe to call from any thread.
//! Inputs are matched literally; callers normalize case or width first if
//! they want folded matching.

mod distance;
mod metrics;
mod ratio;

pub use distance::dl_distance;
pub use metrics::{Metrics, metrics};
pub use ratio::quick_ratio;
