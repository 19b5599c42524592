//! Candidate model and deterministic ranking for completion engines.
//!
//! Candidates arrive from external sources (language servers, tag files,
//! pane scrollback, snippets, paths) already carrying their label, sort
//! key, weight adjustment and tie-breaker; this crate scores each one
//! against the typed query with `matcher` and orders the batch under a
//! strict total key. Scoring is per-candidate and runs in parallel; the
//! final sort is a single-threaded stable sort, so ranking the same batch
//! twice always yields the same order.
//!
//! All source I/O, debouncing and request lifecycles stay with the
//! producers; rendering and edit application stay with the editor layer.

mod candidate;
mod edit;
mod rank;
mod tests;

pub use candidate::{Candidate, Doc};
pub use edit::{
    Edit, OffsetEncoding, PlainEdit, RangeEdit, SnippetEdit, SnippetGrammar, SnippetRangeEdit,
    TextPos, sanitize,
};
pub use matcher::{Metrics, dl_distance, metrics, quick_ratio};
pub use rank::{CancelToken, RankConfig, rank, rank_interruptible, rank_with, score};
