//! Scores a candidate batch and orders it under a strict total key.
//!
//! Per-candidate scoring is independent and runs across the rayon pool;
//! the ordering contract lives entirely in the final single-threaded
//! stable sort. The composite key never compares two distinct candidates
//! equal, so the output order is a pure function of the input batch.

use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use matcher::{Metrics, metrics, quick_ratio};
use rayon::prelude::*;

use crate::candidate::Candidate;

/// Knobs for [`rank_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Candidates whose [`quick_ratio`] against the query falls below this
    /// are dropped before any edit distance is computed. 0.0 keeps
    /// everything.
    pub ratio_cutoff: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { ratio_cutoff: 0.0 }
    }
}

/// Caller-owned cancellation flag for an in-flight ranking.
///
/// Cloned handles share the flag. Checked at candidate boundaries only:
/// scoring one candidate never depends on another, so an abandoned batch
/// leaves nothing to clean up.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Scores one candidate against the query.
pub fn score(query: &str, candidate: &Candidate) -> Metrics {
    metrics(query, candidate.match_text())
}

#[derive(Debug)]
struct Scored {
    metrics: Metrics,
    arrival: usize,
    candidate: Candidate,
}

/// Strict total order: similarity first (longer common prefix, then
/// smaller edit distance), then source weight, then the source-declared
/// tie-breaker, then arrival order.
fn cmp_scored(a: &Scored, b: &Scored) -> Ordering {
    b.metrics
        .prefix_matches
        .cmp(&a.metrics.prefix_matches)
        .then_with(|| a.metrics.edit_distance.cmp(&b.metrics.edit_distance))
        .then_with(|| {
            b.candidate
                .weight_adjust
                .total_cmp(&a.candidate.weight_adjust)
        })
        .then_with(|| a.candidate.tie_breaker.cmp(&b.candidate.tie_breaker))
        .then_with(|| a.arrival.cmp(&b.arrival))
}

fn score_batch(
    query: &str,
    candidates: Vec<Candidate>,
    config: &RankConfig,
    cancel: Option<&CancelToken>,
) -> Option<Vec<Scored>> {
    let scored: Vec<Option<Scored>> = candidates
        .into_par_iter()
        .enumerate()
        .map(|(arrival, candidate)| {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return None;
            }
            if config.ratio_cutoff > 0.0
                && quick_ratio(query, candidate.match_text()) < config.ratio_cutoff
            {
                return None;
            }
            Some(Scored {
                metrics: metrics(query, candidate.match_text()),
                arrival,
                candidate,
            })
        })
        .collect();

    if cancel.is_some_and(CancelToken::is_cancelled) {
        return None;
    }
    Some(scored.into_iter().flatten().collect())
}

/// Ranks a batch with the default config.
pub fn rank(query: &str, candidates: Vec<Candidate>) -> Vec<Candidate> {
    rank_with(query, candidates, &RankConfig::default())
}

/// Ranks a batch: parallel scoring, then one deterministic stable sort.
pub fn rank_with(query: &str, candidates: Vec<Candidate>, config: &RankConfig) -> Vec<Candidate> {
    let total = candidates.len();
    // Without a token, scoring always completes.
    let mut scored = score_batch(query, candidates, config, None).unwrap_or_default();
    scored.sort_by(cmp_scored);
    tracing::debug!(total, kept = scored.len(), "ranked candidate batch");
    scored.into_iter().map(|s| s.candidate).collect()
}

/// Like [`rank_with`], but abandons the batch once `cancel` fires.
///
/// Returns `None` for an abandoned batch; already-scored candidates are
/// discarded rather than returned partially ranked.
pub fn rank_interruptible(
    query: &str,
    candidates: Vec<Candidate>,
    config: &RankConfig,
    cancel: &CancelToken,
) -> Option<Vec<Candidate>> {
    let total = candidates.len();
    let mut scored = score_batch(query, candidates, config, Some(cancel))?;
    scored.sort_by(cmp_scored);
    tracing::debug!(total, kept = scored.len(), "ranked candidate batch");
    Some(scored.into_iter().map(|s| s.candidate).collect())
}
