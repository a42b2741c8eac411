//! Recommendation matching engine.
//!
//! Scores every catalog entry against a traveler's constraints, explains the
//! score, attaches a cost breakdown, and returns a ranked shortlist. Every
//! function here is pure and total: malformed optional inputs degrade to
//! documented defaults instead of failing.

pub mod advice;
pub mod cost;
mod engine;
mod scoring;

pub use engine::RecommendationEngine;
pub use scoring::{CriterionWeights, MatchScorer};

use crate::domain::filters::TripFilters;

/// Default criterion weights, summing to 100.
pub const DEFAULT_WEIGHTS: CriterionWeights =
    CriterionWeights { budget: 30, group_size: 20, season: 20, interests: 20, region: 10 };

/// Confidence floor: entries scoring below this are noise, not candidates.
pub const MIN_MATCH_SCORE: u8 = 30;

/// Upper bound on the ranked shortlist.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Stay length assumed when the traveler gives none.
pub const DEFAULT_DURATION: &str = "2-3 days";

/// The duration label to estimate against, with blank labels treated the
/// same as absent ones.
pub(crate) fn requested_duration(filters: &TripFilters) -> &str {
    filters
        .duration
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or(DEFAULT_DURATION)
}
