//! Compatibility scoring between one destination and one filter set.

use rust_decimal::Decimal;

use super::cost::estimate_trip_cost;
use super::requested_duration;
use crate::domain::destination::Destination;
use crate::domain::filters::TripFilters;

/// Points each criterion can contribute to the raw score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CriterionWeights {
    pub budget: u32,
    pub group_size: u32,
    pub season: u32,
    pub interests: u32,
    pub region: u32,
}

impl CriterionWeights {
    pub fn total(&self) -> u32 {
        self.budget + self.group_size + self.season + self.interests + self.region
    }
}

impl Default for CriterionWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Scores destinations against filters. Stateless beyond its weights;
/// construct freely per request.
#[derive(Clone, Debug, Default)]
pub struct MatchScorer {
    weights: CriterionWeights,
}

impl MatchScorer {
    pub fn new() -> Self {
        Self { weights: CriterionWeights::default() }
    }

    pub fn with_weights(weights: CriterionWeights) -> Self {
        Self { weights }
    }

    /// Overall compatibility in [0, 100].
    ///
    /// Every criterion's weight counts toward the attainable maximum whether
    /// or not the traveler expressed that preference. Most criteria award
    /// partial default credit for "no preference" — the season criterion
    /// does not, so requests without a season cap out below 100. That
    /// asymmetry is long-standing observed behavior and is preserved here;
    /// see the pinning test below before changing it.
    pub fn score(&self, destination: &Destination, filters: &TripFilters) -> u8 {
        let mut awarded = 0.0f64;

        awarded += self.budget_fit(destination, filters) as f64;
        awarded += self.group_size_fit(destination, filters) as f64;
        awarded += self.season_fit(destination, filters) as f64;
        awarded += self.interest_overlap(destination, filters);
        awarded += self.region_preference(destination, filters) as f64;

        let possible = self.weights.total() as f64;
        ((awarded / possible) * 100.0).round() as u8
    }

    /// Four-tier step function on estimated trip cost versus budget: full
    /// credit within budget, two partial tiers up to 1.2x and 1.5x, nothing
    /// beyond. Cheaper always scores at least as well.
    pub fn budget_fit(&self, destination: &Destination, filters: &TripFilters) -> u32 {
        let total =
            estimate_trip_cost(destination, filters.group_size, requested_duration(filters));

        if total <= filters.budget {
            self.weights.budget
        } else if total <= filters.budget * Decimal::new(12, 1) {
            self.weights.budget * 2 / 3
        } else if total <= filters.budget * Decimal::new(15, 1) {
            self.weights.budget / 3
        } else {
            0
        }
    }

    /// Full credit inside the supported range; near-miss credit up to two
    /// travelers over the maximum (with no lower cutoff, matching observed
    /// behavior for undersized groups).
    pub fn group_size_fit(&self, destination: &Destination, filters: &TripFilters) -> u32 {
        if filters.group_size >= destination.min_group_size
            && filters.group_size <= destination.max_group_size
        {
            self.weights.group_size
        } else if filters.group_size <= destination.max_group_size + 2 {
            self.weights.group_size * 3 / 4
        } else {
            0
        }
    }

    /// Full credit when the requested month is a best-season month, half
    /// credit for an off-season request, zero when no month was requested.
    pub fn season_fit(&self, destination: &Destination, filters: &TripFilters) -> u32 {
        match filters.season() {
            Some(month) if destination.supports_season(month) => self.weights.season,
            Some(_) => self.weights.season / 2,
            None => 0,
        }
    }

    /// Fraction of requested interests the destination speaks to, scaled by
    /// the criterion weight; flat half credit when none were requested.
    pub fn interest_overlap(&self, destination: &Destination, filters: &TripFilters) -> f64 {
        if filters.interests.is_empty() {
            return (self.weights.interests / 2) as f64;
        }

        let matched = filters
            .interests
            .iter()
            .filter(|interest| destination.appeals_to(interest))
            .count();
        matched as f64 / filters.interests.len() as f64 * self.weights.interests as f64
    }

    /// Full credit for a preferred region, half credit when the traveler has
    /// no regional preference, zero for a region outside the preference set.
    pub fn region_preference(&self, destination: &Destination, filters: &TripFilters) -> u32 {
        if filters.preferred_regions.is_empty() {
            self.weights.region / 2
        } else if filters.preferred_regions.iter().any(|region| region == &destination.region) {
            self.weights.region
        } else {
            0
        }
    }
}
