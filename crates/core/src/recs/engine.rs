use super::advice::{reasons, seasonal_advice};
use super::cost::{breakdown, estimate_trip_cost};
use super::scoring::{CriterionWeights, MatchScorer};
use super::{requested_duration, MAX_RECOMMENDATIONS, MIN_MATCH_SCORE};
use crate::catalog::Catalog;
use crate::domain::filters::TripFilters;
use crate::domain::recommendation::Recommendation;

/// Scores the whole catalog against one filter set and returns the ranked
/// shortlist. Stateless beyond its scorer weights, so one engine value can
/// serve any number of independent requests.
#[derive(Clone, Debug, Default)]
pub struct RecommendationEngine {
    scorer: MatchScorer,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self { scorer: MatchScorer::new() }
    }

    pub fn with_weights(weights: CriterionWeights) -> Self {
        Self { scorer: MatchScorer::with_weights(weights) }
    }

    /// Rank the catalog against the filters.
    ///
    /// Entries below [`MIN_MATCH_SCORE`] are discarded; survivors sort by
    /// score descending with catalog order breaking ties (stable sort), and
    /// at most [`MAX_RECOMMENDATIONS`] are returned. Pure in its inputs:
    /// identical `(catalog, filters)` always yield identical output, and an
    /// empty result is a valid outcome rather than an error.
    pub fn recommend<'c>(
        &self,
        catalog: &'c Catalog,
        filters: &TripFilters,
    ) -> Vec<Recommendation<'c>> {
        let mut results: Vec<Recommendation<'c>> = catalog
            .iter()
            .filter_map(|destination| {
                let match_score = self.scorer.score(destination, filters);
                if match_score < MIN_MATCH_SCORE {
                    return None;
                }

                let total = estimate_trip_cost(
                    destination,
                    filters.group_size,
                    requested_duration(filters),
                );

                Some(Recommendation {
                    destination,
                    match_score,
                    reasons: reasons(destination, filters, match_score),
                    seasonal_advice: seasonal_advice(destination, filters.season()),
                    cost: breakdown(total),
                })
            })
            .collect();

        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results.truncate(MAX_RECOMMENDATIONS);
        results
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::destination::fixtures::destination;
    use crate::domain::destination::Destination;

    fn spread_catalog(count: usize) -> Catalog {
        let destinations: Vec<Destination> = (0..count)
            .map(|index| {
                let mut dest = destination(&format!("d-{index}"));
                // Spread prices so budget tiers differentiate the scores.
                dest.price = Decimal::from(1_000 + (index as i64) * 400);
                dest
            })
            .collect();
        Catalog::new(destinations)
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let engine = RecommendationEngine::new();
        let filters = TripFilters::new(6_000, 2);
        assert!(engine.recommend(&Catalog::default(), &filters).is_empty());
    }

    #[test]
    fn results_are_capped_at_ten() {
        let engine = RecommendationEngine::new();
        let catalog = spread_catalog(25);
        let filters = TripFilters::new(50_000, 2).with_season("October");

        let results = engine.recommend(&catalog, &filters);
        assert_eq!(results.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn every_result_clears_the_confidence_floor() {
        let engine = RecommendationEngine::new();
        let catalog = spread_catalog(25);
        let filters = TripFilters::new(4_000, 12).with_season("June");

        for rec in engine.recommend(&catalog, &filters) {
            assert!(rec.match_score >= MIN_MATCH_SCORE);
        }
    }

    #[test]
    fn scores_are_non_increasing_and_ties_keep_catalog_order() {
        let engine = RecommendationEngine::new();
        let catalog = spread_catalog(25);
        let filters = TripFilters::new(9_000, 2).with_season("October");

        let results = engine.recommend(&catalog, &filters);
        assert!(!results.is_empty());

        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
            if pair[0].match_score == pair[1].match_score {
                let first = catalog
                    .iter()
                    .position(|d| d.id == pair[0].destination.id)
                    .expect("in catalog");
                let second = catalog
                    .iter()
                    .position(|d| d.id == pair[1].destination.id)
                    .expect("in catalog");
                assert!(first < second, "ties must keep catalog order");
            }
        }
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let engine = RecommendationEngine::new();
        let catalog = spread_catalog(12);
        let filters = TripFilters::new(8_000, 3)
            .with_season("October")
            .with_interests(vec!["coffee".to_string()]);

        let first = engine.recommend(&catalog, &filters);
        let second = engine.recommend(&catalog, &filters);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.destination.id, b.destination.id);
            assert_eq!(a.match_score, b.match_score);
            assert_eq!(a.reasons, b.reasons);
            assert_eq!(a.seasonal_advice, b.seasonal_advice);
            assert_eq!(a.cost, b.cost);
        }
    }

    #[test]
    fn below_floor_entries_are_dropped_not_errored() {
        let engine = RecommendationEngine::new();
        // One wildly unaffordable destination for a tiny budget and a season
        // it does not support.
        let mut dest = destination("d-0");
        dest.price = Decimal::from(90_000);
        dest.min_group_size = 4;
        dest.max_group_size = 6;
        let catalog = Catalog::new(vec![dest]);

        let filters = TripFilters::new(1_000, 20).with_season("June");
        assert!(engine.recommend(&catalog, &filters).is_empty());
    }

    #[test]
    fn recommendations_carry_cost_breakdown_of_the_estimate() {
        let engine = RecommendationEngine::new();
        let catalog = Catalog::new(vec![destination("ap-1")]);
        let filters = TripFilters::new(20_000, 2).with_season("October");

        let results = engine.recommend(&catalog, &filters);
        assert_eq!(results.len(), 1);

        let cost = &results[0].cost;
        assert_eq!(cost.total, Decimal::from(15_200));
        assert_eq!(
            cost.accommodation + cost.activities + cost.food + cost.transport,
            cost.total,
        );
    }
}
