pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod recs;
pub mod suggest;

pub use catalog::{Catalog, CatalogError, SortKey};
pub use domain::destination::{
    BudgetTier, Destination, DestinationId, Difficulty, HostInfo, Sustainability,
};
pub use domain::filters::TripFilters;
pub use domain::recommendation::{CostBreakdown, Recommendation};
pub use errors::DomainError;
pub use recs::{
    CriterionWeights, MatchScorer, RecommendationEngine, DEFAULT_WEIGHTS, MAX_RECOMMENDATIONS,
    MIN_MATCH_SCORE,
};
pub use suggest::{suggest, MAX_SUGGESTIONS};
