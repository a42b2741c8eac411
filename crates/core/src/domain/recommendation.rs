use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::destination::Destination;

/// Display-time decomposition of an estimated trip cost. `total` always
/// equals the sum of the four buckets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub accommodation: Decimal,
    pub activities: Decimal,
    pub food: Decimal,
    pub transport: Decimal,
    pub total: Decimal,
}

/// One ranked result. Borrows the catalog record it was derived from and
/// lives only for the duration of a request.
#[derive(Clone, Debug, Serialize)]
pub struct Recommendation<'a> {
    pub destination: &'a Destination,
    /// Compatibility score in [0, 100].
    pub match_score: u8,
    pub reasons: Vec<String>,
    pub seasonal_advice: String,
    pub cost: CostBreakdown,
}
