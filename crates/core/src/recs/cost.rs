//! Trip cost estimation.
//!
//! Two deliberately independent computations share this module: the
//! scoring-time total (base cost plus activity/food/transport loadings,
//! scaled by a sub-linear group factor) and the display-time breakdown
//! (percentage splits of that total). Callers must not assume the two agree
//! bucket-for-bucket.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::destination::Destination;
use crate::domain::recommendation::CostBreakdown;

/// Nights assumed when a duration label carries no number.
pub const DEFAULT_NIGHTS: u32 = 2;

/// Lenient stay-length parse: the first contiguous digit run in the label
/// wins ("2-3 days" → 2, "1+ weeks" → 1). Labels with no number fall back to
/// [`DEFAULT_NIGHTS`]; nothing here ever fails.
pub fn parse_nights(label: &str) -> u32 {
    let digits: String = label
        .chars()
        .skip_while(|ch| !ch.is_ascii_digit())
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(DEFAULT_NIGHTS)
}

/// Estimated total cost of a stay for the whole group.
///
/// Accommodation is nightly price times nights; activities, food, and
/// transport are loaded on top at 30/40/20 percent of accommodation; the sum
/// is scaled by `group_size * 0.8`, a sub-linear headcount heuristic.
pub fn estimate_trip_cost(
    destination: &Destination,
    group_size: u32,
    duration_label: &str,
) -> Decimal {
    let nights = parse_nights(duration_label);
    let base = destination.price * Decimal::from(nights);
    let activities = round_whole(base * Decimal::new(30, 2));
    let food = round_whole(base * Decimal::new(40, 2));
    let transport = round_whole(base * Decimal::new(20, 2));

    let group_factor = Decimal::from(group_size) * Decimal::new(8, 1);
    round_whole((base + activities + food + transport) * group_factor)
}

/// Display-time split of an estimated total into 40/25/20/15 percent
/// buckets. Transport absorbs the rounding remainder so the buckets always
/// sum exactly to `total`.
pub fn breakdown(total: Decimal) -> CostBreakdown {
    let accommodation = round_whole(total * Decimal::new(40, 2));
    let activities = round_whole(total * Decimal::new(25, 2));
    let food = round_whole(total * Decimal::new(20, 2));
    let transport = total - accommodation - activities - food;

    CostBreakdown { accommodation, activities, food, transport, total }
}

/// Round to a whole currency unit, half away from zero.
fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
