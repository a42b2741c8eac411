//! Human-readable justification for a match, derived from the same inputs
//! the scorer sees. Check order fixes reason order.

use rust_decimal::Decimal;

use crate::domain::destination::{BudgetTier, Destination};
use crate::domain::filters::TripFilters;

/// Score at or above which a match is praised outright.
const STRONG_MATCH_SCORE: u8 = 80;

/// Requested budgets under this are treated as cost-conscious.
const AFFORDABLE_BUDGET: i64 = 5_000;

pub fn reasons(destination: &Destination, filters: &TripFilters, score: u8) -> Vec<String> {
    let mut reasons = Vec::new();

    if score >= STRONG_MATCH_SCORE {
        reasons.push(format!("Perfect match for your {} person group", filters.group_size));
    }

    if let Some(season) = filters.season() {
        if destination.supports_season(season) {
            reasons.push(format!("Ideal season for visiting ({season})"));
        }
    }

    // Narrower than the scorer: only tag matches are worth naming.
    let matched: Vec<&str> = filters
        .interests
        .iter()
        .filter(|interest| destination.tagged_with(interest))
        .map(String::as_str)
        .collect();
    if !matched.is_empty() {
        reasons.push(format!("Matches your interests: {}", matched.join(", ")));
    }

    if destination.rating >= 4.5 {
        reasons.push(format!("Highly rated destination ({}/5)", destination.rating));
    }

    if destination.sustainability.community_impact.contains("90%")
        || destination.sustainability.community_impact.contains("95%")
    {
        reasons.push("High community impact - supports local families directly".to_string());
    }

    if destination.budget_tier == BudgetTier::Budget
        && filters.budget < Decimal::from(AFFORDABLE_BUDGET)
    {
        reasons.push("Budget-friendly option with authentic experiences".to_string());
    }

    reasons
}

pub fn seasonal_advice(destination: &Destination, season: Option<&str>) -> String {
    let Some(season) = season else {
        return "Visit during the recommended months for the best experience.".to_string();
    };

    if destination.supports_season(season) {
        format!(
            "{season} is perfect for {}! Expect pleasant weather and optimal conditions for all activities.",
            destination.name
        )
    } else {
        let best_months: Vec<&str> =
            destination.best_season.iter().take(3).map(String::as_str).collect();
        format!(
            "While {season} is possible, consider visiting during {} for the best experience.",
            best_months.join(", ")
        )
    }
}
