use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::destination::{BudgetTier, Difficulty};

/// Traveler constraints driving one recommendation request. Budget and group
/// size are required; every other field is a preference the scorer treats as
/// "no preference" when absent. Request-scoped, never shared across calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripFilters {
    /// Total trip budget in whole currency units.
    pub budget: Decimal,
    pub group_size: u32,
    /// Empty means no regional preference.
    pub preferred_regions: Vec<String>,
    /// Single month name; blank is treated the same as absent.
    pub season: Option<String>,
    /// Empty means no interest preference.
    pub interests: Vec<String>,
    /// Stay-length label such as "2-3 days"; parsed leniently.
    pub duration: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub budget_tier: Option<BudgetTier>,
}

impl TripFilters {
    pub fn new(budget: impl Into<Decimal>, group_size: u32) -> Self {
        Self {
            budget: budget.into(),
            group_size,
            preferred_regions: Vec::new(),
            season: None,
            interests: Vec::new(),
            duration: None,
            difficulty: None,
            budget_tier: None,
        }
    }

    pub fn with_preferred_regions(mut self, regions: Vec<String>) -> Self {
        self.preferred_regions = regions;
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_budget_tier(mut self, tier: BudgetTier) -> Self {
        self.budget_tier = Some(tier);
        self
    }

    /// The requested month, with blank values normalized away.
    pub fn season(&self) -> Option<&str> {
        self.season.as_deref().map(str::trim).filter(|month| !month.is_empty())
    }

    /// Extract filters from a free-text request ("around 4000 for a nature
    /// trip in Kerala"). The first number becomes the budget, known interest
    /// keywords become interests, and any known region mentioned by name
    /// becomes a regional preference. Falls back to a 5000-budget trip for
    /// two when the text gives nothing to work with.
    pub fn from_query(query: &str, known_regions: &[String]) -> Self {
        let lowered = query.to_lowercase();
        let mut filters = Self::new(Decimal::from(5000u32), 2);

        let digits: String = query
            .chars()
            .skip_while(|ch| !ch.is_ascii_digit())
            .take_while(|ch| ch.is_ascii_digit())
            .collect();
        if let Ok(budget) = digits.parse::<i64>() {
            filters.budget = Decimal::from(budget);
        }

        let mut interests = Vec::new();
        for (token, interest) in [
            ("adventure", "Adventure"),
            ("culture", "Culture"),
            ("nature", "Nature"),
            ("food", "Food"),
            ("peace", "Peaceful"),
        ] {
            if lowered.contains(token) {
                interests.push(interest.to_string());
            }
        }
        filters.interests = interests;

        filters.preferred_regions = known_regions
            .iter()
            .filter(|region| lowered.contains(&region.to_lowercase()))
            .cloned()
            .collect();

        filters
    }
}
