use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationId(pub String);

/// Price band a destination is marketed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sustainability {
    pub carbon_footprint: String,
    /// Free text; may carry a percentage figure ("90% revenue to local
    /// farmers") that the advice generator matches on heuristically.
    pub community_impact: String,
    pub cultural_preservation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub name: String,
    pub experience: String,
    pub languages: Vec<String>,
}

/// One bookable rural location as published in the catalog. Immutable inside
/// the engine; the catalog source owns these records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub location: String,
    pub region: String,
    pub description: String,
    /// Per-night price in whole currency units.
    pub price: Decimal,
    pub rating: f64,
    pub reviews: u32,
    /// Month names in which the destination is at its best. Never empty.
    pub best_season: Vec<String>,
    pub ideal_for: Vec<String>,
    pub budget_tier: BudgetTier,
    pub min_group_size: u32,
    pub max_group_size: u32,
    /// Suggested stay length as published ("2-3 days").
    pub duration: String,
    pub difficulty: Difficulty,
    pub sustainability: Sustainability,
    pub host: HostInfo,
    pub tags: Vec<String>,
    pub activities: Vec<String>,
    pub accommodation: Vec<String>,
}

impl Destination {
    pub fn supports_season(&self, month: &str) -> bool {
        self.best_season.iter().any(|best| best == month)
    }

    /// Case-insensitive substring match of an interest against the
    /// destination's tags or ideal-for labels.
    pub fn appeals_to(&self, interest: &str) -> bool {
        let needle = interest.to_lowercase();
        self.tags
            .iter()
            .chain(self.ideal_for.iter())
            .any(|term| term.to_lowercase().contains(&needle))
    }

    /// Like [`Self::appeals_to`] but restricted to tags. The reason
    /// generator matches more narrowly than the scorer does.
    pub fn tagged_with(&self, interest: &str) -> bool {
        let needle = interest.to_lowercase();
        self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price <= Decimal::ZERO {
            return Err(DomainError::InvariantViolation(format!(
                "destination `{}` must have a positive nightly price",
                self.id.0
            )));
        }
        if self.min_group_size == 0 {
            return Err(DomainError::InvariantViolation(format!(
                "destination `{}` must support groups of at least one",
                self.id.0
            )));
        }
        if self.min_group_size > self.max_group_size {
            return Err(DomainError::InvariantViolation(format!(
                "destination `{}` has min_group_size {} above max_group_size {}",
                self.id.0, self.min_group_size, self.max_group_size
            )));
        }
        if self.best_season.is_empty() {
            return Err(DomainError::InvariantViolation(format!(
                "destination `{}` must name at least one best-season month",
                self.id.0
            )));
        }
        Ok(())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "mid-range" | "mid_range" | "midrange" => Ok(Self::MidRange),
            "luxury" => Ok(Self::Luxury),
            other => Err(DomainError::InvariantViolation(format!(
                "unknown budget tier `{other}` (expected budget|mid-range|luxury)"
            ))),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "challenging" => Ok(Self::Challenging),
            other => Err(DomainError::InvariantViolation(format!(
                "unknown difficulty `{other}` (expected easy|moderate|challenging)"
            ))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::destination;
    use super::*;

    #[test]
    fn valid_destination_passes_validation() {
        destination("ap-1").validate().expect("fixture should be valid");
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut dest = destination("ap-1");
        dest.price = Decimal::ZERO;
        let error = dest.validate().expect_err("zero price should fail");
        assert!(matches!(error, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn rejects_inverted_group_size_bounds() {
        let mut dest = destination("ap-1");
        dest.min_group_size = 9;
        dest.max_group_size = 4;
        assert!(dest.validate().is_err());
    }

    #[test]
    fn rejects_empty_best_season() {
        let mut dest = destination("ap-1");
        dest.best_season.clear();
        assert!(dest.validate().is_err());
    }

    #[test]
    fn interest_matching_is_case_insensitive_substring() {
        let dest = destination("ap-1");
        assert!(dest.appeals_to("COFFEE"));
        assert!(dest.appeals_to("photo"));
        assert!(!dest.appeals_to("surfing"));
    }

    #[test]
    fn tag_matching_excludes_ideal_for_labels() {
        let dest = destination("ap-1");
        assert!(dest.tagged_with("coffee"));
        assert!(!dest.tagged_with("photo"));
    }

    #[test]
    fn budget_tier_round_trips_through_serde_names() {
        let json = serde_json::to_string(&BudgetTier::MidRange).expect("serialize");
        assert_eq!(json, "\"mid-range\"");
        let tier: BudgetTier = serde_json::from_str("\"luxury\"").expect("deserialize");
        assert_eq!(tier, BudgetTier::Luxury);
    }
}
