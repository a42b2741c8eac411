use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::destination::{Destination, DestinationId};
use crate::domain::filters::TripFilters;
use crate::errors::DomainError;

/// Read-only, ordered collection of destination records. The engine always
/// receives the complete set; it never asks the source for pagination or
/// mutation.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid destination `{id}`: {source}")]
    InvalidDestination { id: String, source: DomainError },
}

/// Presentation orderings for catalog browsing. `Featured` preserves the
/// publisher's order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Featured,
    Price,
    Rating,
    Reviews,
}

impl std::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "featured" => Ok(Self::Featured),
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "reviews" => Ok(Self::Reviews),
            other => Err(DomainError::InvariantViolation(format!(
                "unknown sort key `{other}` (expected featured|price|rating|reviews)"
            ))),
        }
    }
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// Parse a JSON array of destination records, validating each record's
    /// invariants before accepting the catalog.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_str(raw)?;
        for destination in &destinations {
            destination.validate().map_err(|source| CatalogError::InvalidDestination {
                id: destination.id.0.clone(),
                source,
            })?;
        }
        Ok(Self { destinations })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn find(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|destination| &destination.id == id)
    }

    /// Region names in publication order, deduplicated.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for destination in &self.destinations {
            if !regions.iter().any(|region| region == &destination.region) {
                regions.push(destination.region.clone());
            }
        }
        regions
    }

    pub fn by_region(&self, region: &str) -> Vec<&Destination> {
        self.destinations.iter().filter(|destination| destination.region == region).collect()
    }

    /// Strict, non-scored shortlist: every supplied constraint must hold.
    /// Unlike the recommendation pipeline this is a hard filter — a near
    /// miss is excluded rather than down-ranked. Affordability is gated on a
    /// rough two-night stay.
    pub fn refine(&self, filters: &TripFilters) -> Vec<&Destination> {
        self.destinations
            .iter()
            .filter(|destination| {
                if !filters.preferred_regions.is_empty()
                    && !filters
                        .preferred_regions
                        .iter()
                        .any(|region| region == &destination.region)
                {
                    return false;
                }
                if let Some(tier) = filters.budget_tier {
                    if destination.budget_tier != tier {
                        return false;
                    }
                }
                if let Some(difficulty) = filters.difficulty {
                    if destination.difficulty != difficulty {
                        return false;
                    }
                }
                if !filters.interests.is_empty()
                    && !filters.interests.iter().any(|interest| destination.appeals_to(interest))
                {
                    return false;
                }
                if let Some(season) = filters.season() {
                    if !destination.supports_season(season) {
                        return false;
                    }
                }
                if filters.group_size < destination.min_group_size
                    || filters.group_size > destination.max_group_size
                {
                    return false;
                }
                destination.price * Decimal::from(2u32) <= filters.budget
            })
            .collect()
    }

    /// Browse ordering. Ties keep publication order (stable sort).
    pub fn sorted(&self, key: SortKey) -> Vec<&Destination> {
        let mut list: Vec<&Destination> = self.destinations.iter().collect();
        match key {
            SortKey::Featured => {}
            SortKey::Price => list.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::Rating => list.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::Reviews => list.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        }
        list
    }
}
