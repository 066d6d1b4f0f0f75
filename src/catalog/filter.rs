use serde::{Deserialize, Serialize};

use crate::dataset::snapshot::DatasetSnapshot;
use crate::dataset::university::{University, UniversityKind};

/// Browse-catalog filter. Empty sets and `None` disable a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    /// Case-insensitive substring over name and city.
    pub search: String,
    pub cities: Vec<String>,
    pub kinds: Vec<UniversityKind>,
    /// Compared with the cheapest program of each university.
    pub max_price: Option<u64>,
    pub require_dormitory: bool,
    pub require_military_department: bool,
    pub min_rating: Option<u8>,
}

impl CatalogFilter {
    pub fn matches(&self, university: &University) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || university.name.to_lowercase().contains(&needle)
            || university.city.to_lowercase().contains(&needle);

        let matches_city = self.cities.is_empty() || self.cities.contains(&university.city);
        let matches_kind = self.kinds.is_empty() || self.kinds.contains(&university.kind);
        let matches_price = match (self.max_price, university.min_price()) {
            (Some(cap), Some(price)) => price <= cap,
            _ => true,
        };
        let matches_dorm = !self.require_dormitory || university.dormitory;
        let matches_military = !self.require_military_department || university.military_department;
        let matches_rating = self.min_rating.map_or(true, |min| university.rating >= min);

        matches_search
            && matches_city
            && matches_kind
            && matches_price
            && matches_dorm
            && matches_military
            && matches_rating
    }

    /// Number of non-search predicates currently active.
    pub fn active_count(&self) -> usize {
        self.cities.len()
            + self.kinds.len()
            + usize::from(self.max_price.is_some())
            + usize::from(self.require_dormitory)
            + usize::from(self.require_military_department)
            + usize::from(self.min_rating.is_some())
    }
}

/// Universities accepted by `filter`, in dataset order.
pub fn filter_catalog<'a>(snapshot: &'a DatasetSnapshot, filter: &CatalogFilter) -> Vec<&'a University> {
    snapshot
        .universities()
        .iter()
        .filter(|uni| filter.matches(uni))
        .collect()
}
