use serde::Serialize;

use crate::dataset::university::University;
use crate::types::identifiers::UniversityId;

/// Per-metric winners of a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub best_rating: Option<UniversityId>,
    pub lowest_price: Option<UniversityId>,
    pub best_employment: Option<UniversityId>,
}

/// Picks a winner per metric. Ties go to the earliest university.
pub fn compare(universities: &[&University]) -> ComparisonSummary {
    ComparisonSummary {
        best_rating: best_by(universities, |uni| i64::from(uni.rating)),
        lowest_price: best_by(universities, |uni| {
            uni.min_price()
                .map_or(i64::MIN, |price| -(i64::try_from(price).unwrap_or(i64::MAX)))
        }),
        best_employment: best_by(universities, |uni| i64::from(uni.employment_rate)),
    }
}

fn best_by<F>(universities: &[&University], key: F) -> Option<UniversityId>
where
    F: Fn(&University) -> i64,
{
    let mut best: Option<(&University, i64)> = None;
    for &uni in universities {
        let value = key(uni);
        match best {
            Some((_, current)) if current >= value => {}
            _ => best = Some((uni, value)),
        }
    }
    best.map(|(uni, _)| uni.id.clone())
}
