use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::snapshot::DatasetSnapshot;
use crate::dataset::university::University;

/// Count of universities sharing one value, with its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub name: String,
    pub count: usize,
    /// Percentage of all universities, rounded to two decimals.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStatistics {
    pub min: u8,
    pub max: u8,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub total_universities: usize,
    pub total_programs: usize,
    pub total_grants: u64,
    pub cities: Vec<Share>,
    pub categories: Vec<Share>,
    /// Passing thresholds across all programs; absent for an empty dataset.
    pub thresholds: Option<ThresholdStatistics>,
}

/// Filter vocabulary offered to the UI and to the retrieval service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub categories: Vec<String>,
    pub ent_score_range: Option<ScoreRange>,
}

pub fn statistics(snapshot: &DatasetSnapshot) -> DatasetStatistics {
    let universities = snapshot.universities();
    let scores: Vec<u8> = snapshot.programs().map(|(_, p)| p.min_score).collect();

    let thresholds = match (scores.iter().min(), scores.iter().max()) {
        (Some(&min), Some(&max)) => {
            let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
            Some(ThresholdStatistics {
                min,
                max,
                average: round2(sum as f64 / scores.len() as f64),
            })
        }
        _ => None,
    };

    DatasetStatistics {
        total_universities: universities.len(),
        total_programs: snapshot.program_count(),
        total_grants: universities.iter().map(University::total_grants).sum(),
        cities: distribution(universities, |u| &u.city),
        categories: distribution(universities, |u| &u.category),
        thresholds,
    }
}

pub fn filter_options(snapshot: &DatasetSnapshot) -> FilterOptions {
    let universities = snapshot.universities();
    let cities: BTreeSet<&str> = universities.iter().map(|u| u.city.as_str()).collect();
    let categories: BTreeSet<&str> = universities.iter().map(|u| u.category.as_str()).collect();

    let min = universities.iter().filter_map(University::min_threshold).min();
    let max = universities.iter().filter_map(University::max_band_top).max();

    FilterOptions {
        cities: cities.into_iter().map(str::to_string).collect(),
        categories: categories.into_iter().map(str::to_string).collect(),
        ent_score_range: min.zip(max).map(|(min, max)| ScoreRange { min, max }),
    }
}

/// Sorted by count descending; equal counts keep first-appearance order.
fn distribution<F>(universities: &[University], field: F) -> Vec<Share>
where
    F: Fn(&University) -> &String,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for uni in universities {
        let value = field(uni).as_str();
        match counts.iter_mut().find(|(name, _)| *name == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = universities.len();
    counts
        .into_iter()
        .map(|(name, count)| Share {
            name: name.to_string(),
            count,
            percentage: round2(count as f64 * 100.0 / total as f64),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
