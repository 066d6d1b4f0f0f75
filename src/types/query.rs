use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::university::DegreeLevel;
use crate::estimation::{EstimateError, EstimationStrategy, StrategyKind};
use crate::types::identifiers::{ProgramId, UniversityId};
use crate::types::score::{ConfidenceTier, MAX_EXAM_SCORE, MIN_EXAM_SCORE};

/// Exact-match filter over a string field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    Any,
    Exact(String),
}

impl Filter {
    /// Maps a UI label to a filter; `any_label` (e.g. "Все города") and blank
    /// labels disable the filter.
    pub fn from_label(label: &str, any_label: &str) -> Self {
        if label.trim().is_empty() || label == any_label {
            Filter::Any
        } else {
            Filter::Exact(label.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Filter::Any => true,
            Filter::Exact(expected) => expected == value,
        }
    }

    /// Like [`Filter::matches`], but an exact value equal to `any_label`
    /// accepts everything.
    pub fn matches_or_any(&self, value: &str, any_label: &str) -> bool {
        match self {
            Filter::Exact(expected) if expected == any_label => true,
            _ => self.matches(value),
        }
    }

    pub fn as_exact(&self) -> Option<&str> {
        match self {
            Filter::Any => None,
            Filter::Exact(value) => Some(value),
        }
    }
}

/// Per-request applicant input.
///
/// `exam_score` is kept as received; it is validated by the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantQuery {
    pub exam_score: i32,
    #[serde(default)]
    pub category: Filter,
    #[serde(default)]
    pub city: Filter,
    #[serde(default)]
    pub rural_quota: bool,
    #[serde(default)]
    pub subject_pair: Option<String>,
    #[serde(default)]
    pub strategy: EstimationStrategy,
    #[serde(default)]
    pub degree: Option<DegreeLevel>,
    #[serde(default)]
    pub max_annual_price: Option<u64>,
}

impl ApplicantQuery {
    pub fn new(exam_score: i32) -> Self {
        Self {
            exam_score,
            category: Filter::Any,
            city: Filter::Any,
            rural_quota: false,
            subject_pair: None,
            strategy: EstimationStrategy::default(),
            degree: None,
            max_annual_price: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Filter::Exact(category.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Filter::Exact(city.into());
        self
    }

    pub fn with_rural_quota(mut self, enabled: bool) -> Self {
        self.rural_quota = enabled;
        self
    }

    pub fn with_subject_pair(mut self, pair_id: impl Into<String>) -> Self {
        self.subject_pair = Some(pair_id.into());
        self
    }

    pub fn with_strategy(mut self, strategy: EstimationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_degree(mut self, degree: DegreeLevel) -> Self {
        self.degree = Some(degree);
        self
    }

    pub fn with_max_annual_price(mut self, price: u64) -> Self {
        self.max_annual_price = Some(price);
        self
    }

    /// Exam score plus `rural_bonus` when the rural quota applies.
    /// Saturates instead of overflowing on unvalidated scores.
    pub fn effective_score(&self, rural_bonus: u8) -> i32 {
        if self.rural_quota {
            self.exam_score.saturating_add(i32::from(rural_bonus))
        } else {
            self.exam_score
        }
    }
}

/// One scored (university, program) pair. Self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantPrediction {
    pub university_id: UniversityId,
    pub university_name: String,
    pub program_id: ProgramId,
    pub program_name: String,
    pub city: String,
    pub category: String,
    pub degree: DegreeLevel,
    pub annual_price: u64,
    pub grants: u32,
    pub min_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u8>,

    pub probability_percent: u8,
    pub confidence_tier: ConfidenceTier,
    pub score_gap: i32,
    pub strategy: StrategyKind,
}

/// Metadata describing how a query was evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySummary {
    pub exam_score: i32,
    pub effective_score: i32,
    pub dataset_version: String,

    pub programs_considered: usize,
    pub programs_matched: usize,
}

/// Ordered predictions plus summary. An empty `predictions` list is a
/// normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub predictions: Vec<GrantPrediction>,
    pub summary: QuerySummary,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Exam score {score} is outside {}..={}", MIN_EXAM_SCORE, MAX_EXAM_SCORE)]
    ScoreOutOfRange { score: i32 },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Unknown subject pair: {0}")]
    UnknownSubjectPair(String),

    #[error("Estimation error: {0}")]
    Estimate(#[from] EstimateError),
}
