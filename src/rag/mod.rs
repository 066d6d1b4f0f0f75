//! Request/response contract of the external retrieval (RAG) service.
//!
//! Only the shapes and their validation live here; transport is the
//! caller's concern. [`RagFilters`] shares its vocabulary with
//! [`ApplicantQuery`] so one set of query parameters can drive both.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::university::University;
use crate::types::query::ApplicantQuery;
use crate::types::score::is_valid_exam_score;

pub const QUESTION_MIN_CHARS: usize = 3;
pub const QUESTION_MAX_CHARS: usize = 1000;
pub const TOP_K_MAX: u8 = 10;
/// Number of sources the service retrieves when `top_k` is absent.
pub const DEFAULT_TOP_K: u8 = 5;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Error, PartialEq)]
pub enum RagContractError {
    #[error("Question must be {}..={} characters, got {0}", QUESTION_MIN_CHARS, QUESTION_MAX_CHARS)]
    QuestionLength(usize),
    #[error("top_k must be 1..={}, got {0}", TOP_K_MAX)]
    TopK(u8),
    #[error("Temperature must be within 0..=1, got {0}")]
    Temperature(f64),
    #[error("Source {id} has relevance score {score} outside 0..=1")]
    RelevanceScore { id: i64, score: f64 },
}

/// Filter object accepted by the retrieval service. Absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RagFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ent_min_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ent_max_score: Option<u8>,
}

impl RagFilters {
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.category.is_none()
            && self.ent_min_score.is_none()
            && self.ent_max_score.is_none()
    }

    /// Same semantics as the service's metadata filter:
    /// - `city`, `category`: exact equality
    /// - `ent_min_score`: lowest program threshold <= value
    /// - `ent_max_score`: highest band top >= value
    pub fn matches(&self, university: &University) -> bool {
        let city_ok = self.city.as_ref().map_or(true, |c| *c == university.city);
        let category_ok = self
            .category
            .as_ref()
            .map_or(true, |c| *c == university.category);
        let min_ok = self.ent_min_score.map_or(true, |score| {
            university.min_threshold().map_or(false, |t| t <= score)
        });
        let max_ok = self.ent_max_score.map_or(true, |score| {
            university.max_band_top().map_or(false, |t| t >= score)
        });

        city_ok && category_ok && min_ok && max_ok
    }
}

impl From<&ApplicantQuery> for RagFilters {
    /// The applicant's exam score becomes `ent_min_score`: universities whose
    /// cheapest threshold is reachable.
    fn from(query: &ApplicantQuery) -> Self {
        let ent_min_score = if is_valid_exam_score(query.exam_score) {
            u8::try_from(query.exam_score).ok()
        } else {
            None
        };

        Self {
            city: query.city.as_exact().map(str::to_string),
            category: query.category.as_exact().map(str::to_string),
            ent_min_score,
            ent_max_score: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagQueryRequest {
    pub question: String,
    #[serde(default)]
    pub filters: Option<RagFilters>,
    /// `None` leaves the choice to the service ([`DEFAULT_TOP_K`]).
    #[serde(default)]
    pub top_k: Option<u8>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl RagQueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            filters: None,
            top_k: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Attaches filters; empty filters are sent as `null`.
    pub fn with_filters(mut self, filters: RagFilters) -> Self {
        self.filters = if filters.is_empty() { None } else { Some(filters) };
        self
    }

    pub fn validate(&self) -> Result<(), RagContractError> {
        let chars = self.question.chars().count();
        if !(QUESTION_MIN_CHARS..=QUESTION_MAX_CHARS).contains(&chars) {
            return Err(RagContractError::QuestionLength(chars));
        }
        if let Some(top_k) = self.top_k {
            if !(1..=TOP_K_MAX).contains(&top_k) {
                return Err(RagContractError::TopK(top_k));
            }
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(RagContractError::Temperature(self.temperature));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub category: String,
    pub relevance_score: f64,
    pub programs: String,
    pub ent_score_range: String,
    #[serde(default)]
    pub contact_info: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagResponse {
    pub answer: String,
    pub sources: Vec<SourceDocument>,
    pub processing_time: f64,
    #[serde(default)]
    pub cached: bool,
    pub timestamp: NaiveDateTime,
}

impl RagResponse {
    pub fn validate(&self) -> Result<(), RagContractError> {
        for source in &self.sources {
            if !(0.0..=1.0).contains(&source.relevance_score) {
                return Err(RagContractError::RelevanceScore {
                    id: source.id,
                    score: source.relevance_score,
                });
            }
        }
        Ok(())
    }
}
