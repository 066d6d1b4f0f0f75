use serde::{Deserialize, Serialize};

/// Lowest ENT score accepted anywhere in the crate.
pub const MIN_EXAM_SCORE: i32 = 0;

/// Highest ENT score. Program thresholds share the same ceiling.
pub const MAX_EXAM_SCORE: i32 = 140;

/// Returns true when `score` lies inside the ENT domain.
pub fn is_valid_exam_score(score: i32) -> bool {
    (MIN_EXAM_SCORE..=MAX_EXAM_SCORE).contains(&score)
}

/// Coarse bucket summarizing a computed probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}
