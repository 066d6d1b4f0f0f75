pub mod band;
pub mod interpolation;
pub mod threshold;

use serde::{Deserialize, Serialize};

use crate::types::score::{is_valid_exam_score, ConfidenceTier};
pub use band::{EstimateError, ScoreBand};
pub use interpolation::BandInterpolation;
pub use threshold::ThresholdGap;

/// Maps an effective score and an admission band to a grant estimate.
///
/// Implementations are pure: the same inputs always give the same estimate.
pub trait GrantEstimator {
    fn estimate(&self, effective_score: i32, band: &ScoreBand) -> Estimate;
}

/// The policy that actually produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    BandInterpolation,
    ThresholdGap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub probability_percent: u8,
    pub confidence_tier: ConfidenceTier,
    /// Effective score minus the band minimum.
    pub score_gap: i32,
    pub strategy: StrategyKind,
}

/// Strategy requested by a caller.
///
/// `ByAvailableFields` interpolates when the record carries a band max and
/// falls back to threshold-gap scoring otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationStrategy {
    BandInterpolation,
    ThresholdGap,
    #[default]
    ByAvailableFields,
}

impl EstimationStrategy {
    pub fn resolve(&self, band: &ScoreBand) -> StrategyKind {
        match self {
            EstimationStrategy::BandInterpolation => StrategyKind::BandInterpolation,
            EstimationStrategy::ThresholdGap => StrategyKind::ThresholdGap,
            EstimationStrategy::ByAvailableFields if band.has_range() => {
                StrategyKind::BandInterpolation
            }
            EstimationStrategy::ByAvailableFields => StrategyKind::ThresholdGap,
        }
    }
}

impl GrantEstimator for EstimationStrategy {
    fn estimate(&self, effective_score: i32, band: &ScoreBand) -> Estimate {
        match self.resolve(band) {
            StrategyKind::BandInterpolation => BandInterpolation.estimate(effective_score, band),
            StrategyKind::ThresholdGap => ThresholdGap.estimate(effective_score, band),
        }
    }
}

/// Estimates the grant chance for a raw exam score.
///
/// The rural bonus is added to `exam_score` before scoring. Band
/// interpolation is used when `max_score` is present, threshold-gap scoring
/// otherwise.
pub fn estimate(
    exam_score: i32,
    min_score: u8,
    max_score: Option<u8>,
    rural_bonus: u8,
) -> Result<Estimate, EstimateError> {
    if !is_valid_exam_score(exam_score) {
        return Err(EstimateError::ExamScoreOutOfDomain(exam_score));
    }
    let band = ScoreBand::new(min_score, max_score)?;
    let effective_score = exam_score + i32::from(rural_bonus);

    Ok(EstimationStrategy::ByAvailableFields.estimate(effective_score, &band))
}
