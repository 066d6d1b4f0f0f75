use thiserror::Error;

use crate::dataset::university::Program;
use crate::types::score::{is_valid_exam_score, MAX_EXAM_SCORE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Exam score {0} is outside the ENT domain")]
    ExamScoreOutOfDomain(i32),
    #[error("Threshold {0} exceeds the ENT maximum")]
    ThresholdOutOfDomain(u8),
    #[error("Band max {max} is below min {min}")]
    InvalidBand { min: u8, max: u8 },
}

/// A validated admission band: `0 <= min <= max <= 140`.
///
/// `max` is absent for records that only carry a single passing threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    min: u8,
    max: Option<u8>,
}

impl ScoreBand {
    pub fn new(min: u8, max: Option<u8>) -> Result<Self, EstimateError> {
        for score in [Some(min), max].into_iter().flatten() {
            if !is_valid_exam_score(i32::from(score)) {
                return Err(EstimateError::ThresholdOutOfDomain(score));
            }
        }
        if let Some(max) = max {
            if max < min {
                return Err(EstimateError::InvalidBand { min, max });
            }
        }
        debug_assert!(i32::from(max.unwrap_or(min)) <= MAX_EXAM_SCORE);
        Ok(Self { min, max })
    }

    pub fn threshold(min: u8) -> Result<Self, EstimateError> {
        Self::new(min, None)
    }

    pub fn from_program(program: &Program) -> Result<Self, EstimateError> {
        Self::new(program.min_score, program.max_score)
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> Option<u8> {
        self.max
    }

    /// Upper edge used for interpolation; a threshold-only band has zero width.
    pub fn top(&self) -> u8 {
        self.max.unwrap_or(self.min)
    }

    pub fn has_range(&self) -> bool {
        self.max.is_some()
    }
}
