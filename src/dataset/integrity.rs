use std::collections::BTreeSet;

use thiserror::Error;

use crate::dataset::university::University;
use crate::types::identifiers::is_valid_key;
use crate::types::score::MAX_EXAM_SCORE;

/// A record violates the dataset invariants. Raised at build/load time only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataIntegrityError {
    #[error("Invalid identifier {0:?}")]
    InvalidIdentifier(String),
    #[error("Duplicate university ID: {0}")]
    DuplicateUniversityId(String),
    #[error("Duplicate program ID: {0}")]
    DuplicateProgramId(String),
    #[error("University {0} has no programs")]
    EmptyPrograms(String),
    #[error("University {university}: {field} {value} is outside 0..=100")]
    PercentOutOfRange {
        university: String,
        field: &'static str,
        value: u8,
    },
    #[error("Program {program}: threshold {score} exceeds the ENT maximum")]
    ThresholdOutOfDomain { program: String, score: u8 },
    #[error("Program {program}: band max {max} is below min {min}")]
    InvalidBand { program: String, min: u8, max: u8 },
}

/// Checks every invariant of the dataset, stopping at the first violation.
///
/// Record order is irrelevant to the checks; university and program IDs must
/// be unique across the whole dataset.
pub fn validate(universities: &[University]) -> Result<(), DataIntegrityError> {
    let mut seen_universities = BTreeSet::new();
    let mut seen_programs = BTreeSet::new();

    for uni in universities {
        let uni_id = uni.id.as_str();
        if !is_valid_key(uni_id) {
            return Err(DataIntegrityError::InvalidIdentifier(uni_id.to_string()));
        }
        if !seen_universities.insert(uni_id) {
            return Err(DataIntegrityError::DuplicateUniversityId(uni_id.to_string()));
        }
        if uni.programs.is_empty() {
            return Err(DataIntegrityError::EmptyPrograms(uni_id.to_string()));
        }

        for (field, value) in [("rating", uni.rating), ("employment_rate", uni.employment_rate)] {
            if value > 100 {
                return Err(DataIntegrityError::PercentOutOfRange {
                    university: uni_id.to_string(),
                    field,
                    value,
                });
            }
        }

        for program in &uni.programs {
            let program_id = program.id.as_str();
            if !is_valid_key(program_id) {
                return Err(DataIntegrityError::InvalidIdentifier(program_id.to_string()));
            }
            if !seen_programs.insert(program_id) {
                return Err(DataIntegrityError::DuplicateProgramId(program_id.to_string()));
            }

            for score in [Some(program.min_score), program.max_score].into_iter().flatten() {
                if i32::from(score) > MAX_EXAM_SCORE {
                    return Err(DataIntegrityError::ThresholdOutOfDomain {
                        program: program_id.to_string(),
                        score,
                    });
                }
            }

            if let Some(max) = program.max_score {
                if max < program.min_score {
                    return Err(DataIntegrityError::InvalidBand {
                        program: program_id.to_string(),
                        min: program.min_score,
                        max,
                    });
                }
            }
        }
    }

    Ok(())
}
