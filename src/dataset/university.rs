use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ProgramId, UniversityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeLevel {
    Bachelor,
    Master,
    PhD,
    Residency,
    Internship,
}

/// Ownership / status of the institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversityKind {
    National,
    State,
    Private,
    International,
    Autonomous,
}

/// A study program offered by exactly one university.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub degree: DegreeLevel,
    /// Tuition per year in KZT. Zero means fully grant-funded.
    pub annual_price: u64,
    /// Historical passing threshold.
    pub min_score: u8,
    /// Top of the observed competitive band, when the record carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u8>,
    pub grants: u32,
    /// Overrides the university category for subject relevance matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Program {
    /// Upper edge of the band, falling back to the threshold itself.
    pub fn band_top(&self) -> u8 {
        self.max_score.unwrap_or(self.min_score)
    }
}

/// Aggregate root: a university and its ordered programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    pub city: String,
    pub category: String,
    pub kind: UniversityKind,
    pub rating: u8,
    pub employment_rate: u8,
    pub students: u32,
    pub founded: u16,
    pub dormitory: bool,
    pub military_department: bool,
    pub programs: Vec<Program>,
}

impl University {
    /// Category used for relevance matching of `program`.
    pub fn program_category<'a>(&'a self, program: &'a Program) -> &'a str {
        program.category.as_deref().unwrap_or(&self.category)
    }

    /// Cheapest annual price across programs.
    pub fn min_price(&self) -> Option<u64> {
        self.programs.iter().map(|p| p.annual_price).min()
    }

    /// Lowest passing threshold across programs.
    pub fn min_threshold(&self) -> Option<u8> {
        self.programs.iter().map(|p| p.min_score).min()
    }

    /// Highest band top across programs.
    pub fn max_band_top(&self) -> Option<u8> {
        self.programs.iter().map(Program::band_top).max()
    }

    pub fn total_grants(&self) -> u64 {
        self.programs.iter().map(|p| u64::from(p.grants)).sum()
    }

    pub fn display_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }
}
