pub mod subjects;

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use subjects::{SubjectKeywordTable, SubjectPair};

/// Points added to the exam score when the rural quota applies.
pub const DEFAULT_RURAL_QUOTA_BONUS: u8 = 5;

pub const ALL_CATEGORIES_LABEL: &str = "Все категории";
pub const ALL_CITIES_LABEL: &str = "Все города";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate subject pair: {0}")]
    DuplicateSubjectPair(String),
    #[error("Subject pair {0} has no keywords")]
    EmptyKeywordSet(String),
    #[error("Blank keyword in {0}")]
    BlankKeyword(String),
}

/// Engine tunables. Missing fields fall back to [`EngineConfig::v0`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rural_quota_bonus: u8,
    /// Filter labels that mean "no filter" when received from a UI.
    pub all_categories_label: String,
    pub all_cities_label: String,
    pub subjects: SubjectKeywordTable,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            rural_quota_bonus: DEFAULT_RURAL_QUOTA_BONUS,
            all_categories_label: ALL_CATEGORIES_LABEL.into(),
            all_cities_label: ALL_CITIES_LABEL.into(),
            subjects: SubjectKeywordTable::v0(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_reader(reader)?;
        config.subjects.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(f))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}
