use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier must not be empty")]
    Empty,
    #[error("Identifier must not contain whitespace: {0:?}")]
    Whitespace(String),
}

/// Opaque key of a university record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniversityId(String);

impl UniversityId {
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
        normalize_key(raw.into()).map(UniversityId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque key of a program record. Unique across the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(String);

impl ProgramId {
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
        normalize_key(raw.into()).map(ProgramId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keys are trimmed; interior whitespace and empty keys are rejected.
/// Deserialized keys bypass this and are checked by the snapshot builder.
fn normalize_key(raw: String) -> Result<String, IdentifierError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(IdentifierError::Whitespace(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn is_valid_key(raw: &str) -> bool {
    !raw.is_empty() && raw == raw.trim() && !raw.chars().any(char::is_whitespace)
}

/// Content hash of a dataset snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetVersion(String);

impl DatasetVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DatasetVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
