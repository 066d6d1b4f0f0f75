use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::DatasetVersion;

/// Bumped whenever the hashed representation of a snapshot changes.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub format_version: u32,
    pub dataset_version: DatasetVersion,
    pub built_at: DateTime<Utc>, // informational only
    pub university_count: usize,
    pub program_count: usize,
}
