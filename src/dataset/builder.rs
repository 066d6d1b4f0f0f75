use chrono::Utc;
use tracing::{info, warn};

use crate::dataset::integrity::validate;
use crate::dataset::manifest::{SnapshotManifest, SNAPSHOT_FORMAT_VERSION};
use crate::dataset::snapshot::{DatasetSnapshot, SnapshotError};
use crate::dataset::university::University;
use crate::types::identifiers::DatasetVersion;

/// Validates records and freezes them into a [`DatasetSnapshot`].
///
/// Record order is preserved: it is the tie-break order of every query.
#[derive(Debug, Default)]
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, universities: Vec<University>) -> Result<DatasetSnapshot, SnapshotError> {
        if let Err(err) = validate(&universities) {
            warn!(error = %err, "dataset rejected");
            return Err(err.into());
        }

        let dataset_version = Self::version_of(&universities)?;
        let program_count = universities.iter().map(|u| u.programs.len()).sum();

        // built_at is informational and excluded from the version hash
        let manifest = SnapshotManifest {
            format_version: SNAPSHOT_FORMAT_VERSION,
            dataset_version,
            built_at: Utc::now(),
            university_count: universities.len(),
            program_count,
        };

        info!(
            version = manifest.dataset_version.as_str(),
            universities = manifest.university_count,
            programs = manifest.program_count,
            "dataset snapshot built"
        );

        Ok(DatasetSnapshot::from_parts(manifest, universities))
    }

    /// sha256 over the format version followed by the canonical JSON records.
    fn version_of(universities: &[University]) -> Result<DatasetVersion, SnapshotError> {
        let mut payload = format!("grant-core/v{SNAPSHOT_FORMAT_VERSION}:").into_bytes();
        payload.extend(serde_json::to_vec(universities)?);

        Ok(DatasetVersion::from_content(&payload))
    }
}
