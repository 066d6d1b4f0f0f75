// Snapshots are read-only once built.
// New data goes through SnapshotHandle::publish.

use std::io::Read;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::dataset::builder::SnapshotBuilder;
use crate::dataset::integrity::DataIntegrityError;
use crate::dataset::manifest::SnapshotManifest;
use crate::dataset::university::{Program, University};
use crate::types::identifiers::{DatasetVersion, UniversityId};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Data integrity error: {0}")]
    Integrity(#[from] DataIntegrityError),
}

/// On-disk shape of a dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub universities: Vec<University>,
}

/// Immutable, validated view of the university dataset.
///
/// Only [`SnapshotBuilder`] constructs snapshots, so every instance has
/// passed the integrity checks. Safe to share across threads without locks.
#[derive(Debug)]
pub struct DatasetSnapshot {
    manifest: SnapshotManifest,
    universities: Vec<University>,
}

impl DatasetSnapshot {
    pub(crate) fn from_parts(manifest: SnapshotManifest, universities: Vec<University>) -> Self {
        Self {
            manifest,
            universities,
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let file: DatasetFile = serde_json::from_reader(reader)?;
        SnapshotBuilder::new().build(file.universities)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        let file: DatasetFile = serde_json::from_str(raw)?;
        SnapshotBuilder::new().build(file.universities)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let f = std::fs::File::open(path)?;
        let snapshot = Self::from_json_reader(std::io::BufReader::new(f))?;
        info!(path = %path.display(), "dataset loaded");
        Ok(snapshot)
    }

    pub fn manifest(&self) -> &SnapshotManifest {
        &self.manifest
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.manifest.dataset_version
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    pub fn program_count(&self) -> usize {
        self.manifest.program_count
    }

    /// Every (university, program) pair in dataset order.
    pub fn programs(&self) -> impl Iterator<Item = (&University, &Program)> {
        self.universities
            .iter()
            .flat_map(|uni| uni.programs.iter().map(move |program| (uni, program)))
    }

    pub fn university(&self, id: &UniversityId) -> Option<&University> {
        self.universities.iter().find(|uni| &uni.id == id)
    }
}

/// Publishes dataset snapshots to concurrent readers.
///
/// Readers take an `Arc` of the current snapshot and keep a consistent view
/// for as long as they hold it; `publish` swaps the reference atomically.
#[derive(Debug)]
pub struct SnapshotHandle {
    current: RwLock<Arc<DatasetSnapshot>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: DatasetSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn current(&self) -> Arc<DatasetSnapshot> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete snapshot.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the current snapshot, returning the previous one.
    pub fn publish(&self, snapshot: DatasetSnapshot) -> Arc<DatasetSnapshot> {
        let next = Arc::new(snapshot);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!(
            from = guard.version().as_str(),
            to = next.version().as_str(),
            "dataset snapshot published"
        );
        std::mem::replace(&mut *guard, next)
    }
}
