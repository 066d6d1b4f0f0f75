pub mod builder;
pub mod integrity;
pub mod manifest;
pub mod snapshot;
pub mod university;

pub use crate::types::identifiers::{DatasetVersion, ProgramId, UniversityId};
pub use builder::SnapshotBuilder;
pub use integrity::DataIntegrityError;
pub use manifest::{SnapshotManifest, SNAPSHOT_FORMAT_VERSION};
pub use snapshot::{DatasetFile, DatasetSnapshot, SnapshotError, SnapshotHandle};
pub use university::{DegreeLevel, Program, University, UniversityKind};
