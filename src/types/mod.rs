pub mod identifiers;
pub mod query;
pub mod score;

pub use identifiers::{DatasetVersion, IdentifierError, ProgramId, UniversityId};
pub use query::{ApplicantQuery, Filter, GrantPrediction, QueryError, QueryResult, QuerySummary};
pub use score::{is_valid_exam_score, ConfidenceTier, MAX_EXAM_SCORE, MIN_EXAM_SCORE};
