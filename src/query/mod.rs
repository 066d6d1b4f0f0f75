pub mod filters;
pub mod ranking;
pub mod relevance;

use tracing::debug;

use crate::config::EngineConfig;
use crate::dataset::snapshot::DatasetSnapshot;
use crate::dataset::university::{Program, University};
use crate::estimation::{GrantEstimator, ScoreBand};
use crate::types::query::{ApplicantQuery, GrantPrediction, QueryError, QueryResult, QuerySummary};
use crate::types::score::is_valid_exam_score;
pub use filters::ProgramFilter;
pub use ranking::rank;
pub use relevance::is_relevant;

/// Filters a dataset snapshot for an applicant and scores every match.
///
/// Holds configuration only; safe to share and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct GrantQueryEngine {
    config: EngineConfig,
}

impl GrantQueryEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn query(
        &self,
        applicant: &ApplicantQuery,
        snapshot: &DatasetSnapshot,
    ) -> Result<QueryResult, QueryError> {
        // 0. Validation, before any computation
        if !is_valid_exam_score(applicant.exam_score) {
            return Err(QueryError::ScoreOutOfRange {
                score: applicant.exam_score,
            });
        }
        if snapshot.is_empty() {
            return Err(QueryError::EmptyDataset);
        }
        let subject = match &applicant.subject_pair {
            Some(id) => Some(
                self.config
                    .subjects
                    .get(id)
                    .ok_or_else(|| QueryError::UnknownSubjectPair(id.clone()))?,
            ),
            None => None,
        };

        let effective_score = applicant.effective_score(self.config.rural_quota_bonus);
        let filter = ProgramFilter::new(applicant, subject, &self.config);

        // 1. Filtering + scoring phase, in dataset order
        let mut predictions = Vec::new();
        for (university, program) in snapshot.programs() {
            if !filter.accepts(university, program) {
                continue;
            }
            predictions.push(self.predict(applicant, effective_score, university, program)?);
        }

        // 2. Ordering phase
        rank(&mut predictions);

        debug!(
            exam_score = applicant.exam_score,
            effective_score,
            matched = predictions.len(),
            considered = snapshot.program_count(),
            "grant query evaluated"
        );

        let summary = QuerySummary {
            exam_score: applicant.exam_score,
            effective_score,
            dataset_version: snapshot.version().as_str().to_string(),
            programs_considered: snapshot.program_count(),
            programs_matched: predictions.len(),
        };

        Ok(QueryResult {
            predictions,
            summary,
        })
    }

    fn predict(
        &self,
        applicant: &ApplicantQuery,
        effective_score: i32,
        university: &University,
        program: &Program,
    ) -> Result<GrantPrediction, QueryError> {
        // Snapshots are validated at build time; this only fails on a bug.
        let band = ScoreBand::from_program(program)?;
        let estimate = applicant.strategy.estimate(effective_score, &band);

        Ok(GrantPrediction {
            university_id: university.id.clone(),
            university_name: university.name.clone(),
            program_id: program.id.clone(),
            program_name: program.name.clone(),
            city: university.city.clone(),
            category: university.program_category(program).to_string(),
            degree: program.degree,
            annual_price: program.annual_price,
            grants: program.grants,
            min_score: program.min_score,
            max_score: program.max_score,
            probability_percent: estimate.probability_percent,
            confidence_tier: estimate.confidence_tier,
            score_gap: estimate.score_gap,
            strategy: estimate.strategy,
        })
    }
}

/// Runs `applicant` against `snapshot` with the default configuration.
pub fn query(applicant: &ApplicantQuery, snapshot: &DatasetSnapshot) -> Result<QueryResult, QueryError> {
    GrantQueryEngine::default().query(applicant, snapshot)
}
