use crate::config::{EngineConfig, SubjectPair};
use crate::dataset::university::{Program, University};
use crate::query::relevance::is_relevant;
use crate::types::query::ApplicantQuery;

/// AND-composition of every predicate an applicant query carries.
///
/// Category and city filters set to the configured "all" labels are ignored.
pub struct ProgramFilter<'a> {
    query: &'a ApplicantQuery,
    subject: Option<&'a SubjectPair>,
    config: &'a EngineConfig,
}

impl<'a> ProgramFilter<'a> {
    pub fn new(
        query: &'a ApplicantQuery,
        subject: Option<&'a SubjectPair>,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            query,
            subject,
            config,
        }
    }

    pub fn accepts(&self, university: &University, program: &Program) -> bool {
        self.query
            .category
            .matches_or_any(&university.category, &self.config.all_categories_label)
            && self
                .query
                .city
                .matches_or_any(&university.city, &self.config.all_cities_label)
            && self.query.degree.map_or(true, |degree| degree == program.degree)
            && self
                .query
                .max_annual_price
                .map_or(true, |cap| program.annual_price <= cap)
            && self.subject.map_or(true, |pair| {
                is_relevant(pair, &self.config.subjects.shared_keywords, university, program)
            })
    }
}
