use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A pair of ENT profile subjects and the program keywords it qualifies for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPair {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
}

impl SubjectPair {
    fn new(id: &str, name: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Subject-pair → keyword mapping used for program relevance.
///
/// `shared_keywords` qualify a program for every pair. Matching is a
/// case-sensitive substring test against program name and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectKeywordTable {
    #[serde(default)]
    pub shared_keywords: Vec<String>,
    pub pairs: Vec<SubjectPair>,
}

impl SubjectKeywordTable {
    pub fn v0() -> Self {
        Self {
            shared_keywords: vec!["Technology".into(), "Petroleum".into()],
            pairs: vec![
                SubjectPair::new(
                    "math_phys",
                    "Математика + Физика",
                    &["Computer", "Robotics", "Engineering", "Systems", "Math", "IT", "Information"],
                ),
                SubjectPair::new("bio_chem", "Биология + Химия", &["Medicine", "Pharmacy", "Biology"]),
                SubjectPair::new(
                    "math_geog",
                    "Математика + География",
                    &["Economics", "Management", "Finance", "Logistics"],
                ),
                SubjectPair::new("hist_law", "Всемирная история + Право", &["Law", "International Relations"]),
                SubjectPair::new(
                    "eng_hist",
                    "Английский + История",
                    &["Philology", "Translation", "Journalism"],
                ),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&SubjectPair> {
        self.pairs.iter().find(|pair| pair.id == id)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for pair in &self.pairs {
            if !seen.insert(pair.id.as_str()) {
                return Err(ConfigError::DuplicateSubjectPair(pair.id.clone()));
            }
            if pair.keywords.is_empty() {
                return Err(ConfigError::EmptyKeywordSet(pair.id.clone()));
            }
        }

        // A blank keyword would match every program.
        if self.shared_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::BlankKeyword("shared".to_string()));
        }
        for pair in &self.pairs {
            if pair.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::BlankKeyword(pair.id.clone()));
            }
        }

        Ok(())
    }
}

impl Default for SubjectKeywordTable {
    fn default() -> Self {
        Self::v0()
    }
}
