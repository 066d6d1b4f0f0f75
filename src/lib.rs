//! Deterministic grant-admission estimator for ENT applicants.
//!
//! `grant-core` holds an immutable snapshot of universities and programs,
//! estimates the chance of winning a state grant for an exam score, and
//! filters and orders the dataset for an applicant. All operations are
//! pure: identical inputs always produce identical outputs.
//!
//! ```
//! use grant_core::estimation::estimate;
//! use grant_core::types::ConfidenceTier;
//!
//! let result = estimate(90, 70, Some(110), 0).unwrap();
//! assert_eq!(result.probability_percent, 58);
//! assert_eq!(result.confidence_tier, ConfidenceTier::Medium);
//! ```

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod estimation;
pub mod query;
pub mod rag;
pub mod types;
