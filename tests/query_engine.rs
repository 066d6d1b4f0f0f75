use std::collections::BTreeSet;

use grant_core::config::{EngineConfig, ALL_CATEGORIES_LABEL, ALL_CITIES_LABEL};
use grant_core::dataset::{
    DatasetSnapshot, DegreeLevel, Program, ProgramId, SnapshotBuilder, University, UniversityId,
    UniversityKind,
};
use grant_core::estimation::{EstimationStrategy, StrategyKind};
use grant_core::query::{query, GrantQueryEngine};
use grant_core::types::{ApplicantQuery, ConfidenceTier, Filter, QueryError};

fn program(id: &str, name: &str, min: u8, max: Option<u8>, price: u64) -> Program {
    Program {
        id: ProgramId::new(id).unwrap(),
        name: name.to_string(),
        code: None,
        degree: DegreeLevel::Bachelor,
        annual_price: price,
        min_score: min,
        max_score: max,
        grants: 50,
        category: None,
    }
}

fn university(id: &str, city: &str, category: &str, programs: Vec<Program>) -> University {
    University {
        id: UniversityId::new(id).unwrap(),
        name: id.to_uppercase(),
        short_name: String::new(),
        city: city.to_string(),
        category: category.to_string(),
        kind: UniversityKind::State,
        rating: 90,
        employment_rate: 90,
        students: 5000,
        founded: 2000,
        dormitory: true,
        military_department: false,
        programs,
    }
}

fn snapshot() -> DatasetSnapshot {
    let mut law = program("law", "International Law", 110, None, 1_200_000);
    law.degree = DegreeLevel::Master;

    SnapshotBuilder::new()
        .build(vec![
            university(
                "kbtu",
                "Almaty",
                "IT",
                vec![
                    program("it_kbtu", "Information Technology", 70, Some(110), 1_800_000),
                    program("oil_kbtu", "Petroleum Engineering", 100, None, 2_000_000),
                ],
            ),
            university(
                "kaznu",
                "Almaty",
                "Multidisciplinary",
                vec![law, program("bio", "Biology", 65, Some(100), 900_000)],
            ),
            university(
                "smu",
                "Semey",
                "Medicine",
                vec![program("med", "General Medicine", 70, Some(70), 1_600_000)],
            ),
        ])
        .unwrap()
}

fn ids(query_result: &grant_core::types::QueryResult) -> Vec<&str> {
    query_result
        .predictions
        .iter()
        .map(|p| p.program_id.as_str())
        .collect()
}

#[test]
fn test_query_orders_by_probability_descending() {
    let snapshot = snapshot();
    let result = query(&ApplicantQuery::new(90), &snapshot).unwrap();

    // med 95, bio 71, it_kbtu 58, oil 5, law 5
    assert_eq!(ids(&result), vec!["med", "bio", "it_kbtu", "oil_kbtu", "law"]);
    let probabilities: Vec<u8> = result.predictions.iter().map(|p| p.probability_percent).collect();
    assert_eq!(probabilities, vec![95, 71, 58, 5, 5]);

    assert_eq!(result.predictions[0].confidence_tier, ConfidenceTier::High);
    assert_eq!(result.predictions[1].confidence_tier, ConfidenceTier::Medium);
    assert_eq!(result.predictions[3].strategy, StrategyKind::ThresholdGap);
    assert_eq!(result.predictions[3].score_gap, -10);
}

#[test]
fn test_equal_probabilities_keep_dataset_order() {
    let snapshot = snapshot();
    let applicant = ApplicantQuery::new(90).with_strategy(EstimationStrategy::ThresholdGap);
    let result = query(&applicant, &snapshot).unwrap();

    // it_kbtu, bio and med all sit at 95; oil and law at 5
    assert_eq!(ids(&result), vec!["it_kbtu", "bio", "med", "oil_kbtu", "law"]);
}

#[test]
fn test_sentinel_filters_return_every_program_once() {
    let snapshot = snapshot();
    let mut applicant = ApplicantQuery::new(100);
    applicant.category = Filter::from_label(ALL_CATEGORIES_LABEL, ALL_CATEGORIES_LABEL);
    applicant.city = Filter::from_label(ALL_CITIES_LABEL, ALL_CITIES_LABEL);

    let result = query(&applicant, &snapshot).unwrap();

    let unique: BTreeSet<&str> = ids(&result).into_iter().collect();
    assert_eq!(result.predictions.len(), snapshot.program_count());
    assert_eq!(unique.len(), snapshot.program_count());
    assert_eq!(result.summary.programs_considered, 5);
    assert_eq!(result.summary.programs_matched, 5);
}

#[test]
fn test_sentinel_labels_sent_as_exact_values_disable_filters() {
    let snapshot = snapshot();
    let mut applicant = ApplicantQuery::new(100);
    applicant.category = Filter::Exact(ALL_CATEGORIES_LABEL.to_string());
    applicant.city = Filter::Exact(ALL_CITIES_LABEL.to_string());

    let json = serde_json::to_string(&applicant).unwrap();
    let received: ApplicantQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(received.city, Filter::Exact(ALL_CITIES_LABEL.to_string()));

    let result = query(&received, &snapshot).unwrap();
    assert_eq!(result.predictions.len(), snapshot.program_count());

    // The labels come from config, not from the constants.
    let mut config = EngineConfig::v0();
    config.all_cities_label = "All cities".to_string();
    let engine = GrantQueryEngine::new(config);

    let english = engine
        .query(&ApplicantQuery::new(100).with_city("All cities"), &snapshot)
        .unwrap();
    assert_eq!(english.predictions.len(), snapshot.program_count());

    let default_label = engine.query(&received, &snapshot).unwrap();
    assert!(default_label.predictions.is_empty());
}

#[test]
fn test_effective_score_saturates() {
    let applicant = ApplicantQuery::new(i32::MAX).with_rural_quota(true);
    assert_eq!(applicant.effective_score(5), i32::MAX);
    assert_eq!(ApplicantQuery::new(85).with_rural_quota(true).effective_score(5), 90);
    assert_eq!(ApplicantQuery::new(85).effective_score(5), 85);
}

#[test]
fn test_category_and_city_filters_compose() {
    let snapshot = snapshot();

    let it = query(&ApplicantQuery::new(90).with_category("IT"), &snapshot).unwrap();
    assert_eq!(ids(&it), vec!["it_kbtu", "oil_kbtu"]);

    let semey = query(&ApplicantQuery::new(90).with_city("Semey"), &snapshot).unwrap();
    assert_eq!(ids(&semey), vec!["med"]);

    let none = query(
        &ApplicantQuery::new(90).with_category("Medicine").with_city("Almaty"),
        &snapshot,
    )
    .unwrap();
    assert!(none.predictions.is_empty(), "empty output is a valid result");
    assert_eq!(none.summary.programs_matched, 0);
}

#[test]
fn test_degree_and_price_filters() {
    let snapshot = snapshot();

    let bachelors = query(&ApplicantQuery::new(90).with_degree(DegreeLevel::Bachelor), &snapshot).unwrap();
    assert!(!ids(&bachelors).contains(&"law"));
    assert_eq!(bachelors.predictions.len(), 4);

    let affordable = query(&ApplicantQuery::new(90).with_max_annual_price(1_500_000), &snapshot).unwrap();
    assert_eq!(ids(&affordable), vec!["bio", "law"]);
}

#[test]
fn test_subject_pair_relevance() {
    let snapshot = snapshot();

    let math_phys = query(&ApplicantQuery::new(90).with_subject_pair("math_phys"), &snapshot).unwrap();
    let mut matched = ids(&math_phys);
    matched.sort();
    assert_eq!(matched, vec!["it_kbtu", "oil_kbtu"]);

    // Shared keywords (Technology, Petroleum) qualify programs for every pair.
    let bio_chem = query(&ApplicantQuery::new(90).with_subject_pair("bio_chem"), &snapshot).unwrap();
    let mut matched = ids(&bio_chem);
    matched.sort();
    assert_eq!(matched, vec!["bio", "it_kbtu", "med", "oil_kbtu"]);
}

#[test]
fn test_subject_relevance_is_case_sensitive() {
    let snapshot = SnapshotBuilder::new()
        .build(vec![university(
            "u",
            "Almaty",
            "Arts",
            vec![program("lower", "biology basics", 60, None, 0)],
        )])
        .unwrap();

    let result = query(&ApplicantQuery::new(90).with_subject_pair("bio_chem"), &snapshot).unwrap();
    assert!(result.predictions.is_empty());
}

#[test]
fn test_unknown_subject_pair_is_rejected() {
    let snapshot = snapshot();
    let err = query(&ApplicantQuery::new(90).with_subject_pair("chem_art"), &snapshot).unwrap_err();
    assert_eq!(err, QueryError::UnknownSubjectPair("chem_art".to_string()));
}

#[test]
fn test_rural_quota_raises_effective_score() {
    let snapshot = snapshot();

    let rural = query(&ApplicantQuery::new(85).with_rural_quota(true), &snapshot).unwrap();
    let plain = query(&ApplicantQuery::new(90), &snapshot).unwrap();

    assert_eq!(rural.summary.exam_score, 85);
    assert_eq!(rural.summary.effective_score, 90);
    assert_eq!(rural.predictions, plain.predictions);

    let mut config = EngineConfig::v0();
    config.rural_quota_bonus = 10;
    let engine = GrantQueryEngine::new(config);
    let boosted = engine
        .query(&ApplicantQuery::new(85).with_rural_quota(true), &snapshot)
        .unwrap();
    assert_eq!(boosted.summary.effective_score, 95);
}

#[test]
fn test_score_outside_domain_is_rejected_without_results() {
    let snapshot = snapshot();

    for score in [-1, 141, 500] {
        let err = query(&ApplicantQuery::new(score), &snapshot).unwrap_err();
        assert_eq!(err, QueryError::ScoreOutOfRange { score });
    }

    assert!(query(&ApplicantQuery::new(0), &snapshot).is_ok());
    assert!(query(&ApplicantQuery::new(140), &snapshot).is_ok());
}

#[test]
fn test_empty_dataset_is_a_distinct_error() {
    let empty = SnapshotBuilder::new().build(Vec::new()).unwrap();

    assert_eq!(query(&ApplicantQuery::new(90), &empty).unwrap_err(), QueryError::EmptyDataset);
    // Score validation runs first.
    assert_eq!(
        query(&ApplicantQuery::new(200), &empty).unwrap_err(),
        QueryError::ScoreOutOfRange { score: 200 }
    );
}

#[test]
fn test_prediction_carries_program_category_override() {
    let mut journalism = program("journ", "Digital Journalism", 90, None, 1_000_000);
    journalism.category = Some("Media".to_string());

    let snapshot = SnapshotBuilder::new()
        .build(vec![university("iitu", "Almaty", "IT", vec![journalism])])
        .unwrap();

    let result = query(&ApplicantQuery::new(100).with_subject_pair("eng_hist"), &snapshot).unwrap();
    assert_eq!(result.predictions.len(), 1);
    assert_eq!(result.predictions[0].category, "Media");
    assert_eq!(result.predictions[0].probability_percent, 80);
}
