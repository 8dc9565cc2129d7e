// tests/service_tests.rs
//
// Drives the selection service, statistics aggregator, and stores directly,
// without the HTTP layer. Uses the memory stores and a seeded StdRng so the
// selection assertions are deterministic.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use annotation_backend::models::question::{Answer, Question};
use annotation_backend::models::response::{NewResponse, Response};
use annotation_backend::selection::{self, SelectError};
use annotation_backend::stats;
use annotation_backend::store::{
    self, FileQuestionStore, FileResponseLog, FileReviewLedger, MemoryQuestionStore,
    MemoryReviewLedger, QuestionStore, ResponseLog, ReviewLedger,
};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn question(id: &str, answer_ids: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {}", id),
        answers: answer_ids
            .iter()
            .map(|aid| Answer {
                id: aid.to_string(),
                text: format!("Answer {}", aid),
            })
            .collect(),
    }
}

fn response(domain: &str, ratings: Option<&[(&str, f64)]>) -> Response {
    Response {
        user_id: "u1".to_string(),
        domain: domain.to_string(),
        question_id: "q1".to_string(),
        answer_id: "q1-a1".to_string(),
        ratings: ratings.map(|r| r.iter().map(|(k, v)| (k.to_string(), *v)).collect()),
        timestamp: Utc::now(),
    }
}

fn temp_data_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("annotation-test-{}", uuid::Uuid::new_v4()));
    store::init_data_files(&dir).expect("Failed to initialize test data directory");
    dir
}

// --- Selection -----------------------------------------------------------

#[tokio::test]
async fn empty_domain_is_no_questions() {
    let questions = MemoryQuestionStore::new();
    let ledger = MemoryReviewLedger::new();
    let mut rng = StdRng::seed_from_u64(1);

    let result = selection::select(&questions, &ledger, "chemistry", "u1", &mut rng).await;
    assert!(matches!(result, Err(SelectError::NoQuestions(_))));
}

#[tokio::test]
async fn fully_reviewed_domain_is_exhausted_not_missing() {
    let questions =
        MemoryQuestionStore::new().with_domain("chemistry", vec![question("q1", &["q1-a1"])]);
    let ledger = MemoryReviewLedger::new();
    ledger.record("u1", "q1").await.unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let result = selection::select(&questions, &ledger, "chemistry", "u1", &mut rng).await;
    assert!(matches!(result, Err(SelectError::Exhausted)));

    // The same state viewed by a fresh user is not exhausted
    let picked = selection::select(&questions, &ledger, "chemistry", "u2", &mut rng)
        .await
        .unwrap();
    assert_eq!(picked.question.id, "q1");
}

#[tokio::test]
async fn reviewed_questions_are_never_selected() {
    let questions = MemoryQuestionStore::new().with_domain(
        "chemistry",
        vec![
            question("q1", &["q1-a1"]),
            question("q2", &["q2-a1"]),
            question("q3", &["q3-a1", "q3-a2"]),
        ],
    );
    let ledger = MemoryReviewLedger::new();
    ledger.record("u1", "q1").await.unwrap();
    ledger.record("u1", "q2").await.unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let picked = selection::select(&questions, &ledger, "chemistry", "u1", &mut rng)
            .await
            .unwrap();
        assert_eq!(picked.question.id, "q3");
        assert!(picked.answer.id.starts_with("q3-a"));
    }
}

#[tokio::test]
async fn selection_does_not_mark_reviewed() {
    let questions =
        MemoryQuestionStore::new().with_domain("chemistry", vec![question("q1", &["q1-a1"])]);
    let ledger = MemoryReviewLedger::new();
    let mut rng = StdRng::seed_from_u64(5);

    selection::select(&questions, &ledger, "chemistry", "u1", &mut rng)
        .await
        .unwrap();

    // Fetching alone leaves the ledger untouched; only submission records
    assert_eq!(ledger.get("u1").await, HashSet::new());
    let again = selection::select(&questions, &ledger, "chemistry", "u1", &mut rng).await;
    assert!(again.is_ok());
}

#[tokio::test]
async fn question_without_answers_is_reported() {
    let questions = MemoryQuestionStore::new().with_domain("chemistry", vec![question("q1", &[])]);
    let ledger = MemoryReviewLedger::new();
    let mut rng = StdRng::seed_from_u64(1);

    let result = selection::select(&questions, &ledger, "chemistry", "u1", &mut rng).await;
    assert!(matches!(result, Err(SelectError::NoAnswers)));
}

#[tokio::test]
async fn identically_seeded_rngs_select_identically() {
    let questions = MemoryQuestionStore::new().with_domain(
        "chemistry",
        vec![
            question("q1", &["q1-a1", "q1-a2", "q1-a3"]),
            question("q2", &["q2-a1", "q2-a2"]),
            question("q3", &["q3-a1"]),
        ],
    );
    let ledger = MemoryReviewLedger::new();

    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);

    let a = selection::select(&questions, &ledger, "chemistry", "u1", &mut first)
        .await
        .unwrap();
    let b = selection::select(&questions, &ledger, "chemistry", "u1", &mut second)
        .await
        .unwrap();

    assert_eq!(a.question.id, b.question.id);
    assert_eq!(a.answer.id, b.answer.id);
}

// --- Statistics ----------------------------------------------------------

#[test]
fn stats_on_empty_log_are_zero() {
    let computed = stats::compute(&[]);
    assert_eq!(computed.total_responses, 0);
    assert!(computed.domains.is_empty());
    for criterion in stats::RECOGNIZED_CRITERIA {
        assert_eq!(computed.criteria_averages[criterion], 0.0);
    }
}

#[test]
fn uniform_ratings_average_to_themselves() {
    let responses: Vec<Response> = (0..4)
        .map(|_| response("chemistry", Some(&[("reasoning", 5.0)])))
        .collect();

    let computed = stats::compute(&responses);
    assert_eq!(computed.total_responses, 4);
    assert_eq!(computed.criteria_averages["reasoning"], 5.0);
}

#[test]
fn averages_divide_by_total_and_round_to_two_places() {
    let responses = vec![
        response("chemistry", Some(&[("accuracy", 5.0)])),
        response("chemistry", Some(&[("accuracy", 4.0)])),
        response("chemistry", Some(&[("accuracy", 4.0)])),
    ];

    let computed = stats::compute(&responses);
    // 13 / 3 = 4.333... -> 4.33
    assert_eq!(computed.criteria_averages["accuracy"], 4.33);
}

#[test]
fn unrecognized_criteria_are_ignored() {
    let responses = vec![response("chemistry", Some(&[("vibes", 5.0), ("reasoning", 3.0)]))];

    let computed = stats::compute(&responses);
    assert_eq!(computed.criteria_averages["reasoning"], 3.0);
    assert!(!computed.criteria_averages.contains_key("vibes"));
}

#[test]
fn responses_without_ratings_still_count_toward_totals() {
    let responses = vec![
        response("chemistry", Some(&[("reasoning", 4.0)])),
        response("chemistry", None),
    ];

    let computed = stats::compute(&responses);
    assert_eq!(computed.total_responses, 2);
    assert_eq!(computed.domains["chemistry"], 2);
    // The ratings-less response dilutes the average: 4 / 2
    assert_eq!(computed.criteria_averages["reasoning"], 2.0);
}

#[test]
fn domains_are_counted_separately() {
    let responses = vec![
        response("chemistry", Some(&[("reasoning", 5.0)])),
        response("chemistry", Some(&[("reasoning", 5.0)])),
        response("material-science", Some(&[("reasoning", 5.0)])),
    ];

    let computed = stats::compute(&responses);
    assert_eq!(computed.domains["chemistry"], 2);
    assert_eq!(computed.domains["material-science"], 1);
}

// --- Stores --------------------------------------------------------------

#[test]
fn domain_names_normalize_to_file_names() {
    assert_eq!(store::domain_file_name("chemistry"), "chemistry-questions.json");
    assert_eq!(
        store::domain_file_name("Material Science"),
        "material-science-questions.json"
    );
}

#[tokio::test]
async fn question_store_degrades_to_empty() {
    let data_dir = temp_data_dir();
    let questions = FileQuestionStore::new(&data_dir);

    // Missing file
    assert!(questions.load("nonexistent").await.is_empty());

    // Corrupt file
    std::fs::write(data_dir.join(store::domain_file_name("broken")), "not json").unwrap();
    assert!(questions.load("broken").await.is_empty());

    // Parseable file without the expected questions member
    std::fs::write(data_dir.join(store::domain_file_name("shapeless")), "{\"items\": []}").unwrap();
    assert!(questions.load("shapeless").await.is_empty());
}

#[tokio::test]
async fn ledger_record_is_idempotent() {
    let data_dir = temp_data_dir();
    let ledger = FileReviewLedger::new(&data_dir);

    ledger.record("u1", "q1").await.unwrap();
    ledger.record("u1", "q1").await.unwrap();
    ledger.record("u1", "q2").await.unwrap();

    let reviewed = ledger.get("u1").await;
    assert_eq!(reviewed.len(), 2);
    assert!(reviewed.contains("q1"));
    assert!(reviewed.contains("q2"));

    // Unknown users default to the empty set
    assert!(ledger.get("nobody").await.is_empty());
}

#[tokio::test]
async fn concurrent_records_keep_at_least_one() {
    let data_dir = temp_data_dir();
    let ledger = FileReviewLedger::new(&data_dir);

    // The whole-file rewrite makes concurrent updates a documented race;
    // the contract only promises that at least one survives.
    let (a, b) = tokio::join!(ledger.record("u1", "q1"), ledger.record("u1", "q2"));
    a.unwrap();
    b.unwrap();

    let reviewed = ledger.get("u1").await;
    assert!(reviewed.contains("q1") || reviewed.contains("q2"));
}

#[tokio::test]
async fn response_log_round_trips_appends() {
    let data_dir = temp_data_dir();
    let log = FileResponseLog::new(&data_dir);

    let persisted = log
        .append(NewResponse {
            user_id: "u1".to_string(),
            domain: "chemistry".to_string(),
            question_id: "q1".to_string(),
            answer_id: "q1-a1".to_string(),
            ratings: HashMap::from([("reasoning".to_string(), 5.0)]),
        })
        .await
        .unwrap();

    let all = log.read_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].user_id, "u1");
    assert_eq!(all[0].question_id, "q1");
    assert_eq!(all[0].answer_id, "q1-a1");
    assert_eq!(all[0].ratings.as_ref().unwrap()["reasoning"], 5.0);
    assert_eq!(all[0].timestamp, persisted.timestamp);
}

#[tokio::test]
async fn repeated_submissions_all_append() {
    let data_dir = temp_data_dir();
    let log = FileResponseLog::new(&data_dir);

    for _ in 0..3 {
        log.append(NewResponse {
            user_id: "u1".to_string(),
            domain: "chemistry".to_string(),
            question_id: "q1".to_string(),
            answer_id: "q1-a1".to_string(),
            ratings: HashMap::new(),
        })
        .await
        .unwrap();
    }

    // No deduplication of repeated submissions for the same question
    assert_eq!(log.read_all().await.unwrap().len(), 3);
}
