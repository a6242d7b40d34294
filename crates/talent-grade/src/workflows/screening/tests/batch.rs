use super::common::*;
use crate::workflows::screening::domain::{ApplicantRecord, FieldValue};
use crate::workflows::screening::score_batch;

#[test]
fn processes_keys_in_ascending_numeric_order() {
    let applicants = batch(vec![
        ("10", ApplicantRecord::default()),
        ("2", ApplicantRecord::default()),
        ("1", seasoned_planner()),
        ("x", ApplicantRecord::default()),
        ("abc", ApplicantRecord::default()),
    ]);

    let scored = score_batch(&applicants, &engine());

    assert_eq!(
        scored.keys().collect::<Vec<_>>(),
        ["abc", "x", "1", "2", "10"]
    );
    assert_eq!(scored.status(), "ok | scored=5");
}

#[test]
fn oversized_numeric_keys_sort_last() {
    let applicants = batch(vec![
        ("99999999999999999999", ApplicantRecord::default()),
        ("1", ApplicantRecord::default()),
    ]);

    let scored = score_batch(&applicants, &engine());

    assert_eq!(
        scored.keys().collect::<Vec<_>>(),
        ["1", "99999999999999999999"]
    );
}

#[test]
fn output_key_set_matches_input_key_set() {
    let applicants = batch(vec![
        ("3", seasoned_planner()),
        ("7", ApplicantRecord::default()),
    ]);

    let scored = score_batch(&applicants, &engine());

    let mut keys = scored.keys().map(str::to_string).collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, applicants.keys().cloned().collect::<Vec<_>>());
    assert_eq!(scored.get("3").map(|applicant| applicant.score), Some(70));
    assert_eq!(scored.get("7").map(|applicant| applicant.score), Some(0));
    assert!(scored.get("4").is_none());
}

#[test]
fn empty_record_keeps_identity_defaults() {
    let applicants = batch(vec![("1", ApplicantRecord::default())]);

    let scored = score_batch(&applicants, &engine());
    let applicant = scored.get("1").expect("applicant scored");

    assert_eq!(applicant.score, 0);
    assert_eq!(applicant.name, FieldValue::empty_text());
    assert_eq!(applicant.skills, FieldValue::empty_list());
}

#[test]
fn serializes_as_object_in_processing_order() {
    let applicants = batch(vec![
        ("10", ApplicantRecord::default()),
        ("9", seasoned_planner()),
    ]);

    let scored = score_batch(&applicants, &engine());
    let encoded = serde_json::to_string(&scored).expect("serializes");

    let nine = encoded.find("\"9\":").expect("key 9 present");
    let ten = encoded.find("\"10\":").expect("key 10 present");
    assert!(nine < ten, "keys should follow numeric order: {encoded}");

    let value: serde_json::Value = serde_json::from_str(&encoded).expect("valid json");
    assert_eq!(value["9"]["score"], 70);
    assert_eq!(value["9"]["name"], "김보험");
    assert_eq!(value["10"]["skills"], serde_json::json!([]));
    assert_eq!(
        value["9"].as_object().map(|fields| fields.len()),
        Some(10),
        "output record carries exactly the identity fields plus score"
    );
}

#[test]
fn empty_batch_reports_zero() {
    let scored = score_batch(&batch(Vec::new()), &engine());
    assert!(scored.is_empty());
    assert_eq!(scored.status(), "ok | scored=0");
    assert_eq!(serde_json::to_string(&scored).expect("serializes"), "{}");
}
