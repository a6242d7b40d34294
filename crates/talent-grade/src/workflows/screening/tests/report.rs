use super::common::*;
use crate::workflows::screening::domain::ApplicantRecord;
use crate::workflows::screening::{
    score_batch, KeywordDictionary, ScoringEngine, ScreeningConfig, ScreeningDecision,
    ScreeningReport,
};
use chrono::NaiveDate;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

fn mid_candidate() -> ApplicantRecord {
    ApplicantRecord {
        name: text("이세일"),
        career_summary: text("B2B 세일즈 2년"),
        certification_summary: text("생명보험 모집인"),
        education_detail: text("경제학과"),
        ..ApplicantRecord::default()
    }
}

fn sample_report() -> ScreeningReport {
    let applicants = batch(vec![
        ("1", ApplicantRecord::default()),
        ("2", mid_candidate()),
        ("3", seasoned_planner()),
    ]);
    let scored = score_batch(&applicants, &engine());
    ScreeningReport::from_batch(&scored, report_date())
}

#[test]
fn summary_counts_pass_and_fail() {
    let report = sample_report();
    let summary = report.summary();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.pass_rate, 66.7);
    assert_eq!(summary.generated_on, report_date());
    assert_eq!(report.rows()[0].name, "Unknown");
    assert_eq!(report.rows()[0].decision, ScreeningDecision::Fail);
}

#[test]
fn passed_rows_are_ranked_by_total() {
    let report = sample_report();
    let ranked = report.passed();

    assert_eq!(
        ranked.iter().map(|row| row.key.as_str()).collect::<Vec<_>>(),
        ["3", "2"]
    );
    assert_eq!(ranked[0].breakdown.total, 70);
    assert_eq!(ranked[1].breakdown.total, 35);
}

#[test]
fn csv_lists_every_applicant_with_breakdown() {
    let report = sample_report();
    let mut buffer = Vec::new();
    report.write_csv(&mut buffer).expect("csv writes");
    let csv = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "key,name,sales_experience,customer_fit,specialization,motivation_language,total,decision"
    );
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "3,김보험,30,5,30,5,70,pass");
}

#[test]
fn json_contains_only_passing_applicants() {
    let report = sample_report();
    let mut buffer = Vec::new();
    report.write_json(&mut buffer).expect("json writes");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");

    let rows = value.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["key"], "3");
    assert_eq!(rows[0]["decision"], "pass");
    assert_eq!(rows[1]["breakdown"]["specialization"], 20);
}

#[test]
fn empty_batch_has_zero_pass_rate() {
    let scored = score_batch(&batch(Vec::new()), &engine());
    let report = ScreeningReport::from_batch(&scored, report_date());

    assert_eq!(report.summary().pass_rate, 0.0);
    assert!(report.passed().is_empty());
}

#[test]
fn summary_threshold_comes_from_the_scoring_engine() {
    let engine = ScoringEngine::new(
        KeywordDictionary::standard(),
        ScreeningConfig { min_pass_score: 40 },
    );
    let applicants = batch(vec![("1", mid_candidate()), ("2", seasoned_planner())]);
    let scored = score_batch(&applicants, &engine);
    let report = ScreeningReport::from_batch(&scored, report_date());

    assert_eq!(scored.min_pass_score(), 40);
    assert_eq!(report.summary().min_pass_score, 40);
    assert_eq!(report.summary().passed, 1);
    assert_eq!(report.rows()[0].decision, ScreeningDecision::Fail);
}
