use crate::workflows::screening::domain::{ApplicantRecord, FieldValue};
use crate::workflows::screening::evaluation::{ScoringEngine, ScreeningConfig};
use crate::workflows::screening::{ApplicantBatch, KeywordDictionary};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(KeywordDictionary::standard(), ScreeningConfig::default())
}

pub(super) fn text(value: &str) -> Option<FieldValue> {
    Some(FieldValue::from(value))
}

pub(super) fn list(values: &[&str]) -> Option<FieldValue> {
    Some(FieldValue::from(values.to_vec()))
}

/// Experienced insurance seller who hits every rubric.
pub(super) fn seasoned_planner() -> ApplicantRecord {
    ApplicantRecord {
        index: text("1"),
        name: text("김보험"),
        gender: text("여"),
        age: text("32"),
        career: text("5년"),
        title: text("보험영업 전문 설계사"),
        education: text("대학교(4년) 졸업"),
        region: text("서울"),
        skills: list(&["MS Office", "CRM"]),
        career_summary: text("보험 영업 5년, 월 30건 계약"),
        job_field: text("보험영업팀"),
        certification_summary: text("AFPK 취득"),
        education_detail: text("경영학과"),
        language_summary: text("TOEIC 950"),
        talent_profile: text("고객과의 신뢰를 최우선으로"),
        ..ApplicantRecord::default()
    }
}

pub(super) fn batch(entries: Vec<(&str, ApplicantRecord)>) -> ApplicantBatch {
    entries
        .into_iter()
        .map(|(key, record)| (key.to_string(), record))
        .collect()
}
