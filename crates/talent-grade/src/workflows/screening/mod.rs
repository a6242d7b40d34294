//! Applicant screening for insurance-sales hiring: keyword rubrics, pattern
//! extraction and batch scoring over exported applicant records.

pub mod bag;
pub mod batch;
pub mod dictionary;
pub mod domain;
pub mod evaluation;
pub mod import;
pub mod normalizer;
pub mod patterns;
pub mod report;

#[cfg(test)]
mod tests;

pub use batch::{score_batch, ApplicantBatch, ScoredBatch, ScoredEntry};
pub use dictionary::{DictionaryError, KeywordCategory, KeywordDictionary};
pub use domain::{ApplicantRecord, FieldValue, ScoredApplicant};
pub use evaluation::{
    Rubric, ScoreBreakdown, ScoreComponent, ScoringEngine, ScoringOutcome, ScreeningConfig,
    ScreeningDecision, DEFAULT_MIN_PASS_SCORE,
};
pub use import::{ApplicantImporter, ImportError};
pub use report::{ReportError, ReportRow, ReportSummary, ScreeningReport};
