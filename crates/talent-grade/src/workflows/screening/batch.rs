use super::domain::{ApplicantRecord, ScoredApplicant};
use super::evaluation::{ScoringEngine, ScoringOutcome};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Applicant records keyed by their export key (`"1"`, `"2"`, ...).
pub type ApplicantBatch = BTreeMap<String, ApplicantRecord>;

/// One scored applicant, keeping the full outcome next to the trimmed view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub key: String,
    pub display_name: String,
    pub applicant: ScoredApplicant,
    pub outcome: ScoringOutcome,
}

/// Scored applicants in processing order. Serializes as a JSON object keyed
/// like the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredBatch {
    entries: Vec<ScoredEntry>,
    min_pass_score: u8,
}

impl ScoredBatch {
    pub fn entries(&self) -> &[ScoredEntry] {
        &self.entries
    }

    /// Threshold the pass/fail decisions were made against.
    pub fn min_pass_score(&self) -> u8 {
        self.min_pass_score
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ScoredApplicant> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.applicant)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn status(&self) -> String {
        format!("ok | scored={}", self.entries.len())
    }
}

impl Serialize for ScoredBatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.applicant)?;
        }
        map.end()
    }
}

/// Scores every applicant in ascending numeric-key order.
pub fn score_batch(applicants: &ApplicantBatch, engine: &ScoringEngine) -> ScoredBatch {
    let mut ordered: Vec<(&String, &ApplicantRecord)> = applicants.iter().collect();
    ordered.sort_by_key(|(key, _)| numeric_key(key));

    let entries: Vec<ScoredEntry> = ordered
        .into_iter()
        .map(|(key, record)| {
            let outcome = engine.score(record);
            debug!(
                key = %key,
                total = outcome.total_score,
                decision = outcome.decision.label(),
                "scored applicant"
            );

            ScoredEntry {
                key: key.clone(),
                display_name: record.display_name(),
                applicant: ScoredApplicant::project(record, outcome.total_score),
                outcome,
            }
        })
        .collect();

    info!(scored = entries.len(), "applicant batch scored");
    ScoredBatch {
        entries,
        min_pass_score: engine.config().min_pass_score,
    }
}

/// Leading-integer value of a key; keys without one sort as zero.
pub(crate) fn numeric_key(key: &str) -> i64 {
    let trimmed = key.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return 0;
    }

    // Only overflow can fail here; saturate so oversized keys still sort last.
    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(if sign < 0 { i64::MIN } else { i64::MAX })
}
