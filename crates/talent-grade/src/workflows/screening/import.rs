use super::batch::ApplicantBatch;
use super::domain::ApplicantRecord;
use serde::de::Error as _;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read applicant export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct ApplicantImporter;

impl ApplicantImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ApplicantBatch, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Accepts a keyed object (`{"1": {...}}`) or a plain list of records;
    /// listed exports are keyed `"1"..="N"` by position.
    pub fn from_reader<R: Read>(reader: R) -> Result<ApplicantBatch, ImportError> {
        let export: Value = serde_json::from_reader(reader)?;

        let batch = match export {
            Value::Object(records) => records
                .into_iter()
                .map(|(key, value)| {
                    let record = parse_record(&key, value)?;
                    Ok((key, record))
                })
                .collect::<Result<ApplicantBatch, ImportError>>()?,
            Value::Array(records) => records
                .into_iter()
                .enumerate()
                .map(|(position, value)| {
                    let key = (position + 1).to_string();
                    let record = parse_record(&key, value)?;
                    Ok((key, record))
                })
                .collect::<Result<ApplicantBatch, ImportError>>()?,
            other => {
                return Err(ImportError::Json(serde_json::Error::custom(format!(
                    "expected an object or array of applicants, found {}",
                    kind_of(&other)
                ))))
            }
        };

        info!(applicants = batch.len(), "applicant export loaded");
        Ok(batch)
    }
}

/// Records that are not JSON objects are kept as empty applicants.
fn parse_record(key: &str, value: Value) -> Result<ApplicantRecord, ImportError> {
    match value {
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => {
            warn!(
                key,
                kind = kind_of(&other),
                "applicant record is not an object; scoring it as empty"
            );
            Ok(ApplicantRecord::default())
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::screening::domain::FieldValue;
    use crate::workflows::screening::{score_batch, ScoringEngine};
    use std::io::Cursor;

    #[test]
    fn reads_keyed_exports() {
        let json = r#"{ "2": {"name": "B"}, "1": {"name": "A", "경력요약": null} }"#;
        let batch = ApplicantImporter::from_reader(Cursor::new(json)).expect("import");

        assert_eq!(batch.len(), 2);
        assert_eq!(batch["1"].name, Some(FieldValue::from("A")));
        assert!(batch["1"].career_summary.is_none());
    }

    #[test]
    fn keys_listed_exports_by_position() {
        let json = r#"[ {"name": "A"}, {"name": "B"} ]"#;
        let batch = ApplicantImporter::from_reader(Cursor::new(json)).expect("import");

        assert_eq!(batch.keys().cloned().collect::<Vec<_>>(), ["1", "2"]);
        assert_eq!(batch["2"].name, Some(FieldValue::from("B")));
    }

    #[test]
    fn null_records_import_as_empty_applicants() {
        let json = r#"{ "1": {"name": "A", "경력요약": "보험 영업"}, "2": null }"#;
        let batch = ApplicantImporter::from_reader(Cursor::new(json)).expect("import");

        assert_eq!(batch.keys().cloned().collect::<Vec<_>>(), ["1", "2"]);
        assert_eq!(batch["2"], ApplicantRecord::default());

        let scored = score_batch(&batch, &ScoringEngine::default());
        assert_eq!(scored.get("1").map(|applicant| applicant.score), Some(20));
        assert_eq!(scored.get("2").map(|applicant| applicant.score), Some(0));
    }

    #[test]
    fn non_object_list_entries_become_empty_applicants() {
        let json = r#"[ {"name": "A"}, "oops", 7 ]"#;
        let batch = ApplicantImporter::from_reader(Cursor::new(json)).expect("import");

        assert_eq!(batch.len(), 3);
        assert_eq!(batch["2"], ApplicantRecord::default());
        assert_eq!(batch["3"], ApplicantRecord::default());
    }

    #[test]
    fn rejects_scalar_documents() {
        let error = ApplicantImporter::from_reader(Cursor::new("42")).expect_err("not an export");
        match error {
            ImportError::Json(inner) => assert!(inner.to_string().contains("found a number")),
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn syntax_errors_keep_their_position() {
        let json = "{\n  \"1\": {\"name\": \"A\",}\n}";
        let error = ApplicantImporter::from_reader(Cursor::new(json)).expect_err("malformed");
        match error {
            ImportError::Json(inner) => {
                assert!(inner.is_syntax());
                assert_eq!(inner.line(), 2);
            }
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = ApplicantImporter::from_path("./does-not-exist.json").expect_err("io error");
        match error {
            ImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
