use serde::{Deserialize, Serialize};

/// Loosely typed value as it arrives from the applicant export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    List(Vec<FieldValue>),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Coerces the value into searchable text. Lists are space-joined and
    /// objects contribute their values, so nested certificate entries stay
    /// visible to the matchers.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(number) => number.to_string(),
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::render)
                .collect::<Vec<_>>()
                .join(" "),
            FieldValue::Other(value) => render_json(value),
        }
    }

    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn empty_list() -> Self {
        FieldValue::List(Vec::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::List(values.into_iter().map(FieldValue::from).collect())
    }
}

fn render_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Bool(flag) => flag.to_string(),
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(render_json)
            .collect::<Vec<_>>()
            .join(" "),
        serde_json::Value::Object(map) => map
            .values()
            .map(render_json)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Applicant snapshot as exported by the job board. Every field is optional;
/// absent and `null` values are treated identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(default)]
    pub index: Option<FieldValue>,
    #[serde(default)]
    pub name: Option<FieldValue>,
    #[serde(default)]
    pub gender: Option<FieldValue>,
    #[serde(default)]
    pub age: Option<FieldValue>,
    #[serde(default)]
    pub career: Option<FieldValue>,
    #[serde(default)]
    pub title: Option<FieldValue>,
    #[serde(default)]
    pub education: Option<FieldValue>,
    #[serde(default)]
    pub region: Option<FieldValue>,
    #[serde(default)]
    pub skills: Option<FieldValue>,
    #[serde(default, rename = "경력요약")]
    pub career_summary: Option<FieldValue>,
    #[serde(default, rename = "경력상세")]
    pub career_detail: Option<FieldValue>,
    #[serde(default, rename = "인턴대외활동요약")]
    pub activity_summary: Option<FieldValue>,
    #[serde(default, rename = "인턴대외활동상세")]
    pub activity_detail: Option<FieldValue>,
    #[serde(default, rename = "자격증요약")]
    pub certification_summary: Option<FieldValue>,
    #[serde(default, rename = "자격증상세")]
    pub certification_detail: Option<FieldValue>,
    #[serde(default, rename = "학력상세")]
    pub education_detail: Option<FieldValue>,
    #[serde(default, rename = "교육상세")]
    pub training_detail: Option<FieldValue>,
    #[serde(default, rename = "어학요약")]
    pub language_summary: Option<FieldValue>,
    #[serde(default, rename = "어학능력상세")]
    pub language_detail: Option<FieldValue>,
    #[serde(default, rename = "인재상")]
    pub talent_profile: Option<FieldValue>,
    #[serde(default, rename = "지원분야_직무")]
    pub job_field: Option<FieldValue>,
}

impl ApplicantRecord {
    pub fn display_name(&self) -> String {
        self.name
            .as_ref()
            .map(FieldValue::render)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Reduced view emitted per applicant: identity fields plus the total score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredApplicant {
    pub index: FieldValue,
    pub name: FieldValue,
    pub gender: FieldValue,
    pub age: FieldValue,
    pub career: FieldValue,
    pub title: FieldValue,
    pub education: FieldValue,
    pub region: FieldValue,
    pub skills: FieldValue,
    pub score: u8,
}

impl ScoredApplicant {
    pub fn project(record: &ApplicantRecord, score: u8) -> Self {
        let text = |value: &Option<FieldValue>| value.clone().unwrap_or_else(FieldValue::empty_text);

        Self {
            index: text(&record.index),
            name: text(&record.name),
            gender: text(&record.gender),
            age: text(&record.age),
            career: text(&record.career),
            title: text(&record.title),
            education: text(&record.education),
            region: text(&record.region),
            skills: record.skills.clone().unwrap_or_else(FieldValue::empty_list),
            score,
        }
    }
}
