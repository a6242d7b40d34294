use chrono::NaiveDate;
use std::path::PathBuf;
use talent_grade::config::ScreeningSettings;
use talent_grade::error::AppError;
use talent_grade::workflows::screening::{KeywordDictionary, ScoringEngine, ScreeningConfig};
use tracing::info;

/// Builds the engine from config, letting CLI flags win over environment
/// settings.
pub(crate) fn build_engine(
    settings: &ScreeningSettings,
    dictionary_override: Option<PathBuf>,
    min_score_override: Option<u8>,
) -> Result<ScoringEngine, AppError> {
    let dictionary = match dictionary_override.or_else(|| settings.dictionary_path.clone()) {
        Some(path) => {
            info!(path = %path.display(), "loading keyword dictionary override");
            KeywordDictionary::from_path(path)?
        }
        None => KeywordDictionary::standard(),
    };

    let config = ScreeningConfig {
        min_pass_score: min_score_override.unwrap_or(settings.min_pass_score),
    };

    Ok(ScoringEngine::new(dictionary, config))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
