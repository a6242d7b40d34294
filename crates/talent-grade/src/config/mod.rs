use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::workflows::screening::DEFAULT_MIN_PASS_SCORE;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningSettings,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let min_pass_score = match env::var("SCREENING_MIN_SCORE") {
            Ok(raw) => raw
                .trim()
                .parse::<u8>()
                .map_err(|_| ConfigError::InvalidMinScore { value: raw })?,
            Err(_) => DEFAULT_MIN_PASS_SCORE,
        };

        let dictionary_path = env::var("SCREENING_DICTIONARY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            screening: ScreeningSettings {
                min_pass_score,
                dictionary_path,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Knobs for the screening run that are not part of the rubric itself.
#[derive(Debug, Clone)]
pub struct ScreeningSettings {
    pub min_pass_score: u8,
    pub dictionary_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinScore { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinScore { value } => write!(
                f,
                "SCREENING_MIN_SCORE must be an integer between 0 and 255 (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
