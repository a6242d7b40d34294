mod config;
mod policy;
pub(crate) mod rules;

pub use config::{ScreeningConfig, DEFAULT_MIN_PASS_SCORE};
pub use policy::ScreeningDecision;

use super::dictionary::KeywordDictionary;
use super::domain::ApplicantRecord;
use policy::decide_outcome;
use serde::{Deserialize, Serialize};

/// The four independently scored rubric dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rubric {
    SalesExperience,
    CustomerFit,
    Specialization,
    MotivationLanguage,
}

impl Rubric {
    /// Highest subtotal the rubric can award with the essay signals disabled.
    pub fn ceiling(self) -> u8 {
        match self {
            Rubric::SalesExperience => 30,
            Rubric::CustomerFit => 5,
            Rubric::Specialization => 30,
            Rubric::MotivationLanguage => 5,
        }
    }
}

/// Stateless evaluator that applies the rubric to an applicant record.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    dictionary: KeywordDictionary,
    config: ScreeningConfig,
}

impl ScoringEngine {
    pub fn new(dictionary: KeywordDictionary, config: ScreeningConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn dictionary(&self) -> &KeywordDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    pub fn score(&self, record: &ApplicantRecord) -> ScoringOutcome {
        let components = rules::score_record(record, &self.dictionary);
        let total_score = components.iter().map(|component| component.score).sum();
        let decision = decide_outcome(&self.config, total_score);

        ScoringOutcome {
            components,
            total_score,
            decision,
        }
    }
}

/// Discrete contribution to an evaluation, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rubric: Rubric,
    pub score: u8,
    pub notes: String,
}

/// Evaluation output describing the composite score and decision trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub components: Vec<ScoreComponent>,
    pub total_score: u8,
    pub decision: ScreeningDecision,
}

impl ScoringOutcome {
    pub fn subtotal(&self, rubric: Rubric) -> u8 {
        self.components
            .iter()
            .find(|component| component.rubric == rubric)
            .map(|component| component.score)
            .unwrap_or(0)
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            sales_experience: self.subtotal(Rubric::SalesExperience),
            customer_fit: self.subtotal(Rubric::CustomerFit),
            specialization: self.subtotal(Rubric::Specialization),
            motivation_language: self.subtotal(Rubric::MotivationLanguage),
            total: self.total_score,
        }
    }
}

/// Flat per-rubric view used by reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sales_experience: u8,
    pub customer_fit: u8,
    pub specialization: u8,
    pub motivation_language: u8,
    pub total: u8,
}
