use super::config::ScreeningConfig;
use serde::{Deserialize, Serialize};

/// Pass/fail verdict derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningDecision {
    Pass,
    Fail,
}

impl ScreeningDecision {
    pub fn label(self) -> &'static str {
        match self {
            ScreeningDecision::Pass => "pass",
            ScreeningDecision::Fail => "fail",
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, ScreeningDecision::Pass)
    }
}

pub(crate) fn decide_outcome(config: &ScreeningConfig, total_score: u8) -> ScreeningDecision {
    if total_score >= config.min_pass_score {
        ScreeningDecision::Pass
    } else {
        ScreeningDecision::Fail
    }
}
