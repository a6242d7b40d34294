use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_PASS_SCORE: u8 = 30;

/// Screening knobs applied on top of the fixed rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub min_pass_score: u8,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            min_pass_score: DEFAULT_MIN_PASS_SCORE,
        }
    }
}
