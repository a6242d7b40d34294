use regex::Regex;
use std::sync::OnceLock;

static QUANTIFIED: OnceLock<Regex> = OnceLock::new();
static TEST_SCORE: OnceLock<Regex> = OnceLock::new();
static PROFICIENCY: OnceLock<Regex> = OnceLock::new();

fn quantified() -> &'static Regex {
    QUANTIFIED.get_or_init(|| {
        Regex::new(r"(?i)([0-9]{2,}\s*(%|건|명|회|개|만원|억|개월|주|일))|(\+[0-9]+%)")
            .expect("quantified achievement pattern compiles")
    })
}

fn test_score() -> &'static Regex {
    TEST_SCORE.get_or_init(|| {
        Regex::new(r"(?i)(toeic|토익)\s*[:\-]?\s*([0-9]{3,4})")
            .expect("test score pattern compiles")
    })
}

fn proficiency() -> &'static Regex {
    PROFICIENCY.get_or_init(|| {
        Regex::new(r"(?i)(opic|오픽)\s*[:\-]?\s*([ail][0-9a-z_]?)")
            .expect("proficiency pattern compiles")
    })
}

/// True when the text quotes a measurable result such as `30건`, `120%`
/// or `+15%`.
pub fn has_quantified_achievement(text: &str) -> bool {
    quantified().is_match(text)
}

/// First TOEIC score quoted in the text.
pub fn extract_standard_test_score(text: &str) -> Option<u32> {
    test_score()
        .captures(text)
        .and_then(|captures| captures.get(2))
        .and_then(|score| score.as_str().parse().ok())
}

/// First OPIc level quoted in the text, uppercased (`IM`, `AL`, `I`...).
pub fn extract_proficiency_level(text: &str) -> Option<String> {
    proficiency()
        .captures(text)
        .and_then(|captures| captures.get(2))
        .map(|level| level.as_str().to_uppercase())
}
