use super::super::bag::build_bag;
use super::super::dictionary::{KeywordCategory, KeywordDictionary};
use super::super::domain::{ApplicantRecord, FieldValue};
use super::super::normalizer::contains_any;
use super::super::patterns::{
    extract_proficiency_level, extract_standard_test_score, has_quantified_achievement,
};
use super::{Rubric, ScoreComponent};

const EXPERIENCE_CAP: u8 = 25;

// Essay-derived signals are switched off; their shares stay at zero.
const COMMUNICATION_ESSAY_SCORE: u8 = 0;
const MOTIVATION_ESSAY_SCORE: u8 = 0;

pub(crate) fn score_record(
    record: &ApplicantRecord,
    dictionary: &KeywordDictionary,
) -> Vec<ScoreComponent> {
    vec![
        score_sales_experience(record, dictionary),
        score_customer_fit(record, dictionary),
        score_specialization(record, dictionary),
        score_motivation_and_language(record, dictionary),
    ]
}

fn render(value: &Option<FieldValue>) -> String {
    value.as_ref().map(FieldValue::render).unwrap_or_default()
}

pub(crate) fn score_sales_experience(
    record: &ApplicantRecord,
    dictionary: &KeywordDictionary,
) -> ScoreComponent {
    use KeywordCategory::*;

    let bag = build_bag(&[
        record.career_summary.as_ref(),
        record.career_detail.as_ref(),
        record.activity_summary.as_ref(),
        record.activity_detail.as_ref(),
        record.title.as_ref(),
        record.career.as_ref(),
        record.skills.as_ref(),
    ]);
    let direct = dictionary.union(&[InsuranceSales, FinanceSales]);
    let mut notes = Vec::new();

    let base = if contains_any(&bag, &direct) {
        notes.push("direct insurance/finance sales experience (+20)".to_string());
        20
    } else if contains_any(&bag, dictionary.keywords(GeneralSales)) {
        notes.push("general sales experience (+15)".to_string());
        15
    } else if contains_any(&bag, dictionary.keywords(IndirectSales)) {
        notes.push("sales-adjacent experience (+10)".to_string());
        10
    } else {
        0
    };

    let bonus = if has_quantified_achievement(&bag) {
        notes.push("quantified achievement (+5)".to_string());
        5
    } else if contains_any(&bag, dictionary.keywords(Activity)) {
        notes.push("extracurricular activity (+3)".to_string());
        3
    } else {
        0
    };

    let experience = (base + bonus).min(EXPERIENCE_CAP);

    let job_field = render(&record.job_field);
    let job_bonus = if contains_any(&job_field, &direct) {
        notes.push("applied for insurance/finance sales (+5)".to_string());
        5
    } else if contains_any(&job_field, dictionary.keywords(GeneralSales)) {
        notes.push("applied for a sales role (+3)".to_string());
        3
    } else {
        0
    };

    component(Rubric::SalesExperience, experience + job_bonus, notes)
}

pub(crate) fn score_customer_fit(
    record: &ApplicantRecord,
    dictionary: &KeywordDictionary,
) -> ScoreComponent {
    let profile = render(&record.talent_profile);
    let mut notes = Vec::new();

    let fit = if contains_any(&profile, dictionary.keywords(KeywordCategory::FitTraits)) {
        notes.push("talent profile emphasises relationships and trust (+5)".to_string());
        5
    } else if !profile.is_empty() {
        notes.push("talent profile provided (+3)".to_string());
        3
    } else {
        0
    };

    component(Rubric::CustomerFit, COMMUNICATION_ESSAY_SCORE + fit, notes)
}

pub(crate) fn score_specialization(
    record: &ApplicantRecord,
    dictionary: &KeywordDictionary,
) -> ScoreComponent {
    use KeywordCategory::*;

    let certifications = build_bag(&[
        record.certification_summary.as_ref(),
        record.certification_detail.as_ref(),
        record.skills.as_ref(),
    ]);
    let education = build_bag(&[
        record.education_detail.as_ref(),
        record.training_detail.as_ref(),
        record.education.as_ref(),
        record.title.as_ref(),
    ]);
    let mut notes = Vec::new();

    let certification = if contains_any(&certifications, dictionary.keywords(CertHigh)) {
        notes.push("advanced finance/insurance certification (+20)".to_string());
        20
    } else if contains_any(&certifications, dictionary.keywords(CertBasic)) {
        notes.push("entry-level sales licence (+10)".to_string());
        10
    } else if contains_any(&certifications, dictionary.keywords(CertLight)) {
        notes.push("general certificate (+2)".to_string());
        2
    } else {
        0
    };

    let schooling = if contains_any(&education, &dictionary.union(&[MajorFinance, EduFinance])) {
        notes.push("finance major or sales training (+10)".to_string());
        10
    } else if contains_any(&education, dictionary.keywords(EduBasic)) {
        notes.push("business coursework (+5)".to_string());
        5
    } else {
        0
    };

    component(Rubric::Specialization, certification + schooling, notes)
}

pub(crate) fn score_motivation_and_language(
    record: &ApplicantRecord,
    dictionary: &KeywordDictionary,
) -> ScoreComponent {
    let languages = build_bag(&[
        record.language_summary.as_ref(),
        record.language_detail.as_ref(),
        record.skills.as_ref(),
    ]);
    let mut notes = Vec::new();

    let mut language = match extract_standard_test_score(&languages) {
        Some(score) => {
            let points = test_score_points(score);
            if points > 0 {
                notes.push(format!("TOEIC {score} (+{points})"));
            }
            points
        }
        None => 0,
    };

    if language == 0 {
        if let Some(level) = extract_proficiency_level(&languages) {
            language = proficiency_points(&level);
            notes.push(format!("OPIc {level} (+{language})"));
        }
    }

    if language == 0 && contains_any(&languages, dictionary.keywords(KeywordCategory::LangNames))
    {
        notes.push("language test listed without a usable result (+1)".to_string());
        language = 1;
    }

    component(
        Rubric::MotivationLanguage,
        MOTIVATION_ESSAY_SCORE + language,
        notes,
    )
}

fn test_score_points(score: u32) -> u8 {
    if score >= 900 {
        5
    } else if score >= 700 {
        3
    } else if score >= 600 {
        1
    } else {
        0
    }
}

fn proficiency_points(level: &str) -> u8 {
    if level.contains("AL") || level.contains("IH") {
        5
    } else if level.contains("IM") {
        3
    } else {
        1
    }
}

fn component(rubric: Rubric, score: u8, notes: Vec<String>) -> ScoreComponent {
    let notes = if notes.is_empty() {
        "no matching evidence".to_string()
    } else {
        notes.join("; ")
    };

    ScoreComponent {
        rubric,
        score,
        notes,
    }
}
