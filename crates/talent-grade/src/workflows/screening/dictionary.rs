use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Named trigger lists consulted by the rubrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordCategory {
    InsuranceSales,
    FinanceSales,
    GeneralSales,
    IndirectSales,
    Activity,
    CommStrong,
    CommMedium,
    CertHigh,
    CertBasic,
    CertLight,
    MajorFinance,
    EduFinance,
    EduBasic,
    FitTraits,
    MotiveStrong,
    MotiveWeak,
    LangNames,
}

impl KeywordCategory {
    pub fn ordered() -> [KeywordCategory; 17] {
        use KeywordCategory::*;
        [
            InsuranceSales,
            FinanceSales,
            GeneralSales,
            IndirectSales,
            Activity,
            CommStrong,
            CommMedium,
            CertHigh,
            CertBasic,
            CertLight,
            MajorFinance,
            EduFinance,
            EduBasic,
            FitTraits,
            MotiveStrong,
            MotiveWeak,
            LangNames,
        ]
    }

    fn standard_terms(self) -> &'static [&'static str] {
        match self {
            KeywordCategory::InsuranceSales => &[
                "보험 영업",
                "보험영업",
                "보험상품",
                "설계사",
                "FP",
                "GA",
                "생명보험",
                "손해보험",
                "보장 분석",
                "보장설계",
                "종합재무설계",
                "리모델링",
            ],
            KeywordCategory::FinanceSales => &[
                "금융 영업",
                "금융상품",
                "자산관리",
                "PB",
                "WM",
                "펀드",
                "증권",
                "투자",
                "대출상담",
                "카드영업",
                "지점 영업",
            ],
            KeywordCategory::GeneralSales => &[
                "영업",
                "세일즈",
                "판매",
                "B2B 영업",
                "B2C 영업",
                "영업관리",
                "상담원",
                "상담",
                "텔레마케팅",
                "TM",
                "영업지원",
                "영업기획",
                "고객유치",
                "가망고객",
                "리드",
                "콜",
            ],
            KeywordCategory::IndirectSales => &[
                "고객응대",
                "CS",
                "시장조사",
                "프로모션",
                "홍보",
                "행사 운영",
                "매장관리",
                "판촉",
            ],
            KeywordCategory::Activity => &[
                "동아리",
                "인턴",
                "대외활동",
                "프로젝트",
                "공모전",
                "서포터즈",
                "홍보대사",
            ],
            KeywordCategory::CommStrong => &[
                "고객 니즈",
                "니즈 파악",
                "경청",
                "문제 해결",
                "클레임",
                "VOC",
                "고객 만족",
                "재구매",
                "추천",
                "관계 형성",
                "관계관리",
                "상담 스크립트",
                "컨설팅",
                "제안",
                "설득",
            ],
            KeywordCategory::CommMedium => &[
                "소통",
                "협업",
                "커뮤니케이션",
                "팀워크",
                "협력",
                "친화력",
                "긍정",
                "배려",
                "설명",
            ],
            KeywordCategory::CertHigh => &[
                "손해사정사",
                "AFPK",
                "CFP",
                "투자자산운용사",
                "증권투자권유대행인",
                "파생상품투자권유자문인력",
                "보험계리사",
            ],
            KeywordCategory::CertBasic => &[
                "보험 모집인",
                "생명보험 모집인",
                "손해보험 모집인",
                "펀드투자권유대행인",
                "펀드투자상담사",
                "은행FP",
                "퇴직연금",
                "신용분석사",
            ],
            KeywordCategory::CertLight => &["운전면허", "2종보통", "1종보통", "CS리더스", "MOS"],
            KeywordCategory::MajorFinance => &[
                "금융",
                "경제",
                "경영",
                "보험",
                "재무",
                "회계",
                "금융공학",
                "보험계리",
                "비즈니스",
            ],
            KeywordCategory::EduFinance => &[
                "금융 교육",
                "펀드 교육",
                "자산관리 교육",
                "세일즈 교육",
                "세일즈 트레이닝",
                "상담 스킬",
                "세일즈 아카데미",
                "콜 교육",
                "FP 교육",
            ],
            KeywordCategory::EduBasic => &["경제원론", "재무회계", "마케팅", "금융상품"],
            KeywordCategory::FitTraits => &["고객 중심", "관계", "소통", "긍정", "신뢰"],
            KeywordCategory::MotiveStrong => &[
                "보험 산업",
                "보험업",
                "GA 채널",
                "모집질서",
                "준법",
                "소비자보호",
                "보장분석",
                "리드관리",
                "고객발굴",
                "리텐션",
                "리쿠르팅",
                "월납",
                "보장성",
                "인바운드/아웃바운드",
                "컨설팅영업",
            ],
            KeywordCategory::MotiveWeak => &[
                "성장",
                "열정",
                "도전",
                "문제 해결",
                "목표",
                "성과",
                "책임감",
                "자기계발",
            ],
            KeywordCategory::LangNames => &["TOEIC", "토익", "OPIC", "OPIc", "오픽", "TOEFL", "IELTS"],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read keyword dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid keyword dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable category → trigger phrase table shared by every applicant in a
/// run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDictionary {
    entries: HashMap<KeywordCategory, Vec<String>>,
}

impl KeywordDictionary {
    pub fn standard() -> Self {
        let entries = KeywordCategory::ordered()
            .into_iter()
            .map(|category| {
                let terms = category
                    .standard_terms()
                    .iter()
                    .map(|term| term.to_string())
                    .collect();
                (category, terms)
            })
            .collect();

        Self { entries }
    }

    pub fn keywords(&self, category: KeywordCategory) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Union of several categories, preserving category then term order.
    pub fn union(&self, categories: &[KeywordCategory]) -> Vec<&str> {
        categories
            .iter()
            .flat_map(|category| self.keywords(*category))
            .map(String::as_str)
            .collect()
    }

    /// Replaces the listed categories; unlisted categories keep their
    /// standard terms.
    pub fn with_overrides(mut self, overrides: BTreeMap<KeywordCategory, Vec<String>>) -> Self {
        for (category, terms) in overrides {
            self.entries.insert(category, terms);
        }
        self
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let overrides: BTreeMap<KeywordCategory, Vec<String>> = serde_json::from_reader(reader)?;
        if overrides.is_empty() {
            warn!("keyword dictionary override names no categories; using standard terms");
        } else {
            info!(
                categories = overrides.len(),
                "applying keyword dictionary overrides"
            );
        }
        Ok(Self::standard().with_overrides(overrides))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::standard()
    }
}
