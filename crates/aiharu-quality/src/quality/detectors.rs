//! Named boolean predicates over normalized text.
//!
//! Each detector tests one linguistic pattern against a fixed keyword or phrase
//! set (Korean plus English equivalents). All detection is substring or regex
//! membership, so a given input always produces the same signals.

use regex::Regex;
use std::sync::OnceLock;

/// Lowercase ASCII and trim. Korean text passes through unchanged.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

const STEP_TERMS: &[&str] = &[
    "단계", "순서", "절차", "먼저", "그 다음", "다음으로", "마지막으로", "step", "first", "then",
    "finally",
];

const METHOD_TERMS: &[&str] = &[
    "방법",
    "구체적",
    "예를 들어",
    "예시",
    "실천",
    "활용",
    "method",
    "for example",
    "e.g.",
    "you can",
];

const CAUTION_TERMS: &[&str] = &[
    "주의",
    "조심",
    "유의",
    "하지 마",
    "피해야",
    "피하세요",
    "경고",
    "caution",
    "avoid",
    "warning",
    "be careful",
    "do not",
];

const ALTERNATIVE_TERMS: &[&str] = &[
    "또는",
    "대안",
    "다른 방법",
    "추가로",
    "고려해",
    "아니면",
    "alternatively",
    "another option",
    "in addition",
    "consider",
];

const IMMEDIACY_TERMS: &[&str] = &[
    "지금",
    "오늘",
    "이번 주",
    "바로",
    "당장",
    "즉시",
    "right now",
    "today",
    "this week",
    "immediately",
];

const PROFESSIONAL_TERMS: &[&str] = &[
    "전문가",
    "전문적",
    "권장",
    "근거",
    "체계적",
    "기준에 따라",
    "expert",
    "recommended",
    "best practice",
    "systematic",
    "guideline",
];

const RESEARCH_TERMS: &[&str] = &[
    "연구",
    "통계",
    "논문",
    "조사에 따르면",
    "최신 동향",
    "트렌드",
    "research",
    "study",
    "studies",
    "statistics",
    "trend",
];

const INTERROGATIVE_TERMS: &[&str] = &[
    "어떻게", "무엇", "뭐", "왜", "언제", "어디", "누가", "얼마나", "how", "what", "why", "when",
    "where", "who",
];

const SITUATION_TERMS: &[&str] = &[
    "저는",
    "제가",
    "저희",
    "우리",
    "아이가",
    "상황",
    "경우",
    "현재",
    "요즘",
    "개월",
    "my ",
    "our ",
    "currently",
    "in my case",
];

const COMPLEXITY_TERMS: &[&str] = &[
    "복잡",
    "여러",
    "다양",
    "동시에",
    "복합적",
    "multiple",
    "various",
    "complex",
    "several",
    "trade-off",
];

const CONNECTIVE_TERMS: &[&str] = &[
    "하지만",
    "그러나",
    "만약",
    "그런데",
    "반면",
    " 때 ",
    "경우에는",
    "however",
    "although",
    "whereas",
    " if ",
    " but ",
];

fn list_marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^\s*(?:\d+[.)]|[-*•])\s").expect("valid pattern"))
}

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)?\s*(?:%|퍼센트)?").expect("valid pattern"))
}

fn compound_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r",\s*(?:그리고|그래서|하지만|그러나|and\s|but\s|so\s)").expect("valid pattern")
    })
}

pub(crate) fn has_step_language(text: &str) -> bool {
    contains_any(text, STEP_TERMS)
}

pub(crate) fn has_list_markers(text: &str) -> bool {
    list_marker_pattern().is_match(text)
}

pub(crate) fn has_concrete_method(text: &str) -> bool {
    contains_any(text, METHOD_TERMS)
}

pub(crate) fn has_caution(text: &str) -> bool {
    contains_any(text, CAUTION_TERMS)
}

pub(crate) fn has_alternatives(text: &str) -> bool {
    contains_any(text, ALTERNATIVE_TERMS)
}

pub(crate) fn has_numeric_mentions(text: &str) -> bool {
    numeric_pattern().is_match(text)
}

pub(crate) fn has_immediacy(text: &str) -> bool {
    contains_any(text, IMMEDIACY_TERMS)
}

pub(crate) fn has_professional_register(text: &str) -> bool {
    contains_any(text, PROFESSIONAL_TERMS)
}

pub(crate) fn has_research_mentions(text: &str) -> bool {
    contains_any(text, RESEARCH_TERMS)
}

pub(crate) fn has_interrogative(text: &str) -> bool {
    text.contains('?') || contains_any(text, INTERROGATIVE_TERMS)
}

pub(crate) fn has_situation_detail(text: &str) -> bool {
    contains_any(text, SITUATION_TERMS)
}

pub(crate) fn has_complexity_terms(text: &str) -> bool {
    contains_any(text, COMPLEXITY_TERMS)
}

pub(crate) fn has_conditional_connectives(text: &str) -> bool {
    contains_any(text, CONNECTIVE_TERMS)
}

pub(crate) fn has_compound_sentence(text: &str) -> bool {
    compound_pattern().is_match(text)
}

/// Question-type cue (prompt side) paired with the answer vocabulary that
/// addresses it. Context scoring rewards each pair that fires on both sides.
pub(crate) const QUESTION_ANSWER_PAIRS: &[(&[&str], &[&str])] = &[
    (
        &["어떻게", "어떡", "how"],
        &["단계", "방법", "가이드", "순서", "step", "method", "guide"],
    ),
    (
        &["무엇", "뭐가", "뭔가", "what"],
        &["정의", "개념", "종류", "의미", "definition", "concept", "type"],
    ),
    (
        &["왜", "이유", "why"],
        &["이유", "때문", "원인", "배경", "reason", "because", "cause"],
    ),
    (
        &["언제", "시기", "when"],
        &["시기", "시점", "타이밍", "무렵", "timing", "schedule"],
    ),
];

/// Coarse topic vocabulary scanned in order; the first hit in the prompt is
/// taken as the question's topic.
const TOPIC_TERMS: &[&str] = &[
    "아이",
    "아기",
    "자녀",
    "수면",
    "식사",
    "이유식",
    "공부",
    "학습",
    "마케팅",
    "브랜드",
    "고객",
    "코드",
    "버그",
    "테스트",
    "보안",
    "아키텍처",
    "운동",
    "식단",
    "감정",
    "습관",
];

pub(crate) fn extract_topic(prompt: &str) -> Option<&'static str> {
    TOPIC_TERMS.iter().copied().find(|term| prompt.contains(term))
}

/// Answer-side signals feeding the structure, expertise, and practicality
/// sub-scores.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AnswerSignals {
    pub steps: bool,
    pub list: bool,
    pub method: bool,
    pub caution: bool,
    pub alternatives: bool,
    pub numeric: bool,
    pub immediacy: bool,
    pub professional: bool,
    pub research: bool,
}

impl AnswerSignals {
    pub(crate) fn scan(text: &str) -> Self {
        Self {
            steps: has_step_language(text),
            list: has_list_markers(text),
            method: has_concrete_method(text),
            caution: has_caution(text),
            alternatives: has_alternatives(text),
            numeric: has_numeric_mentions(text),
            immediacy: has_immediacy(text),
            professional: has_professional_register(text),
            research: has_research_mentions(text),
        }
    }
}

/// Prompt-side signals feeding the question sub-scores.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PromptSignals {
    pub interrogative: bool,
    pub situational: bool,
    pub complexity: bool,
    pub connective: bool,
    pub compound: bool,
    pub professional: bool,
    pub research: bool,
}

impl PromptSignals {
    pub(crate) fn scan(text: &str) -> Self {
        Self {
            interrogative: has_interrogative(text),
            situational: has_situation_detail(text),
            complexity: has_complexity_terms(text),
            connective: has_conditional_connectives(text),
            compound: has_compound_sentence(text),
            professional: has_professional_register(text),
            research: has_research_mentions(text),
        }
    }
}
