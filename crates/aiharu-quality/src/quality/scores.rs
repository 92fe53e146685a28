//! Sub-score computation over the detector signals.
//!
//! Point values are fixed so the scoring stays reproducible. Each sub-score is
//! rounded independently and clamped to 100 before the weighted overall score
//! is computed; that two-stage rounding is observable at grade boundaries and
//! must not be collapsed into a single pass.

use super::category::Category;
use super::detectors::{self, AnswerSignals, PromptSignals};

const STRUCTURE_STEP_POINTS: u32 = 25;
const STRUCTURE_LIST_POINTS: u32 = 20;
const STRUCTURE_METHOD_POINTS: u32 = 20;
const STRUCTURE_CAUTION_POINTS: u32 = 15;
const STRUCTURE_ALTERNATIVE_POINTS: u32 = 10;
const STRUCTURE_SIGNAL_BONUS: u32 = 10;

const EXPERTISE_KEYWORD_SPAN: f64 = 60.0;
const EXPERTISE_TIER_STEPS: [usize; 3] = [5, 10, 15];
const EXPERTISE_TIER_BONUS: u32 = 10;
const EXPERTISE_PROFESSIONAL_POINTS: u32 = 10;
const EXPERTISE_NUMERIC_POINTS: u32 = 10;
const EXPERTISE_RESEARCH_POINTS: u32 = 10;
// Intentional asymmetry carried over from the production scoring table: the
// parenting vertical gets a flat expertise bump.
const PARENTING_FLAT_BONUS: u32 = 5;

const CONTEXT_PAIR_POINTS: u32 = 30;
const CONTEXT_TOPIC_POINTS: u32 = 40;

const PRACTICALITY_METHOD_POINTS: u32 = 25;
const PRACTICALITY_STEP_POINTS: u32 = 20;
const PRACTICALITY_CAUTION_POINTS: u32 = 15;
const PRACTICALITY_NUMERIC_POINTS: u32 = 20;
const PRACTICALITY_IMMEDIACY_POINTS: u32 = 20;

const CLARITY_INTERROGATIVE_POINTS: u32 = 40;
const CLARITY_SITUATION_POINTS: u32 = 30;
const CLARITY_COMPLEXITY_POINTS: u32 = 15;
const CLARITY_LENGTH_POINTS: u32 = 15;
const CLARITY_MIN_PROMPT_CHARS: usize = 50;

const QUESTION_EXPERTISE_KEYWORD_SPAN: f64 = 60.0;
const QUESTION_EXPERTISE_TIER_STEPS: [usize; 2] = [3, 6];
const QUESTION_EXPERTISE_TIER_BONUS: u32 = 10;
const QUESTION_EXPERTISE_PROFESSIONAL_POINTS: u32 = 20;
const QUESTION_EXPERTISE_RESEARCH_POINTS: u32 = 20;

const COMPLEXITY_TERM_POINTS: u32 = 30;
const COMPLEXITY_SITUATION_POINTS: u32 = 25;
const COMPLEXITY_CONNECTIVE_POINTS: u32 = 25;
const COMPLEXITY_COMPOUND_POINTS: u32 = 20;

fn clamp_score(points: u32) -> u8 {
    points.min(100) as u8
}

/// Structure: does the answer lay out steps, lists, methods, cautions, and
/// alternatives? A flat bonus lands once any signal fires at all.
pub(crate) fn structure_score(answer: &AnswerSignals) -> u8 {
    let mut points = 0;
    if answer.steps {
        points += STRUCTURE_STEP_POINTS;
    }
    if answer.list {
        points += STRUCTURE_LIST_POINTS;
    }
    if answer.method {
        points += STRUCTURE_METHOD_POINTS;
    }
    if answer.caution {
        points += STRUCTURE_CAUTION_POINTS;
    }
    if answer.alternatives {
        points += STRUCTURE_ALTERNATIVE_POINTS;
    }
    if points > 0 {
        points += STRUCTURE_SIGNAL_BONUS;
    }
    clamp_score(points)
}

fn keyword_base(matched: usize, total: usize, span: f64) -> u32 {
    if total == 0 {
        return 0;
    }
    (matched as f64 / total as f64 * span).round() as u32
}

/// Answer-side expertise: keyword coverage for the resolved category plus
/// register, quantitative, and research signals.
pub(crate) fn expertise_score(
    answer: &AnswerSignals,
    matched: usize,
    total: usize,
    category: Option<Category>,
) -> u8 {
    let mut points = keyword_base(matched, total, EXPERTISE_KEYWORD_SPAN);
    for step in EXPERTISE_TIER_STEPS {
        if matched >= step {
            points += EXPERTISE_TIER_BONUS;
        }
    }
    if answer.professional {
        points += EXPERTISE_PROFESSIONAL_POINTS;
    }
    if answer.numeric {
        points += EXPERTISE_NUMERIC_POINTS;
    }
    if answer.research {
        points += EXPERTISE_RESEARCH_POINTS;
    }
    if category == Some(Category::Parenting) {
        points += PARENTING_FLAT_BONUS;
    }
    clamp_score(points)
}

/// Context: does the answer speak to the question type ("how" wants steps,
/// "why" wants reasons) and stay on the question's topic?
pub(crate) fn context_score(prompt: &str, answer: &str) -> u8 {
    let mut points = 0;
    for (cues, vocabulary) in detectors::QUESTION_ANSWER_PAIRS {
        let cue_fires = cues.iter().any(|cue| prompt.contains(cue));
        let vocab_fires = vocabulary.iter().any(|word| answer.contains(word));
        if cue_fires && vocab_fires {
            points += CONTEXT_PAIR_POINTS;
        }
    }
    if let Some(topic) = detectors::extract_topic(prompt) {
        if answer.contains(topic) {
            points += CONTEXT_TOPIC_POINTS;
        }
    }
    clamp_score(points)
}

pub(crate) fn practicality_score(answer: &AnswerSignals) -> u8 {
    let mut points = 0;
    if answer.method {
        points += PRACTICALITY_METHOD_POINTS;
    }
    if answer.steps {
        points += PRACTICALITY_STEP_POINTS;
    }
    if answer.caution || answer.alternatives {
        points += PRACTICALITY_CAUTION_POINTS;
    }
    if answer.numeric {
        points += PRACTICALITY_NUMERIC_POINTS;
    }
    if answer.immediacy {
        points += PRACTICALITY_IMMEDIACY_POINTS;
    }
    clamp_score(points)
}

pub(crate) fn question_clarity_score(prompt_signals: &PromptSignals, prompt: &str) -> u8 {
    let mut points = 0;
    if prompt_signals.interrogative {
        points += CLARITY_INTERROGATIVE_POINTS;
    }
    if prompt_signals.situational {
        points += CLARITY_SITUATION_POINTS;
    }
    if prompt_signals.complexity {
        points += CLARITY_COMPLEXITY_POINTS;
    }
    if prompt.chars().count() >= CLARITY_MIN_PROMPT_CHARS {
        points += CLARITY_LENGTH_POINTS;
    }
    clamp_score(points)
}

/// Prompt-side expertise mirrors the answer-side keyword matching but with its
/// own span and tier schedule.
pub(crate) fn question_expertise_score(
    prompt_signals: &PromptSignals,
    matched: usize,
    total: usize,
) -> u8 {
    let mut points = keyword_base(matched, total, QUESTION_EXPERTISE_KEYWORD_SPAN);
    for step in QUESTION_EXPERTISE_TIER_STEPS {
        if matched >= step {
            points += QUESTION_EXPERTISE_TIER_BONUS;
        }
    }
    if prompt_signals.professional {
        points += QUESTION_EXPERTISE_PROFESSIONAL_POINTS;
    }
    if prompt_signals.research {
        points += QUESTION_EXPERTISE_RESEARCH_POINTS;
    }
    clamp_score(points)
}

pub(crate) fn question_complexity_score(prompt_signals: &PromptSignals) -> u8 {
    let mut points = 0;
    if prompt_signals.complexity {
        points += COMPLEXITY_TERM_POINTS;
    }
    if prompt_signals.situational {
        points += COMPLEXITY_SITUATION_POINTS;
    }
    if prompt_signals.connective {
        points += COMPLEXITY_CONNECTIVE_POINTS;
    }
    if prompt_signals.compound {
        points += COMPLEXITY_COMPOUND_POINTS;
    }
    clamp_score(points)
}

/// Match a keyword table against normalized text, preserving table order.
pub(crate) fn match_keywords(text: &str, table: &[String]) -> Vec<String> {
    table
        .iter()
        .filter(|keyword| text.contains(keyword.as_str()))
        .cloned()
        .collect()
}
