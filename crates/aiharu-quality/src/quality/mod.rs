//! Deterministic quality scoring for prompt/answer pairs.
//!
//! The engine is a pure function over its inputs: no I/O, no randomness, no
//! shared mutable state. Seven sub-scores are computed from independent
//! pattern detectors and combined with fixed weights into an overall score and
//! letter grade.

mod category;
mod detectors;
mod scores;
mod suggestions;

pub use category::{Category, CategoryKeywords};
pub use suggestions::suggestions_for;

#[cfg(test)]
mod tests;

use detectors::{AnswerSignals, PromptSignals};
use serde::{Deserialize, Serialize};

/// Overall-score weights in sub-score evaluation order: structure, expertise,
/// context, practicality, question clarity, question expertise, question
/// complexity. They must sum to exactly 1.00.
pub const OVERALL_WEIGHTS: [f64; 7] = [0.20, 0.20, 0.15, 0.15, 0.10, 0.10, 0.10];

/// Letter bucket derived from the overall score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
}

impl Grade {
    /// Threshold bands are inclusive at the lower edge: exactly 90 is A+,
    /// exactly 50 is C+.
    pub fn from_score(overall: u8) -> Self {
        match overall {
            90..=u8::MAX => Grade::APlus,
            80..=89 => Grade::A,
            70..=79 => Grade::BPlus,
            60..=69 => Grade::B,
            50..=59 => Grade::CPlus,
            40..=49 => Grade::C,
            _ => Grade::D,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// The seven 0..=100 sub-scores, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub structure: u8,
    pub expertise: u8,
    pub context: u8,
    pub practicality: u8,
    pub question_clarity: u8,
    pub question_expertise: u8,
    pub question_complexity: u8,
}

impl SubScores {
    fn weighted_overall(&self) -> u8 {
        let values = [
            self.structure,
            self.expertise,
            self.context,
            self.practicality,
            self.question_clarity,
            self.question_expertise,
            self.question_complexity,
        ];
        let weighted: f64 = values
            .iter()
            .zip(OVERALL_WEIGHTS)
            .map(|(score, weight)| f64::from(*score) * weight)
            .sum();
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

/// Which heuristics fired, plus the informational token-efficiency metric.
///
/// `token_efficiency` (answer characters per token) never feeds the weighted
/// overall score; it is reported for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityDetails {
    pub has_step_language: bool,
    pub has_list_markers: bool,
    pub has_concrete_method: bool,
    pub has_caution: bool,
    pub has_alternatives: bool,
    pub has_numeric_mentions: bool,
    pub has_immediacy: bool,
    pub has_professional_register: bool,
    pub has_research_mentions: bool,
    pub category: Option<Category>,
    pub matched_keywords: Vec<String>,
    pub prompt_matched_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_efficiency: Option<f64>,
}

/// Full scoring output for one prompt/answer pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub sub_scores: SubScores,
    pub overall_score: u8,
    pub grade: Grade,
    pub details: QualityDetails,
}

/// Stateless engine owning the category keyword tables.
pub struct QualityEngine {
    keywords: CategoryKeywords,
}

impl QualityEngine {
    pub fn new(keywords: CategoryKeywords) -> Self {
        Self { keywords }
    }

    /// Score a prompt/answer pair. Total over its domain: any strings
    /// (including empty) and any token count produce a fully populated report.
    pub fn analyze(
        &self,
        prompt: &str,
        answer: &str,
        category_tag: &str,
        tokens_used: u32,
    ) -> QualityReport {
        let prompt_text = detectors::normalize(prompt);
        let answer_text = detectors::normalize(answer);

        let category = Category::from_tag(category_tag);
        let table = category
            .map(|resolved| self.keywords.keywords_for(resolved))
            .unwrap_or(&[]);

        let answer_signals = AnswerSignals::scan(&answer_text);
        let prompt_signals = PromptSignals::scan(&prompt_text);

        let matched_keywords = scores::match_keywords(&answer_text, table);
        let prompt_matched_keywords = scores::match_keywords(&prompt_text, table);

        let sub_scores = SubScores {
            structure: scores::structure_score(&answer_signals),
            expertise: scores::expertise_score(
                &answer_signals,
                matched_keywords.len(),
                table.len(),
                category,
            ),
            context: scores::context_score(&prompt_text, &answer_text),
            practicality: scores::practicality_score(&answer_signals),
            question_clarity: scores::question_clarity_score(&prompt_signals, &prompt_text),
            question_expertise: scores::question_expertise_score(
                &prompt_signals,
                prompt_matched_keywords.len(),
                table.len(),
            ),
            question_complexity: scores::question_complexity_score(&prompt_signals),
        };

        let overall_score = sub_scores.weighted_overall();

        QualityReport {
            sub_scores,
            overall_score,
            grade: Grade::from_score(overall_score),
            details: QualityDetails {
                has_step_language: answer_signals.steps,
                has_list_markers: answer_signals.list,
                has_concrete_method: answer_signals.method,
                has_caution: answer_signals.caution,
                has_alternatives: answer_signals.alternatives,
                has_numeric_mentions: answer_signals.numeric,
                has_immediacy: answer_signals.immediacy,
                has_professional_register: answer_signals.professional,
                has_research_mentions: answer_signals.research,
                category,
                matched_keywords,
                prompt_matched_keywords,
                token_efficiency: token_efficiency(&answer_text, tokens_used),
            },
        }
    }
}

impl Default for QualityEngine {
    fn default() -> Self {
        Self::new(CategoryKeywords::standard())
    }
}

fn token_efficiency(answer: &str, tokens_used: u32) -> Option<f64> {
    if tokens_used == 0 {
        return None;
    }
    let chars = answer.chars().count() as f64;
    let ratio = chars / f64::from(tokens_used);
    Some((ratio * 100.0).round() / 100.0)
}
