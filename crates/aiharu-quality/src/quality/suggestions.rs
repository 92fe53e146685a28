use super::{Category, QualityReport};

/// A sub-score below this threshold earns an improvement hint.
const SUGGESTION_THRESHOLD: u8 = 70;

/// Human-readable improvement hints for the answer-side sub-scores.
///
/// Hints are emitted in evaluation order (structure, expertise, context,
/// practicality) so the output is stable for a given report.
pub fn suggestions_for(report: &QualityReport, category: Option<Category>) -> Vec<String> {
    let mut hints = Vec::new();

    if report.sub_scores.structure < SUGGESTION_THRESHOLD {
        hints.push("단계별 설명이나 번호 목록을 추가하면 답변 구조가 좋아집니다.".to_string());
    }
    if report.sub_scores.expertise < SUGGESTION_THRESHOLD {
        match category {
            Some(resolved) => hints.push(format!(
                "'{}' 분야의 전문 용어와 근거 자료를 더 포함해 보세요.",
                resolved.label()
            )),
            None => hints.push("분야 전문 용어와 근거 자료를 더 포함해 보세요.".to_string()),
        }
    }
    if report.sub_scores.context < SUGGESTION_THRESHOLD {
        hints.push(
            "질문의 의도(방법, 이유, 시기)에 직접 대응하는 내용을 담아 보세요.".to_string(),
        );
    }
    if report.sub_scores.practicality < SUGGESTION_THRESHOLD {
        hints.push("지금 바로 실천할 수 있는 구체적인 행동을 제시해 보세요.".to_string());
    }

    hints
}
