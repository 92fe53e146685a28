use crate::quality::QualityEngine;

pub(super) fn engine() -> QualityEngine {
    QualityEngine::default()
}

pub(super) fn parenting_prompt() -> &'static str {
    "아이가 화를 낼 때 어떻게 해야 하나요?"
}

/// Numbered three-step parenting guide with a caution sentence, written the
/// way a strong answer in the parenting vertical reads.
pub(super) fn parenting_answer() -> &'static str {
    "아이의 감정을 다루는 방법을 단계별로 정리했습니다. 연구에 따르면 전문가들이 권장하는 순서는 다음과 같습니다.\n\
     1. 먼저 아이의 감정을 말로 읽어 주세요.\n\
     2. 오늘부터 차분한 목소리로 대화하며 규칙을 함께 정하세요.\n\
     3. 마지막으로 진정된 뒤에 칭찬으로 마무리하세요.\n\
     주의: 소리를 지르거나 체벌은 피해야 합니다."
}

pub(super) const PARENTING_KEYWORDS: [&str; 12] = [
    "아이", "감정", "공감", "훈육", "칭찬", "놀이", "대화", "규칙", "습관", "발달", "애착",
    "자존감",
];
