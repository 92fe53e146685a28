use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Closed set of domain tags used to pick an expertise keyword table.
///
/// Unknown tags deliberately resolve to no category instead of an error; they
/// simply contribute nothing to the expertise sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Parenting,
    Business,
    Education,
    Health,
    CodeReview,
    Debugging,
    Architecture,
    Security,
    Testing,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Parenting,
        Category::Business,
        Category::Education,
        Category::Health,
        Category::CodeReview,
        Category::Debugging,
        Category::Architecture,
        Category::Security,
        Category::Testing,
    ];

    /// Resolve a request-supplied tag. Accepts the Korean labels the frontend
    /// sends as well as ASCII slugs.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "육아" | "parenting" => Some(Category::Parenting),
            "비즈니스/마케팅" | "비즈니스" | "마케팅" | "business" | "marketing" => {
                Some(Category::Business)
            }
            "교육/학습" | "교육" | "education" => Some(Category::Education),
            "건강/운동" | "건강" | "health" => Some(Category::Health),
            "코드리뷰" | "code-review" | "code_review" | "codereview" => Some(Category::CodeReview),
            "디버깅" | "debugging" => Some(Category::Debugging),
            "아키텍처" | "architecture" => Some(Category::Architecture),
            "보안" | "security" => Some(Category::Security),
            "테스트" | "testing" | "test" => Some(Category::Testing),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Parenting => "육아",
            Category::Business => "비즈니스/마케팅",
            Category::Education => "교육/학습",
            Category::Health => "건강/운동",
            Category::CodeReview => "코드리뷰",
            Category::Debugging => "디버깅",
            Category::Architecture => "아키텍처",
            Category::Security => "보안",
            Category::Testing => "테스트",
        }
    }
}

/// Ordered per-category keyword tables driving the expertise sub-scores.
///
/// Kept as data rather than logic so new categories can be registered without
/// touching the scoring functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryKeywords {
    tables: BTreeMap<Category, Vec<String>>,
}

impl CategoryKeywords {
    /// The table shipped with the platform. Keywords are matched by substring
    /// containment against normalized text.
    pub fn standard() -> Self {
        let mut keywords = Self {
            tables: BTreeMap::new(),
        };

        keywords.register(
            Category::Parenting,
            &[
                "아이", "감정", "공감", "훈육", "칭찬", "놀이", "대화", "규칙", "습관", "발달",
                "애착", "자존감",
            ],
        );
        keywords.register(
            Category::Business,
            &[
                "고객",
                "시장",
                "전략",
                "브랜드",
                "매출",
                "타겟",
                "채널",
                "전환율",
                "콘텐츠",
                "캠페인",
                "포지셔닝",
                "리텐션",
            ],
        );
        keywords.register(
            Category::Education,
            &[
                "학습",
                "복습",
                "집중",
                "동기",
                "목표",
                "피드백",
                "암기",
                "이해",
                "문제풀이",
                "계획",
                "습관",
                "평가",
            ],
        );
        keywords.register(
            Category::Health,
            &[
                "운동",
                "스트레칭",
                "단백질",
                "수면",
                "유산소",
                "근력",
                "자세",
                "식단",
                "회복",
                "심박수",
                "체중",
                "루틴",
            ],
        );
        keywords.register(
            Category::CodeReview,
            &[
                "가독성",
                "네이밍",
                "중복",
                "테스트",
                "리팩토링",
                "함수",
                "책임",
                "결합도",
                "응집도",
                "주석",
                "예외 처리",
                "컨벤션",
            ],
        );
        keywords.register(
            Category::Debugging,
            &[
                "로그",
                "재현",
                "스택 트레이스",
                "브레이크포인트",
                "이분 탐색",
                "가설",
                "원인",
                "경계 조건",
                "입력값",
                "상태",
                "회귀",
                "격리",
            ],
        );
        keywords.register(
            Category::Architecture,
            &[
                "확장성",
                "모듈",
                "계층",
                "인터페이스",
                "의존성",
                "트레이드오프",
                "캐시",
                "메시지 큐",
                "일관성",
                "가용성",
                "장애",
                "분리",
            ],
        );
        keywords.register(
            Category::Security,
            &[
                "인증",
                "인가",
                "암호화",
                "토큰",
                "취약점",
                "검증",
                "주입",
                "세션",
                "권한",
                "감사 로그",
                "해시",
                "위협 모델",
            ],
        );
        keywords.register(
            Category::Testing,
            &[
                "단위 테스트",
                "통합 테스트",
                "모킹",
                "커버리지",
                "경계값",
                "회귀 테스트",
                "픽스처",
                "어서션",
                "자동화",
                "시나리오",
                "플레이키",
                "검증",
            ],
        );

        keywords
    }

    /// Register or replace a category's keyword list, preserving order.
    pub fn register(&mut self, category: Category, keywords: &[&str]) {
        self.tables.insert(
            category,
            keywords.iter().map(|keyword| keyword.to_string()).collect(),
        );
    }

    pub fn keywords_for(&self, category: Category) -> &[String] {
        self.tables
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for CategoryKeywords {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_korean_labels_and_slugs() {
        assert_eq!(Category::from_tag("육아"), Some(Category::Parenting));
        assert_eq!(Category::from_tag(" Parenting "), Some(Category::Parenting));
        assert_eq!(Category::from_tag("코드리뷰"), Some(Category::CodeReview));
        assert_eq!(Category::from_tag("code-review"), Some(Category::CodeReview));
        assert_eq!(Category::from_tag("xyz"), None);
        assert_eq!(Category::from_tag(""), None);
    }

    #[test]
    fn every_category_has_a_populated_table() {
        let keywords = CategoryKeywords::standard();
        for category in Category::ALL {
            assert!(
                !keywords.keywords_for(category).is_empty(),
                "missing keywords for {category:?}"
            );
        }
    }

    #[test]
    fn register_replaces_existing_table() {
        let mut keywords = CategoryKeywords::standard();
        keywords.register(Category::Testing, &["스냅샷"]);
        assert_eq!(keywords.keywords_for(Category::Testing), ["스냅샷"]);
    }
}
