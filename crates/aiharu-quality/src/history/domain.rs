use serde::{Deserialize, Serialize};

/// Caller identity used for attribution and quota bookkeeping. The platform's
/// auth layer resolves sessions; by the time a submission reaches this crate
/// the owner is an opaque id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum OwnerId {
    User(String),
    Anonymous(String),
}

impl OwnerId {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, OwnerId::Anonymous(_))
    }

    pub fn label(&self) -> String {
        match self {
            OwnerId::User(id) => format!("user:{id}"),
            OwnerId::Anonymous(id) => format!("anon:{id}"),
        }
    }
}

/// Identifier assigned when a submission is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// One prompt/answer pair handed in for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySubmission {
    pub prompt: String,
    pub answer: String,
    pub category_tag: String,
    pub tokens_used: u32,
    pub owner: OwnerId,
}
