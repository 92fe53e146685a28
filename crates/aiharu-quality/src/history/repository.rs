use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{OwnerId, QualitySubmission, SubmissionId};
use crate::quality::QualityReport;

/// Stored submission together with its computed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub submission: QualitySubmission,
    pub report: QualityReport,
    pub submitted_on: NaiveDate,
}

impl SubmissionRecord {
    /// Compact listing entry for history responses.
    pub fn summary_view(&self) -> SubmissionView {
        SubmissionView {
            submission_id: self.id.clone(),
            category: self.submission.category_tag.clone(),
            grade: self.report.grade.label(),
            overall_score: self.report.overall_score,
            submitted_on: self.submitted_on,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn list_for_owner(&self, owner: &OwnerId) -> Result<Vec<SubmissionRecord>, RepositoryError>;
    fn count_for_owner_on(&self, owner: &OwnerId, date: NaiveDate)
        -> Result<u32, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a stored submission for list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub submission_id: SubmissionId,
    pub category: String,
    pub grade: &'static str,
    pub overall_score: u8,
    pub submitted_on: NaiveDate,
}
