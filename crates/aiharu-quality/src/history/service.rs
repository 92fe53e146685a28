use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::domain::{OwnerId, QualitySubmission, SubmissionId};
use super::repository::{RepositoryError, SubmissionRecord, SubmissionRepository};
use crate::quality::QualityEngine;

/// Daily submission allowances per identity class. The anonymous tier mirrors
/// the platform's free usage cap.
#[derive(Debug, Clone, Copy)]
pub struct QuotaPolicy {
    pub anonymous_daily_limit: u32,
    pub user_daily_limit: u32,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            anonymous_daily_limit: 3,
            user_daily_limit: 50,
        }
    }
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

/// Service composing the quota policy, repository, and scoring engine.
pub struct QualityService<R> {
    repository: Arc<R>,
    engine: Arc<QualityEngine>,
    quota: QuotaPolicy,
}

impl<R> QualityService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: QualityEngine, quota: QuotaPolicy) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
            quota,
        }
    }

    /// Score a submission and persist it, enforcing the owner's daily quota.
    pub fn submit(
        &self,
        submission: QualitySubmission,
        today: NaiveDate,
    ) -> Result<SubmissionRecord, QualityServiceError> {
        let limit = if submission.owner.is_anonymous() {
            self.quota.anonymous_daily_limit
        } else {
            self.quota.user_daily_limit
        };

        let used = self
            .repository
            .count_for_owner_on(&submission.owner, today)?;
        if used >= limit {
            return Err(QualityServiceError::QuotaExceeded { limit });
        }

        let report = self.engine.analyze(
            &submission.prompt,
            &submission.answer,
            &submission.category_tag,
            submission.tokens_used,
        );

        let record = SubmissionRecord {
            id: next_submission_id(),
            submission,
            report,
            submitted_on: today,
        };

        let stored = self.repository.insert(record)?;
        info!(
            submission = %stored.id.0,
            owner = %stored.submission.owner.label(),
            grade = stored.report.grade.label(),
            overall = stored.report.overall_score,
            "quality submission scored"
        );
        Ok(stored)
    }

    /// Fetch a stored submission for API responses.
    pub fn get(&self, id: &SubmissionId) -> Result<SubmissionRecord, QualityServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// All submissions attributed to an owner, oldest first.
    pub fn history(&self, owner: &OwnerId) -> Result<Vec<SubmissionRecord>, QualityServiceError> {
        let mut records = self.repository.list_for_owner(owner)?;
        records.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(records)
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum QualityServiceError {
    #[error("daily submission limit of {limit} reached")]
    QuotaExceeded { limit: u32 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
