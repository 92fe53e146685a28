use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use aiharu_quality::config::QuotaConfig;
use aiharu_quality::history::{
    OwnerId, QuotaPolicy, RepositoryError, SubmissionId, SubmissionRecord, SubmissionRepository,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local storage backing the service until the hosted database wiring
/// lands. Keyed by submission id; owner/date scans are linear.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_for_owner(&self, owner: &OwnerId) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.submission.owner == owner)
            .cloned()
            .collect())
    }

    fn count_for_owner_on(
        &self,
        owner: &OwnerId,
        date: NaiveDate,
    ) -> Result<u32, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.submission.owner == owner && record.submitted_on == date)
            .count() as u32)
    }
}

pub(crate) fn quota_policy(config: &QuotaConfig) -> QuotaPolicy {
    QuotaPolicy {
        anonymous_daily_limit: config.anonymous_daily_limit,
        user_daily_limit: config.user_daily_limit,
    }
}
