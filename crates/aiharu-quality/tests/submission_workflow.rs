//! End-to-end behavior of the submission service: scoring, persistence,
//! attribution, and quota enforcement through the public facade.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use aiharu_quality::history::{
    OwnerId, QualityService, QualityServiceError, QualitySubmission, QuotaPolicy, RepositoryError,
    SubmissionId, SubmissionRecord, SubmissionRepository,
};
use aiharu_quality::quality::QualityEngine;

#[derive(Default)]
struct MemoryRepository {
    records: Mutex<HashMap<SubmissionId, SubmissionRecord>>,
}

impl SubmissionRepository for MemoryRepository {
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

fn service(quota: QuotaPolicy) -> QualityService<MemoryRepository> {
    QualityService::new(
        Arc::new(MemoryRepository::default()),
        QualityEngine::default(),
        quota,
    )
}

fn submission(owner: OwnerId) -> QualitySubmission {
    QualitySubmission {
        prompt: "아이가 화를 낼 때 어떻게 해야 하나요?".to_string(),
        answer: "1. 먼저 아이의 감정을 읽어 주세요.\n2. 차분하게 대화하는 방법을 쓰세요.\n주의: 소리 지르지 마세요."
            .to_string(),
        category_tag: "육아".to_string(),
        tokens_used: 120,
        owner,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 26).expect("valid date")
}

#[test]
fn submit_scores_and_persists_the_record() {
    let service = service(QuotaPolicy::default());
    let owner = OwnerId::User("user-42".to_string());

    let record = service
        .submit(submission(owner.clone()), today())
        .expect("submission stored");

    assert!(record.id.0.starts_with("sub-"));
    assert!(record.report.sub_scores.structure > 0);
    assert_eq!(record.submitted_on, today());

    let fetched = service.get(&record.id).expect("record retrievable");
    assert_eq!(fetched, record);
}

#[test]
fn anonymous_quota_is_enforced_per_day() {
    let service = service(QuotaPolicy {
        anonymous_daily_limit: 2,
        user_daily_limit: 50,
    });
    let owner = OwnerId::Anonymous("device-7".to_string());

    for _ in 0..2 {
        service
            .submit(submission(owner.clone()), today())
            .expect("within quota");
    }

    let err = service
        .submit(submission(owner.clone()), today())
        .expect_err("third submission exceeds the quota");
    assert!(matches!(
        err,
        QualityServiceError::QuotaExceeded { limit: 2 }
    ));

    // A different day resets the count.
    let tomorrow = today().succ_opt().expect("valid date");
    service
        .submit(submission(owner), tomorrow)
        .expect("fresh quota on a new day");
}

#[test]
fn registered_users_do_not_share_the_anonymous_bucket() {
    let service = service(QuotaPolicy {
        anonymous_daily_limit: 1,
        user_daily_limit: 50,
    });

    service
        .submit(
            submission(OwnerId::Anonymous("device-7".to_string())),
            today(),
        )
        .expect("anonymous submission accepted");
    service
        .submit(submission(OwnerId::User("user-42".to_string())), today())
        .expect("user quota is independent");
}

#[test]
fn history_returns_owner_records_oldest_first() {
    let service = service(QuotaPolicy::default());
    let owner = OwnerId::User("user-42".to_string());

    let first = service
        .submit(submission(owner.clone()), today())
        .expect("stored");
    let second = service
        .submit(submission(owner.clone()), today())
        .expect("stored");
    service
        .submit(submission(OwnerId::User("someone-else".to_string())), today())
        .expect("stored");

    let records = service.history(&owner).expect("history listable");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, first.id);
    assert_eq!(records[1].id, second.id);
}

#[test]
fn get_unknown_submission_reports_not_found() {
    let service = service(QuotaPolicy::default());
    let err = service
        .get(&SubmissionId("sub-999999".to_string()))
        .expect_err("missing record");
    assert!(matches!(
        err,
        QualityServiceError::Repository(RepositoryError::NotFound)
    ));
}
