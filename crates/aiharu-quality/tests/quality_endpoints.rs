//! HTTP-level tests for the quality router: analysis, retrieval,
//! history listing, and quota responses over the public axum surface.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use aiharu_quality::history::{
    quality_router, OwnerId, QualityService, QuotaPolicy, RepositoryError, SubmissionId,
    SubmissionRecord, SubmissionRepository,
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

fn router(quota: QuotaPolicy) -> Router {
    let service = Arc::new(QualityService::new(
        Arc::new(MemoryRepository::default()),
        QualityEngine::default(),
        quota,
    ));
    quality_router(service)
}

fn analyze_payload(anonymous_id: &str) -> Value {
    json!({
        "prompt": "아이가 화를 낼 때 어떻게 해야 하나요?",
        "answer": "1. 먼저 아이의 감정을 읽어 주세요.\n2. 차분하게 대화하는 방법을 쓰세요.\n주의: 소리 지르지 마세요.",
        "category": "육아",
        "tokens_used": 120,
        "anonymous_id": anonymous_id,
    })
}

fn post_analyze(payload: &Value) -> Request<Body> {
    Request::post("/api/v1/quality/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload")))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn analyze_endpoint_returns_a_full_report() {
    let app = router(QuotaPolicy::default());

    let response = app
        .oneshot(post_analyze(&analyze_payload("device-1")))
        .await
        .expect("handler responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert!(body["submission_id"]
        .as_str()
        .expect("id present")
        .starts_with("sub-"));
    let report = &body["report"];
    assert!(report["sub_scores"]["structure"].as_u64().expect("structure") > 0);
    assert!(report["overall_score"].as_u64().expect("overall") <= 100);
    let grade = report["grade"].as_str().expect("grade");
    assert!(["A+", "A", "B+", "B", "C+", "C", "D"].contains(&grade));
    assert!(body["suggestions"].is_array());
}

#[tokio::test]
async fn analyze_endpoint_enforces_the_anonymous_quota() {
    let app = router(QuotaPolicy {
        anonymous_daily_limit: 1,
        user_daily_limit: 50,
    });
    let payload = analyze_payload("device-2");

    let first = app
        .clone()
        .oneshot(post_analyze(&payload))
        .await
        .expect("first call");
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_analyze(&payload))
        .await
        .expect("second call");
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = body_json(second).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("daily submission limit"));
}

#[tokio::test]
async fn stored_submissions_are_retrievable_by_id() {
    let app = router(QuotaPolicy::default());

    let created = app
        .clone()
        .oneshot(post_analyze(&analyze_payload("device-3")))
        .await
        .expect("analyze call");
    let created_body = body_json(created).await;
    let id = created_body["submission_id"].as_str().expect("id");

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/quality/submissions/{id}"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("fetch call");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"].as_str(), Some(id));
    assert_eq!(body["submission"]["category_tag"].as_str(), Some("육아"));
}

#[tokio::test]
async fn unknown_submission_id_yields_not_found() {
    let app = router(QuotaPolicy::default());

    let response = app
        .oneshot(
            Request::get("/api/v1/quality/submissions/sub-999999")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("fetch call");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn history_endpoint_lists_owner_submissions() {
    let app = router(QuotaPolicy::default());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_analyze(&analyze_payload("device-4")))
            .await
            .expect("analyze call");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::get("/api/v1/quality/submissions?anonymous_id=device-4")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("history call");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let entries = body.as_array().expect("array body");
    assert_eq!(entries.len(), 2);
    assert!(entries[0]["grade"].is_string());
}

#[tokio::test]
async fn history_endpoint_requires_an_owner() {
    let app = router(QuotaPolicy::default());

    let response = app
        .oneshot(
            Request::get("/api/v1/quality/submissions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("history call");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
