use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{OwnerId, QualitySubmission, SubmissionId};
use super::repository::{RepositoryError, SubmissionRepository, SubmissionView};
use super::service::{QualityService, QualityServiceError};
use crate::quality::{Category, QualityReport};

/// Router builder exposing the quality analysis and history endpoints.
pub fn quality_router<R>(service: Arc<QualityService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/quality/analyze", post(analyze_handler::<R>))
        .route(
            "/api/v1/quality/submissions/:submission_id",
            get(submission_handler::<R>),
        )
        .route("/api/v1/quality/submissions", get(history_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) prompt: String,
    pub(crate) answer: String,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) tokens_used: u32,
    #[serde(default)]
    pub(crate) user_id: Option<String>,
    #[serde(default)]
    pub(crate) anonymous_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) submission_id: SubmissionId,
    pub(crate) report: QualityReport,
    pub(crate) suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryQuery {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    anonymous_id: Option<String>,
}

/// Registered users are attributed by their id; everyone else shares the
/// anonymous tier keyed by whatever client id was supplied.
fn resolve_owner(user_id: Option<String>, anonymous_id: Option<String>) -> OwnerId {
    match (user_id, anonymous_id) {
        (Some(user), _) => OwnerId::User(user),
        (None, Some(anon)) => OwnerId::Anonymous(anon),
        (None, None) => OwnerId::Anonymous("anonymous".to_string()),
    }
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<QualityService<R>>>,
    axum::Json(request): axum::Json<AnalyzeRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let AnalyzeRequest {
        prompt,
        answer,
        category,
        tokens_used,
        user_id,
        anonymous_id,
    } = request;

    let submission = QualitySubmission {
        prompt,
        answer,
        category_tag: category,
        tokens_used,
        owner: resolve_owner(user_id, anonymous_id),
    };

    let today = Local::now().date_naive();
    match service.submit(submission, today) {
        Ok(record) => {
            let category = Category::from_tag(&record.submission.category_tag);
            let suggestions = crate::quality::suggestions_for(&record.report, category);
            let body = AnalyzeResponse {
                submission_id: record.id,
                report: record.report,
                suggestions,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(QualityServiceError::QuotaExceeded { limit }) => {
            let payload = json!({
                "error": format!("daily submission limit of {limit} reached"),
            });
            (StatusCode::TOO_MANY_REQUESTS, axum::Json(payload)).into_response()
        }
        Err(QualityServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "submission already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submission_handler<R>(
    State(service): State<Arc<QualityService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(QualityServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("submission '{}' not found", id.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<QualityService<R>>>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    if query.user_id.is_none() && query.anonymous_id.is_none() {
        let payload = json!({
            "error": "either user_id or anonymous_id must be supplied",
        });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    let owner = resolve_owner(query.user_id, query.anonymous_id);
    match service.history(&owner) {
        Ok(records) => {
            let views: Vec<SubmissionView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
