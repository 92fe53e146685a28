use crate::cli::ServeArgs;
use crate::infra::{quota_policy, AppState, InMemorySubmissionRepository};
use crate::routes::with_quality_routes;
use aiharu_quality::config::AppConfig;
use aiharu_quality::error::AppError;
use aiharu_quality::history::QualityService;
use aiharu_quality::quality::QualityEngine;
use aiharu_quality::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySubmissionRepository::default());
    let service = Arc::new(QualityService::new(
        repository,
        QualityEngine::default(),
        quota_policy(&config.quota),
    ));

    let app = with_quality_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "quality scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
