use crate::infra::{AppState, FeedbackSubmission};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use chrono::Utc;
use cloud_planner::planner::{planner_router, RecommendationEngine, UpgradeAdvisor};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

const SERVICE_NAME: &str = "cloud-planner";

pub(crate) fn with_operational_routes<U>(engine: Arc<RecommendationEngine<U>>) -> axum::Router
where
    U: UpgradeAdvisor + 'static,
{
    planner_router(engine)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/health", get(service_health))
        .route("/api/feedback", post(feedback_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn service_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "UP",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn feedback_endpoint(Json(submission): Json<FeedbackSubmission>) -> Response {
    let kind = match submission.validate() {
        Ok(kind) => kind,
        Err(err) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response();
        }
    };

    info!(
        feedback_type = kind.as_str(),
        name = submission.name.as_deref().unwrap_or("anonymous"),
        email = submission.email.as_deref().unwrap_or("-"),
        message = %submission.message.trim(),
        received_at = %Utc::now().to_rfc3339(),
        "feedback received"
    );

    (
        StatusCode::OK,
        Json(json!({ "message": "Thank you for your feedback!" })),
    )
        .into_response()
}
