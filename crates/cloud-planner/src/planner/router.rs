use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::advisor::{suggest_application_type, WorkloadAnswers};
use super::engine::{EngineError, RecommendationEngine};
use super::requirement::RawRequirement;
use super::upgrades::UpgradeAdvisor;
use crate::catalog::ServiceDescriptor;

/// Router builder exposing the engine's recommendation and catalog endpoints.
pub fn planner_router<U>(engine: Arc<RecommendationEngine<U>>) -> Router
where
    U: UpgradeAdvisor + 'static,
{
    Router::new()
        .route("/api/recommend", post(recommend_handler::<U>))
        .route("/api/services", get(services_handler::<U>))
        .route("/api/use-cases", get(use_cases_handler::<U>))
        .route("/api/use-cases/suggest", post(suggest_handler))
        .with_state(engine)
}

pub(crate) async fn recommend_handler<U>(
    State(engine): State<Arc<RecommendationEngine<U>>>,
    Json(requirement): Json<RawRequirement>,
) -> Response
where
    U: UpgradeAdvisor + 'static,
{
    match engine.compute_recommendation(&requirement) {
        Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
        Err(EngineError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(error @ EngineError::Internal) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn services_handler<U>(
    State(engine): State<Arc<RecommendationEngine<U>>>,
) -> Json<Vec<ServiceDescriptor>>
where
    U: UpgradeAdvisor + 'static,
{
    Json(engine.list_services().to_vec())
}

pub(crate) async fn use_cases_handler<U>(
    State(engine): State<Arc<RecommendationEngine<U>>>,
) -> Json<BTreeMap<&'static str, &'static str>>
where
    U: UpgradeAdvisor + 'static,
{
    Json(
        engine
            .list_application_types()
            .into_iter()
            .map(|view| (view.tag, view.label))
            .collect(),
    )
}

pub(crate) async fn suggest_handler(Json(answers): Json<WorkloadAnswers>) -> Response {
    let application_type = suggest_application_type(&answers);
    let payload = json!({
        "applicationType": application_type.tag(),
        "label": application_type.label(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}
