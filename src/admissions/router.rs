use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationId, ApplicationStatus, NewApplication};
use super::service::{AdmissionsError, AdmissionsService};
use super::store::ApplicationStore;

/// Router builder exposing the admissions HTTP endpoints.
pub fn admissions_router<S>(service: Arc<AdmissionsService<S>>) -> Router
where
    S: ApplicationStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/admissions/applications",
            post(create_handler::<S>).get(list_handler::<S>),
        )
        .route(
            "/api/v1/admissions/applications/:application_id",
            get(get_handler::<S>),
        )
        .route(
            "/api/v1/admissions/applications/:application_id/status",
            post(transition_handler::<S>),
        )
        .route(
            "/api/v1/admissions/stats/dashboard",
            get(dashboard_stats_handler::<S>),
        )
        .route(
            "/api/v1/admissions/stats/agent",
            get(agent_stats_handler::<S>),
        )
        .route("/api/v1/admissions/stats/trend", get(trend_handler::<S>))
        .route("/api/v1/admissions/courses", get(courses_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransitionRequest {
    pub(crate) status: ApplicationStatus,
}

fn error_response(error: AdmissionsError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), Json(payload)).into_response()
}

pub(crate) async fn create_handler<S>(
    State(service): State<Arc<AdmissionsService<S>>>,
    Json(request): Json<NewApplication>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.create_application(request) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<S>(State(service): State<Arc<AdmissionsService<S>>>) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.list_applications() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<S>(
    State(service): State<Arc<AdmissionsService<S>>>,
    Path(application_id): Path<String>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.get_application(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn transition_handler<S>(
    State(service): State<Arc<AdmissionsService<S>>>,
    Path(application_id): Path<String>,
    Json(request): Json<TransitionRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.transition_status(&ApplicationId(application_id), request.status) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dashboard_stats_handler<S>(
    State(service): State<Arc<AdmissionsService<S>>>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.dashboard_stats() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn agent_stats_handler<S>(
    State(service): State<Arc<AdmissionsService<S>>>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.agent_stats() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn trend_handler<S>(State(service): State<Arc<AdmissionsService<S>>>) -> Response
where
    S: ApplicationStore + 'static,
{
    (StatusCode::OK, Json(service.monthly_trend())).into_response()
}

pub(crate) async fn courses_handler<S>(State(service): State<Arc<AdmissionsService<S>>>) -> Response
where
    S: ApplicationStore + 'static,
{
    (StatusCode::OK, Json(service.courses())).into_response()
}
