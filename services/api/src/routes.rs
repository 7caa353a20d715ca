use crate::infra::{parse_time_zone, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use proctor_console::analysis::{report_router, ReportScoringService, ReportSource};
use proctor_console::schedule::{DateTimeLocalizer, EventWindow, LocalDateTime, LocalEventWindow};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct LocalizeRequest {
    pub(crate) date: String,
    pub(crate) time: String,
    #[serde(default)]
    pub(crate) time_zone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalizeWindowRequest {
    pub(crate) window: EventWindow,
    #[serde(default)]
    pub(crate) time_zone: Option<String>,
}

pub(crate) fn with_report_routes<S>(service: Arc<ReportScoringService<S>>) -> axum::Router
where
    S: ReportSource + 'static,
{
    report_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/datetime/localize",
            axum::routing::post(localize_endpoint),
        )
        .route(
            "/api/v1/datetime/window",
            axum::routing::post(localize_window_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
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

pub(crate) async fn localize_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LocalizeRequest>,
) -> Result<Json<LocalDateTime>, (StatusCode, Json<serde_json::Value>)> {
    let localizer = resolve_localizer(&state, payload.time_zone.as_deref())?;
    Ok(Json(localizer.localize(&payload.date, &payload.time)))
}

pub(crate) async fn localize_window_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LocalizeWindowRequest>,
) -> Result<Json<LocalEventWindow>, (StatusCode, Json<serde_json::Value>)> {
    let localizer = resolve_localizer(&state, payload.time_zone.as_deref())?;
    Ok(Json(localizer.localize_window(&payload.window)))
}

// An explicit but unknown zone is a client error; malformed dates are not.
fn resolve_localizer(
    state: &AppState,
    time_zone: Option<&str>,
) -> Result<DateTimeLocalizer, (StatusCode, Json<serde_json::Value>)> {
    match time_zone {
        None => Ok(DateTimeLocalizer::new(state.default_time_zone)),
        Some(name) => parse_time_zone(name)
            .map(DateTimeLocalizer::new)
            .map_err(|error| (StatusCode::BAD_REQUEST, Json(json!({ "error": error })))),
    }
}
