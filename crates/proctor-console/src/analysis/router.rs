use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::report::ReportEnvelope;
use super::repository::{ReportSource, SessionId};
use super::service::{ReportScoringService, ScoringServiceError};

/// Router builder exposing report scoring endpoints.
pub fn report_router<S>(service: Arc<ReportScoringService<S>>) -> Router
where
    S: ReportSource + 'static,
{
    Router::new()
        .route("/api/v1/reports/score", post(score_report_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id/score",
            get(session_score_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn score_report_handler<S>(
    State(service): State<Arc<ReportScoringService<S>>>,
    axum::Json(envelope): axum::Json<ReportEnvelope>,
) -> Response
where
    S: ReportSource + 'static,
{
    let card = service.score_envelope(envelope);
    (StatusCode::OK, axum::Json(card.view())).into_response()
}

pub(crate) async fn session_score_handler<S>(
    State(service): State<Arc<ReportScoringService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ReportSource + 'static,
{
    let id = SessionId(session_id);
    match service.score_session(&id) {
        Ok(score) => (StatusCode::OK, axum::Json(score)).into_response(),
        Err(ScoringServiceError::NotFound(_)) => {
            let payload = json!({
                "session_id": id.0,
                "error": "no behaviour report for session",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other @ ScoringServiceError::Source(_)) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
