use crate::content::PageInfo;
use crate::detection::{detect, DetectionOutcome};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use hoaxcheck_core::Domain;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

// ============================================================================
// Health and page endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn page_info() -> impl IntoResponse {
    Json(PageInfo::current())
}

// ============================================================================
// Detection endpoint
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub text: String,
}

pub async fn detect_text(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(req): Json<DetectRequest>,
) -> Result<Response, ApiError> {
    let domain: Domain = domain.parse().map_err(ApiError::UnknownDomain)?;

    match detect(&state.registry, domain, &req.text)? {
        DetectionOutcome::Report(report) => Ok((StatusCode::OK, Json(report)).into_response()),
        DetectionOutcome::EmptyInput(warning) => {
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(warning)).into_response())
        }
    }
}

// ============================================================================
// Metrics endpoint
// ============================================================================

pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "metrics recorder not installed" })),
        )
            .into_response(),
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    UnknownDomain(String),

    #[error(transparent)]
    Detection(#[from] hoaxcheck_core::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownDomain(_) => StatusCode::NOT_FOUND,
            ApiError::Detection(err) => {
                error!("Detection failed: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
