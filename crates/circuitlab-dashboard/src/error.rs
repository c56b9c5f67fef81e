//! Error types for the dashboard API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use circuitlab_adapter_sim::SimError;
use circuitlab_ir::IrError;
use circuitlab_render::RenderError;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Simulation error: {0}")]
    SimulationError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::SimulationError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "simulation_error")
            }
            ApiError::RenderError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "render_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<IrError> for ApiError {
    fn from(e: IrError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<SimError> for ApiError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::InvalidShots { .. } => ApiError::BadRequest(e.to_string()),
            _ => ApiError::SimulationError(e.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::RenderError(e.to_string())
    }
}
