//! Circuit editing endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use circuitlab_ir::{Circuit, Example, GateRequest};
use circuitlab_render::render_circuit;
use tracing::{debug, info, warn};

use crate::dto::{CircuitResponse, CircuitStateView, LoadExampleParams, ResetParams};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /add_gate - Validate and append one gate.
pub async fn add_gate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GateRequest>,
) -> Result<Json<CircuitResponse>, ApiError> {
    debug!("add_gate: {:?}", req);

    if let Err(e) = state.config.check_qubits(req.qubits) {
        warn!("Rejected gate request: {}", e);
        return Err(e.into());
    }

    let mut circuit = state.circuit.write().await;
    let before = circuit.num_qubits();
    if let Err(e) = circuit.apply_request(&req) {
        warn!("Rejected gate request: {}", e);
        return Err(e.into());
    }
    if circuit.num_qubits() != before {
        info!(
            "Circuit width changed from {} to {}, started fresh",
            before,
            circuit.num_qubits()
        );
    }

    Ok(Json(CircuitResponse::render(&circuit)?))
}

/// POST /undo - Remove the most recent gate, if any.
pub async fn undo(State(state): State<Arc<AppState>>) -> Result<Json<CircuitResponse>, ApiError> {
    let mut circuit = state.circuit.write().await;
    match circuit.pop() {
        Some(record) => debug!("Undid {:?}", record),
        None => debug!("Undo on empty circuit"),
    }
    Ok(Json(CircuitResponse::render(&circuit)?))
}

/// GET /reset?qubits=N - Replace the circuit with an empty one.
pub async fn reset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResetParams>,
) -> Result<Json<CircuitResponse>, ApiError> {
    let fresh = state.config.check_qubits(params.qubits).and_then(Circuit::new).map_err(|e| {
        warn!("Rejected reset to {} qubits: {}", params.qubits, e);
        ApiError::from(e)
    })?;

    let mut circuit = state.circuit.write().await;
    *circuit = fresh;
    info!("Circuit reset to {} qubits", circuit.num_qubits());

    Ok(Json(CircuitResponse::blank(&circuit)))
}

/// GET /load_example?example=...&qubits=N - Replace the circuit with an example.
pub async fn load_example(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LoadExampleParams>,
) -> Result<Json<CircuitResponse>, ApiError> {
    let built = state
        .config
        .check_qubits(params.qubits)
        .and_then(|width| Example::from_name(&params.example)?.build(width))
        .map_err(|e| {
            warn!("Rejected example '{}': {}", params.example, e);
            ApiError::from(e)
        })?;

    let response = CircuitResponse::render(&built)?;
    *state.circuit.write().await = built;
    info!("Loaded example '{}'", params.example);

    Ok(Json(response))
}

/// GET /api/circuit - Current circuit without rendering.
pub async fn get_circuit(State(state): State<Arc<AppState>>) -> Json<CircuitStateView> {
    let circuit = state.circuit.read().await;
    Json(CircuitStateView::from_circuit(&circuit))
}

/// GET /api/circuit/image.png - Current diagram as a raw PNG.
pub async fn circuit_image(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let circuit = state.snapshot().await;
    let png = render_circuit(&circuit)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
