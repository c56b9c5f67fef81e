//! Simulation endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use circuitlab_render::{render_circuit, render_histogram, to_base64};
use tracing::{debug, info, warn};

use crate::dto::{SimulateParams, SimulateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /simulate?shots=N - Simulate the stored circuit.
pub async fn simulate_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SimulateParams>,
) -> Result<Json<SimulateResponse>, ApiError> {
    simulate(&state, params.shots).await.map(Json)
}

/// POST /simulate - Simulate the stored circuit, shots in the JSON body.
pub async fn simulate_json(
    State(state): State<Arc<AppState>>,
    Json(params): Json<SimulateParams>,
) -> Result<Json<SimulateResponse>, ApiError> {
    simulate(&state, params.shots).await.map(Json)
}

async fn simulate(state: &AppState, shots: i64) -> Result<SimulateResponse, ApiError> {
    let shots = check_shots(state, shots)?;

    // Measurement is committed to the stored circuit, matching what the page shows.
    let circuit = {
        let mut circuit = state.circuit.write().await;
        if !circuit.has_measurement() {
            debug!("No measurement present, appending measure all");
            circuit.measure_all();
        }
        circuit.clone()
    };

    let result = state.simulator.run(&circuit, shots)?;
    info!(
        "Simulated {} shots on {} qubits in {} ms",
        result.shots,
        circuit.num_qubits(),
        result.execution_time_ms
    );
    debug!("Counts: {:?}", result.counts);

    let circuit_png = render_circuit(&circuit)?;
    let histogram_png = render_histogram(&result.counts)?;

    Ok(SimulateResponse {
        circuit_image: to_base64(&circuit_png),
        histogram_image: to_base64(&histogram_png),
        counts: result.counts,
        shots: result.shots,
        gates: circuit.gates().to_vec(),
    })
}

fn check_shots(state: &AppState, shots: i64) -> Result<u32, ApiError> {
    let (min, max) = (state.config.min_shots, state.config.max_shots);
    match u32::try_from(shots) {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => {
            warn!("Rejected shot count {}", shots);
            Err(ApiError::BadRequest(format!(
                "Shots must be between {min} and {max}"
            )))
        }
    }
}
