//! Data Transfer Objects for the dashboard API.
//!
//! These types bridge the circuit model, simulator and renderer to the JSON
//! payloads the page consumes. Images travel as base64-encoded PNG.

use serde::{Deserialize, Serialize};

use circuitlab_adapter_sim::Counts;
use circuitlab_ir::{Circuit, GateKind, GateRecord};
use circuitlab_render::{render_circuit, to_base64};

use crate::error::ApiError;

// ============================================================================
// Query parameters
// ============================================================================

/// Query for `GET /reset`.
#[derive(Debug, Deserialize)]
pub struct ResetParams {
    /// Width of the fresh circuit.
    pub qubits: i64,
}

/// Query for `GET /load_example`.
#[derive(Debug, Deserialize)]
pub struct LoadExampleParams {
    /// Display name of the example.
    pub example: String,
    /// Width to build the example on.
    pub qubits: i64,
}

/// Query or body for `/simulate`.
#[derive(Debug, Deserialize)]
pub struct SimulateParams {
    /// Number of shots.
    pub shots: i64,
}

// ============================================================================
// Circuit responses
// ============================================================================

/// Gate list plus the rendered diagram.
#[derive(Debug, Serialize)]
pub struct CircuitResponse {
    /// Gate records in order.
    pub gates: Vec<GateRecord>,
    /// Base64 PNG of the diagram; `null` right after a reset.
    pub circuit_image: Option<String>,
}

impl CircuitResponse {
    /// Render `circuit` and package it with its gate list.
    pub fn render(circuit: &Circuit) -> Result<Self, ApiError> {
        let png = render_circuit(circuit)?;
        Ok(Self {
            gates: circuit.gates().to_vec(),
            circuit_image: Some(to_base64(&png)),
        })
    }

    /// Response for a circuit that has not been drawn yet.
    pub fn blank(circuit: &Circuit) -> Self {
        Self {
            gates: circuit.gates().to_vec(),
            circuit_image: None,
        }
    }
}

/// Read-only view of the stored circuit.
#[derive(Debug, Serialize)]
pub struct CircuitStateView {
    /// Number of qubits.
    pub qubits: u32,
    /// Gate records in order.
    pub gates: Vec<GateRecord>,
    /// Number of drawing columns.
    pub depth: usize,
    /// Whether a measurement is present.
    pub has_measurement: bool,
}

impl CircuitStateView {
    pub fn from_circuit(circuit: &Circuit) -> Self {
        Self {
            qubits: circuit.num_qubits(),
            gates: circuit.gates().to_vec(),
            depth: circuit.depth(),
            has_measurement: circuit.has_measurement(),
        }
    }
}

/// Result of a simulation.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    /// Base64 PNG of the simulated circuit (with measurement).
    pub circuit_image: String,
    /// Base64 PNG of the result histogram.
    pub histogram_image: String,
    /// Raw outcome counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Gate records as simulated.
    pub gates: Vec<GateRecord>,
}

// ============================================================================
// Catalog DTOs
// ============================================================================

/// A gate the user can add.
#[derive(Debug, Serialize)]
pub struct GateView {
    /// Menu label to submit as `gate_type`.
    pub label: String,
    /// Short name shown in gate lists.
    pub name: String,
    /// Whether a control qubit is required.
    pub controlled: bool,
    /// Whether a target qubit is required.
    pub needs_target: bool,
}

impl GateView {
    pub fn selectable() -> Vec<Self> {
        GateKind::SELECTABLE
            .into_iter()
            .filter_map(|kind| {
                kind.label().map(|label| Self {
                    label: label.to_string(),
                    name: kind.name().to_string(),
                    controlled: kind.is_controlled(),
                    needs_target: kind != GateKind::Measure,
                })
            })
            .collect()
    }
}

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
