//! Add-gate request payloads.

use serde::{Deserialize, Serialize};

use crate::circuit::{MAX_QUBITS, MIN_QUBITS};
use crate::error::{IrError, IrResult};
use crate::gate::{GateKind, GateRecord};
use crate::qubit::QubitId;

/// A request to append one gate to the circuit.
///
/// Indices are signed so that negative values from the client are rejected
/// with a validation error rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRequest {
    /// Menu label or short name of the gate (e.g. `"CX (CNOT)"`).
    pub gate_type: String,
    /// Target qubit; ignored for `Measure`.
    #[serde(default)]
    pub target_qubit: Option<i64>,
    /// Control qubit for CX/CZ.
    #[serde(default)]
    pub control_qubit: Option<i64>,
    /// Width of the circuit the client is editing.
    pub qubits: i64,
}

impl GateRequest {
    /// Create a single-qubit gate request.
    pub fn single(gate_type: impl Into<String>, target: i64, qubits: i64) -> Self {
        Self {
            gate_type: gate_type.into(),
            target_qubit: Some(target),
            control_qubit: None,
            qubits,
        }
    }

    /// Create a controlled gate request.
    pub fn controlled(
        gate_type: impl Into<String>,
        control: i64,
        target: i64,
        qubits: i64,
    ) -> Self {
        Self {
            gate_type: gate_type.into(),
            target_qubit: Some(target),
            control_qubit: Some(control),
            qubits,
        }
    }

    /// Create a measure-all request.
    pub fn measure(qubits: i64) -> Self {
        Self {
            gate_type: GateKind::Measure.name().to_string(),
            target_qubit: None,
            control_qubit: None,
            qubits,
        }
    }

    /// Validated circuit width.
    pub fn width(&self) -> IrResult<u32> {
        check_qubit_count(self.qubits)
    }

    /// Validate the request and convert it into a gate record.
    ///
    /// Checks run in a fixed order: width, gate type, target, control, and
    /// finally control/target distinctness.
    pub fn to_record(&self) -> IrResult<GateRecord> {
        let width = self.width()?;
        let kind = GateKind::from_label(&self.gate_type)?;

        if kind == GateKind::Measure {
            return Ok(GateRecord::MeasureAll);
        }

        let target = wire(self.target_qubit, width).ok_or(IrError::InvalidTarget)?;

        if kind.is_controlled() {
            let control = wire(self.control_qubit, width).ok_or(IrError::InvalidControl)?;
            if control == target {
                return Err(IrError::ControlEqualsTarget);
            }
            return Ok(GateRecord::Controlled {
                kind,
                control,
                target,
            });
        }

        Ok(GateRecord::Single { kind, target })
    }
}

/// Validate a qubit count against the supported range.
pub fn check_qubit_count(qubits: i64) -> IrResult<u32> {
    match u32::try_from(qubits) {
        Ok(n) if (MIN_QUBITS..=MAX_QUBITS).contains(&n) => Ok(n),
        _ => Err(IrError::InvalidQubitCount {
            got: qubits,
            min: MIN_QUBITS,
            max: MAX_QUBITS,
        }),
    }
}

fn wire(index: Option<i64>, width: u32) -> Option<QubitId> {
    let index = u32::try_from(index?).ok()?;
    (index < width).then_some(QubitId(index))
}
