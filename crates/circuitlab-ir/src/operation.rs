//! Primitive operations executed by the simulator.

use crate::gate::{GateKind, GateRecord};
use crate::qubit::QubitId;

/// A primitive operation on the statevector.
///
/// Gate records flatten into these: blocks expand into their constituent
/// gates, so a simulator only needs to know five operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Hadamard on one qubit.
    H(QubitId),
    /// Pauli-X on one qubit.
    X(QubitId),
    /// CNOT with (control, target).
    CX(QubitId, QubitId),
    /// Controlled-Z with (control, target).
    CZ(QubitId, QubitId),
    /// Measure every qubit into its classical bit.
    MeasureAll,
}

impl Operation {
    /// Whether the operation is a measurement.
    #[inline]
    pub fn is_measurement(&self) -> bool {
        matches!(self, Operation::MeasureAll)
    }

    /// Append the primitive operations of `record` to `out`.
    pub(crate) fn expand_into(record: &GateRecord, out: &mut Vec<Operation>) {
        match record {
            GateRecord::Single { kind, target } => match kind {
                GateKind::H => out.push(Operation::H(*target)),
                GateKind::X => out.push(Operation::X(*target)),
                _ => {}
            },
            GateRecord::Controlled {
                kind,
                control,
                target,
            } => match kind {
                GateKind::CX => out.push(Operation::CX(*control, *target)),
                GateKind::CZ => out.push(Operation::CZ(*control, *target)),
                _ => {}
            },
            GateRecord::MeasureAll => out.push(Operation::MeasureAll),
            GateRecord::Block { kind, qubits } => match kind {
                GateKind::H => out.extend(qubits.iter().map(|q| Operation::H(*q))),
                GateKind::X => out.extend(qubits.iter().map(|q| Operation::X(*q))),
                GateKind::Grover => {
                    if let [a, b] = qubits.as_slice() {
                        grover_iteration(*a, *b, out);
                    }
                }
                _ => {}
            },
        }
    }
}

/// One Grover iteration marking `|11⟩`: CZ oracle, then the diffuser
/// `H⊗H · X⊗X · CZ · X⊗X · H⊗H`.
fn grover_iteration(a: QubitId, b: QubitId, out: &mut Vec<Operation>) {
    out.push(Operation::CZ(a, b));
    out.extend([Operation::H(a), Operation::H(b)]);
    out.extend([Operation::X(a), Operation::X(b)]);
    out.push(Operation::CZ(a, b));
    out.extend([Operation::X(a), Operation::X(b)]);
    out.extend([Operation::H(a), Operation::H(b)]);
}
