//! The circuit state: a qubit count plus an ordered gate list.

use serde::Serialize;

use crate::error::IrResult;
use crate::gate::{GateKind, GateRecord};
use crate::operation::Operation;
use crate::qubit::QubitId;
use crate::request::{GateRequest, check_qubit_count};

/// Smallest supported circuit width.
pub const MIN_QUBITS: u32 = 1;
/// Largest supported circuit width.
pub const MAX_QUBITS: u32 = 5;
/// Width of a fresh dashboard session.
pub const DEFAULT_QUBITS: u32 = 2;

/// A quantum circuit as edited in the dashboard.
///
/// Every qubit has a classical bit of the same index. Records are validated on
/// insertion, so a stored circuit never references a missing wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Circuit {
    /// Number of qubits (and classical bits).
    #[serde(rename = "qubits")]
    num_qubits: u32,
    /// Gate records in application order.
    gates: Vec<GateRecord>,
}

impl Circuit {
    /// Create an empty circuit with `num_qubits` wires.
    pub fn new(num_qubits: u32) -> IrResult<Self> {
        let num_qubits = check_qubit_count(i64::from(num_qubits))?;
        Ok(Self {
            num_qubits,
            gates: vec![],
        })
    }

    // =========================================================================
    // Gate builders
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateRecord::Single {
            kind: GateKind::H,
            target: qubit,
        })
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateRecord::Single {
            kind: GateKind::X,
            target: qubit,
        })
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateRecord::Controlled {
            kind: GateKind::CX,
            control,
            target,
        })
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateRecord::Controlled {
            kind: GateKind::CZ,
            control,
            target,
        })
    }

    /// Measure all qubits into their classical bits.
    pub fn measure_all(&mut self) -> &mut Self {
        self.gates.push(GateRecord::MeasureAll);
        self
    }

    /// Append a validated record.
    pub fn push(&mut self, record: GateRecord) -> IrResult<&mut Self> {
        record.validate(self.num_qubits)?;
        self.gates.push(record);
        Ok(self)
    }

    /// Apply an add-gate request.
    ///
    /// The request is validated in full first; on failure the circuit is left
    /// untouched. A request for a different width starts a fresh circuit of
    /// that width before the gate is appended.
    pub fn apply_request(&mut self, request: &GateRequest) -> IrResult<&GateRecord> {
        let record = request.to_record()?;
        let width = request.width()?;
        if width != self.num_qubits {
            *self = Self::new(width)?;
        }
        self.push(record)?;
        Ok(&self.gates[self.gates.len() - 1])
    }

    /// Remove and return the most recent record.
    pub fn pop(&mut self) -> Option<GateRecord> {
        self.gates.pop()
    }

    /// Remove every record, keeping the width.
    pub fn clear(&mut self) {
        self.gates.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the gate records.
    pub fn gates(&self) -> &[GateRecord] {
        &self.gates
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no records.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Whether any record is a measurement.
    pub fn has_measurement(&self) -> bool {
        self.gates.iter().any(GateRecord::is_measurement)
    }

    /// Flatten the records into primitive operations.
    pub fn operations(&self) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(self.gates.len());
        for record in &self.gates {
            Operation::expand_into(record, &mut ops);
        }
        ops
    }

    /// Group records into drawing columns.
    ///
    /// Each record is placed in the earliest column after every earlier record
    /// that overlaps its wire span. Two-qubit records reserve every wire
    /// between their endpoints so connecting lines never cross another box.
    pub fn layers(&self) -> Vec<Vec<&GateRecord>> {
        let mut frontier = vec![0_usize; self.num_qubits as usize];
        let mut layers: Vec<Vec<&GateRecord>> = vec![];

        for record in &self.gates {
            let (lo, hi) = record.span(self.num_qubits);
            let wires = lo as usize..=hi as usize;
            let column = frontier[wires.clone()].iter().copied().max().unwrap_or(0);
            if column == layers.len() {
                layers.push(vec![]);
            }
            layers[column].push(record);
            for slot in &mut frontier[wires] {
                *slot = column + 1;
            }
        }

        layers
    }

    /// Get the circuit depth in drawing columns.
    pub fn depth(&self) -> usize {
        self.layers().len()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self {
            num_qubits: DEFAULT_QUBITS,
            gates: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrError;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 3);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_default_circuit() {
        let circuit = Circuit::default();
        assert_eq!(circuit.num_qubits(), DEFAULT_QUBITS);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_new_rejects_bad_width() {
        assert!(matches!(
            Circuit::new(0),
            Err(IrError::InvalidQubitCount { got: 0, .. })
        ));
        assert!(Circuit::new(6).is_err());
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure_all();

        assert_eq!(circuit.len(), 3);
        assert!(circuit.has_measurement());
        assert_eq!(circuit.depth(), 3); // H, CX, measure
    }

    #[test]
    fn test_push_rejects_out_of_range() {
        let mut circuit = Circuit::new(2).unwrap();
        assert!(circuit.x(QubitId(2)).is_err());
        assert!(circuit.cz(QubitId(0), QubitId(0)).is_err());
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_apply_request_appends() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit
            .apply_request(&GateRequest::single("H (Hadamard)", 0, 2))
            .unwrap();
        circuit
            .apply_request(&GateRequest::controlled("CX (CNOT)", 0, 1, 2))
            .unwrap();
        assert_eq!(circuit.len(), 2);
    }

    #[test]
    fn test_apply_request_width_change_starts_fresh() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(QubitId(0)).unwrap();

        circuit
            .apply_request(&GateRequest::single("X (Pauli-X)", 2, 3))
            .unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 1);
    }

    #[test]
    fn test_rejected_request_keeps_state() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(QubitId(0)).unwrap();
        let before = circuit.clone();

        let err = circuit
            .apply_request(&GateRequest::controlled("CX (CNOT)", 1, 1, 2))
            .unwrap_err();
        assert_eq!(err, IrError::ControlEqualsTarget);
        assert_eq!(circuit, before);

        // Also untouched when the rejected request names another width.
        assert!(
            circuit
                .apply_request(&GateRequest::single("H (Hadamard)", 4, 3))
                .is_err()
        );
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_pop_and_clear() {
        let mut circuit = Circuit::new(1).unwrap();
        assert_eq!(circuit.pop(), None);
        circuit.h(QubitId(0)).unwrap().x(QubitId(0)).unwrap();
        assert_eq!(circuit.pop().map(|r| r.kind()), Some(GateKind::X));
        circuit.clear();
        assert!(circuit.is_empty());
        assert_eq!(circuit.num_qubits(), 1);
    }

    #[test]
    fn test_layers_pack_parallel_gates() {
        let mut circuit = Circuit::new(3).unwrap();
        circuit
            .h(QubitId(0))
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .h(QubitId(2))
            .unwrap();
        assert_eq!(circuit.depth(), 1);

        // CX(0, 2) reserves wire 1 as well, so X on 1 moves to the next column.
        circuit.cx(QubitId(0), QubitId(2)).unwrap();
        circuit.x(QubitId(1)).unwrap();
        let layers = circuit.layers();
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].len(), 3);
        assert_eq!(layers[2][0].kind(), GateKind::X);
    }

    #[test]
    fn test_operations_flatten_in_order() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.x(QubitId(1)).unwrap().cz(QubitId(1), QubitId(0)).unwrap();
        circuit.measure_all();
        assert_eq!(
            circuit.operations(),
            vec![
                Operation::X(QubitId(1)),
                Operation::CZ(QubitId(1), QubitId(0)),
                Operation::MeasureAll,
            ]
        );
    }

    #[test]
    fn test_serialize_state() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(QubitId(0)).unwrap();
        let value = serde_json::to_value(&circuit).unwrap();
        assert_eq!(value, serde_json::json!({ "qubits": 2, "gates": [["H", 0]] }));
    }
}
