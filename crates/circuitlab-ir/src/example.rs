//! Built-in example circuits.

use serde::Serialize;

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::{GateKind, GateRecord};
use crate::qubit::QubitId;

/// Example circuits selectable from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Example {
    /// `H` then `CX`: the two-qubit maximally entangled state.
    BellState,
    /// One Grover iteration searching for `|11⟩` over two qubits.
    Grover2,
}

impl Example {
    /// Every example, in menu order.
    pub fn all() -> [Example; 2] {
        [Example::BellState, Example::Grover2]
    }

    /// Display name, also the lookup key.
    pub fn name(&self) -> &'static str {
        match self {
            Example::BellState => "Bell State (Entanglement)",
            Example::Grover2 => "Grover's Algorithm (2-Qubit Search)",
        }
    }

    /// Look up an example by display name.
    pub fn from_name(name: &str) -> IrResult<Self> {
        Self::all()
            .into_iter()
            .find(|ex| ex.name() == name)
            .ok_or_else(|| IrError::UnknownExample(name.to_string()))
    }

    /// Build the example on a circuit of `num_qubits` wires.
    pub fn build(&self, num_qubits: u32) -> IrResult<Circuit> {
        let mut circuit = Circuit::new(num_qubits)?;
        match self {
            Example::BellState => {
                if num_qubits < 2 {
                    return Err(IrError::ExampleRequirement(
                        "Bell State requires at least 2 qubits".into(),
                    ));
                }
                circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
            }
            Example::Grover2 => {
                if num_qubits != 2 {
                    return Err(IrError::ExampleRequirement(
                        "Grover's example requires exactly 2 qubits".into(),
                    ));
                }
                let pair = vec![QubitId(0), QubitId(1)];
                circuit
                    .push(GateRecord::Block {
                        kind: GateKind::H,
                        qubits: pair.clone(),
                    })?
                    .push(GateRecord::Block {
                        kind: GateKind::Grover,
                        qubits: pair,
                    })?;
            }
        }
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_by_name() {
        for ex in Example::all() {
            assert_eq!(Example::from_name(ex.name()).unwrap(), ex);
        }
        assert!(matches!(
            Example::from_name("Shor"),
            Err(IrError::UnknownExample(_))
        ));
    }

    #[test]
    fn test_bell_gate_list() {
        let circuit = Example::BellState.build(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(
            serde_json::to_value(circuit.gates()).unwrap(),
            json!([["H", 0], ["CX", 0, 1]])
        );
    }

    #[test]
    fn test_bell_requires_two_qubits() {
        assert!(matches!(
            Example::BellState.build(1),
            Err(IrError::ExampleRequirement(_))
        ));
    }

    #[test]
    fn test_grover_gate_list() {
        let circuit = Example::Grover2.build(2).unwrap();
        assert_eq!(
            serde_json::to_value(circuit.gates()).unwrap(),
            json!([["H", [0, 1]], ["Grover Operator", [0, 1]]])
        );
        assert_eq!(circuit.operations().len(), 12);
    }

    #[test]
    fn test_grover_requires_exactly_two_qubits() {
        assert!(Example::Grover2.build(3).is_err());
        assert!(Example::Grover2.build(1).is_err());
    }
}
