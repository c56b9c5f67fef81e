//! Gate kinds and gate records.

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// The operations a circuit can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// Measurement of every qubit.
    Measure,
    /// Two-qubit Grover iteration (phase oracle followed by the diffuser).
    Grover,
}

impl GateKind {
    /// Gates a user may add through the add-gate endpoint, in menu order.
    pub const SELECTABLE: [GateKind; 5] = [
        GateKind::H,
        GateKind::X,
        GateKind::CX,
        GateKind::CZ,
        GateKind::Measure,
    ];

    /// Short name used in gate lists and diagram boxes.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::CX => "CX",
            GateKind::CZ => "CZ",
            GateKind::Measure => "Measure",
            GateKind::Grover => "Grover Operator",
        }
    }

    /// Menu label the front-end submits, if the gate is selectable.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            GateKind::H => Some("H (Hadamard)"),
            GateKind::X => Some("X (Pauli-X)"),
            GateKind::CX => Some("CX (CNOT)"),
            GateKind::CZ => Some("CZ (Controlled-Z)"),
            GateKind::Measure => Some("Measure"),
            GateKind::Grover => None,
        }
    }

    /// Parse a selectable gate from its menu label or short name.
    ///
    /// Short names are matched case-insensitively. The Grover operator is not
    /// selectable and is rejected like any unknown string.
    pub fn from_label(label: &str) -> IrResult<Self> {
        let trimmed = label.trim();
        Self::SELECTABLE
            .into_iter()
            .find(|kind| {
                kind.label() == Some(trimmed) || kind.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| IrError::InvalidGateType(label.to_string()))
    }

    /// Whether the gate takes a control qubit.
    #[inline]
    pub fn is_controlled(&self) -> bool {
        matches!(self, GateKind::CX | GateKind::CZ)
    }
}

/// One entry of a circuit's gate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateRecord {
    /// Single-qubit gate (H, X).
    Single {
        /// Gate kind.
        kind: GateKind,
        /// Target wire.
        target: QubitId,
    },
    /// Controlled two-qubit gate (CX, CZ).
    Controlled {
        /// Gate kind.
        kind: GateKind,
        /// Control wire.
        control: QubitId,
        /// Target wire.
        target: QubitId,
    },
    /// Measure every qubit into the classical bit of the same index.
    MeasureAll,
    /// A gate applied as one block over several wires.
    ///
    /// `H` blocks broadcast a Hadamard to each wire; `Grover` blocks are a
    /// single two-qubit operator.
    Block {
        /// Gate kind.
        kind: GateKind,
        /// Wires covered by the block, in order.
        qubits: Vec<QubitId>,
    },
}

impl GateRecord {
    /// The gate kind of this record.
    pub fn kind(&self) -> GateKind {
        match self {
            GateRecord::Single { kind, .. }
            | GateRecord::Controlled { kind, .. }
            | GateRecord::Block { kind, .. } => *kind,
            GateRecord::MeasureAll => GateKind::Measure,
        }
    }

    /// Whether the record is a measurement.
    #[inline]
    pub fn is_measurement(&self) -> bool {
        matches!(self, GateRecord::MeasureAll)
    }

    /// Wires this record touches in a circuit of `num_qubits` wires.
    pub fn qubits(&self, num_qubits: u32) -> Vec<QubitId> {
        match self {
            GateRecord::Single { target, .. } => vec![*target],
            GateRecord::Controlled {
                control, target, ..
            } => vec![*control, *target],
            GateRecord::MeasureAll => (0..num_qubits).map(QubitId).collect(),
            GateRecord::Block { qubits, .. } => qubits.clone(),
        }
    }

    /// Inclusive range of wires a diagram column must reserve for this record.
    pub fn span(&self, num_qubits: u32) -> (u32, u32) {
        let qubits = self.qubits(num_qubits);
        let lo = qubits.iter().map(|q| q.0).min().unwrap_or(0);
        let hi = qubits.iter().map(|q| q.0).max().unwrap_or(0);
        (lo, hi)
    }

    /// Check that the record fits a circuit of `num_qubits` wires.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        let gate_name = Some(self.kind().name().to_string());
        let qubits = self.qubits(num_qubits);
        for (i, q) in qubits.iter().enumerate() {
            if q.0 >= num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit: *q,
                    num_qubits,
                    gate_name,
                });
            }
            if qubits[..i].contains(q) {
                return match self {
                    GateRecord::Controlled { .. } => Err(IrError::ControlEqualsTarget),
                    _ => Err(IrError::DuplicateQubit {
                        qubit: *q,
                        gate_name,
                    }),
                };
            }
        }
        Ok(())
    }
}

impl Serialize for GateRecord {
    /// Gate lists render as tuples: `["H", 0]`, `["CX", 0, 1]`,
    /// `["Measure", "All"]`, `["Grover Operator", [0, 1]]`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GateRecord::Single { kind, target } => {
                let mut tup = serializer.serialize_tuple(2)?;
                tup.serialize_element(kind.name())?;
                tup.serialize_element(target)?;
                tup.end()
            }
            GateRecord::Controlled {
                kind,
                control,
                target,
            } => {
                let mut tup = serializer.serialize_tuple(3)?;
                tup.serialize_element(kind.name())?;
                tup.serialize_element(control)?;
                tup.serialize_element(target)?;
                tup.end()
            }
            GateRecord::MeasureAll => {
                let mut tup = serializer.serialize_tuple(2)?;
                tup.serialize_element(GateKind::Measure.name())?;
                tup.serialize_element("All")?;
                tup.end()
            }
            GateRecord::Block { kind, qubits } => {
                let mut tup = serializer.serialize_tuple(2)?;
                tup.serialize_element(kind.name())?;
                tup.serialize_element(qubits)?;
                tup.end()
            }
        }
    }
}
