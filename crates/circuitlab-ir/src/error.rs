//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating a circuit.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// Requested qubit count is outside the supported range.
    #[error("Qubits must be between {min} and {max}")]
    InvalidQubitCount {
        /// The rejected value.
        got: i64,
        /// Smallest accepted count.
        min: u32,
        /// Largest accepted count.
        max: u32,
    },

    /// Gate type string does not name a selectable gate.
    #[error("Invalid gate type '{0}'")]
    InvalidGateType(String),

    /// Target qubit missing or out of range.
    #[error("Invalid target qubit")]
    InvalidTarget,

    /// Control qubit missing or out of range.
    #[error("Invalid control qubit")]
    InvalidControl,

    /// Controlled gate with identical control and target.
    #[error("Control and target qubits must be different")]
    ControlEqualsTarget,

    /// A record references a wire the circuit does not have.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit circuit{}", format_gate_context(.gate_name))]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Duplicate qubit in a multi-qubit record.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Example name is not one of the built-in examples.
    #[error("Invalid example '{0}'")]
    UnknownExample(String),

    /// Example cannot be built at the requested width.
    #[error("{0}")]
    ExampleRequirement(String),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
