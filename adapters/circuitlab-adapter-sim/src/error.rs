//! Error types for the simulator.

use thiserror::Error;

/// Errors produced while running a circuit.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit is wider than the simulator accepts.
    #[error("Circuit has {num_qubits} qubits but simulator only supports {max}")]
    CircuitTooLarge {
        /// Width of the submitted circuit.
        num_qubits: u32,
        /// Configured maximum.
        max: u32,
    },

    /// Shot count is zero or above the configured maximum.
    #[error("Shots must be between 1 and {max}, got {shots}")]
    InvalidShots {
        /// The rejected shot count.
        shots: u32,
        /// Configured maximum.
        max: u32,
    },

    /// Circuit has no measurement, so there is nothing to count.
    #[error("Circuit has no measurement")]
    NoMeasurement,
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
