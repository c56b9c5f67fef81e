//! CircuitLab Circuit State Model
//!
//! This crate holds the in-memory representation of the circuit a user builds
//! in the CircuitLab dashboard: a qubit count plus an ordered list of gate
//! records. It also owns payload validation and the built-in example circuits.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a wire in the circuit
//! - **Gates**: [`GateKind`] enumerates the supported operations and
//!   [`GateRecord`] is one entry of the gate list
//! - **Requests**: [`GateRequest`] is the decoded add-gate payload
//! - **Circuit**: [`Circuit`] validates and stores records
//! - **Operations**: [`Operation`] is the flattened, simulator-facing view
//! - **Examples**: [`Example`] builds the Bell and Grover demo circuits
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use circuitlab_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all();
//!
//! assert_eq!(circuit.len(), 3);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X gate |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |
//! | `Measure` | all | Measure every qubit into its classical bit |

pub mod circuit;
pub mod error;
pub mod example;
pub mod gate;
pub mod operation;
pub mod qubit;
pub mod request;

pub use circuit::{Circuit, DEFAULT_QUBITS, MAX_QUBITS, MIN_QUBITS};
pub use error::{IrError, IrResult};
pub use example::Example;
pub use gate::{GateKind, GateRecord};
pub use operation::Operation;
pub use qubit::QubitId;
pub use request::GateRequest;
