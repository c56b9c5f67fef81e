//! CircuitLab Local Statevector Simulator
//!
//! This crate runs the circuits built in the dashboard. It keeps the full
//! statevector, which is exact and cheap at the dashboard's five-qubit limit,
//! and samples measurement outcomes shot by shot.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation
//! - **Dashboard Gate Set**: H, X, CX, CZ, measure-all and the Grover block
//! - **Measurement Sampling**: Terminal measurements are sampled from the final
//!   distribution; mid-circuit measurements collapse the state per shot
//! - **Reproducible Runs**: Optional RNG seed
//!
//! # Example
//!
//! ```rust
//! use circuitlab_adapter_sim::SimulatorBackend;
//! use circuitlab_ir::Example;
//!
//! let mut circuit = Example::BellState.build(2).unwrap();
//! circuit.measure_all();
//!
//! let backend = SimulatorBackend::new().with_seed(7);
//! let result = backend.run(&circuit, 1000).unwrap();
//!
//! // Expect ~50% |00⟩ and ~50% |11⟩
//! assert_eq!(result.counts.get("00") + result.counts.get("11"), 1000);
//! ```

mod counts;
mod error;
mod simulator;
mod statevector;

pub use counts::Counts;
pub use error::{SimError, SimResult};
pub use simulator::{ExecutionResult, SimulatorBackend};
pub use statevector::Statevector;
