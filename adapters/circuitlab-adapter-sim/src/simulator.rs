//! Simulator backend implementation.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, instrument};

use circuitlab_ir::{Circuit, MAX_QUBITS, Operation};

use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::statevector::{Statevector, sample_index};

/// Default upper bound on shots per run.
pub const DEFAULT_MAX_SHOTS: u32 = 10_000;

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    /// Histogram of measured bitstrings.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock simulation time in milliseconds.
    pub execution_time_ms: u64,
}

/// Local simulator backend.
///
/// Runs circuits with a full statevector. A seeded backend returns the same
/// counts for the same circuit on every run.
#[derive(Debug, Clone)]
pub struct SimulatorBackend {
    /// Maximum number of qubits supported.
    max_qubits: u32,
    /// Maximum shots per run.
    max_shots: u32,
    /// RNG seed; `None` draws from OS entropy on every run.
    seed: Option<u64>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self {
            max_qubits: MAX_QUBITS,
            max_shots: DEFAULT_MAX_SHOTS,
            seed: None,
        }
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Create a simulator with custom max shots.
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.max_shots = max_shots;
        self
    }

    /// Seed the sampler for reproducible counts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the backend name.
    pub fn name(&self) -> &str {
        "statevector_simulator"
    }

    /// Get the maximum number of qubits.
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    /// Get the maximum number of shots.
    pub fn max_shots(&self) -> u32 {
        self.max_shots
    }

    /// Run `circuit` for `shots` repetitions.
    ///
    /// The circuit must contain at least one measurement; callers decide
    /// whether to append one.
    #[instrument(skip(self, circuit), fields(num_qubits = circuit.num_qubits()))]
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<ExecutionResult> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(SimError::CircuitTooLarge {
                num_qubits: circuit.num_qubits(),
                max: self.max_qubits,
            });
        }
        if shots == 0 || shots > self.max_shots {
            return Err(SimError::InvalidShots {
                shots,
                max: self.max_shots,
            });
        }

        let ops = circuit.operations();
        let Some(first_measure) = ops.iter().position(Operation::is_measurement) else {
            return Err(SimError::NoMeasurement);
        };

        let start = Instant::now();
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let width = circuit.num_clbits();

        debug!("Starting simulation: {} operations, {} shots", ops.len(), shots);

        let terminal = ops[first_measure..].iter().all(Operation::is_measurement);
        let counts = if terminal {
            run_terminal(&ops[..first_measure], circuit.num_qubits(), width, shots, &mut rng)
        } else {
            run_per_shot(&ops, circuit.num_qubits(), width, shots, &mut rng)
        };

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}: {:?}", elapsed, counts);

        Ok(ExecutionResult {
            counts,
            shots,
            execution_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// All measurements come last: evolve once, then sample the final state.
fn run_terminal(
    gates: &[Operation],
    num_qubits: u32,
    width: u32,
    shots: u32,
    rng: &mut StdRng,
) -> Counts {
    let mut sv = Statevector::new(num_qubits as usize);
    for op in gates {
        sv.apply(op);
    }

    let probabilities = sv.probabilities();
    let mut tally = vec![0_u64; probabilities.len()];
    for _ in 0..shots {
        tally[sample_index(&probabilities, rng)] += 1;
    }

    tally
        .into_iter()
        .enumerate()
        .filter(|(_, n)| *n > 0)
        .map(|(outcome, n)| (Counts::bitstring(outcome, width), n))
        .collect()
}

/// Measurements interleave with gates: collapse per shot, keep the last
/// value written to each classical bit.
fn run_per_shot(
    ops: &[Operation],
    num_qubits: u32,
    width: u32,
    shots: u32,
    rng: &mut StdRng,
) -> Counts {
    let mut counts = Counts::new();
    for shot in 0..shots {
        let mut sv = Statevector::new(num_qubits as usize);
        let mut clbits = 0_usize;
        for op in ops {
            if op.is_measurement() {
                clbits = sv.measure_all_with(rng);
            } else {
                sv.apply(op);
            }
        }
        counts.insert(Counts::bitstring(clbits, width), 1);

        if shot > 0 && shot % 1000 == 0 {
            debug!("Completed {} shots", shot);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuitlab_ir::{Example, QubitId};

    fn measured(mut circuit: Circuit) -> Circuit {
        circuit.measure_all();
        circuit
    }

    #[test]
    fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new().with_seed(42);
        let circuit = measured(Example::BellState.build(2).unwrap());
        let result = backend.run(&circuit, 1000).unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
        assert!(counts.get("00") > 350 && counts.get("11") > 350);
    }

    #[test]
    fn test_simulator_grover_finds_marked_state() {
        let backend = SimulatorBackend::new();
        let circuit = measured(Example::Grover2.build(2).unwrap());
        let result = backend.run(&circuit, 500).unwrap();
        assert_eq!(result.counts.get("11"), 500);
        assert_eq!(result.counts.len(), 1);
    }

    #[test]
    fn test_simulator_bit_order() {
        // X on qubit 0 of three: clbit 0 is the rightmost character.
        let mut circuit = Circuit::new(3).unwrap();
        circuit.x(QubitId(0)).unwrap().measure_all();
        let result = SimulatorBackend::new().run(&circuit, 100).unwrap();
        assert_eq!(result.counts.get("001"), 100);
    }

    #[test]
    fn test_simulator_mid_circuit_measurement() {
        // Measure |+⟩, then flip: the final read is the complement of the
        // first, and both outcomes occur.
        let mut circuit = Circuit::new(1).unwrap();
        circuit.h(QubitId(0)).unwrap().measure_all();
        circuit.x(QubitId(0)).unwrap().measure_all();

        let result = SimulatorBackend::new()
            .with_seed(9)
            .run(&circuit, 400)
            .unwrap();
        assert_eq!(result.counts.total(), 400);
        assert!(result.counts.get("0") > 100);
        assert!(result.counts.get("1") > 100);
    }

    #[test]
    fn test_simulator_mid_circuit_is_deterministic_after_collapse() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.x(QubitId(1)).unwrap().measure_all();
        circuit.cx(QubitId(1), QubitId(0)).unwrap().measure_all();

        let result = SimulatorBackend::new().run(&circuit, 200).unwrap();
        assert_eq!(result.counts.get("11"), 200);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let backend = SimulatorBackend::new().with_seed(1234);
        let mut circuit = Circuit::new(3).unwrap();
        circuit
            .h(QubitId(0))
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .h(QubitId(2))
            .unwrap()
            .measure_all();

        let a = backend.run(&circuit, 2000).unwrap();
        let b = backend.run(&circuit, 2000).unwrap();
        assert_eq!(a.counts, b.counts);
        assert_eq!(a.counts.total(), 2000);
    }

    #[test]
    fn test_simulator_requires_measurement() {
        let circuit = Example::BellState.build(2).unwrap();
        assert_eq!(
            SimulatorBackend::new().run(&circuit, 100),
            Err(SimError::NoMeasurement)
        );
    }

    #[test]
    fn test_simulator_shot_limits() {
        let backend = SimulatorBackend::new().with_max_shots(500);
        let circuit = measured(Circuit::new(1).unwrap());
        assert!(matches!(
            backend.run(&circuit, 0),
            Err(SimError::InvalidShots { shots: 0, .. })
        ));
        assert!(matches!(
            backend.run(&circuit, 501),
            Err(SimError::InvalidShots { max: 500, .. })
        ));
        assert_eq!(backend.run(&circuit, 500).unwrap().counts.get("0"), 500);
    }

    #[test]
    fn test_simulator_too_many_qubits() {
        let backend = SimulatorBackend::new().with_max_qubits(2);
        let circuit = measured(Circuit::new(4).unwrap());
        assert!(matches!(
            backend.run(&circuit, 100),
            Err(SimError::CircuitTooLarge { num_qubits: 4, max: 2 })
        ));
    }
}
