//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use circuitlab_ir::{Operation, QubitId};

/// A statevector representing a quantum state.
///
/// Basis index bit `i` is the value of qubit `i`.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply a unitary operation. Measurements are ignored here; use
    /// [`Statevector::measure_all_with`] to collapse the state.
    pub fn apply(&mut self, op: &Operation) {
        match *op {
            Operation::H(q) => self.apply_h(q.index()),
            Operation::X(q) => self.apply_x(q.index()),
            Operation::CX(c, t) => self.apply_cx(c.index(), t.index()),
            Operation::CZ(c, t) => self.apply_cz(c.index(), t.index()),
            Operation::MeasureAll => {}
        }
    }

    // =========================================================================
    // Gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = (1 << control) | (1 << target);
        for i in 0..self.amplitudes.len() {
            if i & both == both {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Probability that `qubit` reads 1.
    pub fn probability_one(&self, qubit: QubitId) -> f64 {
        let mask = 1 << qubit.index();
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Sample a basis-state index without disturbing the state.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        sample_index(&self.probabilities(), rng)
    }

    /// Measure every qubit, collapsing onto the observed basis state.
    pub fn measure_all_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let outcome = self.sample_with(rng);
        for amp in &mut self.amplitudes {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[outcome] = Complex64::new(1.0, 0.0);
        outcome
    }
}

/// Draw an index from a (normalised) probability vector.
pub(crate) fn sample_index<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.r#gen();
    let mut cumulative = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r < cumulative {
            return i;
        }
    }

    // Rounding can leave the cumulative sum just under 1; fall back to the
    // last outcome that has any weight.
    probabilities
        .iter()
        .rposition(|p| *p > 0.0)
        .unwrap_or(probabilities.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        for amp in &sv.amplitudes[1..] {
            assert!(approx_eq(*amp, Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply(&Operation::H(QubitId(0)));

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply(&Operation::H(QubitId(0)));
        sv.apply(&Operation::CX(QubitId(0), QubitId(1)));

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply(&Operation::X(QubitId(0)));

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_cz_phase() {
        let mut sv = Statevector::new(2);
        sv.apply(&Operation::X(QubitId(0)));
        sv.apply(&Operation::X(QubitId(1)));
        sv.apply(&Operation::CZ(QubitId(0), QubitId(1)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(-1.0, 0.0)));
    }

    #[test]
    fn test_cx_respects_control_direction() {
        // Control on qubit 1 (unset) leaves qubit 0 alone.
        let mut sv = Statevector::new(2);
        sv.apply(&Operation::CX(QubitId(1), QubitId(0)));
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));

        sv.apply(&Operation::X(QubitId(1)));
        sv.apply(&Operation::CX(QubitId(1), QubitId(0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_probability_one() {
        let mut sv = Statevector::new(2);
        sv.apply(&Operation::H(QubitId(1)));
        assert!((sv.probability_one(QubitId(1)) - 0.5).abs() < 1e-10);
        assert!(sv.probability_one(QubitId(0)).abs() < 1e-10);
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut sv = Statevector::new(1);
        sv.apply(&Operation::X(QubitId(0)));

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(sv.sample_with(&mut rng), 1);
        }
    }

    #[test]
    fn test_measure_collapses() {
        let mut sv = Statevector::new(1);
        sv.apply(&Operation::H(QubitId(0)));

        let mut rng = StdRng::seed_from_u64(3);
        let outcome = sv.measure_all_with(&mut rng);
        let probs = sv.probabilities();
        assert!((probs[outcome] - 1.0).abs() < 1e-12);
        for _ in 0..20 {
            assert_eq!(sv.sample_with(&mut rng), outcome);
        }
    }
}
