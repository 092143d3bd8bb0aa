//! Statevector simulation engine.

use num_complex::Complex64;

use zeus_ir::{Axis, Gate, IrError, Observable, QubitId};

use crate::error::{SimError, SimResult};

/// A statevector representing a quantum state.
///
/// Amplitude `i` belongs to the basis state whose bit `k` is the value of
/// qubit `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: u32) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_raw(amplitudes: Vec<Complex64>, num_qubits: u32) -> Self {
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of amplitudes (2^n).
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Borrow the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the statevector, returning its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Squared norm ⟨ψ|ψ⟩.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Probability of each computational basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Apply a gate to the statevector.
    ///
    /// The gate is re-validated against this register first, so a circuit
    /// that bypassed construction checks cannot index past the vector.
    pub fn apply(&mut self, gate: &Gate) -> SimResult<()> {
        gate.validate(self.num_qubits).map_err(|e| match e {
            IrError::QubitOutOfRange { qubit, .. } => SimError::DimensionMismatch {
                gate: gate.name().to_string(),
                qubit,
                num_qubits: self.num_qubits,
            },
            other => SimError::InvalidGate(other),
        })?;

        match gate {
            Gate::Rotation {
                axis: Axis::X,
                angle,
                qubit,
            } => self.apply_rx(qubit.index(), *angle),
            Gate::Rotation {
                axis: Axis::Y,
                angle,
                qubit,
            } => self.apply_ry(qubit.index(), *angle),
            Gate::Rotation {
                axis: Axis::Z,
                angle,
                qubit,
            } => self.apply_rz(qubit.index(), *angle),
            Gate::H { qubit } => self.apply_h(qubit.index()),
            Gate::X { qubit } => self.apply_x(qubit.index()),
            Gate::Cx { control, target } => self.apply_cx(control.index(), target.index()),
            Gate::Mcx { controls, target } => {
                let ctrl_mask = controls.iter().fold(0, |mask, q| mask | q.mask());
                self.apply_mcx(ctrl_mask, target.index());
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
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

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    // =========================================================================
    // Controlled gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        self.apply_mcx(1 << control, target);
    }

    /// Swap the target bit on every basis state whose control bits are all set.
    fn apply_mcx(&mut self, ctrl_mask: usize, target: usize) {
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Observables
    // =========================================================================

    /// Compute ⟨ψ|O_q|ψ⟩ for a Pauli observable on one qubit.
    pub fn expectation(&self, observable: Observable, qubit: QubitId) -> SimResult<f64> {
        if qubit.0 >= self.num_qubits {
            return Err(SimError::DimensionMismatch {
                gate: "measure".to_string(),
                qubit,
                num_qubits: self.num_qubits,
            });
        }

        let mask = qubit.mask();
        let mut exp = 0.0;
        for i in 0..self.amplitudes.len() {
            match observable {
                Observable::PauliZ => {
                    let p = self.amplitudes[i].norm_sqr();
                    if i & mask == 0 {
                        exp += p; // |0⟩ eigenvalue +1
                    } else {
                        exp -= p; // |1⟩ eigenvalue -1
                    }
                }
                // X and Y couple each |…0…⟩ amplitude with its |…1…⟩ partner.
                Observable::PauliX if i & mask == 0 => {
                    let overlap = self.amplitudes[i].conj() * self.amplitudes[i | mask];
                    exp += 2.0 * overlap.re;
                }
                Observable::PauliY if i & mask == 0 => {
                    let overlap = self.amplitudes[i].conj() * self.amplitudes[i | mask];
                    exp += 2.0 * overlap.im;
                }
                Observable::PauliX | Observable::PauliY => {}
            }
        }
        Ok(exp)
    }
}
