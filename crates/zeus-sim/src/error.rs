//! Error types for the simulator.

use thiserror::Error;
use zeus_ir::QubitId;

/// Errors produced while executing a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A gate or measurement references a qubit outside the state vector.
    #[error("Gate '{gate}' references {qubit} but the state vector has {num_qubits} qubits")]
    DimensionMismatch {
        /// Name of the offending gate, or "measure".
        gate: String,
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the state vector.
        num_qubits: u32,
    },

    /// A gate is malformed in a way other than its qubit range.
    #[error("Invalid gate: {0}")]
    InvalidGate(#[source] zeus_ir::IrError),

    /// Register too large to allocate.
    #[error("Circuit needs {requested} qubits but the simulator is limited to {max}")]
    TooManyQubits {
        /// Qubits requested by the circuit.
        requested: u32,
        /// Configured limit.
        max: u32,
    },

    /// The state vector lost normalisation after a gate.
    #[error(
        "Norm invariant violated after gate {step} ('{gate}'): |ψ|² = {norm_sqr} (tolerance {tolerance})"
    )]
    NormViolation {
        /// Index of the gate just applied.
        step: usize,
        /// The gate just applied.
        gate: String,
        /// Observed squared norm.
        norm_sqr: f64,
        /// Allowed deviation from 1.
        tolerance: f64,
    },

    /// An expectation value fell outside [-1, 1].
    #[error("Expectation value {value} lies outside [-1, 1]")]
    ExpectationOutOfRange {
        /// The computed value.
        value: f64,
    },
}

impl SimError {
    /// Whether this error signals a defect in gate application rather than a
    /// malformed circuit.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            SimError::NormViolation { .. } | SimError::ExpectationOutOfRange { .. }
        )
    }
}

/// Result type for simulation.
pub type SimResult<T> = Result<T, SimError>;
