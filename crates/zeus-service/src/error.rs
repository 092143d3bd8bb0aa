//! Error types for the simulation service.

use thiserror::Error;
use zeus_ir::{IrError, QubitId};
use zeus_sim::SimError;

use crate::operation::OperationName;

/// Broad category of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was malformed; the caller can fix it and retry.
    Request,
    /// The simulator broke one of its own invariants.
    Invariant,
}

/// Errors returned by the simulation service.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// Operation name outside the supported set.
    #[error("Unknown operation '{0}' (expected one of: grover_search, bell_sample, parametrized_layer)")]
    UnknownOperation(String),

    /// Wrong number of rotation angles.
    #[error("Operation '{operation}' needs {expected} parameters, got {got}")]
    InvalidParameterCount {
        /// The operation that was requested.
        operation: OperationName,
        /// Required parameter count.
        expected: usize,
        /// Supplied parameter count.
        got: usize,
    },

    /// Qubit count outside the supported range.
    #[error("Qubit count {qubit_count} is outside the supported range {min}..={max}")]
    QubitIndexOutOfRange {
        /// Requested qubit count.
        qubit_count: u32,
        /// Smallest supported register.
        min: u32,
        /// Largest supported register.
        max: u32,
    },

    /// A gate or measurement references a qubit the register does not have.
    #[error("{} references {qubit} but the register has {num_qubits} qubits", .gate.as_deref().unwrap_or("measurement"))]
    DimensionMismatch {
        /// Offending gate name, or `None` for the measurement.
        gate: Option<String>,
        /// The offending qubit.
        qubit: QubitId,
        /// Register size.
        num_qubits: u32,
    },

    /// A supplied gate is malformed.
    #[error("Invalid gate: {0}")]
    InvalidGate(#[source] IrError),

    /// Service configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The simulator failed for a reason other than an invariant violation.
    #[error("Simulation failed: {0}")]
    Simulation(#[source] SimError),

    /// The simulator detected a broken invariant (norm or expectation range).
    #[error("Simulation invariant violated: {0}")]
    SimulationInvariantViolation(#[source] SimError),
}

impl ServiceError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::SimulationInvariantViolation(_) => ErrorKind::Invariant,
            _ => ErrorKind::Request,
        }
    }
}

impl From<IrError> for ServiceError {
    fn from(err: IrError) -> Self {
        match err {
            IrError::QubitOutOfRange {
                qubit,
                num_qubits,
                gate_name,
            } => ServiceError::DimensionMismatch {
                gate: gate_name,
                qubit,
                num_qubits,
            },
            other => ServiceError::InvalidGate(other),
        }
    }
}

impl From<SimError> for ServiceError {
    fn from(err: SimError) -> Self {
        if err.is_invariant_violation() {
            return ServiceError::SimulationInvariantViolation(err);
        }
        match err {
            SimError::DimensionMismatch {
                gate,
                qubit,
                num_qubits,
            } => ServiceError::DimensionMismatch {
                gate: Some(gate),
                qubit,
                num_qubits,
            },
            SimError::InvalidGate(ir) => ServiceError::InvalidGate(ir),
            other => ServiceError::Simulation(other),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
