//! Terminal measurement specifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// Single-qubit Pauli observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observable {
    /// Pauli-X.
    PauliX,
    /// Pauli-Y.
    PauliY,
    /// Pauli-Z.
    PauliZ,
}

impl Observable {
    /// Single-letter name used in summaries (`X`, `Y`, `Z`).
    pub fn letter(self) -> char {
        match self {
            Observable::PauliX => 'X',
            Observable::PauliY => 'Y',
            Observable::PauliZ => 'Z',
        }
    }
}

impl FromStr for Observable {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "x" | "paulix" => Ok(Observable::PauliX),
            "y" | "pauliy" => Ok(Observable::PauliY),
            "z" | "pauliz" => Ok(Observable::PauliZ),
            _ => Err(IrError::UnknownObservable(s.to_string())),
        }
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// What a simulation returns once every gate has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    /// The full 2^N amplitude vector.
    #[default]
    StateVector,
    /// ⟨ψ|O_q|ψ⟩ for a Pauli observable on one qubit.
    Expectation {
        /// The observable.
        observable: Observable,
        /// The qubit it acts on; identity elsewhere.
        qubit: QubitId,
    },
}

impl Measurement {
    /// Expectation of `observable` on `qubit`.
    pub fn expectation(observable: Observable, qubit: QubitId) -> Self {
        Measurement::Expectation { observable, qubit }
    }

    /// Check the measured qubit exists in a register of `num_qubits`.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        match self {
            Measurement::StateVector => Ok(()),
            Measurement::Expectation { qubit, .. } if qubit.0 >= num_qubits => {
                Err(IrError::QubitOutOfRange {
                    qubit: *qubit,
                    num_qubits,
                    gate_name: None,
                })
            }
            Measurement::Expectation { .. } => Ok(()),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::StateVector => write!(f, "state vector"),
            Measurement::Expectation { observable, qubit } => {
                write!(f, "<{observable}_{}>", qubit.0)
            }
        }
    }
}
