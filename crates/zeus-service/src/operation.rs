//! Named operations the service can run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ServiceError;

/// One of the fixed circuits the service knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationName {
    /// One Grover iteration: superposition, oracle, diffusion.
    GroverSearch,
    /// Bell pairs on consecutive qubits.
    BellSample,
    /// Rx/Rz rotation layer followed by fixed entanglers.
    ParametrizedLayer,
}

impl OperationName {
    /// Every operation, in listing order.
    pub const ALL: [OperationName; 3] = [
        OperationName::GroverSearch,
        OperationName::BellSample,
        OperationName::ParametrizedLayer,
    ];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationName::GroverSearch => "grover_search",
            OperationName::BellSample => "bell_sample",
            OperationName::ParametrizedLayer => "parametrized_layer",
        }
    }

    /// Human-readable label used to prefix summaries.
    pub fn label(self) -> &'static str {
        match self {
            OperationName::GroverSearch => "Grover search",
            OperationName::BellSample => "Bell sample",
            OperationName::ParametrizedLayer => "Parametrized layer",
        }
    }

    /// Number of parameters required for `num_qubits` qubits, or `None`
    /// when the operation ignores parameters.
    pub fn expected_params(self, num_qubits: u32) -> Option<usize> {
        match self {
            OperationName::ParametrizedLayer => Some(2 * num_qubits as usize),
            OperationName::GroverSearch | OperationName::BellSample => None,
        }
    }

    /// Whether the operation accepts a caller-supplied oracle.
    pub fn accepts_oracle(self) -> bool {
        matches!(self, OperationName::GroverSearch)
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            OperationName::GroverSearch => {
                "One Grover iteration over all qubits with a CNOT-chain or custom oracle"
            }
            OperationName::BellSample => "Hadamard + CNOT on each consecutive qubit pair",
            OperationName::ParametrizedLayer => {
                "Rx(params[i]) and Rz(params[i+N]) on every qubit, then CNOT(0,1) and CNOT(2,3) when N >= 4"
            }
        }
    }
}

impl FromStr for OperationName {
    type Err = ServiceError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationName::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ServiceError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
