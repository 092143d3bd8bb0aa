//! Operation requests.

use serde::{Deserialize, Serialize};
use zeus_ir::{Gate, Measurement};

use crate::operation::OperationName;

/// Everything needed to build and run one circuit.
///
/// In JSON:
///
/// ```json
/// {
///   "operation": "grover_search",
///   "qubit_count": 3,
///   "oracle": [{"gate": "cx", "control": 0, "target": 2}],
///   "measurement": {"kind": "expectation", "observable": "pauli_z", "qubit": 2}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    /// Which circuit to build.
    pub operation: OperationName,
    /// Register size; the service default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qubit_count: Option<u32>,
    /// Rotation angles (only `parametrized_layer` uses them).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<f64>>,
    /// Oracle gates (only `grover_search` uses them).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle: Option<Vec<Gate>>,
    /// Terminal measurement.
    #[serde(default)]
    pub measurement: Measurement,
}

impl OperationRequest {
    /// Request `operation` with every option at its default.
    pub fn new(operation: OperationName) -> Self {
        Self {
            operation,
            qubit_count: None,
            params: None,
            oracle: None,
            measurement: Measurement::StateVector,
        }
    }

    /// Set the register size.
    pub fn with_qubits(mut self, qubit_count: u32) -> Self {
        self.qubit_count = Some(qubit_count);
        self
    }

    /// Set the rotation angles.
    pub fn with_params(mut self, params: impl Into<Vec<f64>>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Set the oracle gates.
    pub fn with_oracle(mut self, oracle: impl Into<Vec<Gate>>) -> Self {
        self.oracle = Some(oracle.into());
        self
    }

    /// Set the terminal measurement.
    pub fn with_measurement(mut self, measurement: Measurement) -> Self {
        self.measurement = measurement;
        self
    }
}
