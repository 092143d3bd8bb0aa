//! Simulation entry point.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use zeus_ir::{Circuit, Gate};
use zeus_sim::{ResultKind, ResultValue, Simulator};

use crate::builder::build_circuit;
use crate::config::ServiceConfig;
use crate::error::ServiceResult;
use crate::format::summarize;
use crate::operation::OperationName;
use crate::request::OperationRequest;

/// The outcome of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// `state` or `expectation`.
    pub kind: ResultKind,
    /// Amplitudes or expectation value.
    pub value: ResultValue,
    /// One-line human-readable rendering of `value`.
    pub summary: String,
    /// The circuit that was executed.
    pub circuit: Circuit,
}

/// Builds and runs circuits under a fixed configuration.
///
/// Holds no per-request state; one instance can serve any number of
/// requests, from any thread.
#[derive(Debug, Clone)]
pub struct CircuitService {
    config: ServiceConfig,
    simulator: Simulator,
}

impl CircuitService {
    /// Create a service after validating `config`.
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        config.validate()?;
        let simulator = Simulator::with_config(config.simulator_config());
        Ok(Self { config, simulator })
    }

    /// Current configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Build the circuit for `request`, run it and summarise the result.
    #[instrument(skip_all, fields(operation = %request.operation))]
    pub fn simulate_request(&self, request: &OperationRequest) -> ServiceResult<SimulationOutput> {
        let circuit = build_circuit(request, &self.config)?;
        let result = self.simulator.run(&circuit)?;

        let summary = summarize(
            request.operation,
            circuit.num_qubits(),
            circuit.measurement(),
            &result.value,
            self.config.decimals,
        );
        info!(
            qubits = circuit.num_qubits(),
            kind = %result.kind(),
            "simulated {}",
            request.operation
        );

        Ok(SimulationOutput {
            kind: result.kind(),
            value: result.value,
            summary,
            circuit: result.circuit,
        })
    }

    /// Run `operation` by name with a full state-vector measurement.
    pub fn simulate(
        &self,
        operation: &str,
        qubit_count: u32,
        params: Option<&[f64]>,
        oracle: Option<&[Gate]>,
    ) -> ServiceResult<SimulationOutput> {
        let mut request = OperationRequest::new(operation.parse::<OperationName>()?)
            .with_qubits(qubit_count);
        request.params = params.map(<[f64]>::to_vec);
        request.oracle = oracle.map(<[Gate]>::to_vec);
        self.simulate_request(&request)
    }
}

impl Default for CircuitService {
    fn default() -> Self {
        let config = ServiceConfig::default();
        let simulator = Simulator::with_config(config.simulator_config());
        Self { config, simulator }
    }
}

/// Run `operation` by name under the default configuration.
///
/// # Example
///
/// ```rust
/// let output = zeus_service::simulate("bell_sample", 2, None, None).unwrap();
/// assert_eq!(
///     output.summary,
///     "Bell sample (2 qubits) state vector: [0.707+0.000i, 0.000+0.000i, 0.000+0.000i, 0.707+0.000i]"
/// );
/// ```
pub fn simulate(
    operation: &str,
    qubit_count: u32,
    params: Option<&[f64]>,
    oracle: Option<&[Gate]>,
) -> ServiceResult<SimulationOutput> {
    CircuitService::default().simulate(operation, qubit_count, params, oracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CircuitService>();
    }

    #[test]
    fn test_new_validates_config() {
        let config = ServiceConfig {
            max_qubits: 0,
            ..Default::default()
        };
        assert!(matches!(
            CircuitService::new(config),
            Err(ServiceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            simulate("teleport", 2, None, None).unwrap_err(),
            ServiceError::UnknownOperation("teleport".into())
        );
    }

    #[test]
    fn test_output_carries_circuit() {
        let output = simulate("grover_search", 3, None, None).unwrap();
        assert_eq!(output.kind, ResultKind::State);
        assert_eq!(output.circuit.name(), "grover_search");
        assert_eq!(output.circuit.num_qubits(), 3);
    }

    #[test]
    fn test_decimals_follow_config() {
        let service = CircuitService::new(ServiceConfig {
            decimals: 1,
            ..Default::default()
        })
        .unwrap();
        let output = service.simulate("bell_sample", 2, None, None).unwrap();
        assert_eq!(
            output.summary,
            "Bell sample (2 qubits) state vector: [0.7+0.0i, 0.0+0.0i, 0.0+0.0i, 0.7+0.0i]"
        );
    }
}
