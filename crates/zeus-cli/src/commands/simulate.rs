//! Simulate command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;
use tracing::debug;

use zeus_service::{CircuitService, OperationName, OperationRequest};

use super::common::{OutputFormat, load_oracle, make_rng, parse_measurement, print_output, random_angles};

/// Execute the simulate command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    service: &CircuitService,
    operation: &str,
    qubits: Option<u32>,
    params: Option<Vec<f64>>,
    random_params: bool,
    seed: Option<u64>,
    oracle: Option<&Path>,
    observable: Option<&str>,
    on_qubit: u32,
    show_circuit: bool,
    format: OutputFormat,
) -> Result<()> {
    let operation: OperationName = operation.parse()?;
    let num_qubits = qubits.unwrap_or(service.config().default_qubits);

    let params = match (params, random_params) {
        (Some(params), _) => Some(params),
        (None, true) => operation.expected_params(num_qubits).map(|count| {
            let angles = random_angles(&mut make_rng(seed), count);
            debug!(?angles, "drew random parameters");
            angles
        }),
        (None, false) => None,
    };

    let oracle = oracle.map(load_oracle).transpose()?;
    if oracle.is_some() && !operation.accepts_oracle() {
        debug!("{operation} ignores the oracle");
    }

    let mut request = OperationRequest::new(operation)
        .with_qubits(num_qubits)
        .with_measurement(parse_measurement(observable, on_qubit)?);
    request.params = params;
    request.oracle = oracle;

    let output = service.simulate_request(&request)?;

    if show_circuit && format == OutputFormat::Text {
        println!("{}", style(&output.circuit).dim());
    }
    print_output(&output, format)
}
