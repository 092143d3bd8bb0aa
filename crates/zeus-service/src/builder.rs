//! Gate-sequence builder.
//!
//! Turns an [`OperationRequest`] into a validated [`Circuit`]. Construction
//! is pure: the only side effect is a `debug` event describing the result.

use tracing::debug;
use zeus_ir::{Circuit, Gate, QubitId};

use crate::config::{MIN_QUBITS, ServiceConfig};
use crate::error::{ServiceError, ServiceResult};
use crate::operation::OperationName;
use crate::request::OperationRequest;

/// Smallest register that gets the parametrized layer's entanglers.
const ENTANGLER_MIN_QUBITS: u32 = 4;

/// Build the circuit for `request` under `config`.
///
/// # Errors
///
/// - [`ServiceError::QubitIndexOutOfRange`] when the qubit count is below 2
///   or above `config.max_qubits`
/// - [`ServiceError::InvalidParameterCount`] when `parametrized_layer` is
///   not given exactly 2·N parameters
/// - [`ServiceError::DimensionMismatch`] when an oracle gate or the
///   measurement references a qubit ≥ N
/// - [`ServiceError::InvalidGate`] for any other malformed oracle gate or a
///   non-finite parameter
pub fn build_circuit(request: &OperationRequest, config: &ServiceConfig) -> ServiceResult<Circuit> {
    let num_qubits = request.qubit_count.unwrap_or(config.default_qubits);
    if !(MIN_QUBITS..=config.max_qubits).contains(&num_qubits) {
        return Err(ServiceError::QubitIndexOutOfRange {
            qubit_count: num_qubits,
            min: MIN_QUBITS,
            max: config.max_qubits,
        });
    }

    let mut circuit = Circuit::new(request.operation.as_str(), num_qubits);
    match request.operation {
        OperationName::BellSample => bell_pairs(&mut circuit)?,
        OperationName::ParametrizedLayer => {
            let params = request.params.as_deref().unwrap_or_default();
            rotation_layer(&mut circuit, params)?;
        }
        OperationName::GroverSearch => {
            let oracle = match &request.oracle {
                Some(gates) => gates.clone(),
                None => default_oracle(num_qubits),
            };
            grover_iteration(&mut circuit, oracle)?;
        }
    }
    circuit.set_measurement(request.measurement)?;

    debug!(
        operation = %request.operation,
        qubits = num_qubits,
        gates = circuit.len(),
        depth = circuit.depth(),
        counts = ?circuit.gate_counts(),
        "built circuit"
    );

    Ok(circuit)
}

/// CNOT(0→1), CNOT(1→2), truncated to the qubits that exist.
pub fn default_oracle(num_qubits: u32) -> Vec<Gate> {
    (0..num_qubits.saturating_sub(1))
        .take(2)
        .map(|q| Gate::cx(QubitId(q), QubitId(q + 1)))
        .collect()
}

/// H + CNOT on each complete pair (2k, 2k+1); an odd last qubit is left alone.
fn bell_pairs(circuit: &mut Circuit) -> ServiceResult<()> {
    for k in 0..circuit.num_qubits() / 2 {
        let (a, b) = (QubitId(2 * k), QubitId(2 * k + 1));
        circuit.h(a)?.cx(a, b)?;
    }
    Ok(())
}

/// Rx(params[i]) then Rz(params[i+N]) on every qubit, then the fixed
/// entanglers CNOT(0→1) and CNOT(2→3) on registers of four or more qubits.
fn rotation_layer(circuit: &mut Circuit, params: &[f64]) -> ServiceResult<()> {
    let n = circuit.num_qubits();
    let expected = 2 * n as usize;
    if params.len() != expected {
        return Err(ServiceError::InvalidParameterCount {
            operation: OperationName::ParametrizedLayer,
            expected,
            got: params.len(),
        });
    }

    let (x_angles, z_angles) = params.split_at(n as usize);
    for (q, (&theta_x, &theta_z)) in (0..n).zip(x_angles.iter().zip(z_angles)) {
        circuit.rx(theta_x, QubitId(q))?.rz(theta_z, QubitId(q))?;
    }

    if n >= ENTANGLER_MIN_QUBITS {
        circuit.cx(QubitId(0), QubitId(1))?.cx(QubitId(2), QubitId(3))?;
    }
    Ok(())
}

/// Superposition, oracle, then the diffusion operator 2|s⟩⟨s| - I.
fn grover_iteration(circuit: &mut Circuit, oracle: Vec<Gate>) -> ServiceResult<()> {
    circuit.h_all()?;
    circuit.extend(oracle)?;

    // Diffusion: reflect about |s⟩ via H·X·MCX·X·H
    let last = circuit.num_qubits() - 1;
    circuit.h_all()?.x_all()?;
    circuit.mcx((0..last).map(QubitId), QubitId(last))?;
    circuit.x_all()?.h_all()?;
    Ok(())
}
