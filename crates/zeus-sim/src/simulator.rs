//! Circuit executor.

use std::time::Instant;
use tracing::{debug, error, instrument, trace};

use zeus_ir::{Circuit, Gate, Measurement};

use crate::error::{SimError, SimResult};
use crate::result::{ResultValue, SimulationResult};
use crate::statevector::Statevector;

/// Default tolerance on |ψ|² after each gate.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-6;

/// Default cap on register size (2^16 amplitudes).
pub const DEFAULT_MAX_QUBITS: u32 = 16;

/// Simulator settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Allowed deviation of |ψ|² from 1 after every gate.
    pub norm_tolerance: f64,
    /// Largest register the simulator will allocate.
    pub max_qubits: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

/// Statevector simulator.
///
/// Every [`run`](Simulator::run) starts from a fresh |0…0⟩ register, so a
/// simulator can be shared freely and runs never observe each other.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with custom settings.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Execute `circuit` and evaluate its terminal measurement.
    #[instrument(skip(self, circuit), fields(name = circuit.name(), qubits = circuit.num_qubits()))]
    pub fn run(&self, circuit: &Circuit) -> SimResult<SimulationResult> {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.config.max_qubits {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: self.config.max_qubits,
            });
        }

        debug!(
            "Starting simulation: {} qubits, {} gates",
            num_qubits,
            circuit.len()
        );

        let mut sv = Statevector::new(num_qubits);
        for (step, gate) in circuit.gates().iter().enumerate() {
            trace!(step, %gate, "applying gate");
            sv.apply(gate)?;
            if let Err(e) = self.check_norm(&sv, step, gate) {
                error!("{e}\n{circuit}");
                return Err(e);
            }
        }

        let value = match circuit.measurement() {
            Measurement::StateVector => ResultValue::State(sv.into_amplitudes()),
            Measurement::Expectation { observable, qubit } => {
                let value = sv.expectation(observable, qubit)?;
                if !(-1.0 - self.config.norm_tolerance..=1.0 + self.config.norm_tolerance)
                    .contains(&value)
                {
                    let e = SimError::ExpectationOutOfRange { value };
                    error!("{e}\n{circuit}");
                    return Err(e);
                }
                ResultValue::Expectation(value.clamp(-1.0, 1.0))
            }
        };

        debug!("Simulation completed in {:?}", start.elapsed());

        Ok(SimulationResult {
            value,
            circuit: circuit.clone(),
        })
    }

    /// Fail if |ψ|² has drifted from 1 by more than the tolerance.
    fn check_norm(&self, sv: &Statevector, step: usize, gate: &Gate) -> SimResult<()> {
        let norm_sqr = sv.norm_sqr();
        if (norm_sqr - 1.0).abs() > self.config.norm_tolerance {
            return Err(SimError::NormViolation {
                step,
                gate: gate.to_string(),
                norm_sqr,
                tolerance: self.config.norm_tolerance,
            });
        }
        Ok(())
    }
}
