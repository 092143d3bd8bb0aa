//! Service configuration.
//!
//! The service never reads files or environment variables itself; callers
//! build a [`ServiceConfig`] (usually by deserialising one section of their
//! own configuration) and hand it over explicitly.

use serde::{Deserialize, Serialize};
use zeus_sim::SimulatorConfig;

use crate::error::{ServiceError, ServiceResult};

/// Smallest register any operation accepts.
pub const MIN_QUBITS: u32 = 2;

/// Hard cap on `max_qubits` (2^24 amplitudes, 256 MiB).
pub const QUBIT_CEILING: u32 = 24;

/// Settings for [`CircuitService`](crate::CircuitService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Qubit count used when a request does not name one
    #[serde(default = "default_qubits")]
    pub default_qubits: u32,

    /// Largest register a request may ask for
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,

    /// Decimal places in summaries
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Allowed deviation of |ψ|² from 1 after every gate
    #[serde(default = "default_norm_tolerance")]
    pub norm_tolerance: f64,
}

fn default_qubits() -> u32 {
    4
}

fn default_max_qubits() -> u32 {
    16
}

fn default_decimals() -> usize {
    3
}

fn default_norm_tolerance() -> f64 {
    1e-6
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            default_qubits: default_qubits(),
            max_qubits: default_max_qubits(),
            decimals: default_decimals(),
            norm_tolerance: default_norm_tolerance(),
        }
    }
}

impl ServiceConfig {
    /// Validate configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        if !(MIN_QUBITS..=QUBIT_CEILING).contains(&self.max_qubits) {
            return Err(ServiceError::InvalidConfig(format!(
                "max_qubits must be in {MIN_QUBITS}..={QUBIT_CEILING}, got {}",
                self.max_qubits
            )));
        }

        if !(MIN_QUBITS..=self.max_qubits).contains(&self.default_qubits) {
            return Err(ServiceError::InvalidConfig(format!(
                "default_qubits must be in {MIN_QUBITS}..={}, got {}",
                self.max_qubits, self.default_qubits
            )));
        }

        if self.decimals > 12 {
            return Err(ServiceError::InvalidConfig(format!(
                "decimals must be at most 12, got {}",
                self.decimals
            )));
        }

        if !(self.norm_tolerance.is_finite() && self.norm_tolerance > 0.0) {
            return Err(ServiceError::InvalidConfig(format!(
                "norm_tolerance must be a positive number, got {}",
                self.norm_tolerance
            )));
        }

        Ok(())
    }

    /// Simulator settings derived from this configuration.
    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            norm_tolerance: self.norm_tolerance,
            max_qubits: self.max_qubits,
        }
    }
}
