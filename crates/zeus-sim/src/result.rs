//! Simulation results.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use zeus_ir::Circuit;

/// Which kind of value a simulation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// Full state vector.
    State,
    /// Scalar expectation value.
    Expectation,
}

impl ResultKind {
    /// Lower-case name, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::State => "state",
            ResultKind::Expectation => "expectation",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The measured value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// 2^N amplitudes, basis state `i` at index `i`.
    State(Vec<Complex64>),
    /// A real number in [-1, 1].
    Expectation(f64),
}

impl ResultValue {
    /// Kind of this value.
    pub fn kind(&self) -> ResultKind {
        match self {
            ResultValue::State(_) => ResultKind::State,
            ResultValue::Expectation(_) => ResultKind::Expectation,
        }
    }

    /// Amplitudes, if this is a state.
    pub fn as_state(&self) -> Option<&[Complex64]> {
        match self {
            ResultValue::State(amplitudes) => Some(amplitudes),
            ResultValue::Expectation(_) => None,
        }
    }

    /// Scalar, if this is an expectation value.
    pub fn as_expectation(&self) -> Option<f64> {
        match self {
            ResultValue::State(_) => None,
            ResultValue::Expectation(value) => Some(*value),
        }
    }
}

/// Output of one simulator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The measured value.
    pub value: ResultValue,
    /// The circuit that produced it.
    pub circuit: Circuit,
}

impl SimulationResult {
    /// Kind of the measured value.
    pub fn kind(&self) -> ResultKind {
        self.value.kind()
    }
}
