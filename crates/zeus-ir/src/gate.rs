//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// Rotation axis of a single-qubit rotation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Rotation about X.
    X,
    /// Rotation about Y.
    Y,
    /// Rotation about Z.
    Z,
}

/// A gate together with the qubits it acts on.
///
/// In JSON a gate is an object tagged by its name, e.g.
/// `{"gate": "cx", "control": 0, "target": 1}` or
/// `{"gate": "rotation", "axis": "x", "angle": 0.5, "qubit": 2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum Gate {
    /// Single-qubit rotation `exp(-i·angle/2·P)` for the Pauli `P` of `axis`.
    Rotation {
        /// Rotation axis.
        axis: Axis,
        /// Rotation angle in radians.
        angle: f64,
        /// Qubit the rotation acts on.
        qubit: QubitId,
    },
    /// Hadamard gate.
    H {
        /// Qubit the gate acts on.
        qubit: QubitId,
    },
    /// Pauli-X gate.
    X {
        /// Qubit the gate acts on.
        qubit: QubitId,
    },
    /// Controlled-X (CNOT) gate.
    Cx {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// X on `target` when every control is |1⟩.
    Mcx {
        /// Control qubits.
        controls: Vec<QubitId>,
        /// Target qubit.
        target: QubitId,
    },
}

impl Gate {
    /// Rotation about X.
    pub fn rx(angle: f64, qubit: QubitId) -> Self {
        Gate::Rotation {
            axis: Axis::X,
            angle,
            qubit,
        }
    }

    /// Rotation about Y.
    pub fn ry(angle: f64, qubit: QubitId) -> Self {
        Gate::Rotation {
            axis: Axis::Y,
            angle,
            qubit,
        }
    }

    /// Rotation about Z.
    pub fn rz(angle: f64, qubit: QubitId) -> Self {
        Gate::Rotation {
            axis: Axis::Z,
            angle,
            qubit,
        }
    }

    /// Hadamard.
    pub fn h(qubit: QubitId) -> Self {
        Gate::H { qubit }
    }

    /// Pauli-X.
    pub fn x(qubit: QubitId) -> Self {
        Gate::X { qubit }
    }

    /// CNOT.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Gate::Cx { control, target }
    }

    /// Multi-controlled X.
    pub fn mcx(controls: impl IntoIterator<Item = QubitId>, target: QubitId) -> Self {
        Gate::Mcx {
            controls: controls.into_iter().collect(),
            target,
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Rotation { axis: Axis::X, .. } => "rx",
            Gate::Rotation { axis: Axis::Y, .. } => "ry",
            Gate::Rotation { axis: Axis::Z, .. } => "rz",
            Gate::H { .. } => "h",
            Gate::X { .. } => "x",
            Gate::Cx { .. } => "cx",
            Gate::Mcx { .. } => "mcx",
        }
    }

    /// Qubits this gate touches, controls first and target last.
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::Rotation { qubit, .. } | Gate::H { qubit } | Gate::X { qubit } => vec![*qubit],
            Gate::Cx { control, target } => vec![*control, *target],
            Gate::Mcx { controls, target } => {
                let mut qubits = controls.clone();
                qubits.push(*target);
                qubits
            }
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::Rotation { .. } | Gate::H { .. } | Gate::X { .. } => 1,
            Gate::Cx { .. } => 2,
            Gate::Mcx { controls, .. } => controls.len() as u32 + 1,
        }
    }

    /// Check this gate against a register of `num_qubits` qubits.
    ///
    /// Fails if an index is out of range, a qubit is repeated, a
    /// multi-controlled gate has no controls or an angle is not finite.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        if let Gate::Rotation { angle, .. } = self {
            if !angle.is_finite() {
                return Err(IrError::NonFiniteAngle {
                    gate_name: self.name().to_string(),
                    angle: *angle,
                });
            }
        }
        if let Gate::Mcx { controls, .. } = self {
            if controls.is_empty() {
                return Err(IrError::EmptyControls(self.name().to_string()));
            }
        }

        let qubits = self.qubits();
        for (i, &qubit) in qubits.iter().enumerate() {
            if qubit.0 >= num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits,
                    gate_name: Some(self.name().to_string()),
                });
            }
            if qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(self.name().to_string()),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rotation { angle, qubit, .. } => write!(f, "{}({angle}) {qubit}", self.name()),
            Gate::H { qubit } | Gate::X { qubit } => write!(f, "{} {qubit}", self.name()),
            Gate::Cx { control, target } => write!(f, "cx {control}, {target}"),
            Gate::Mcx { controls, target } => {
                write!(f, "mcx ")?;
                for control in controls {
                    write!(f, "{control}, ")?;
                }
                write!(f, "{target}")
            }
        }
    }
}
