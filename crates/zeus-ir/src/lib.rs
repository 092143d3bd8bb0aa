//! Quantum Zeus Circuit Representation
//!
//! This crate provides the data structures shared by the simulator and the
//! simulation service: qubit identifiers, the small gate set the service
//! builds circuits from, terminal measurement specifications and the
//! [`Circuit`] value itself.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit; qubit `k` is bit `k` of a
//!   basis-state index (least significant bit first)
//! - **Gates**: [`Gate`] is a tagged variant over rotations, Hadamard,
//!   Pauli-X, CNOT and multi-controlled X
//! - **Measurements**: [`Measurement`] selects either the full state vector
//!   or the expectation of an [`Observable`] on one qubit
//! - **Circuit**: [`Circuit`] validates every gate against its qubit count
//!   as it is appended
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use zeus_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell_state", 2);
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `rx`, `ry`, `rz` | 1 | Rotation about the X, Y or Z axis |
//! | `h` | 1 | Hadamard gate |
//! | `x` | 1 | Pauli-X gate |
//! | `cx` | 2 | Controlled-NOT |
//! | `mcx` | n | Multi-controlled X (any number of controls) |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod measurement;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Axis, Gate};
pub use measurement::{Measurement, Observable};
pub use qubit::QubitId;
