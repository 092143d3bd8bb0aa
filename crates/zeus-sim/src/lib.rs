//! Quantum Zeus Statevector Simulator
//!
//! This crate executes [`zeus_ir::Circuit`] values exactly. Each run starts
//! from a fresh |0…0⟩ register of 2^N complex amplitudes, applies the gates
//! in order and then evaluates the circuit's terminal measurement: either
//! the full state vector or one Pauli expectation value.
//!
//! # Invariants
//!
//! - After every gate |ψ|² stays within a configurable tolerance of 1
//!   (default `1e-6`); a drift is reported as [`SimError::NormViolation`]
//! - Expectation values lie in [-1, 1]
//! - Gates are re-validated against the register before they touch it,
//!   so a circuit deserialised without checks fails with
//!   [`SimError::DimensionMismatch`] instead of indexing out of bounds
//!
//! # Memory
//!
//! | Qubits | Amplitudes | Memory |
//! |--------|------------|--------|
//! | 4 | 16 | 256 B |
//! | 10 | 1 024 | ~16 KB |
//! | 16 | 65 536 | ~1 MB |
//!
//! # Example
//!
//! ```rust
//! use zeus_ir::Circuit;
//! use zeus_sim::Simulator;
//!
//! let result = Simulator::new().run(&Circuit::bell().unwrap()).unwrap();
//! let amplitudes = result.value.as_state().unwrap();
//!
//! // (|00⟩ + |11⟩)/√2
//! assert!((amplitudes[0].re - amplitudes[3].re).abs() < 1e-12);
//! assert!(amplitudes[1].norm() < 1e-12);
//! ```

pub mod error;
pub mod result;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use result::{ResultKind, ResultValue, SimulationResult};
pub use simulator::{DEFAULT_MAX_QUBITS, DEFAULT_NORM_TOLERANCE, Simulator, SimulatorConfig};
pub use statevector::Statevector;
