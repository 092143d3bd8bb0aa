//! Quantum Zeus Simulation Service
//!
//! This crate turns a named operation and a handful of parameters into a
//! circuit, runs it on the exact statevector simulator and returns the
//! result together with a one-line summary suitable for embedding in a
//! chat message.
//!
//! # Operations
//!
//! | Name | Parameters | Circuit |
//! |------|------------|---------|
//! | `bell_sample` | ignored | H + CNOT on each pair (2k, 2k+1) |
//! | `parametrized_layer` | exactly 2·N | Rx/Rz on every qubit; CNOT(0,1), CNOT(2,3) when N ≥ 4 |
//! | `grover_search` | ignored | H on all, oracle, diffusion (one iteration) |
//!
//! # Errors
//!
//! Every failure is a [`ServiceError`]. [`ServiceError::kind`] separates
//! request errors (fix the request and retry) from invariant violations
//! (the simulator detected a broken norm or expectation range).
//!
//! # Example
//!
//! ```rust
//! use zeus_ir::{Measurement, Observable, QubitId};
//! use zeus_service::{CircuitService, OperationName, OperationRequest};
//!
//! let service = CircuitService::default();
//! let request = OperationRequest::new(OperationName::BellSample)
//!     .with_qubits(2)
//!     .with_measurement(Measurement::expectation(Observable::PauliZ, QubitId(0)));
//!
//! let output = service.simulate_request(&request).unwrap();
//! assert_eq!(output.summary, "Bell sample (2 qubits) <Z_0> = 0.000");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod operation;
pub mod request;
pub mod service;

pub use builder::{build_circuit, default_oracle};
pub use config::ServiceConfig;
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use format::summarize;
pub use operation::OperationName;
pub use request::OperationRequest;
pub use service::{CircuitService, SimulationOutput, simulate};
