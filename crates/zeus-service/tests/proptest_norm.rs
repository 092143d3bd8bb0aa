//! Property-based tests over random parameters and qubit counts.

use num_complex::Complex64;
use proptest::prelude::*;
use std::f64::consts::TAU;
use zeus_service::{OperationName, simulate};

fn arb_operation() -> impl Strategy<Value = OperationName> {
    prop_oneof![
        Just(OperationName::GroverSearch),
        Just(OperationName::BellSample),
        Just(OperationName::ParametrizedLayer),
    ]
}

/// An operation, a qubit count in 2..=8 and 2N angles in [0, 2π).
fn arb_request() -> impl Strategy<Value = (OperationName, u32, Vec<f64>)> {
    (arb_operation(), 2_u32..=8).prop_flat_map(|(op, n)| {
        (
            Just(op),
            Just(n),
            prop::collection::vec(0.0..TAU, 2 * n as usize),
        )
    })
}

proptest! {
    /// Every operation yields a unit-norm state of length 2^N.
    #[test]
    fn test_every_operation_preserves_norm((op, n, params) in arb_request()) {
        let output = simulate(op.as_str(), n, Some(&params), None).expect("simulation failed");
        let amplitudes = output.value.as_state().expect("state vector expected");

        prop_assert_eq!(amplitudes.len(), 1usize << n);
        let norm_sqr: f64 = amplitudes.iter().map(Complex64::norm_sqr).sum();
        prop_assert!((norm_sqr - 1.0).abs() < 1e-6, "norm drifted to {}", norm_sqr);
    }

    /// Repeated calls return identical payloads and summaries.
    #[test]
    fn test_simulate_is_idempotent((op, n, params) in arb_request()) {
        let first = simulate(op.as_str(), n, Some(&params), None).expect("first call failed");
        let second = simulate(op.as_str(), n, Some(&params), None).expect("second call failed");
        prop_assert_eq!(first, second);
    }
}
