//! Human-readable result summaries.

use num_complex::Complex64;
use zeus_ir::Measurement;
use zeus_sim::ResultValue;

use crate::operation::OperationName;

/// Render a simulation result as a single line.
///
/// ```text
/// Bell sample (2 qubits) state vector: [0.707+0.000i, 0.000+0.000i, 0.000+0.000i, 0.707+0.000i]
/// Bell sample (2 qubits) <Z_0> = 0.000
/// ```
///
/// Every number is rounded to `decimals` places and negative zero is
/// printed as zero.
pub fn summarize(
    operation: OperationName,
    num_qubits: u32,
    measurement: Measurement,
    value: &ResultValue,
    decimals: usize,
) -> String {
    let prefix = format!("{} ({num_qubits} qubits) {measurement}", operation.label());
    match value {
        ResultValue::State(amplitudes) => {
            let rendered: Vec<String> = amplitudes
                .iter()
                .map(|a| format_complex(*a, decimals))
                .collect();
            format!("{prefix}: [{}]", rendered.join(", "))
        }
        ResultValue::Expectation(v) => format!("{prefix} = {}", format_real(*v, decimals)),
    }
}

/// `a+bi` / `a-bi` with both parts rounded.
pub fn format_complex(z: Complex64, decimals: usize) -> String {
    let re = format_real(z.re, decimals);
    let im = format_real(z.im, decimals);
    match im.strip_prefix('-') {
        Some(abs) => format!("{re}-{abs}i"),
        None => format!("{re}+{im}i"),
    }
}

/// Fixed-point with `decimals` places; values that round to zero lose their sign.
pub fn format_real(x: f64, decimals: usize) -> String {
    let s = format!("{x:.decimals$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}
