//! High-level circuit builder API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::IrResult;
use crate::gate::Gate;
use crate::measurement::Measurement;
use crate::qubit::QubitId;

/// A quantum circuit over a fixed-size register.
///
/// Every gate is validated against the register size as it is appended,
/// so a circuit assembled through this API only ever references existing
/// qubits. Circuits that arrive through deserialisation skip that check;
/// the simulator re-validates before touching its state vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Size of the qubit register.
    num_qubits: u32,
    /// Gates in application order.
    gates: Vec<Gate>,
    /// Terminal measurement.
    #[serde(default)]
    measurement: Measurement,
}

impl Circuit {
    /// Create an empty circuit with `num_qubits` qubits, all in |0⟩.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            gates: vec![],
            measurement: Measurement::StateVector,
        }
    }

    /// Build a two-qubit Bell-state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::new("bell", 2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Iterator over the register's qubit ids.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + use<> {
        (0..self.num_qubits).map(QubitId)
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Terminal measurement.
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Set the terminal measurement, validating the measured qubit.
    pub fn set_measurement(&mut self, measurement: Measurement) -> IrResult<&mut Self> {
        measurement.validate(self.num_qubits)?;
        self.measurement = measurement;
        Ok(self)
    }

    /// Append a gate after validating it against the register.
    pub fn apply(&mut self, gate: Gate) -> IrResult<&mut Self> {
        gate.validate(self.num_qubits)?;
        self.gates.push(gate);
        Ok(self)
    }

    /// Append a sequence of gates; stops at the first invalid one.
    pub fn extend(&mut self, gates: impl IntoIterator<Item = Gate>) -> IrResult<&mut Self> {
        for gate in gates {
            self.apply(gate)?;
        }
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::h(qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::x(qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::rx(theta, qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::ry(theta, qubit))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::rz(theta, qubit))
    }

    /// Apply Hadamard to every qubit.
    pub fn h_all(&mut self) -> IrResult<&mut Self> {
        for q in 0..self.num_qubits {
            self.h(QubitId(q))?;
        }
        Ok(self)
    }

    /// Apply Pauli-X to every qubit.
    pub fn x_all(&mut self) -> IrResult<&mut Self> {
        for q in 0..self.num_qubits {
            self.x(QubitId(q))?;
        }
        Ok(self)
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Gate::cx(control, target))
    }

    /// Apply multi-controlled X gate.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Gate::mcx(controls, target))
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Circuit depth: the longest chain of gates sharing a qubit.
    pub fn depth(&self) -> usize {
        let mut layer = vec![0usize; self.num_qubits as usize];
        for gate in &self.gates {
            let qubits = gate.qubits();
            let next = qubits
                .iter()
                .filter_map(|q| layer.get(q.index()))
                .max()
                .copied()
                .unwrap_or(0)
                + 1;
            for q in qubits {
                if let Some(slot) = layer.get_mut(q.index()) {
                    *slot = next;
                }
            }
        }
        layer.into_iter().max().unwrap_or(0)
    }

    /// Count of gates by name, sorted by name.
    pub fn gate_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for gate in &self.gates {
            *counts.entry(gate.name()).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Circuit {
    /// One header line followed by one line per gate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "circuit {} ({} qubits, {} gates, measure {})",
            self.name,
            self.num_qubits,
            self.gates.len(),
            self.measurement
        )?;
        for (i, gate) in self.gates.iter().enumerate() {
            writeln!(f, "  {i:>3}: {gate}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrError;
    use crate::measurement::Observable;

    #[test]
    fn test_bell_circuit() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.depth(), 2);
        assert_eq!(circuit.measurement(), Measurement::StateVector);
    }

    #[test]
    fn test_rejects_out_of_range_gate() {
        let mut circuit = Circuit::new("test", 2);
        assert!(matches!(
            circuit.cx(QubitId(0), QubitId(2)),
            Err(IrError::QubitOutOfRange { .. })
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_extend_stops_at_invalid_gate() {
        let mut circuit = Circuit::new("test", 2);
        let result = circuit
            .extend([Gate::h(QubitId(0)), Gate::x(QubitId(5)), Gate::h(QubitId(1))])
            .map(|_| ());
        assert!(result.is_err());
        assert_eq!(circuit.len(), 1);
    }

    #[test]
    fn test_h_all_and_depth() {
        let mut circuit = Circuit::new("layer", 4);
        circuit.h_all().unwrap();
        assert_eq!(circuit.len(), 4);
        assert_eq!(circuit.depth(), 1);

        circuit
            .mcx([QubitId(0), QubitId(1), QubitId(2)], QubitId(3))
            .unwrap();
        circuit.x(QubitId(3)).unwrap();
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_gate_counts() {
        let mut circuit = Circuit::new("counts", 3);
        circuit.h_all().unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        circuit.rz(0.1, QubitId(2)).unwrap();

        let counts = circuit.gate_counts();
        assert_eq!(counts.get("h"), Some(&3));
        assert_eq!(counts.get("cx"), Some(&1));
        assert_eq!(counts.get("rz"), Some(&1));
        assert_eq!(counts.get("x"), None);
    }

    #[test]
    fn test_set_measurement_validates_qubit() {
        let mut circuit = Circuit::new("m", 2);
        assert!(
            circuit
                .set_measurement(Measurement::expectation(Observable::PauliZ, QubitId(2)))
                .is_err()
        );
        assert_eq!(circuit.measurement(), Measurement::StateVector);

        circuit
            .set_measurement(Measurement::expectation(Observable::PauliX, QubitId(1)))
            .unwrap();
        assert_eq!(
            circuit.measurement(),
            Measurement::expectation(Observable::PauliX, QubitId(1))
        );
    }

    #[test]
    fn test_display_lists_every_gate() {
        let circuit = Circuit::bell().unwrap();
        let listing = circuit.to_string();
        assert!(listing.starts_with("circuit bell (2 qubits, 2 gates, measure state vector)"));
        assert!(listing.contains("0: h q0"));
        assert!(listing.contains("1: cx q0, q1"));
    }

    #[test]
    fn test_json_roundtrip_preserves_circuit() {
        let circuit = Circuit::bell().unwrap();
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
    }
}
