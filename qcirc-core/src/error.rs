//! Error types for circuit construction

use thiserror::Error;

/// Errors that can occur while building or validating a circuit
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantumError {
    /// A gate symbol outside the supported set
    #[error("Unsupported gate symbol '{symbol}' on qubit {qubit} at position {position}")]
    InvalidGate {
        symbol: String,
        qubit: usize,
        position: usize,
    },

    /// Circuit has no qubit lines, or a line is missing
    #[error("Malformed circuit: {0}")]
    MalformedCircuit(String),

    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),
}

impl QuantumError {
    /// Create an invalid gate error
    pub fn invalid_gate(symbol: impl Into<String>, qubit: usize, position: usize) -> Self {
        Self::InvalidGate {
            symbol: symbol.into(),
            qubit,
            position,
        }
    }

    /// Create a malformed circuit error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCircuit(reason.into())
    }

    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_gate_error() {
        let err = QuantumError::invalid_gate("Y", 1, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("'Y'"));
        assert!(msg.contains("qubit 1"));
        assert!(msg.contains("position 3"));
    }

    #[test]
    fn test_invalid_qubit_error() {
        let err = QuantumError::invalid_qubit(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_malformed_circuit_error() {
        let err = QuantumError::malformed("circuit has no qubit lines");
        assert_eq!(
            err.to_string(),
            "Malformed circuit: circuit has no qubit lines"
        );
    }
}
