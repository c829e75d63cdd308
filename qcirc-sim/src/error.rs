//! Error types for the simulator

use qcirc_core::QuantumError;
use qcirc_state::StateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur during simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulatorError {
    /// Gate symbol outside the supported set
    #[error("Invalid gate '{symbol}' on qubit {qubit} at position {position}")]
    InvalidGate {
        symbol: String,
        qubit: usize,
        position: usize,
    },

    /// Too many qubits for the configured ceiling
    #[error("Too many qubits: circuit has {num_qubits}, max supported is {max_qubits}")]
    CapacityExceeded {
        num_qubits: usize,
        max_qubits: usize,
    },

    /// Circuit structure is invalid
    #[error("Malformed circuit: {0}")]
    MalformedCircuit(String),

    /// Invalid qubit index
    #[error("Invalid qubit index {qubit}: circuit has {num_qubits} qubits")]
    InvalidQubit { qubit: usize, num_qubits: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// State error from state operations
    #[error("State error: {0}")]
    State(StateError),
}

/// Coarse classification reported to external callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidGate,
    CapacityExceeded,
    MalformedCircuit,
    InvalidQubit,
    #[serde(rename = "internal_error")]
    Internal,
}

impl ErrorKind {
    /// Wire code of this classification
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidGate => "invalid_gate",
            ErrorKind::CapacityExceeded => "capacity_exceeded",
            ErrorKind::MalformedCircuit => "malformed_circuit",
            ErrorKind::InvalidQubit => "invalid_qubit",
            ErrorKind::Internal => "internal_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SimulatorError {
    /// Classification without any internal detail
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimulatorError::InvalidGate { .. } => ErrorKind::InvalidGate,
            SimulatorError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            SimulatorError::MalformedCircuit(_) => ErrorKind::MalformedCircuit,
            SimulatorError::InvalidQubit { .. } => ErrorKind::InvalidQubit,
            SimulatorError::State(StateError::AllocationError { .. }) => {
                ErrorKind::CapacityExceeded
            }
            SimulatorError::InvalidConfig(_) | SimulatorError::State(_) => ErrorKind::Internal,
        }
    }
}

impl From<QuantumError> for SimulatorError {
    fn from(err: QuantumError) -> Self {
        match err {
            QuantumError::InvalidGate {
                symbol,
                qubit,
                position,
            } => SimulatorError::InvalidGate {
                symbol,
                qubit,
                position,
            },
            QuantumError::MalformedCircuit(reason) => SimulatorError::MalformedCircuit(reason),
            QuantumError::InvalidQubit(qubit, num_qubits) => {
                SimulatorError::InvalidQubit { qubit, num_qubits }
            }
        }
    }
}

impl From<StateError> for SimulatorError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::CapacityExceeded { requested, max } => SimulatorError::CapacityExceeded {
                num_qubits: requested,
                max_qubits: max,
            },
            StateError::InvalidQubitIndex { index, num_qubits } => SimulatorError::InvalidQubit {
                qubit: index,
                num_qubits,
            },
            other => SimulatorError::State(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_quantum_error() {
        let err: SimulatorError = QuantumError::invalid_gate("Y", 1, 3).into();
        assert_eq!(
            err,
            SimulatorError::InvalidGate {
                symbol: "Y".to_string(),
                qubit: 1,
                position: 3
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidGate);

        let err: SimulatorError = QuantumError::invalid_qubit(4, 2).into();
        assert_eq!(err.kind(), ErrorKind::InvalidQubit);
    }

    #[test]
    fn test_from_state_error() {
        let err: SimulatorError = StateError::CapacityExceeded {
            requested: 31,
            max: 30,
        }
        .into();
        assert_eq!(
            err,
            SimulatorError::CapacityExceeded {
                num_qubits: 31,
                max_qubits: 30
            }
        );

        let err: SimulatorError = StateError::EmptyDistribution.into();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let err: SimulatorError = StateError::AllocationError { size: 1 << 40 }.into();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(ErrorKind::InvalidGate.to_string(), "invalid_gate");
        assert_eq!(ErrorKind::CapacityExceeded.as_str(), "capacity_exceeded");
        assert_eq!(
            serde_json::to_string(&ErrorKind::MalformedCircuit).unwrap(),
            "\"malformed_circuit\""
        );
        assert_eq!(ErrorKind::InvalidQubit.as_str(), "invalid_qubit");
    }

    #[test]
    fn test_display() {
        let err = SimulatorError::CapacityExceeded {
            num_qubits: 6,
            max_qubits: 5,
        };
        assert_eq!(
            err.to_string(),
            "Too many qubits: circuit has 6, max supported is 5"
        );
    }
}
