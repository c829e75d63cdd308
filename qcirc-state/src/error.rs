//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Requested register is larger than the allowed ceiling
    #[error("Cannot allocate {requested} qubits: maximum is {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Memory allocation error
    #[error("Failed to allocate {size} bytes for state vector")]
    AllocationError { size: usize },

    /// No measurement results to project
    #[error("Probability distribution is empty")]
    EmptyDistribution,
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
