//! Core types for the qcirc state-vector simulator
//!
//! This crate provides the fundamental, dependency-light types shared by the
//! rest of the workspace:
//! - [`GateSymbol`]: the closed set of supported single-qubit gates
//! - [`QubitId`]: type-safe qubit addressing
//! - [`Circuit`]: per-qubit ordered gate lines
//! - [`BlochAngles`]: spherical projection of a single qubit
//!
//! # Example
//! ```
//! use qcirc_core::{Circuit, GateSymbol};
//!
//! let circuit = Circuit::from_symbols(&[vec!["H", "z"], vec!["X"]]).unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.line(0).unwrap().gates(), &[GateSymbol::Hadamard, GateSymbol::PauliZ]);
//! ```

pub mod bloch_sphere;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

// Re-exports for convenience
pub use bloch_sphere::{BlochAngles, BlochVector};
pub use circuit::{Circuit, QubitLine};
pub use error::QuantumError;
pub use gate::GateSymbol;
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Type alias for results in qcirc-core
pub type Result<T> = std::result::Result<T, QuantumError>;
