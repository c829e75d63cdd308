//! Gate library for qcirc
//!
//! Maps every [`GateSymbol`](qcirc_core::GateSymbol) to its 2×2 unitary.
//! Matrices are compile-time constants; lookup is a `match`.
//!
//! # Example
//!
//! ```
//! use qcirc_core::GateSymbol;
//! use qcirc_gates::{matrix_ops::is_unitary, GateMatrix};
//!
//! let h = GateSymbol::Hadamard.matrix();
//! assert!(is_unitary(h, 1e-12));
//! ```

pub mod matrices;
pub mod matrix_ops;
pub mod standard;

pub use matrices::Matrix2x2;
pub use standard::{gate_matrix, GateMatrix};
