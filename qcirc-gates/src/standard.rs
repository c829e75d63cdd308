//! Matrix table for the supported gate set

use crate::matrices::{self, Matrix2x2};
use qcirc_core::GateSymbol;

/// Gate-to-matrix lookup
///
/// Implemented for [`GateSymbol`] so callers can write `gate.matrix()`.
///
/// # Example
/// ```
/// use qcirc_core::GateSymbol;
/// use qcirc_gates::{matrices, GateMatrix};
///
/// assert_eq!(GateSymbol::PauliX.matrix(), &matrices::PAULI_X);
/// ```
pub trait GateMatrix {
    /// The gate's 2×2 unitary
    fn matrix(&self) -> &'static Matrix2x2;
}

impl GateMatrix for GateSymbol {
    #[inline]
    fn matrix(&self) -> &'static Matrix2x2 {
        gate_matrix(*self)
    }
}

/// Returns the pre-computed matrix of a gate
#[inline]
pub const fn gate_matrix(gate: GateSymbol) -> &'static Matrix2x2 {
    match gate {
        GateSymbol::Identity => &matrices::IDENTITY,
        GateSymbol::Hadamard => &matrices::HADAMARD,
        GateSymbol::PauliX => &matrices::PAULI_X,
        GateSymbol::PauliZ => &matrices::PAULI_Z,
    }
}
