//! Qubit addressing
//!
//! Qubit 0 is the most-significant bit of a basis-state index, so it is also
//! the leftmost character of a rendered bitstring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for a qubit
///
/// # Example
/// ```
/// use qcirc_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// // In a 3-qubit register qubit 0 is bit 2 of the basis index.
/// assert_eq!(q0.bit_position(3), 2);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Bit of the basis-state index that holds this qubit in an
    /// `num_qubits`-qubit register
    ///
    /// Callers must ensure `index() < num_qubits`.
    #[inline]
    pub const fn bit_position(&self, num_qubits: usize) -> usize {
        num_qubits - 1 - self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_creation() {
        let q = QubitId::new(5);
        assert_eq!(q.index(), 5);
    }

    #[test]
    fn test_qubit_ordering() {
        assert!(QubitId::new(0) < QubitId::new(1));
    }

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId::new(5)), "q5");
    }

    #[test]
    fn test_bit_position_is_msb_first() {
        assert_eq!(QubitId::new(0).bit_position(1), 0);
        assert_eq!(QubitId::new(0).bit_position(4), 3);
        assert_eq!(QubitId::new(3).bit_position(4), 0);
    }

    #[test]
    fn test_conversions() {
        let q: QubitId = 5.into();
        let i: usize = q.into();
        assert_eq!(i, 5);
    }
}
