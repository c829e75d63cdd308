//! Pre-computed gate matrices
//!
//! Constant 2×2 matrices, in row-major order, for every supported gate.

use num_complex::Complex64;

/// A single-qubit gate matrix in row-major order
pub type Matrix2x2 = [[Complex64; 2]; 2];

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// 1/√2
pub const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Matrix2x2 = [
    [ONE, ZERO],
    [ZERO, ONE],
];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2x2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2x2 = [
    [ZERO, ONE],
    [ONE, ZERO],
];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2x2 = [
    [ONE, ZERO],
    [ZERO, NEG_ONE],
];
