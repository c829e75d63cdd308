//! Matrix utilities for gate matrices
//!
//! Small dense helpers used to validate gates (unitarity) and to build full
//! 2^n × 2^n operators as a reference for the state-vector kernels.
//!
//! # Example
//!
//! ```rust
//! use qcirc_gates::matrix_ops::{embed_single_qubit, is_unitary, is_unitary_dense};
//! use qcirc_gates::matrices::PAULI_X;
//!
//! assert!(is_unitary(&PAULI_X, 1e-12));
//!
//! // X on qubit 0 of a 2-qubit register is X ⊗ I
//! let full = embed_single_qubit(&PAULI_X, 2, 0);
//! assert!(is_unitary_dense(&full, 1e-12));
//! ```

use crate::matrices::{Matrix2x2, IDENTITY};
use num_complex::Complex64;

/// Product of two 2×2 matrices, `a · b`
pub fn multiply(a: &Matrix2x2, b: &Matrix2x2) -> Matrix2x2 {
    let mut result = [[Complex64::new(0.0, 0.0); 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Conjugate transpose of a 2×2 matrix
pub fn adjoint(m: &Matrix2x2) -> Matrix2x2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Whether every entry of `a` is within `tolerance` of `b`
pub fn approx_eq(a: &Matrix2x2, b: &Matrix2x2, tolerance: f64) -> bool {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).norm() <= tolerance)
}

/// Check U·U† = I for a 2×2 matrix
pub fn is_unitary(m: &Matrix2x2, tolerance: f64) -> bool {
    approx_eq(&multiply(m, &adjoint(m)), &IDENTITY, tolerance)
}

/// Kronecker product of two square matrices stored row-major
///
/// # Panics
/// Panics if either input is not square.
pub fn tensor_product(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let n_a = (a.len() as f64).sqrt() as usize;
    let n_b = (b.len() as f64).sqrt() as usize;

    assert_eq!(n_a * n_a, a.len(), "Matrix A must be square");
    assert_eq!(n_b * n_b, b.len(), "Matrix B must be square");

    let n_result = n_a * n_b;
    let mut result = vec![Complex64::new(0.0, 0.0); n_result * n_result];

    for i in 0..n_a {
        for j in 0..n_a {
            let a_ij = a[i * n_a + j];
            for k in 0..n_b {
                for l in 0..n_b {
                    let row = i * n_b + k;
                    let col = j * n_b + l;
                    result[row * n_result + col] = a_ij * b[k * n_b + l];
                }
            }
        }
    }

    result
}

/// Full operator of a single-qubit gate acting on `qubit` of `num_qubits`
///
/// Qubit 0 is the leftmost tensor factor, matching the most-significant-bit
/// basis ordering used by the state vector.
///
/// # Panics
/// Panics if `qubit >= num_qubits`.
pub fn embed_single_qubit(gate: &Matrix2x2, num_qubits: usize, qubit: usize) -> Vec<Complex64> {
    assert!(
        qubit < num_qubits,
        "Qubit index {} out of bounds for {} qubits",
        qubit,
        num_qubits
    );

    let gate_vec: Vec<Complex64> = gate.iter().flatten().copied().collect();
    let identity_vec: Vec<Complex64> = IDENTITY.iter().flatten().copied().collect();

    let mut result = vec![Complex64::new(1.0, 0.0)];
    for q in 0..num_qubits {
        let factor = if q == qubit { &gate_vec } else { &identity_vec };
        result = tensor_product(&result, factor);
    }
    result
}

/// Dense matrix-vector product for a row-major `dim × dim` operator
pub fn apply_dense(matrix: &[Complex64], vector: &[Complex64]) -> Vec<Complex64> {
    let dim = vector.len();
    assert_eq!(matrix.len(), dim * dim, "Operator dimension mismatch");

    (0..dim)
        .map(|row| {
            matrix[row * dim..(row + 1) * dim]
                .iter()
                .zip(vector)
                .map(|(m, v)| m * v)
                .sum()
        })
        .collect()
}

/// Check U·U† = I for a row-major square matrix of any size
pub fn is_unitary_dense(matrix: &[Complex64], tolerance: f64) -> bool {
    let dim = (matrix.len() as f64).sqrt() as usize;
    if dim * dim != matrix.len() {
        return false;
    }

    for i in 0..dim {
        for j in 0..dim {
            let entry: Complex64 = (0..dim)
                .map(|k| matrix[i * dim + k] * matrix[j * dim + k].conj())
                .sum();
            let expected = if i == j { 1.0 } else { 0.0 };
            if (entry - Complex64::new(expected, 0.0)).norm() > tolerance {
                return false;
            }
        }
    }
    true
}
