//! SIMD-optimized kernels for single-qubit gates
//!
//! Gates are applied with a stride-blocked pair loop: for a target bit with
//! stride `s = 1 << bit`, the state splits into blocks of `2s` amplitudes and
//! each block pairs index `k` with index `k + s`. The SSE2 path is selected
//! at compile time; every other target uses the scalar kernel.

pub mod kernels;
pub mod single_qubit;

use num_complex::Complex64;

/// Apply a 2×2 matrix to every amplitude pair separated by `stride`
///
/// `stride` must be a power of two smaller than `state.len()`, and
/// `state.len()` must itself be a power of two.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qcirc_gates::matrices::PAULI_X;
/// use qcirc_state::simd::apply_single_qubit_gate;
///
/// let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// apply_single_qubit_gate(&mut state, &PAULI_X, 1);
/// assert_eq!(state[1], Complex64::new(1.0, 0.0));
/// ```
#[inline]
pub fn apply_single_qubit_gate(state: &mut [Complex64], matrix: &[[Complex64; 2]; 2], stride: usize) {
    debug_assert!(stride.is_power_of_two());
    debug_assert!(state.len() >= 2 * stride);

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    {
        // SAFETY: guarded by the compile-time sse2 target feature
        unsafe { single_qubit::apply_gate_sse2(state, matrix, stride) }
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
    {
        single_qubit::apply_gate_scalar(state, matrix, stride)
    }
}

/// L2 norm of a complex vector
#[inline]
pub fn norm_simd(vec: &[Complex64]) -> f64 {
    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    {
        // SAFETY: guarded by the compile-time sse2 target feature
        unsafe { kernels::norm_sse2(vec) }
    }

    #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
    {
        kernels::norm_scalar(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qcirc_gates::matrices::HADAMARD;

    #[test]
    fn test_dispatch_matches_scalar() {
        let original: Vec<Complex64> = (0..16)
            .map(|i| Complex64::new((i as f64).sin(), (i as f64).cos()))
            .collect();

        for bit in 0..4 {
            let mut dispatched = original.clone();
            let mut scalar = original.clone();
            apply_single_qubit_gate(&mut dispatched, &HADAMARD, 1 << bit);
            single_qubit::apply_gate_scalar(&mut scalar, &HADAMARD, 1 << bit);

            for (a, b) in dispatched.iter().zip(&scalar) {
                assert_relative_eq!(a.re, b.re, epsilon = 1e-12);
                assert_relative_eq!(a.im, b.im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_norm_simd() {
        let vec = vec![Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)];
        assert_relative_eq!(norm_simd(&vec), 1.0, epsilon = 1e-12);
    }
}
