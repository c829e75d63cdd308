//! Single-qubit gate kernels

use num_complex::Complex64;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Apply a single-qubit gate using scalar operations
///
/// Reference implementation that works on all platforms.
///
/// # Algorithm
/// With `stride = 1 << bit`:
/// - Split the state into blocks of `2 * stride` amplitudes
/// - Within a block, amplitude `k` (bit clear) pairs with `k + stride` (bit set)
/// - Replace each pair `(a0, a1)` by `M · (a0, a1)`
///
/// Exactly `len / 2` pairs are visited, each once.
pub fn apply_gate_scalar(state: &mut [Complex64], matrix: &[[Complex64; 2]; 2], stride: usize) {
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for block in state.chunks_exact_mut(stride * 2) {
        let (lo, hi) = block.split_at_mut(stride);
        for (a0, a1) in lo.iter_mut().zip(hi.iter_mut()) {
            let amp0 = *a0;
            let amp1 = *a1;
            *a0 = m00 * amp0 + m01 * amp1;
            *a1 = m10 * amp0 + m11 * amp1;
        }
    }
}

/// Apply a single-qubit gate using SSE2 instructions
///
/// Each Complex64 fits in one 128-bit register as `[re, im]`.
///
/// # Safety
/// Requires SSE2 support (available on all x86_64 CPUs)
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
pub unsafe fn apply_gate_sse2(state: &mut [Complex64], matrix: &[[Complex64; 2]; 2], stride: usize) {
    let m00_re = _mm_set1_pd(matrix[0][0].re);
    let m00_im = _mm_set1_pd(matrix[0][0].im);
    let m01_re = _mm_set1_pd(matrix[0][1].re);
    let m01_im = _mm_set1_pd(matrix[0][1].im);
    let m10_re = _mm_set1_pd(matrix[1][0].re);
    let m10_im = _mm_set1_pd(matrix[1][0].im);
    let m11_re = _mm_set1_pd(matrix[1][1].re);
    let m11_im = _mm_set1_pd(matrix[1][1].im);

    for block in state.chunks_exact_mut(stride * 2) {
        let (lo, hi) = block.split_at_mut(stride);
        let lo_ptr = lo.as_mut_ptr() as *mut f64;
        let hi_ptr = hi.as_mut_ptr() as *mut f64;

        for k in 0..stride {
            let p0 = lo_ptr.add(k * 2);
            let p1 = hi_ptr.add(k * 2);

            let amp0 = _mm_loadu_pd(p0); // [amp0.re, amp0.im]
            let amp1 = _mm_loadu_pd(p1); // [amp1.re, amp1.im]

            let amp0_re = _mm_shuffle_pd::<0b00>(amp0, amp0);
            let amp0_im = _mm_shuffle_pd::<0b11>(amp0, amp0);
            let amp1_re = _mm_shuffle_pd::<0b00>(amp1, amp1);
            let amp1_im = _mm_shuffle_pd::<0b11>(amp1, amp1);

            // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
            let new0_re = _mm_add_pd(
                _mm_sub_pd(_mm_mul_pd(m00_re, amp0_re), _mm_mul_pd(m00_im, amp0_im)),
                _mm_sub_pd(_mm_mul_pd(m01_re, amp1_re), _mm_mul_pd(m01_im, amp1_im)),
            );
            let new0_im = _mm_add_pd(
                _mm_add_pd(_mm_mul_pd(m00_re, amp0_im), _mm_mul_pd(m00_im, amp0_re)),
                _mm_add_pd(_mm_mul_pd(m01_re, amp1_im), _mm_mul_pd(m01_im, amp1_re)),
            );

            let new1_re = _mm_add_pd(
                _mm_sub_pd(_mm_mul_pd(m10_re, amp0_re), _mm_mul_pd(m10_im, amp0_im)),
                _mm_sub_pd(_mm_mul_pd(m11_re, amp1_re), _mm_mul_pd(m11_im, amp1_im)),
            );
            let new1_im = _mm_add_pd(
                _mm_add_pd(_mm_mul_pd(m10_re, amp0_im), _mm_mul_pd(m10_im, amp0_re)),
                _mm_add_pd(_mm_mul_pd(m11_re, amp1_im), _mm_mul_pd(m11_im, amp1_re)),
            );

            // Interleave back to [re, im]
            _mm_storeu_pd(p0, _mm_unpacklo_pd(new0_re, new0_im));
            _mm_storeu_pd(p1, _mm_unpacklo_pd(new1_re, new1_im));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qcirc_gates::matrices::{HADAMARD, PAULI_X, PAULI_Z};

    fn sample_state(len: usize) -> Vec<Complex64> {
        (0..len)
            .map(|i| Complex64::new(0.1 * i as f64, -0.05 * i as f64))
            .collect()
    }

    #[test]
    fn test_scalar_hadamard() {
        let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
        apply_gate_scalar(&mut state, &HADAMARD, 1);

        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        assert_relative_eq!(state[0].re, inv_sqrt2, epsilon = 1e-10);
        assert_relative_eq!(state[1].re, inv_sqrt2, epsilon = 1e-10);
    }

    #[test]
    fn test_scalar_x_swaps_partners() {
        let mut state = sample_state(8);
        let original = state.clone();
        apply_gate_scalar(&mut state, &PAULI_X, 2);

        for i in 0..8 {
            assert_eq!(state[i], original[i ^ 2]);
        }
    }

    #[test]
    fn test_scalar_z_negates_upper_half_of_each_block() {
        let mut state = sample_state(8);
        let original = state.clone();
        apply_gate_scalar(&mut state, &PAULI_Z, 4);

        for i in 0..4 {
            assert_eq!(state[i], original[i]);
            assert_eq!(state[i + 4], -original[i + 4]);
        }
    }

    #[test]
    #[cfg(target_arch = "x86_64")]
    fn test_scalar_vs_sse2() {
        if !is_x86_feature_detected!("sse2") {
            return;
        }

        let h = HADAMARD;
        for stride in [1, 2, 4, 8] {
            let mut state_scalar = sample_state(16);
            let mut state_simd = state_scalar.clone();

            apply_gate_scalar(&mut state_scalar, &h, stride);
            unsafe {
                apply_gate_sse2(&mut state_simd, &h, stride);
            }

            for i in 0..state_scalar.len() {
                assert_relative_eq!(state_scalar[i].re, state_simd[i].re, epsilon = 1e-10);
                assert_relative_eq!(state_scalar[i].im, state_simd[i].im, epsilon = 1e-10);
            }
        }
    }
}
