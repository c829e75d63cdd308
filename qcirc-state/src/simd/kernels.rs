//! Low-level reduction kernels

use num_complex::Complex64;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Compute norm with plain iteration
pub fn norm_scalar(vec: &[Complex64]) -> f64 {
    vec.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
}

/// Compute norm using SSE2
///
/// # Safety
/// Requires SSE2 support
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
pub unsafe fn norm_sse2(vec: &[Complex64]) -> f64 {
    let mut sum = _mm_setzero_pd();
    let ptr = vec.as_ptr() as *const f64;

    for i in 0..vec.len() {
        // [re, im] -> [re*re, im*im]
        let z = _mm_loadu_pd(ptr.add(i * 2));
        sum = _mm_add_pd(sum, _mm_mul_pd(z, z));
    }

    let mut lanes = [0.0f64; 2];
    _mm_storeu_pd(lanes.as_mut_ptr(), sum);

    (lanes[0] + lanes[1]).sqrt()
}
