//! State validation and normalization checks

use num_complex::Complex64;

/// Default tolerance for normalization checks
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Validation result with diagnostics
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the state passed validation
    pub valid: bool,
    /// Current norm of the state
    pub norm: f64,
    /// Deviation from ideal norm (1.0)
    pub norm_error: f64,
    /// Whether every amplitude is finite
    pub finite: bool,
}

impl ValidationResult {
    /// Check if the state is valid within tolerance
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationResult(valid={}, finite={}, norm={:.6}, error={:.2e})",
            self.valid, self.finite, self.norm, self.norm_error
        )
    }
}

/// Validate state normalization
///
/// # Example
/// ```
/// use qcirc_state::validation::{validate_normalization, DEFAULT_NORM_TOLERANCE};
/// use num_complex::Complex64;
///
/// let amplitudes = vec![
///     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
///     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
/// ];
///
/// let result = validate_normalization(&amplitudes, DEFAULT_NORM_TOLERANCE);
/// assert!(result.is_valid());
/// ```
pub fn validate_normalization(amplitudes: &[Complex64], tolerance: f64) -> ValidationResult {
    let norm_squared: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
    let finite = check_finite(amplitudes);
    let norm = norm_squared.sqrt();
    let norm_error = (norm - 1.0).abs();

    ValidationResult {
        valid: finite && norm_error < tolerance,
        norm,
        norm_error,
        finite,
    }
}

/// True when no amplitude is NaN or infinite
pub fn check_finite(amplitudes: &[Complex64]) -> bool {
    amplitudes.iter().all(|a| a.re.is_finite() && a.im.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_state() {
        let amplitudes = vec![Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)];
        let result = validate_normalization(&amplitudes, DEFAULT_NORM_TOLERANCE);
        assert!(result.is_valid());
        assert!(result.finite);
        assert!(result.norm_error < 1e-12);
    }

    #[test]
    fn test_unnormalized_state() {
        let amplitudes = vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];
        let result = validate_normalization(&amplitudes, DEFAULT_NORM_TOLERANCE);
        assert!(!result.is_valid());
        assert!((result.norm - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(result.to_string().contains("valid=false"));
    }

    #[test]
    fn test_nan_is_invalid() {
        let amplitudes = vec![Complex64::new(f64::NAN, 0.0), Complex64::new(0.0, 0.0)];
        assert!(!check_finite(&amplitudes));
        let result = validate_normalization(&amplitudes, 1.0);
        assert!(!result.is_valid());
        assert!(!result.finite);
    }
}
