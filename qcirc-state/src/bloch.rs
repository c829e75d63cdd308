//! Bloch-sphere projection from an outcome distribution

use crate::error::{Result, StateError};
use crate::measurement::MeasurementResult;
use qcirc_core::BlochAngles;

/// Project `qubit` onto the Bloch sphere from measurement results
///
/// P1 is the probability mass of outcomes with the qubit set, divided by the
/// total emitted mass and clamped to [0, 1]. Then theta = 2·asin(√P1) and
/// phi = 0.
///
/// Phi is fixed at 0 by convention. Probabilities carry no phase, so states
/// such as |−⟩ (true phi = π) project onto the same point as |+⟩. Use
/// [`qcirc_core::BlochVector::from_state`] when the real azimuth is needed.
///
/// # Errors
/// - [`StateError::EmptyDistribution`] for an empty list
/// - [`StateError::InvalidQubitIndex`] if `qubit` is outside the bitstrings
///
/// # Example
/// ```
/// use qcirc_state::bloch::project;
/// use qcirc_state::MeasurementResult;
///
/// let results = vec![MeasurementResult::new(1, 1, 1.0)];
/// let angles = project(&results, 0).unwrap();
/// assert!((angles.theta - std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn project(results: &[MeasurementResult], qubit: usize) -> Result<BlochAngles> {
    let num_qubits = results
        .first()
        .map(|r| r.state.len())
        .ok_or(StateError::EmptyDistribution)?;

    if qubit >= num_qubits {
        return Err(StateError::InvalidQubitIndex {
            index: qubit,
            num_qubits,
        });
    }

    let (excited, total) = results.iter().fold((0.0, 0.0), |(excited, total), r| {
        let set = r.qubit_value(qubit).unwrap_or(false);
        (
            if set { excited + r.probability } else { excited },
            total + r.probability,
        )
    });

    let p1 = if total > 0.0 { excited / total } else { 0.0 };
    Ok(BlochAngles::from_excited_probability(p1))
}
