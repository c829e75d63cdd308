//! Computational-basis probability extraction
//!
//! Turns a final state vector into the list of outcomes a caller would see
//! if it measured every qubit: one [`MeasurementResult`] per basis state whose
//! probability exceeds a small threshold, in ascending index order.

use crate::bloch;
use crate::error::Result;
use crate::state_vector::StateVector;
use qcirc_core::BlochAngles;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Probabilities at or below this value are dropped from the output
pub const DEFAULT_PROBABILITY_EPSILON: f64 = 1e-12;

/// One basis-state outcome
///
/// Serializes as `{"state": "10", "probability": 1.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Basis-state index
    #[serde(skip)]
    pub index: usize,

    /// Bitstring with qubit 0 leftmost
    pub state: String,

    /// Probability of this outcome
    pub probability: f64,
}

impl MeasurementResult {
    /// Create a result for `index`, rendering its bitstring over `num_qubits`
    pub fn new(index: usize, num_qubits: usize, probability: f64) -> Self {
        Self {
            index,
            state: format!("{:0width$b}", index, width = num_qubits),
            probability,
        }
    }

    /// Value of one qubit in this outcome, `None` if out of range
    pub fn qubit_value(&self, qubit: usize) -> Option<bool> {
        self.state.as_bytes().get(qubit).map(|&b| b == b'1')
    }
}

/// Filtered outcome distribution of an n-qubit state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Probabilities {
    #[serde(skip)]
    num_qubits: usize,
    results: Vec<MeasurementResult>,
}

impl Probabilities {
    /// Number of qubits of the originating state
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Emitted results in ascending index order
    pub fn results(&self) -> &[MeasurementResult] {
        &self.results
    }

    /// Take ownership of the results
    pub fn into_results(self) -> Vec<MeasurementResult> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeasurementResult> {
        self.results.iter()
    }

    /// Probability of a bitstring, `None` if it was filtered out
    pub fn get(&self, bitstring: &str) -> Option<f64> {
        self.results
            .iter()
            .find(|r| r.state == bitstring)
            .map(|r| r.probability)
    }

    /// Sum of emitted probabilities
    pub fn total(&self) -> f64 {
        self.results.iter().map(|r| r.probability).sum()
    }

    /// Copy whose emitted probabilities sum to exactly 1
    ///
    /// Compensates for mass dropped by the epsilon filter.
    pub fn renormalized(&self) -> Self {
        let total = self.total();
        let results = if total > 0.0 {
            self.results
                .iter()
                .map(|r| MeasurementResult {
                    probability: r.probability / total,
                    ..r.clone()
                })
                .collect()
        } else {
            self.results.clone()
        };

        Self {
            num_qubits: self.num_qubits,
            results,
        }
    }

    /// Most likely outcome; the lowest index wins ties
    pub fn most_likely(&self) -> Option<&MeasurementResult> {
        self.results.iter().fold(None, |best, r| match best {
            Some(b) if b.probability >= r.probability => Some(b),
            _ => Some(r),
        })
    }

    /// Bloch angles of `qubit` derived from this distribution
    pub fn bloch_angles(&self, qubit: usize) -> Result<BlochAngles> {
        bloch::project(&self.results, qubit)
    }
}

impl<'a> IntoIterator for &'a Probabilities {
    type Item = &'a MeasurementResult;
    type IntoIter = std::slice::Iter<'a, MeasurementResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Extract every basis state with probability above `epsilon`
///
/// # Example
/// ```
/// use qcirc_gates::matrices::PAULI_X;
/// use qcirc_state::measurement::{extract_probabilities, DEFAULT_PROBABILITY_EPSILON};
/// use qcirc_state::StateVector;
///
/// let mut state = StateVector::new(2).unwrap();
/// state.apply_single_qubit_gate(&PAULI_X, 0).unwrap();
///
/// let probs = extract_probabilities(&state, DEFAULT_PROBABILITY_EPSILON);
/// assert_eq!(probs.len(), 1);
/// assert_eq!(probs.results()[0].state, "10");
/// ```
pub fn extract_probabilities(state: &StateVector, epsilon: f64) -> Probabilities {
    let num_qubits = state.num_qubits();
    let results: Vec<MeasurementResult> = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter_map(|(index, amplitude)| {
            let probability = amplitude.norm_sqr();
            (probability > epsilon).then(|| MeasurementResult::new(index, num_qubits, probability))
        })
        .collect();

    trace!(
        num_qubits,
        emitted = results.len(),
        dimension = state.dimension(),
        "extracted probabilities"
    );

    Probabilities {
        num_qubits,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use qcirc_gates::matrices::{HADAMARD, PAULI_X};

    #[test]
    fn test_bitstring_padding() {
        let r = MeasurementResult::new(1, 4, 1.0);
        assert_eq!(r.state, "0001");
        assert_eq!(r.qubit_value(3), Some(true));
        assert_eq!(r.qubit_value(0), Some(false));
        assert_eq!(r.qubit_value(4), None);
    }

    #[test]
    fn test_initial_state_single_result() {
        let state = StateVector::new(3).unwrap();
        let probs = extract_probabilities(&state, DEFAULT_PROBABILITY_EPSILON);

        assert_eq!(probs.len(), 1);
        assert_eq!(probs.results()[0].state, "000");
        assert_eq!(probs.results()[0].index, 0);
        assert_relative_eq!(probs.results()[0].probability, 1.0);
    }

    #[test]
    fn test_ascending_order_and_total() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_single_qubit_gate(&HADAMARD, 0).unwrap();
        state.apply_single_qubit_gate(&HADAMARD, 1).unwrap();

        let probs = extract_probabilities(&state, DEFAULT_PROBABILITY_EPSILON);
        let states: Vec<&str> = probs.iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, vec!["00", "01", "10", "11"]);
        assert_relative_eq!(probs.total(), 1.0, epsilon = 1e-12);
        for r in &probs {
            assert_relative_eq!(r.probability, 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_epsilon_filters_and_renormalizes() {
        let amplitudes = [
            Complex64::new(0.999_f64.sqrt(), 0.0),
            Complex64::new(0.001_f64.sqrt(), 0.0),
        ];
        let state = StateVector::from_amplitudes(1, &amplitudes).unwrap();

        let probs = extract_probabilities(&state, 0.01);
        assert_eq!(probs.len(), 1);
        assert_relative_eq!(probs.total(), 0.999, epsilon = 1e-12);

        let renormalized = probs.renormalized();
        assert_relative_eq!(renormalized.total(), 1.0, epsilon = 1e-12);
        assert_eq!(renormalized.results()[0].state, "0");
    }

    #[test]
    fn test_get_and_most_likely() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_single_qubit_gate(&PAULI_X, 1).unwrap();

        let probs = extract_probabilities(&state, DEFAULT_PROBABILITY_EPSILON);
        assert_eq!(probs.get("01"), Some(1.0));
        assert_eq!(probs.get("10"), None);
        assert_eq!(probs.most_likely().map(|r| r.state.as_str()), Some("01"));
    }

    #[test]
    fn test_serialized_shape() {
        let r = MeasurementResult::new(2, 2, 1.0);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"state":"10","probability":1.0}"#);
    }
}
