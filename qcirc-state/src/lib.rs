//! Dense state-vector engine for qcirc
//!
//! Holds the 2^n complex amplitudes of an n-qubit register in SIMD-aligned
//! memory, applies single-qubit gates in place, and turns the final state into
//! an outcome distribution and Bloch angles.
//!
//! Qubit 0 is the most-significant bit of every basis index and the leftmost
//! character of every bitstring.
//!
//! # Example
//!
//! ```
//! use qcirc_gates::matrices::HADAMARD;
//! use qcirc_state::{extract_probabilities, StateVector, DEFAULT_PROBABILITY_EPSILON};
//!
//! let mut state = StateVector::new(2).unwrap();
//! state.apply_single_qubit_gate(&HADAMARD, 0).unwrap();
//!
//! let probs = extract_probabilities(&state, DEFAULT_PROBABILITY_EPSILON);
//! assert_eq!(probs.get("00"), probs.get("10"));
//!
//! let angles = probs.bloch_angles(0).unwrap();
//! assert!((angles.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
//! ```

pub mod bloch;
pub mod error;
pub mod measurement;
pub mod simd;
pub mod state_vector;
pub mod validation;

pub use error::{Result, StateError};
pub use measurement::{
    extract_probabilities, MeasurementResult, Probabilities, DEFAULT_PROBABILITY_EPSILON,
};
pub use state_vector::{StateVector, MAX_QUBITS};
