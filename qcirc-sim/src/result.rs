//! Simulation result types

use qcirc_core::BlochAngles;
use qcirc_state::{MeasurementResult, Probabilities, StateVector};

use crate::error::Result;
use crate::statistics::ExecutionStatistics;

/// Result of a quantum circuit simulation
///
/// Owns the final state and the outcome distribution extracted from it.
#[derive(Debug)]
pub struct SimulationResult {
    /// Final quantum state after all gates have been applied
    state: StateVector,

    /// Outcomes above the configured epsilon, ascending by index
    probabilities: Probabilities,

    /// Execution statistics (if statistics collection was enabled)
    pub statistics: Option<ExecutionStatistics>,
}

impl SimulationResult {
    /// Create a new simulation result
    pub fn new(state: StateVector, probabilities: Probabilities) -> Self {
        Self {
            state,
            probabilities,
            statistics: None,
        }
    }

    /// Add execution statistics to the result
    pub fn with_statistics(mut self, stats: ExecutionStatistics) -> Self {
        self.statistics = Some(stats);
        self
    }

    /// Get the number of qubits in the final state
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Final state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Outcome distribution
    pub fn probabilities(&self) -> &Probabilities {
        &self.probabilities
    }

    /// Emitted outcomes as a slice
    pub fn results(&self) -> &[MeasurementResult] {
        self.probabilities.results()
    }

    /// Bloch angles of `qubit`
    ///
    /// # Errors
    /// Returns `InvalidQubit` if `qubit >= num_qubits`
    pub fn bloch_angles(&self, qubit: usize) -> Result<BlochAngles> {
        Ok(self.probabilities.bloch_angles(qubit)?)
    }

    pub fn statistics(&self) -> Option<&ExecutionStatistics> {
        self.statistics.as_ref()
    }

    /// Split into the state and the distribution
    pub fn into_parts(self) -> (StateVector, Probabilities) {
        (self.state, self.probabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulatorError;
    use qcirc_state::{extract_probabilities, DEFAULT_PROBABILITY_EPSILON};

    #[test]
    fn test_accessors() {
        let state = StateVector::new(2).unwrap();
        let probs = extract_probabilities(&state, DEFAULT_PROBABILITY_EPSILON);
        let result = SimulationResult::new(state, probs);

        assert_eq!(result.num_qubits(), 2);
        assert_eq!(result.results().len(), 1);
        assert_eq!(result.results()[0].state, "00");
        assert!(result.statistics().is_none());
        assert_eq!(result.bloch_angles(0).unwrap(), BlochAngles::north_pole());
    }

    #[test]
    fn test_bloch_out_of_range() {
        let state = StateVector::new(2).unwrap();
        let probs = extract_probabilities(&state, DEFAULT_PROBABILITY_EPSILON);
        let result = SimulationResult::new(state, probs);

        assert_eq!(
            result.bloch_angles(2).unwrap_err(),
            SimulatorError::InvalidQubit {
                qubit: 2,
                num_qubits: 2
            }
        );
    }
}
