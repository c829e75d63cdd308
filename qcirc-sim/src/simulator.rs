//! Core simulator implementation

use qcirc_core::Circuit;
use qcirc_gates::GateMatrix;
use qcirc_state::validation::validate_normalization;
use qcirc_state::{extract_probabilities, StateVector};
use std::time::Instant;
use tracing::{debug, trace, warn};

use crate::{
    config::SimulatorConfig,
    error::{Result, SimulatorError},
    result::SimulationResult,
    statistics::ExecutionStatistics,
};

/// State-vector simulator for single-qubit circuits
///
/// Stateless between runs: each call allocates its own state vector, so a
/// shared `&Simulator` can serve independent requests.
///
/// # Example
///
/// ```
/// use qcirc_sim::{Simulator, SimulatorConfig};
///
/// let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
/// let result = simulator.run_symbols(&[vec!["X"], vec![]]).unwrap();
///
/// assert_eq!(result.results()[0].state, "10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Largest register this simulator will allocate
    pub fn max_qubits(&self) -> usize {
        self.config.effective_max_qubits()
    }

    /// Refuse registers above the configured ceiling
    pub fn check_capacity(&self, num_qubits: usize) -> Result<()> {
        let max_qubits = self.max_qubits();
        if num_qubits > max_qubits {
            warn!(num_qubits, max_qubits, "refusing circuit above qubit capacity");
            return Err(SimulatorError::CapacityExceeded {
                num_qubits,
                max_qubits,
            });
        }
        Ok(())
    }

    /// Run a quantum circuit simulation
    ///
    /// 1. Checks the qubit count against the configured capacity
    /// 2. Initializes |0...0⟩
    /// 3. Applies every line's gates in order, skipping identities
    /// 4. Extracts the outcome distribution
    ///
    /// Gates on different qubits commute, so lines are consumed one after
    /// another and only the order within a line matters.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` before any allocation if the circuit is too
    /// large for this simulator.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let total_start = Instant::now();
        let num_qubits = circuit.num_qubits();
        self.check_capacity(num_qubits)?;

        debug!(
            num_qubits,
            gates = circuit.effective_gate_count(),
            depth = circuit.depth(),
            "starting simulation"
        );

        // 1. Initialize state
        let init_start = Instant::now();
        let mut state = StateVector::with_max_qubits(num_qubits, self.max_qubits())?;
        let initialization_time = init_start.elapsed();

        // 2. Apply gates line by line
        let gate_start = Instant::now();
        let mut gates_applied = 0;
        let mut identities_skipped = 0;
        for (qubit, line) in circuit.iter() {
            for &gate in line.gates() {
                if gate.is_identity() {
                    identities_skipped += 1;
                    continue;
                }
                trace!(%qubit, %gate, "applying gate");
                state.apply_single_qubit_gate(gate.matrix(), qubit.index())?;
                gates_applied += 1;
            }
        }
        let gate_application_time = gate_start.elapsed();

        let validation = validate_normalization(state.amplitudes(), self.config.norm_tolerance);
        if !validation.is_valid() {
            warn!(
                %validation,
                tolerance = self.config.norm_tolerance,
                "final state norm drifted"
            );
        }

        // 3. Extract outcomes
        let extraction_start = Instant::now();
        let probabilities = extract_probabilities(&state, self.config.probability_epsilon);
        let extraction_time = extraction_start.elapsed();

        let total_time = total_start.elapsed();
        debug!(
            num_qubits,
            gates_applied,
            identities_skipped,
            outcomes = probabilities.len(),
            ?gate_application_time,
            ?total_time,
            "simulation finished"
        );

        let mut result = SimulationResult::new(state, probabilities);
        if self.config.collect_statistics {
            result = result.with_statistics(ExecutionStatistics {
                total_time,
                initialization_time,
                gate_application_time,
                extraction_time,
                gates_applied,
                identities_skipped,
                peak_memory_bytes: StateVector::memory_bytes(num_qubits),
                final_norm: validation.norm,
            });
        }

        Ok(result)
    }

    /// Parse a grid of wire symbols and run it
    ///
    /// The line count is checked against capacity before parsing, and parsing
    /// finishes before any state is allocated.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded`, `MalformedCircuit` for zero lines, or
    /// `InvalidGate` naming the first unsupported symbol.
    pub fn run_symbols<S: AsRef<str>>(&self, lines: &[Vec<S>]) -> Result<SimulationResult> {
        self.check_capacity(lines.len())?;
        let circuit = Circuit::from_symbols(lines)?;
        self.run(&circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qcirc_core::{GateSymbol, QubitId};

    #[test]
    fn test_simulator_creation() {
        let sim = Simulator::default();
        assert_eq!(sim.config().max_qubits, 24);
        assert_eq!(sim.max_qubits(), 24);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Simulator::new(SimulatorConfig::default().with_max_qubits(0)).unwrap_err();
        assert!(matches!(err, SimulatorError::InvalidConfig(_)));
    }

    #[test]
    fn test_simple_circuit() {
        let sim = Simulator::default();

        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(QubitId::new(0), GateSymbol::Hadamard).unwrap();

        let result = sim.run(&circuit).unwrap();
        assert_eq!(result.num_qubits(), 2);
        assert_relative_eq!(result.probabilities().get("00").unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(result.probabilities().get("10").unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_with_statistics() {
        let sim = Simulator::new(SimulatorConfig::default().with_statistics(true)).unwrap();
        let result = sim.run_symbols(&[vec!["X", "I"], vec!["I"]]).unwrap();

        let stats = result.statistics().unwrap();
        assert_eq!(stats.gates_applied, 1);
        assert_eq!(stats.identities_skipped, 2);
        assert_eq!(stats.peak_memory_bytes, 64);
        assert_relative_eq!(stats.final_norm, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_statistics_off_by_default() {
        let result = Simulator::default().run_symbols(&[vec!["H"]]).unwrap();
        assert!(result.statistics().is_none());
    }

    #[test]
    fn test_capacity_from_memory_limit() {
        // 1 KiB holds 64 amplitudes, so 6 qubits
        let sim = Simulator::new(SimulatorConfig::default().with_memory_limit(1024)).unwrap();
        assert_eq!(sim.max_qubits(), 6);
        assert!(sim.check_capacity(6).is_ok());
        assert_eq!(
            sim.check_capacity(7).unwrap_err(),
            SimulatorError::CapacityExceeded {
                num_qubits: 7,
                max_qubits: 6
            }
        );
    }

    #[test]
    fn test_zero_lines_is_malformed() {
        let lines: Vec<Vec<&str>> = Vec::new();
        let err = Simulator::default().run_symbols(&lines).unwrap_err();
        assert!(matches!(err, SimulatorError::MalformedCircuit(_)));
    }
}
