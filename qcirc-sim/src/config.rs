//! Simulator configuration

use qcirc_state::validation::DEFAULT_NORM_TOLERANCE;
use qcirc_state::{DEFAULT_PROBABILITY_EPSILON, MAX_QUBITS};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};

/// Configuration for the quantum simulator
///
/// Deserializes from partial JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Largest register the simulator will allocate
    ///
    /// Requests above this fail with `CapacityExceeded` before any state is
    /// created. 24 qubits take 256 MiB.
    ///
    /// Default: 24
    pub max_qubits: usize,

    /// Memory limit in bytes
    ///
    /// Further caps the register at floor(log2(limit / 16)) qubits.
    /// Set to 0 for no limit.
    ///
    /// Default: 0 (unlimited)
    pub memory_limit: usize,

    /// Probabilities at or below this value are left out of the results
    ///
    /// Must stay below half the smallest outcome probability a circuit at
    /// the qubit ceiling can produce; see [`Self::epsilon_ceiling`].
    ///
    /// Default: 1e-12
    pub probability_epsilon: f64,

    /// Allowed drift of the final norm from 1 before a warning is logged
    ///
    /// Default: 1e-9
    pub norm_tolerance: f64,

    /// Qubit projected onto the Bloch sphere when a request names none
    ///
    /// Default: 0
    pub bloch_qubit: usize,

    /// Enable execution statistics collection
    ///
    /// Default: false
    pub collect_statistics: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 24,
            memory_limit: 0,
            probability_epsilon: DEFAULT_PROBABILITY_EPSILON,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            bloch_qubit: 0,
            collect_statistics: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Small registers only, matching the five-row circuit editor
    pub fn demo() -> Self {
        Self {
            max_qubits: 5,
            ..Default::default()
        }
    }

    /// Statistics on and a tighter normalization tolerance
    pub fn strict() -> Self {
        Self {
            norm_tolerance: 1e-12,
            collect_statistics: true,
            ..Default::default()
        }
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set memory limit in bytes
    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = limit;
        self
    }

    pub fn with_probability_epsilon(mut self, epsilon: f64) -> Self {
        self.probability_epsilon = epsilon;
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    pub fn with_bloch_qubit(mut self, qubit: usize) -> Self {
        self.bloch_qubit = qubit;
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Effective qubit ceiling after applying the memory limit
    pub fn effective_max_qubits(&self) -> usize {
        let by_config = self.max_qubits.min(MAX_QUBITS);
        if self.memory_limit == 0 {
            return by_config;
        }

        // Each amplitude is 16 bytes (Complex<f64>)
        let max_amplitudes = self.memory_limit / 16;
        let by_memory = if max_amplitudes == 0 {
            0
        } else {
            max_amplitudes.ilog2() as usize
        };
        by_config.min(by_memory)
    }

    /// Exclusive upper bound for `probability_epsilon`
    ///
    /// Every nonzero outcome of an I/H/X/Z circuit on m qubits has
    /// probability 2^-k with k <= m. Half of 2^-m leaves room for rounding
    /// in the amplitudes.
    pub fn epsilon_ceiling(&self) -> f64 {
        let exponent = self.effective_max_qubits().min(MAX_QUBITS) as i32 + 1;
        2.0_f64.powi(-exponent)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(SimulatorError::InvalidConfig(format!(
                "max_qubits must be in [1, {}], got {}",
                MAX_QUBITS, self.max_qubits
            )));
        }

        if !self.probability_epsilon.is_finite() || self.probability_epsilon < 0.0 {
            return Err(SimulatorError::InvalidConfig(format!(
                "probability_epsilon must be finite and >= 0, got {}",
                self.probability_epsilon
            )));
        }

        let ceiling = self.epsilon_ceiling();
        if self.probability_epsilon >= ceiling {
            return Err(SimulatorError::InvalidConfig(format!(
                "probability_epsilon {} would hide outcomes of a {}-qubit circuit; must be below {:e}",
                self.probability_epsilon,
                self.effective_max_qubits(),
                ceiling
            )));
        }

        if !self.norm_tolerance.is_finite() || self.norm_tolerance < 0.0 {
            return Err(SimulatorError::InvalidConfig(format!(
                "norm_tolerance must be finite and >= 0, got {}",
                self.norm_tolerance
            )));
        }

        Ok(())
    }
}
