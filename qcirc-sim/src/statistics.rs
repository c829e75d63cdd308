//! Execution statistics tracking

use std::time::Duration;

/// Execution statistics for a simulation run
#[derive(Debug, Clone, Default)]
pub struct ExecutionStatistics {
    /// Total execution time
    pub total_time: Duration,

    /// Time spent initializing state
    pub initialization_time: Duration,

    /// Time spent applying gates
    pub gate_application_time: Duration,

    /// Time spent extracting probabilities
    pub extraction_time: Duration,

    /// Number of non-identity gates applied
    pub gates_applied: usize,

    /// Number of identity slots skipped
    pub identities_skipped: usize,

    /// Peak memory usage (state vector bytes)
    pub peak_memory_bytes: usize,

    /// Norm of the final state
    pub final_norm: f64,
}

impl ExecutionStatistics {
    /// Create a new statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the gate execution rate (gates per second)
    pub fn gates_per_second(&self) -> f64 {
        let secs = self.gate_application_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.gates_applied as f64 / secs
        }
    }

    /// Share of gate slots that were identities
    pub fn identity_ratio(&self) -> f64 {
        let slots = self.gates_applied + self.identities_skipped;
        if slots == 0 {
            0.0
        } else {
            self.identities_skipped as f64 / slots as f64
        }
    }

    /// Get peak memory usage in MB
    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_memory_bytes as f64 / 1_000_000.0
    }
}

impl std::fmt::Display for ExecutionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution Statistics:")?;
        writeln!(f, "  Total time: {:?}", self.total_time)?;
        writeln!(f, "    Initialization: {:?}", self.initialization_time)?;
        writeln!(f, "    Gate application: {:?}", self.gate_application_time)?;
        writeln!(f, "    Extraction: {:?}", self.extraction_time)?;

        writeln!(f, "\n  Gates:")?;
        writeln!(f, "    Applied: {}", self.gates_applied)?;
        writeln!(
            f,
            "    Identities skipped: {} ({:.1}%)",
            self.identities_skipped,
            self.identity_ratio() * 100.0
        )?;
        writeln!(f, "    Execution rate: {:.0} gates/sec", self.gates_per_second())?;

        writeln!(f, "\n  Memory:")?;
        writeln!(f, "    Peak usage: {:.2} MB", self.peak_memory_mb())?;

        writeln!(f, "\n  State:")?;
        writeln!(f, "    Final norm: {:.12}", self.final_norm)?;

        Ok(())
    }
}
