//! Simulation result types

use qsim_core::BlochVector;
use qsim_state::{ProbabilityDistribution, QubitState};
use std::fmt;

use crate::statistics::ExecutionStatistics;
use crate::trace::ExecutionTrace;

/// Result of a circuit simulation
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Final per-qubit states, in qubit order
    pub states: Vec<QubitState>,

    /// Joint distribution over the 2^n basis states
    pub probabilities: ProbabilityDistribution,

    /// Execution statistics (if statistics collection was enabled)
    pub statistics: Option<ExecutionStatistics>,

    /// Per-operation snapshots (if trace recording was enabled)
    pub trace: Option<ExecutionTrace>,
}

impl SimulationResult {
    /// Create a new simulation result
    pub fn new(states: Vec<QubitState>, probabilities: ProbabilityDistribution) -> Self {
        Self {
            states,
            probabilities,
            statistics: None,
            trace: None,
        }
    }

    /// Add execution statistics to the result
    pub fn with_statistics(mut self, stats: ExecutionStatistics) -> Self {
        self.statistics = Some(stats);
        self
    }

    /// Add an execution trace to the result
    pub fn with_trace(mut self, trace: ExecutionTrace) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Get the number of qubits in the final register
    pub fn num_qubits(&self) -> usize {
        self.states.len()
    }

    /// Named ket of each final state, `None` where it matches none
    pub fn ket_labels(&self) -> Vec<Option<&'static str>> {
        self.states.iter().map(QubitState::ket_label).collect()
    }

    /// Bloch vector of each final state
    pub fn bloch_vectors(&self) -> Vec<BlochVector> {
        self.states.iter().map(QubitState::bloch_vector).collect()
    }

    /// Probability of a basis state given as a bit string
    pub fn probability(&self, label: &str) -> Option<f64> {
        self.probabilities.get_label(label)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final state after applying all gates:")?;
        for state in &self.states {
            match state.ket_label() {
                Some(label) => writeln!(f, "{}", label)?,
                None => writeln!(f, "Unknown state: {}", state)?,
            }
        }
        write!(f, "{}", self.probabilities)
    }
}
