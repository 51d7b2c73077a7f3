//! Execution statistics tracking

use std::collections::BTreeMap;
use std::time::Duration;

use qsim_state::Split;

use crate::engine::{StepEvent, StepObserver};

/// Execution statistics for a simulation run
#[derive(Debug, Clone, Default)]
pub struct ExecutionStatistics {
    /// Total execution time
    pub total_time: Duration,

    /// Time spent building the register from its labels
    pub initialization_time: Duration,

    /// Time spent applying operations
    pub gate_application_time: Duration,

    /// Time spent computing the probability distribution
    pub extraction_time: Duration,

    /// Number of single-qubit gates applied
    pub single_qubit_ops: usize,

    /// Number of CNOTs applied
    pub controlled_ops: usize,

    /// CNOTs whose result could not be factored and was truncated
    pub truncated_splits: usize,

    /// Applications per gate name
    pub gate_counts: BTreeMap<String, usize>,
}

impl ExecutionStatistics {
    /// Create a new statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Total operations applied
    pub fn operations(&self) -> usize {
        self.single_qubit_ops + self.controlled_ops
    }

    /// Get the gate execution rate (operations per second)
    pub fn gates_per_second(&self) -> f64 {
        let secs = self.gate_application_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.operations() as f64 / secs
        }
    }

    /// Fraction of CNOTs that were truncated
    pub fn truncation_ratio(&self) -> f64 {
        if self.controlled_ops == 0 {
            0.0
        } else {
            self.truncated_splits as f64 / self.controlled_ops as f64
        }
    }
}

impl StepObserver for ExecutionStatistics {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        match event.split {
            None => self.single_qubit_ops += 1,
            Some(split) => {
                self.controlled_ops += 1;
                if split == Split::Truncated {
                    self.truncated_splits += 1;
                }
            }
        }
        *self
            .gate_counts
            .entry(event.operation.gate_name().to_string())
            .or_insert(0) += 1;
    }
}

impl std::fmt::Display for ExecutionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution Statistics:")?;
        writeln!(f, "  Total time: {:?}", self.total_time)?;
        writeln!(f, "    Initialization: {:?}", self.initialization_time)?;
        writeln!(f, "    Gate application: {:?}", self.gate_application_time)?;
        writeln!(f, "    Extraction: {:?}", self.extraction_time)?;

        writeln!(f, "\n  Operations:")?;
        writeln!(f, "    Single-qubit: {}", self.single_qubit_ops)?;
        writeln!(
            f,
            "    CNOT: {} ({} truncated)",
            self.controlled_ops, self.truncated_splits
        )?;
        for (gate, count) in &self.gate_counts {
            writeln!(f, "      {}: {}", gate, count)?;
        }
        writeln!(f, "    Execution rate: {:.0} gates/sec", self.gates_per_second())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CircuitEngine;
    use qsim_core::Operation;

    #[test]
    fn test_counts_from_run() {
        let ops = [
            Operation::single(0, "H"),
            Operation::single(1, "X"),
            Operation::cnot(0, 1),
            Operation::single(0, "H"),
        ];
        let mut stats = ExecutionStatistics::new();
        let states = CircuitEngine::initialize(&["0", "0"]).unwrap();
        CircuitEngine::execute(states, &ops, &mut stats).unwrap();

        assert_eq!(stats.single_qubit_ops, 3);
        assert_eq!(stats.controlled_ops, 1);
        assert_eq!(stats.operations(), 4);
        assert_eq!(stats.gate_counts.get("H"), Some(&2));
        assert_eq!(stats.gate_counts.get("CNOT"), Some(&1));
    }

    #[test]
    fn test_gates_per_second() {
        let stats = ExecutionStatistics {
            single_qubit_ops: 600,
            controlled_ops: 400,
            gate_application_time: Duration::from_millis(100),
            ..Default::default()
        };

        assert!((stats.gates_per_second() - 10000.0).abs() < 1.0);
        assert_eq!(ExecutionStatistics::new().gates_per_second(), 0.0);
    }

    #[test]
    fn test_truncation_ratio() {
        let stats = ExecutionStatistics {
            controlled_ops: 4,
            truncated_splits: 1,
            ..Default::default()
        };
        assert!((stats.truncation_ratio() - 0.25).abs() < 1e-12);
        assert_eq!(ExecutionStatistics::new().truncation_ratio(), 0.0);
    }
}
