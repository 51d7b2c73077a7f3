//! Per-operation execution trace

use qsim_core::Operation;
use qsim_state::{QubitState, Split};
use std::fmt;

use crate::engine::{StepEvent, StepObserver};

/// Snapshot of the register after one operation
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    /// Position of the operation in the program
    pub index: usize,
    pub operation: Operation,
    pub states: Vec<QubitState>,
    pub split: Option<Split>,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Operation::Single { target, gate } => {
                write!(
                    f,
                    "State of qubit {} after applying the gate '{}': ",
                    target.index(),
                    gate
                )?;
                match self.states.get(target.index()) {
                    Some(state) => write!(f, "{}", state),
                    None => write!(f, "?"),
                }
            }
            Operation::Controlled {
                kind,
                control,
                target,
            } => {
                write!(
                    f,
                    "State of qubits after the {} gate (qubit {} -> qubit {}): ",
                    kind,
                    control.index(),
                    target.index()
                )?;
                write_register(f, &self.states)
            }
        }
    }
}

fn write_register(f: &mut fmt::Formatter<'_>, states: &[QubitState]) -> fmt::Result {
    write!(f, "[")?;
    for (i, state) in states.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", state)?;
    }
    write!(f, "]")
}

/// Register snapshots for a whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionTrace {
    initial: Vec<QubitState>,
    steps: Vec<TraceStep>,
}

impl ExecutionTrace {
    pub fn new(initial: Vec<QubitState>) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    pub fn initial(&self) -> &[QubitState] {
        &self.initial
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Register after the last recorded step
    pub fn final_states(&self) -> &[QubitState] {
        self.steps
            .last()
            .map(|step| step.states.as_slice())
            .unwrap_or(&self.initial)
    }

    /// Steps whose CNOT result had to be truncated
    pub fn truncated_steps(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps
            .iter()
            .filter(|step| step.split == Some(Split::Truncated))
    }
}

impl StepObserver for ExecutionTrace {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        self.steps.push(TraceStep {
            index: event.index,
            operation: event.operation.clone(),
            states: event.states.to_vec(),
            split: event.split,
        });
    }
}

impl fmt::Display for ExecutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Initial state of qubits: ")?;
        write_register(f, &self.initial)?;
        writeln!(f)?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}
