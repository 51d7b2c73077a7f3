//! Circuit engine
//!
//! Runs a circuit program over an owned register of per-qubit states. The
//! operations are processed strictly in program order as a left fold; the
//! first failing operation aborts the run and no partial register is
//! returned.

use qsim_core::{Operation, Result, SerializedOperation, TwoQubitKind};
use qsim_gates::lookup;
use qsim_state::{applier, apply_cnot, QubitState, Split};
use tracing::debug;

/// One applied operation, as seen by a [`StepObserver`]
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    /// Position of the operation in the program
    pub index: usize,
    pub operation: &'a Operation,
    /// Register after the operation
    pub states: &'a [QubitState],
    /// How a CNOT result was split, `None` for single-qubit gates
    pub split: Option<Split>,
}

/// Receives every successfully applied operation during a run
pub trait StepObserver {
    fn on_step(&mut self, event: &StepEvent<'_>);
}

/// No-op observer
impl StepObserver for () {
    fn on_step(&mut self, _event: &StepEvent<'_>) {}
}

impl<O: StepObserver + ?Sized> StepObserver for &mut O {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        (**self).on_step(event)
    }
}

/// Orchestrates a circuit program over a register
///
/// # Example
///
/// ```
/// use qsim_core::Operation;
/// use qsim_sim::CircuitEngine;
///
/// let states = CircuitEngine::run(&["0", "0"], &[Operation::single(1, "X")]).unwrap();
/// assert_eq!(states[1].ket_label(), Some("|1>"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitEngine;

impl CircuitEngine {
    /// Run a program from symbolic initial labels
    ///
    /// # Errors
    /// - [`qsim_core::QuantumError::UnknownInitialState`] for a label outside {"0","1","+","-"}
    /// - [`qsim_core::QuantumError::IndexOutOfRange`] for a qubit index past the register
    /// - [`qsim_core::QuantumError::UnknownGate`] for a gate name outside the library
    /// - [`qsim_core::QuantumError::InsufficientQubits`] for a CNOT on fewer than 2 qubits
    pub fn run<S: AsRef<str>>(
        initial_labels: &[S],
        operations: &[Operation],
    ) -> Result<Vec<QubitState>> {
        let states = Self::initialize(initial_labels)?;
        Self::execute(states, operations, ())
    }

    /// Run a program whose operations are still in their untyped form
    ///
    /// Each operation is converted just before it is applied, so a malformed
    /// operation fails with [`qsim_core::QuantumError::UnsupportedOperation`] at its
    /// position in the program.
    pub fn run_serialized<S: AsRef<str>>(
        initial_labels: &[S],
        operations: &[SerializedOperation],
    ) -> Result<Vec<QubitState>> {
        let states = Self::initialize(initial_labels)?;
        Self::execute_serialized(states, operations, ())
    }

    /// Build the initial register
    pub fn initialize<S: AsRef<str>>(initial_labels: &[S]) -> Result<Vec<QubitState>> {
        QubitState::from_labels(initial_labels)
    }

    /// Fold `operations` over an existing register
    pub fn execute<O: StepObserver>(
        states: Vec<QubitState>,
        operations: &[Operation],
        mut observer: O,
    ) -> Result<Vec<QubitState>> {
        operations
            .iter()
            .enumerate()
            .try_fold(states, |states, (index, operation)| {
                Self::observed_step(states, index, operation, &mut observer)
            })
    }

    /// Like [`CircuitEngine::execute`], converting each operation first
    pub fn execute_serialized<O: StepObserver>(
        states: Vec<QubitState>,
        operations: &[SerializedOperation],
        mut observer: O,
    ) -> Result<Vec<QubitState>> {
        operations
            .iter()
            .enumerate()
            .try_fold(states, |states, (index, raw)| {
                let operation = Operation::try_from(raw)?;
                Self::observed_step(states, index, &operation, &mut observer)
            })
    }

    fn observed_step<O: StepObserver>(
        states: Vec<QubitState>,
        index: usize,
        operation: &Operation,
        observer: &mut O,
    ) -> Result<Vec<QubitState>> {
        let (states, split) = Self::step(states, operation)?;
        observer.on_step(&StepEvent {
            index,
            operation,
            states: &states,
            split,
        });
        Ok(states)
    }

    /// Apply a single operation
    pub fn step(
        mut states: Vec<QubitState>,
        operation: &Operation,
    ) -> Result<(Vec<QubitState>, Option<Split>)> {
        match operation {
            Operation::Single { target, gate } => {
                let idx = target.check_bounds(states.len())?;
                let matrix = lookup(gate)?;
                states[idx] = applier::apply(&states[idx], matrix);

                debug!(qubit = idx, gate = %gate, state = %states[idx], "applied gate");
                Ok((states, None))
            }
            Operation::Controlled {
                kind: TwoQubitKind::Cnot,
                control,
                target,
            } => {
                let split = apply_cnot(&mut states, *control, *target)?;

                debug!(
                    control = control.index(),
                    target = target.index(),
                    ?split,
                    control_state = %states[control.index()],
                    target_state = %states[target.index()],
                    "applied CNOT"
                );
                Ok((states, Some(split)))
            }
        }
    }
}
