//! Simulator facade

use qsim_core::{Operation, Program};
use qsim_state::{extract, QubitState};
use std::time::Instant;
use tracing::info;

use crate::{
    config::SimulatorConfig,
    engine::{CircuitEngine, StepEvent, StepObserver},
    error::{Result, SimulatorError},
    result::SimulationResult,
    statistics::ExecutionStatistics,
    trace::ExecutionTrace,
};

/// Forwards steps to whichever collectors the configuration enabled
struct Recorder {
    trace: Option<ExecutionTrace>,
    statistics: Option<ExecutionStatistics>,
}

impl StepObserver for Recorder {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        if let Some(trace) = self.trace.as_mut() {
            trace.on_step(event);
        }
        if let Some(stats) = self.statistics.as_mut() {
            stats.on_step(event);
        }
    }
}

/// Per-qubit circuit simulator
///
/// Runs a program through [`CircuitEngine`], extracts the joint probability
/// distribution and, depending on the configuration, collects statistics and
/// an execution trace.
///
/// # Example
///
/// ```
/// use qsim_core::Operation;
/// use qsim_sim::{Simulator, SimulatorConfig};
///
/// let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
/// let result = simulator
///     .run(&["0", "0"], &[Operation::single(0, "X"), Operation::cnot(0, 1)])
///     .unwrap();
///
/// assert_eq!(result.probability("11"), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            config: SimulatorConfig::default(),
        }
    }
}

impl Simulator {
    /// Create a new simulator with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate().map_err(SimulatorError::InvalidConfig)?;

        Ok(Self { config })
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run a circuit program
    ///
    /// # Errors
    ///
    /// - [`SimulatorError::TooManyQubits`] if the register exceeds `max_qubits`
    /// - [`SimulatorError::Quantum`] for the first failing label or operation,
    ///   or [`qsim_core::QuantumError::EmptyQubitCollection`] for an empty register
    pub fn run<S: AsRef<str>>(
        &self,
        initial_labels: &[S],
        operations: &[Operation],
    ) -> Result<SimulationResult> {
        self.simulate(initial_labels, operations.len(), |states, recorder| {
            CircuitEngine::execute(states, operations, recorder)
        })
    }

    /// Run a deserialized [`Program`]
    ///
    /// Operations are converted as they are reached, so a malformed entry
    /// fails with [`qsim_core::QuantumError::UnsupportedOperation`].
    pub fn run_program(&self, program: &Program) -> Result<SimulationResult> {
        program.check_version()?;

        if let Some(name) = &program.name {
            info!(program = %name, "running program");
        }

        self.simulate(
            &program.initial_states,
            program.operations.len(),
            |states, recorder| {
                CircuitEngine::execute_serialized(states, &program.operations, recorder)
            },
        )
    }

    fn simulate<S, F>(
        &self,
        initial_labels: &[S],
        num_operations: usize,
        execute: F,
    ) -> Result<SimulationResult>
    where
        S: AsRef<str>,
        F: FnOnce(Vec<QubitState>, &mut Recorder) -> qsim_core::Result<Vec<QubitState>>,
    {
        let total_start = Instant::now();

        let num_qubits = initial_labels.len();
        if num_qubits > self.config.max_qubits {
            return Err(SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }

        let mut stats = self.config.collect_statistics.then(ExecutionStatistics::new);

        // 1. Initialize register
        let init_start = Instant::now();
        let states = CircuitEngine::initialize(initial_labels)?;
        if let Some(s) = stats.as_mut() {
            s.initialization_time = init_start.elapsed();
        }

        let mut recorder = Recorder {
            trace: self
                .config
                .record_trace
                .then(|| ExecutionTrace::new(states.clone())),
            statistics: stats.take(),
        };

        // 2. Apply operations
        let gate_start = Instant::now();
        let states = execute(states, &mut recorder)?;
        let gate_time = gate_start.elapsed();

        // 3. Extract probabilities
        let extract_start = Instant::now();
        let probabilities = extract(&states)?;
        let extract_time = extract_start.elapsed();

        let mut result = SimulationResult::new(states, probabilities);

        if let Some(mut s) = recorder.statistics {
            s.gate_application_time = gate_time;
            s.extraction_time = extract_time;
            s.total_time = total_start.elapsed();
            result = result.with_statistics(s);
        }
        if let Some(trace) = recorder.trace {
            result = result.with_trace(trace);
        }

        info!(
            num_qubits,
            operations = num_operations,
            total_probability = result.probabilities.total(),
            elapsed_us = total_start.elapsed().as_micros() as u64,
            "simulation complete"
        );

        Ok(result)
    }
}
