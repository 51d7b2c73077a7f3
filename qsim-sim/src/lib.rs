//! Circuit engine and simulator facade for qsim
//!
//! This crate runs circuit programs over a register of independent per-qubit
//! states and reports the joint probability distribution of the result.
//!
//! # Features
//!
//! - **Circuit engine**: operations applied in program order as a left fold,
//!   failing fast on the first error
//! - **Observers**: statistics and per-step traces hook into the same fold
//! - **Program hand-off**: runs serde-deserialized [`qsim_core::Program`]s
//! - **Flexible configuration**: qubit limits and optional collectors
//!
//! # Example
//!
//! ```
//! use qsim_core::Operation;
//! use qsim_sim::{Simulator, SimulatorConfig};
//!
//! let simulator = Simulator::new(SimulatorConfig::debug()).unwrap();
//!
//! let ops = [Operation::single(0, "H"), Operation::cnot(0, 1)];
//! let result = simulator.run(&["0", "1"], &ops).unwrap();
//!
//! assert_eq!(result.num_qubits(), 2);
//! assert_eq!(result.trace.as_ref().unwrap().len(), 2);
//! println!("{}", result);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod result;
pub mod simulator;
pub mod statistics;
pub mod trace;

pub use config::SimulatorConfig;
pub use engine::{CircuitEngine, StepEvent, StepObserver};
pub use error::{Result, SimulatorError};
pub use result::SimulationResult;
pub use simulator::Simulator;
pub use statistics::ExecutionStatistics;
pub use trace::{ExecutionTrace, TraceStep};
