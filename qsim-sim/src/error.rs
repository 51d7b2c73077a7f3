//! Error types for the simulator

use qsim_core::QuantumError;
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur during simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulatorError {
    /// Failure inside the simulation core (labels, gates, operations, indices)
    #[error(transparent)]
    Quantum(#[from] QuantumError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Register too wide for the configured joint-vector limit
    #[error("Too many qubits: program has {num_qubits}, max supported is {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },
}

impl SimulatorError {
    /// The core error, if this is one
    pub fn as_quantum(&self) -> Option<&QuantumError> {
        match self {
            SimulatorError::Quantum(err) => Some(err),
            _ => None,
        }
    }
}
