//! Error types for qsim

use thiserror::Error;

/// Errors that can occur while building or simulating a circuit
///
/// Every variant is fatal for the call that produced it: a run either
/// completes or stops at the first error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// Initial-state label outside {"0", "1", "+", "-"}
    #[error("Unknown initial state '{0}': use '0', '1', '+', or '-'")]
    UnknownInitialState(String),

    /// Single-qubit gate name outside {"H", "X", "Z", "S", "T"}
    #[error("Unknown gate '{0}': use \"H\", \"X\", \"Z\", \"S\", or \"T\"")]
    UnknownGate(String),

    /// Operation that is neither a single-qubit gate nor a CNOT
    #[error("Unknown or unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Two-qubit operation requested on a register with fewer than two qubits
    #[error("CNOT requires at least 2 qubits, register has {0}")]
    InsufficientQubits(usize),

    /// Qubit index beyond the register bounds
    #[error("Qubit index {index} out of range: register has {num_qubits} qubits")]
    IndexOutOfRange { index: usize, num_qubits: usize },

    /// Probability extraction over zero qubits
    #[error("Cannot extract probabilities from an empty qubit collection")]
    EmptyQubitCollection,

    /// Program could not be encoded or decoded
    #[error("Program serialization failed: {0}")]
    Serialization(String),
}

impl QuantumError {
    /// Create an index-out-of-range error
    pub fn index_out_of_range(index: usize, num_qubits: usize) -> Self {
        Self::IndexOutOfRange { index, num_qubits }
    }

    /// Create an unknown-gate error
    pub fn unknown_gate(name: impl Into<String>) -> Self {
        Self::UnknownGate(name.into())
    }

    /// Create an unknown-initial-state error
    pub fn unknown_initial_state(label: impl Into<String>) -> Self {
        Self::UnknownInitialState(label.into())
    }

    /// Create an unsupported-operation error
    pub fn unsupported(description: impl Into<String>) -> Self {
        Self::UnsupportedOperation(description.into())
    }
}

impl From<serde_json::Error> for QuantumError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
