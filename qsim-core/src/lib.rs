//! Core types for the qsim circuit simulator
//!
//! This crate provides the vocabulary shared by every other qsim crate:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Operation`]: One step of a circuit program (single-qubit gate or CNOT)
//! - [`Program`]: Initial labels plus operations, in the serde hand-off format
//! - [`BlochVector`]: Bloch-sphere coordinates of a single-qubit state
//! - [`QuantumError`]: Every failure the simulation core can report
//!
//! # Example
//! ```
//! use qsim_core::{Operation, QubitId};
//!
//! let ops = vec![
//!     Operation::single(0, "H"),
//!     Operation::cnot(0, 1),
//! ];
//! assert_eq!(ops[1].qubits(), vec![QubitId::new(0), QubitId::new(1)]);
//! ```

pub mod bloch;
pub mod error;
pub mod operation;
pub mod program;
pub mod qubit;

// Re-exports for convenience
pub use bloch::{BlochAngles, BlochVector};
pub use error::QuantumError;
pub use num_complex::Complex64;
pub use operation::{Operation, SerializedOperation, TwoQubitKind};
pub use program::{Program, PROGRAM_FORMAT_VERSION};
pub use qubit::QubitId;

/// Type alias for results in qsim
pub type Result<T> = std::result::Result<T, QuantumError>;
