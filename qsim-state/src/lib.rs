//! Per-qubit state vectors for qsim
//!
//! Each qubit is tracked as an independent 2-amplitude vector. This crate
//! provides the operations on those vectors:
//!
//! - [`QubitState`]: construction from a label, ket labels, Bloch coordinates
//! - [`applier`]: single-qubit gate application (`gate · state`)
//! - [`kron`]: Kronecker products, qubit 0 most significant
//! - [`composer`]: CNOT on a control/target pair through a 4-amplitude joint vector
//! - [`probability`]: the joint probability distribution of a register
//!
//! # Example
//!
//! ```
//! use qsim_core::QubitId;
//! use qsim_state::{composer, probability, QubitState};
//!
//! let mut register = QubitState::from_labels(&["1", "0"]).unwrap();
//! composer::apply_cnot(&mut register, QubitId::new(0), QubitId::new(1)).unwrap();
//!
//! let dist = probability::extract(&register).unwrap();
//! assert_eq!(dist.get_label("11"), Some(1.0));
//! ```

pub mod applier;
pub mod composer;
pub mod kron;
pub mod probability;
pub mod qubit_state;

pub use composer::{apply_cnot, Split};
pub use probability::{basis_label, extract, ProbabilityDistribution};
pub use qubit_state::QubitState;
