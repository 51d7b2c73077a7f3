//! Gate library for qsim
//!
//! The library is a fixed table of five single-qubit unitaries
//! (H, X, Z, S, T) plus the 4×4 CNOT permutation. All matrices are `const`
//! data; lookup by name never allocates and has no side effects.
//!
//! # Example
//!
//! ```
//! use qsim_gates::{lookup, matrices, StandardGate};
//!
//! let h = lookup("H").unwrap();
//! assert_eq!(h, &matrices::HADAMARD);
//!
//! let s = StandardGate::S.matrix();
//! assert_eq!(s[1][1], num_complex::Complex64::new(0.0, 1.0));
//! ```

pub mod matrices;
pub mod standard;

pub use matrices::{Matrix2, Matrix4};
pub use standard::{lookup, StandardGate};
