//! The fixed single-qubit gate set and its name lookup

use crate::matrices::{self, Matrix2};
use qsim_core::{QuantumError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the gates a single-qubit operation may name
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StandardGate {
    /// Hadamard: H|0⟩ = (|0⟩ + |1⟩)/√2
    H,
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Z (phase flip)
    Z,
    /// Phase gate, √Z
    S,
    /// π/8 gate, √S
    T,
}

impl StandardGate {
    /// Every gate in the library, in lookup-table order
    pub const ALL: [StandardGate; 5] = [
        StandardGate::H,
        StandardGate::X,
        StandardGate::Z,
        StandardGate::S,
        StandardGate::T,
    ];

    /// Resolve a gate name
    ///
    /// Names are case-sensitive.
    ///
    /// # Example
    /// ```
    /// use qsim_gates::StandardGate;
    ///
    /// assert_eq!(StandardGate::lookup("H").unwrap(), StandardGate::H);
    /// assert!(StandardGate::lookup("h").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<Self> {
        match name {
            "H" => Ok(StandardGate::H),
            "X" => Ok(StandardGate::X),
            "Z" => Ok(StandardGate::Z),
            "S" => Ok(StandardGate::S),
            "T" => Ok(StandardGate::T),
            other => Err(QuantumError::unknown_gate(other)),
        }
    }

    /// Gate name as used in programs
    pub const fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "H",
            StandardGate::X => "X",
            StandardGate::Z => "Z",
            StandardGate::S => "S",
            StandardGate::T => "T",
        }
    }

    /// The pre-computed unitary
    #[inline]
    pub const fn matrix(&self) -> &'static Matrix2 {
        match self {
            StandardGate::H => &matrices::HADAMARD,
            StandardGate::X => &matrices::PAULI_X,
            StandardGate::Z => &matrices::PAULI_Z,
            StandardGate::S => &matrices::S_GATE,
            StandardGate::T => &matrices::T_GATE,
        }
    }

    /// Whether the gate is its own inverse
    pub const fn is_hermitian(&self) -> bool {
        matches!(self, StandardGate::H | StandardGate::X | StandardGate::Z)
    }

    /// Whether the matrix is diagonal in the computational basis
    pub const fn is_diagonal(&self) -> bool {
        matches!(self, StandardGate::Z | StandardGate::S | StandardGate::T)
    }
}

/// Look up a gate matrix by name
///
/// # Errors
/// Returns [`QuantumError::UnknownGate`] for names outside {"H", "X", "Z", "S", "T"}
pub fn lookup(name: &str) -> Result<&'static Matrix2> {
    StandardGate::lookup(name).map(|gate| gate.matrix())
}

impl FromStr for StandardGate {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        StandardGate::lookup(s)
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
