//! Qubit addressing and identification

use crate::{QuantumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for a qubit
///
/// Index 0 is the most significant bit of every joint basis label.
///
/// # Example
/// ```
/// use qsim_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q1 = QubitId::new(1);
/// assert!(q0 < q1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    ///
    /// # Example
    /// ```
    /// use qsim_core::QubitId;
    /// let q = QubitId::new(5);
    /// assert_eq!(q.index(), 5);
    /// ```
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Check the index against a register of `num_qubits` qubits
    ///
    /// # Errors
    /// Returns [`QuantumError::IndexOutOfRange`] when the index is not below `num_qubits`
    #[inline]
    pub fn check_bounds(self, num_qubits: usize) -> Result<usize> {
        if self.0 < num_qubits {
            Ok(self.0)
        } else {
            Err(QuantumError::index_out_of_range(self.0, num_qubits))
        }
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}
