//! Joint measurement probabilities of a register
//!
//! The joint vector is the Kronecker product of every qubit's vector in index
//! order, so qubit 0 is the most significant bit of each basis index and the
//! label of index `k` is `k` in binary, zero-padded to the register width.

use crate::kron::kron_all;
use crate::QubitState;
use qsim_core::{QuantumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-padded binary label of a basis index, qubit 0 first
///
/// # Example
/// ```
/// use qsim_state::probability::basis_label;
///
/// assert_eq!(basis_label(1, 3), "001");
/// assert_eq!(basis_label(6, 3), "110");
/// ```
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Probability of every joint basis state, indexed by basis index
///
/// Entries are |amplitude|² of the joint vector and are not renormalized:
/// they sum to 1 when every input state is unit norm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    num_qubits: usize,
    probabilities: Vec<f64>,
}

impl ProbabilityDistribution {
    /// Number of qubits the distribution covers
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states (2^n)
    #[inline]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Probabilities in basis-index order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.probabilities
    }

    /// Probability of one basis index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.probabilities.get(index).copied()
    }

    /// Probability of a basis label such as "01"
    ///
    /// Returns `None` when the label has the wrong width or is not binary.
    pub fn get_label(&self, label: &str) -> Option<f64> {
        if label.len() != self.num_qubits || !label.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        let index = usize::from_str_radix(label, 2).ok()?;
        self.get(index)
    }

    /// Sum of every entry
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Whether the entries sum to 1 within `epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.total() - 1.0).abs() < epsilon
    }

    /// Most probable basis index and its probability; ties go to the lowest index
    pub fn most_likely(&self) -> Option<(usize, f64)> {
        self.probabilities
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
    }

    /// `(label, probability)` pairs in index order
    pub fn labeled(&self) -> Vec<(String, f64)> {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| (basis_label(i, self.num_qubits), p))
            .collect()
    }
}

/// Joint probability distribution of a register
///
/// The joint vector has 2^n entries and its size is not checked here;
/// `qsim_sim::Simulator` bounds n with its `max_qubits` setting before
/// extraction, so direct callers must keep registers narrow themselves.
///
/// # Errors
/// Returns [`QuantumError::EmptyQubitCollection`] for an empty register
///
/// # Example
/// ```
/// use qsim_state::{probability, QubitState};
///
/// let dist = probability::extract(&[QubitState::zero(), QubitState::one()]).unwrap();
/// assert_eq!(dist.as_slice(), &[0.0, 1.0, 0.0, 0.0]);
/// ```
pub fn extract(states: &[QubitState]) -> Result<ProbabilityDistribution> {
    if states.is_empty() {
        return Err(QuantumError::EmptyQubitCollection);
    }

    let probabilities = kron_all(states).iter().map(|a| a.norm_sqr()).collect();

    Ok(ProbabilityDistribution {
        num_qubits: states.len(),
        probabilities,
    })
}

impl fmt::Display for ProbabilityDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Probabilities of states:")?;
        for (label, p) in self.labeled() {
            writeln!(f, "|{}>: {:.4}", label, p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_qubit() {
        let dist = extract(&[QubitState::plus()]).unwrap();
        assert_eq!(dist.len(), 2);
        assert_relative_eq!(dist.as_slice()[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(dist.as_slice()[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_one() {
        let dist = extract(&[QubitState::zero(), QubitState::one()]).unwrap();
        assert_eq!(dist.as_slice(), &[0.0, 1.0, 0.0, 0.0]);
        assert_eq!(dist.get_label("01"), Some(1.0));
        assert_eq!(dist.most_likely(), Some((1, 1.0)));
    }

    #[test]
    fn test_qubit_zero_is_most_significant() {
        let dist = extract(&[QubitState::one(), QubitState::zero(), QubitState::zero()]).unwrap();
        assert_eq!(dist.get(4), Some(1.0));
        assert_eq!(dist.get_label("100"), Some(1.0));
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(extract(&[]), Err(QuantumError::EmptyQubitCollection));
    }

    #[test]
    fn test_uniform_three_qubits() {
        let dist = extract(&[QubitState::plus(), QubitState::minus(), QubitState::plus()]).unwrap();
        assert_eq!(dist.num_qubits(), 3);
        for p in dist.as_slice() {
            assert_relative_eq!(*p, 0.125, epsilon = 1e-12);
        }
        assert!(dist.is_normalized(1e-6));
        assert_eq!(dist.most_likely().map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_labels() {
        let dist = extract(&[QubitState::zero(), QubitState::zero()]).unwrap();
        let labels: Vec<String> = dist.labeled().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["00", "01", "10", "11"]);
        assert_eq!(dist.get_label("1"), None);
        assert_eq!(dist.get_label("0x"), None);
    }

    #[test]
    fn test_display_report() {
        let dist = extract(&[QubitState::one()]).unwrap();
        assert_eq!(
            dist.to_string(),
            "Probabilities of states:\n|0>: 0.0000\n|1>: 1.0000\n"
        );
    }

    #[test]
    fn test_sub_normalized_input_is_not_rescaled() {
        let half = QubitState::from_real(0.0, std::f64::consts::FRAC_1_SQRT_2);
        let dist = extract(&[half, QubitState::zero()]).unwrap();
        assert_relative_eq!(dist.total(), 0.5, epsilon = 1e-12);
        assert!(!dist.is_normalized(1e-6));
    }
}
