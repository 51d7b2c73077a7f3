//! Tensor (Kronecker) products of amplitude vectors
//!
//! Ordering follows the standard convention: for `kron(a, b)` the entry at
//! `i * b.len() + j` is `a[i] * b[j]`, so the left operand supplies the most
//! significant bits of the joint index.

use crate::QubitState;
use num_complex::Complex64;

/// Kronecker product of two vectors of any length
pub fn kron(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for x in a {
        out.extend(b.iter().map(|y| x * y));
    }
    out
}

/// Joint 4-amplitude vector of two qubits: `j[2p + q] = first[p] · second[q]`
#[inline]
pub fn kron_pair(first: &QubitState, second: &QubitState) -> [Complex64; 4] {
    let [a0, a1] = *first.amplitudes();
    let [b0, b1] = *second.amplitudes();
    [a0 * b0, a0 * b1, a1 * b0, a1 * b1]
}

/// Joint vector of a whole register, qubit 0 most significant
///
/// Returns an empty vector for an empty register.
pub fn kron_all(states: &[QubitState]) -> Vec<Complex64> {
    let mut iter = states.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    iter.fold(first.amplitudes().to_vec(), |joint, state| {
        kron(&joint, state.amplitudes())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn test_kron_ordering() {
        let out = kron(&[c(1.0), c(2.0)], &[c(3.0), c(5.0)]);
        assert_eq!(out, vec![c(3.0), c(5.0), c(6.0), c(10.0)]);
    }

    #[test]
    fn test_kron_pair_matches_kron() {
        let a = QubitState::from_real(0.6, 0.8);
        let b = QubitState::one();
        assert_eq!(kron_pair(&a, &b).to_vec(), kron(a.amplitudes(), b.amplitudes()));
    }

    #[test]
    fn test_kron_all_zero_one() {
        let joint = kron_all(&[QubitState::zero(), QubitState::one()]);
        assert_eq!(joint, vec![c(0.0), c(1.0), c(0.0), c(0.0)]);
    }

    #[test]
    fn test_kron_all_three_qubits() {
        // |110⟩ has index 6
        let joint = kron_all(&[QubitState::one(), QubitState::one(), QubitState::zero()]);
        assert_eq!(joint.len(), 8);
        for (i, amp) in joint.iter().enumerate() {
            let expected = if i == 6 { c(1.0) } else { c(0.0) };
            assert_eq!(*amp, expected);
        }
    }

    #[test]
    fn test_kron_all_empty() {
        assert!(kron_all(&[]).is_empty());
    }
}
