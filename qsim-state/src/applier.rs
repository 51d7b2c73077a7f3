//! Single-qubit gate application

use crate::QubitState;
use qsim_core::Result;
use qsim_gates::{lookup, matrices, Matrix2};

/// Apply a 2×2 gate to a state: returns `gate · state`
///
/// The input is untouched; callers overwrite their copy with the result.
///
/// # Example
/// ```
/// use qsim_gates::matrices::PAULI_X;
/// use qsim_state::{applier, QubitState};
///
/// let flipped = applier::apply(&QubitState::zero(), &PAULI_X);
/// assert_eq!(flipped, QubitState::one());
/// ```
#[inline]
pub fn apply(state: &QubitState, gate: &Matrix2) -> QubitState {
    QubitState::from(matrices::mul_vec2(gate, state.amplitudes()))
}

/// Look up `name` in the gate library and apply it
///
/// # Errors
/// Returns `UnknownGate` if the name is not in the library
pub fn apply_named(state: &QubitState, name: &str) -> Result<QubitState> {
    Ok(apply(state, lookup(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use qsim_core::QuantumError;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_hadamard_on_zero() {
        let out = apply_named(&QubitState::zero(), "H").unwrap();
        assert_relative_eq!(out.a0().re, FRAC_1_SQRT_2, epsilon = 1e-8);
        assert_relative_eq!(out.a1().re, FRAC_1_SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_x_on_zero() {
        let out = apply_named(&QubitState::zero(), "X").unwrap();
        assert_eq!(out, QubitState::one());
    }

    #[test]
    fn test_z_on_zero() {
        let out = apply_named(&QubitState::zero(), "Z").unwrap();
        assert_eq!(out, QubitState::zero());
    }

    #[test]
    fn test_z_on_plus_is_minus() {
        let out = apply_named(&QubitState::plus(), "Z").unwrap();
        assert_eq!(out.ket_label(), Some("|->"));
    }

    #[test]
    fn test_s_and_t_phases() {
        let s = apply_named(&QubitState::one(), "S").unwrap();
        assert_eq!(s.a1(), Complex64::new(0.0, 1.0));

        let t = apply_named(&QubitState::one(), "T").unwrap();
        assert_relative_eq!(t.a1().arg(), std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_hadamard_twice_restores() {
        let once = apply_named(&QubitState::zero(), "H").unwrap();
        let twice = apply_named(&once, "H").unwrap();
        assert_relative_eq!(twice.a0().re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(twice.a1().norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_gate() {
        assert_eq!(
            apply_named(&QubitState::zero(), "invalid"),
            Err(QuantumError::UnknownGate("invalid".to_string()))
        );
    }
}
