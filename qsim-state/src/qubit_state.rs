//! Single-qubit state vectors

use crate::applier;
use num_complex::Complex64;
use qsim_core::{BlochVector, QuantumError, Result};
use qsim_gates::matrices::INV_SQRT2;
use qsim_gates::Matrix2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when matching a state against a named label
const LABEL_TOLERANCE: f64 = 1e-10;

/// Amplitudes (a₀, a₁) of |0⟩ and |1⟩ for one qubit
///
/// States built from a label or by applying gates to such a state are unit
/// norm. States split out of a CNOT may not be (see [`crate::composer`]).
///
/// # Example
///
/// ```
/// use qsim_state::QubitState;
///
/// let plus = QubitState::from_label("+").unwrap();
/// assert!(plus.is_normalized(1e-12));
/// assert_eq!(plus.ket_label(), Some("|+>"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitState {
    amplitudes: [Complex64; 2],
}

impl QubitState {
    /// Named initial states with their labels
    const NAMED: [(&'static str, [f64; 2]); 4] = [
        ("0", [1.0, 0.0]),
        ("1", [0.0, 1.0]),
        ("+", [INV_SQRT2, INV_SQRT2]),
        ("-", [INV_SQRT2, -INV_SQRT2]),
    ];

    /// Create a state from raw amplitudes
    ///
    /// No normalization is applied.
    pub const fn new(a0: Complex64, a1: Complex64) -> Self {
        Self {
            amplitudes: [a0, a1],
        }
    }

    /// Create a state with real amplitudes
    pub const fn from_real(a0: f64, a1: f64) -> Self {
        Self::new(Complex64::new(a0, 0.0), Complex64::new(a1, 0.0))
    }

    /// |0⟩
    pub const fn zero() -> Self {
        Self::from_real(1.0, 0.0)
    }

    /// |1⟩
    pub const fn one() -> Self {
        Self::from_real(0.0, 1.0)
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub const fn plus() -> Self {
        Self::from_real(INV_SQRT2, INV_SQRT2)
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub const fn minus() -> Self {
        Self::from_real(INV_SQRT2, -INV_SQRT2)
    }

    /// Build a state from its symbolic label
    ///
    /// "0" → (1, 0), "1" → (0, 1), "+" → (1/√2, 1/√2), "-" → (1/√2, −1/√2).
    ///
    /// # Errors
    /// Returns [`QuantumError::UnknownInitialState`] for any other label
    pub fn from_label(label: &str) -> Result<Self> {
        Self::NAMED
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, [a0, a1])| Self::from_real(*a0, *a1))
            .ok_or_else(|| QuantumError::unknown_initial_state(label))
    }

    /// Build one state per label, failing on the first invalid label
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Self>> {
        labels.iter().map(|l| Self::from_label(l.as_ref())).collect()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64; 2] {
        &self.amplitudes
    }

    /// Amplitude of |0⟩
    #[inline]
    pub fn a0(&self) -> Complex64 {
        self.amplitudes[0]
    }

    /// Amplitude of |1⟩
    #[inline]
    pub fn a1(&self) -> Complex64 {
        self.amplitudes[1]
    }

    /// |a₀|² + |a₁|²
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// The L2 norm of the amplitude pair
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Check if the state is normalized (norm ≈ 1)
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() < epsilon
    }

    /// Measurement probabilities [P(0), P(1)]
    pub fn probabilities(&self) -> [f64; 2] {
        [self.amplitudes[0].norm_sqr(), self.amplitudes[1].norm_sqr()]
    }

    /// Apply a gate matrix, returning the new state
    #[inline]
    pub fn apply(&self, gate: &Matrix2) -> Self {
        applier::apply(self, gate)
    }

    /// Apply a gate from the library by name
    pub fn apply_gate(&self, name: &str) -> Result<Self> {
        applier::apply_named(self, name)
    }

    /// Ket notation of a named state, if this is one
    ///
    /// Returns `None` for anything other than |0>, |1>, |+> or |->.
    pub fn ket_label(&self) -> Option<&'static str> {
        const KETS: [&str; 4] = ["|0>", "|1>", "|+>", "|->"];

        Self::NAMED
            .iter()
            .zip(KETS)
            .find(|((_, [a0, a1]), _)| {
                (self.amplitudes[0] - Complex64::new(*a0, 0.0)).norm() < LABEL_TOLERANCE
                    && (self.amplitudes[1] - Complex64::new(*a1, 0.0)).norm() < LABEL_TOLERANCE
            })
            .map(|(_, ket)| ket)
    }

    /// Bloch-sphere coordinates of this state
    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::from_amplitudes(&self.amplitudes)
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[Complex64; 2]> for QubitState {
    fn from(amplitudes: [Complex64; 2]) -> Self {
        Self { amplitudes }
    }
}

impl From<QubitState> for [Complex64; 2] {
    fn from(state: QubitState) -> Self {
        state.amplitudes
    }
}

impl FromStr for QubitState {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a0, a1] = self.amplitudes;
        write!(
            f,
            "[{:.4}{:+.4}i, {:.4}{:+.4}i]",
            a0.re, a0.im, a1.re, a1.im
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_from_label_basis() {
        assert_eq!(QubitState::from_label("0").unwrap(), QubitState::from_real(1.0, 0.0));
        assert_eq!(QubitState::from_label("1").unwrap(), QubitState::from_real(0.0, 1.0));
    }

    #[test]
    fn test_from_label_superpositions() {
        let plus = QubitState::from_label("+").unwrap();
        assert_relative_eq!(plus.a0().re, FRAC_1_SQRT_2, epsilon = 1e-8);
        assert_relative_eq!(plus.a1().re, FRAC_1_SQRT_2, epsilon = 1e-8);

        let minus = QubitState::from_label("-").unwrap();
        assert_relative_eq!(minus.a0().re, FRAC_1_SQRT_2, epsilon = 1e-8);
        assert_relative_eq!(minus.a1().re, -FRAC_1_SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_from_label_invalid() {
        assert_eq!(
            QubitState::from_label("invalid"),
            Err(QuantumError::UnknownInitialState("invalid".to_string()))
        );
        assert!(QubitState::from_label(" 0").is_err());
        assert!("".parse::<QubitState>().is_err());
    }

    #[test]
    fn test_from_labels_stops_at_first_error() {
        let err = QubitState::from_labels(&["0", "x", "y"]).unwrap_err();
        assert_eq!(err, QuantumError::UnknownInitialState("x".to_string()));
    }

    #[test]
    fn test_named_states_are_normalized() {
        for label in ["0", "1", "+", "-"] {
            assert!(QubitState::from_label(label).unwrap().is_normalized(1e-12));
        }
    }

    #[test]
    fn test_ket_labels() {
        assert_eq!(QubitState::zero().ket_label(), Some("|0>"));
        assert_eq!(QubitState::one().ket_label(), Some("|1>"));
        assert_eq!(QubitState::plus().ket_label(), Some("|+>"));
        assert_eq!(QubitState::minus().ket_label(), Some("|->"));
        assert_eq!(QubitState::from_real(0.6, 0.8).ket_label(), None);
        assert_eq!(
            QubitState::new(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)).ket_label(),
            Some("|0>")
        );
    }

    #[test]
    fn test_probabilities() {
        let state = QubitState::from_real(0.6, 0.8);
        let [p0, p1] = state.probabilities();
        assert_relative_eq!(p0, 0.36, epsilon = 1e-12);
        assert_relative_eq!(p1, 0.64, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(QubitState::one().to_string(), "[0.0000+0.0000i, 1.0000+0.0000i]");
    }

    #[test]
    fn test_serde_as_amplitude_pair() {
        let json = serde_json::to_string(&QubitState::one()).unwrap();
        assert_eq!(json, "[[0.0,0.0],[1.0,0.0]]");
        let back: QubitState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, QubitState::one());
    }
}
