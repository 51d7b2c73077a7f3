//! Bloch-sphere coordinates for single-qubit states
//!
//! A pure single-qubit state |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩ is a point
//! on the unit sphere. Renderers take these coordinates; nothing here draws.
//!
//! # Example
//!
//! ```
//! use qsim_core::BlochVector;
//! use num_complex::Complex64;
//!
//! let plus = [
//!     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
//!     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
//! ];
//! let bloch = BlochVector::from_amplitudes(&plus);
//! assert!((bloch.x - 1.0).abs() < 1e-10);
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A point on the Bloch sphere in Cartesian coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    /// +Z is |0⟩, -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Bloch vector of the amplitudes [α, β]
    ///
    /// Components are the Pauli expectation values:
    /// x = 2Re(α*β), y = 2Im(α*β), z = |α|² - |β|².
    /// Amplitudes that are not unit norm give a vector off the sphere.
    pub fn from_amplitudes(amplitudes: &[Complex64; 2]) -> Self {
        let [alpha, beta] = *amplitudes;
        let coherence = alpha.conj() * beta;

        Self {
            x: 2.0 * coherence.re,
            y: 2.0 * coherence.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Spherical coordinates of this vector
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether the vector lies on the sphere surface
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_basis_states() {
        let zero = BlochVector::from_amplitudes(&[c(1.0, 0.0), c(0.0, 0.0)]);
        assert_relative_eq!(zero.z, 1.0, epsilon = 1e-12);

        let one = BlochVector::from_amplitudes(&[c(0.0, 0.0), c(1.0, 0.0)]);
        assert_relative_eq!(one.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(one.to_angles().theta, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_minus_state() {
        let minus =
            BlochVector::from_amplitudes(&[c(FRAC_1_SQRT_2, 0.0), c(-FRAC_1_SQRT_2, 0.0)]);
        assert_relative_eq!(minus.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(minus.to_angles().phi, PI, epsilon = 1e-12);
        assert!(minus.is_pure(1e-10));
    }

    #[test]
    fn test_phase_state() {
        // S|+⟩ = (|0⟩ + i|1⟩)/√2 points along +y
        let state = BlochVector::from_amplitudes(&[c(FRAC_1_SQRT_2, 0.0), c(0.0, FRAC_1_SQRT_2)]);
        assert_relative_eq!(state.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(state.to_angles().phi, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sub_normalized_is_not_pure() {
        let half = BlochVector::from_amplitudes(&[c(0.0, 0.0), c(FRAC_1_SQRT_2, 0.0)]);
        assert!(!half.is_pure(1e-6));
        assert_relative_eq!(half.magnitude(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector_angles() {
        let angles = BlochVector::new(0.0, 0.0, 0.0).to_angles();
        assert_eq!(angles, BlochAngles { theta: 0.0, phi: 0.0 });
    }
}
