//! Gate matrices as compile-time constants
//!
//! Every matrix here is row-major: `m[row][col]`.

use num_complex::Complex64;

/// 2×2 complex matrix acting on one qubit
pub type Matrix2 = [[Complex64; 2]; 2];

/// 4×4 complex matrix acting on a pair of qubits
pub type Matrix4 = [[Complex64; 4]; 4];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// 1/√2 as `1 / sqrt(2)` (0.7071067811865475)
pub const INV_SQRT2: f64 = 1.0 / std::f64::consts::SQRT_2;

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// S gate matrix
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: Matrix2 = [[ONE, ZERO], [ZERO, I]];

/// T gate matrix
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: Matrix2 = [
    [ONE, ZERO],
    [ZERO, E_I_PI_4],
];

/// e^(iπ/4) as (cos π/4, sin π/4) in f64
const E_I_PI_4: Complex64 = Complex64::new(0.7071067811865476, 0.7071067811865475);

/// CNOT permutation on the joint vector kron(control, target)
/// CNOT = [[1, 0, 0, 0],
///         [0, 1, 0, 0],
///         [0, 0, 0, 1],
///         [0, 0, 1, 0]]
pub const CNOT: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// Multiply a 2×2 matrix by a 2-vector
#[inline]
pub fn mul_vec2(m: &Matrix2, v: &[Complex64; 2]) -> [Complex64; 2] {
    [
        m[0][0] * v[0] + m[0][1] * v[1],
        m[1][0] * v[0] + m[1][1] * v[1],
    ]
}

/// Multiply a 4×4 matrix by a 4-vector
#[inline]
pub fn mul_vec4(m: &Matrix4, v: &[Complex64; 4]) -> [Complex64; 4] {
    let mut out = [ZERO; 4];
    for (row, slot) in m.iter().zip(out.iter_mut()) {
        *slot = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
    }
    out
}

/// Conjugate transpose of a 2×2 matrix
pub fn adjoint2(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Product of two 2×2 matrices
pub fn mul2(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut result = [[ZERO; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}
