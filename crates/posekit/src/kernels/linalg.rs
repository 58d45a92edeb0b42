//! Fixed-size matrix helpers shared by the conversion kernels.

use crate::scalar::Real;

/// The 3x3 identity matrix.
#[inline]
pub fn identity3<T: Real>() -> [[T; 3]; 3] {
    let (o, z) = (T::one(), T::zero());
    [[o, z, z], [z, o, z], [z, z, o]]
}

/// Multiply two 3x3 matrices.
#[inline]
pub fn matmul33<T: Real>(a: &[[T; 3]; 3], b: &[[T; 3]; 3]) -> [[T; 3]; 3] {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j])
    })
}

/// Transpose a 3x3 matrix.
#[inline]
pub fn transpose33<T: Real>(a: &[[T; 3]; 3]) -> [[T; 3]; 3] {
    std::array::from_fn(|i| std::array::from_fn(|j| a[j][i]))
}

/// Multiply a 3x3 matrix by a 3-vector.
#[inline]
pub fn matvec33<T: Real>(a: &[[T; 3]; 3], v: &[T; 3]) -> [T; 3] {
    std::array::from_fn(|i| a[i][0] * v[0] + a[i][1] * v[1] + a[i][2] * v[2])
}

/// Multiply a 3x4 matrix by a 4-vector.
#[inline]
pub fn matvec34<T: Real>(a: &[[T; 4]; 3], v: &[T; 4]) -> [T; 3] {
    std::array::from_fn(|i| a[i][0] * v[0] + a[i][1] * v[1] + a[i][2] * v[2] + a[i][3] * v[3])
}

/// Euclidean norm of a 3-vector.
#[inline]
pub fn norm3<T: Real>(v: &[T; 3]) -> T {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Dot product of two 3-vectors.
#[inline]
pub fn dot3<T: Real>(a: &[T; 3], b: &[T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Scale a 3-vector.
#[inline]
pub fn scale3<T: Real>(v: &[T; 3], s: T) -> [T; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// The skew-symmetric matrix `[v]ₓ` such that `[v]ₓ · w = v × w`.
#[inline]
pub fn skew<T: Real>(v: &[T; 3]) -> [[T; 3]; 3] {
    let z = T::zero();
    [[z, -v[2], v[1]], [v[2], z, -v[0]], [-v[1], v[0], z]]
}

/// Twice the axial vector of the skew-symmetric part of `m`, i.e. `vee(m - mᵀ)`.
#[inline]
pub fn vee_antisymmetric<T: Real>(m: &[[T; 3]; 3]) -> [T; 3] {
    [m[2][1] - m[1][2], m[0][2] - m[2][0], m[1][0] - m[0][1]]
}
