//! Per-element orientation conversion formulas.
//!
//! PRECONDITION: quaternions and axis-angle axes are unit norm. They are not renormalized.

use crate::convention::{Axis, EulerConvention};
use crate::kernels::linalg::{
    dot3, identity3, matmul33, norm3, scale3, skew, vee_antisymmetric,
};
use crate::scalar::Real;
use crate::types::{AxisAngle, EulerAngles, Quaternion, RotMat, RotVec};

/// Compute the rotation matrix from a unit axis and an angle.
///
/// # Arguments
///
/// * `axis_angle` - The unit axis and the angle `[e_x, e_y, e_z, θ]`.
///
/// # Returns
///
/// The rotation matrix.
///
/// PRECONDITION: the axis is a unit vector. A zero angle yields the identity for any axis.
pub fn axis_angle_to_rot_mat<T: Real>(axis_angle: &AxisAngle<T>) -> RotMat<T> {
    let [x, y, z, angle] = *axis_angle;

    let c = angle.cos();
    let s = angle.sin();
    let t = T::one() - c;

    let m00 = c + x * x * t;
    let m11 = c + y * y * t;
    let m22 = c + z * z * t;

    let tmp1 = x * y * t;
    let tmp2 = z * s;

    let m10 = tmp1 + tmp2;
    let m01 = tmp1 - tmp2;

    let tmp3 = x * z * t;
    let tmp4 = y * s;

    let m20 = tmp3 - tmp4;
    let m02 = tmp3 + tmp4;

    let tmp5 = y * z * t;
    let tmp6 = x * s;

    let m12 = tmp5 - tmp6;
    let m21 = tmp5 + tmp6;

    [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]]
}

/// Rodrigues' rotation formula.
///
/// Below [`Real::tolerance`] the first-order expansion `I + [v]ₓ` is returned, which avoids
/// dividing by the vanishing angle.
pub fn rot_vec_to_rot_mat<T: Real>(rot_vec: &RotVec<T>) -> RotMat<T> {
    let angle = norm3(rot_vec);
    if angle < T::tolerance() {
        let mut mat = identity3();
        let k = skew(rot_vec);
        for (row, k_row) in mat.iter_mut().zip(k.iter()) {
            for (m, &kv) in row.iter_mut().zip(k_row.iter()) {
                *m = *m + kv;
            }
        }
        return mat;
    }
    let axis = scale3(rot_vec, T::one() / angle);
    axis_angle_to_rot_mat(&[axis[0], axis[1], axis[2], angle])
}

/// Recover the rotation vector of a rotation matrix.
///
/// The angle is `atan2(|w| / 2, (tr R - 1) / 2)` with `w = vee(R - Rᵀ)`, which stays accurate
/// for small angles where `acos` of the trace cancels. The axis comes from `w`. Two degenerate
/// regions are handled explicitly:
///
/// * angle ≈ 0: the first-order result `vee(R - Rᵀ) / 2`, exactly zero for the identity.
/// * angle ≈ π: the skew-symmetric part vanishes, so the axis is read from the symmetric part
///   and its sign is aligned with whatever skew-symmetric residue remains.
pub fn rot_mat_to_rot_vec<T: Real>(rot_mat: &RotMat<T>) -> RotVec<T> {
    let trace = rot_mat[0][0] + rot_mat[1][1] + rot_mat[2][2];
    let cos_angle = ((trace - T::one()) * T::half()).clamp_unit();
    let w = vee_antisymmetric(rot_mat);
    let w_norm = norm3(&w);
    let angle = (w_norm * T::half()).atan2(cos_angle);

    if angle < T::tolerance() {
        return scale3(&w, T::half());
    }

    if T::one() + cos_angle < T::tolerance() {
        let axis = axis_from_symmetric_part(rot_mat, cos_angle, &w);
        return scale3(&axis, angle);
    }

    // |w| = 2 sin(angle) > 0 away from 0 and π
    scale3(&w, angle / w_norm)
}

// Diagonal entries are c + k_i² (1 - c) and symmetric off-diagonal pairs sum to
// 2 k_i k_j (1 - c), for any angle.
fn axis_from_symmetric_part<T: Real>(rot_mat: &RotMat<T>, cos_angle: T, w: &[T; 3]) -> [T; 3] {
    let one_minus_cos = T::one() - cos_angle;
    let diag = [rot_mat[0][0], rot_mat[1][1], rot_mat[2][2]];
    let m = if diag[0] >= diag[1] && diag[0] >= diag[2] {
        0
    } else if diag[1] >= diag[2] {
        1
    } else {
        2
    };

    let k_m = ((diag[m] - cos_angle) / one_minus_cos).max(T::zero()).sqrt();
    let denom = T::two() * k_m * one_minus_cos;
    let mut axis = [T::zero(); 3];
    for (n, a) in axis.iter_mut().enumerate() {
        *a = if n == m {
            k_m
        } else {
            (rot_mat[m][n] + rot_mat[n][m]) / denom
        };
    }

    if dot3(&axis, w) < T::zero() {
        axis = scale3(&axis, -T::one());
    }
    axis
}

/// The rotation matrix of a unit quaternion `[q_i, q_j, q_k, q_r]`.
pub fn quaternion_to_rot_mat<T: Real>(quaternion: &Quaternion<T>) -> RotMat<T> {
    let [x, y, z, w] = *quaternion;
    let (one, two) = (T::one(), T::two());
    [
        [
            one - two * (y * y + z * z),
            two * (x * y - z * w),
            two * (x * z + y * w),
        ],
        [
            two * (x * y + z * w),
            one - two * (x * x + z * z),
            two * (y * z - x * w),
        ],
        [
            two * (x * z - y * w),
            two * (y * z + x * w),
            one - two * (x * x + y * y),
        ],
    ]
}

/// The unit quaternion of a rotation matrix.
///
/// Uses the trace when it is positive and otherwise the largest diagonal entry, so the square
/// root argument stays well away from zero.
pub fn rot_mat_to_quaternion<T: Real>(rot_mat: &RotMat<T>) -> Quaternion<T> {
    let r = rot_mat;
    let (one, two, quarter) = (T::one(), T::two(), T::half() * T::half());
    let trace = r[0][0] + r[1][1] + r[2][2];

    if trace > T::zero() {
        let s = (trace + one).sqrt() * two;
        [
            (r[2][1] - r[1][2]) / s,
            (r[0][2] - r[2][0]) / s,
            (r[1][0] - r[0][1]) / s,
            quarter * s,
        ]
    } else if r[0][0] > r[1][1] && r[0][0] > r[2][2] {
        let s = (one + r[0][0] - r[1][1] - r[2][2]).sqrt() * two;
        [
            quarter * s,
            (r[0][1] + r[1][0]) / s,
            (r[0][2] + r[2][0]) / s,
            (r[2][1] - r[1][2]) / s,
        ]
    } else if r[1][1] > r[2][2] {
        let s = (one + r[1][1] - r[0][0] - r[2][2]).sqrt() * two;
        [
            (r[0][1] + r[1][0]) / s,
            quarter * s,
            (r[1][2] + r[2][1]) / s,
            (r[0][2] - r[2][0]) / s,
        ]
    } else {
        let s = (one + r[2][2] - r[0][0] - r[1][1]).sqrt() * two;
        [
            (r[0][2] + r[2][0]) / s,
            (r[1][2] + r[2][1]) / s,
            quarter * s,
            (r[1][0] - r[0][1]) / s,
        ]
    }
}

/// The rotation matrix about a single coordinate axis.
pub fn axis_rot_mat<T: Real>(axis: Axis, angle: T) -> RotMat<T> {
    let (s, c) = angle.sin_cos();
    let (o, z) = (T::one(), T::zero());
    match axis {
        Axis::X => [[o, z, z], [z, c, -s], [z, s, c]],
        Axis::Y => [[c, z, s], [z, o, z], [-s, z, c]],
        Axis::Z => [[c, -s, z], [s, c, z], [z, z, o]],
    }
}

/// The unit quaternion of a rotation about a single coordinate axis.
pub fn axis_quaternion<T: Real>(axis: Axis, angle: T) -> Quaternion<T> {
    let (s, c) = (angle * T::half()).sin_cos();
    let mut quaternion = [T::zero(), T::zero(), T::zero(), c];
    quaternion[axis.index()] = s;
    quaternion
}

/// Compose `R = R_a(φ_a) · R_b(φ_b) · R_c(φ_c)` for the convention `abc`.
pub fn euler_to_rot_mat<T: Real>(euler: &EulerAngles<T>, convention: EulerConvention) -> RotMat<T> {
    let [a, b, c] = convention.axes();
    matmul33(
        &matmul33(&axis_rot_mat(a, euler[0]), &axis_rot_mat(b, euler[1])),
        &axis_rot_mat(c, euler[2]),
    )
}

/// Decompose a rotation matrix into Euler angles for the given convention.
///
/// The middle angle lies in `[-π/2, π/2]`. At gimbal lock (middle angle at ±π/2) the last
/// angle is set to zero and the first one carries the whole remaining rotation.
pub fn rot_mat_to_euler<T: Real>(rot_mat: &RotMat<T>, convention: EulerConvention) -> EulerAngles<T> {
    let [i, j, k] = convention.axes().map(Axis::index);
    let sign = if convention.is_cyclic() {
        T::one()
    } else {
        -T::one()
    };
    let r = rot_mat;

    let middle = (sign * r[i][k]).clamp_unit().asin();
    let cos_middle = r[i][i].hypot(r[i][j]);

    if cos_middle > T::tolerance() {
        let first = (-sign * r[j][k]).atan2(r[k][k]);
        let last = (-sign * r[i][j]).atan2(r[i][i]);
        [first, middle, last]
    } else {
        let first = (sign * r[k][j]).atan2(r[j][j]);
        [first, middle, T::zero()]
    }
}

/// Hamilton product `p × q` of two quaternions.
///
/// Composes `p` followed by `q` expressed in the frame of `p`, matching the matrix product
/// `R(p) · R(q)`.
pub fn hamilton_product<T: Real>(p: &Quaternion<T>, q: &Quaternion<T>) -> Quaternion<T> {
    let [x1, y1, z1, w1] = *p;
    let [x2, y2, z2, w2] = *q;
    [
        w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
        w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
        w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
    ]
}

/// Compose the per-axis half-angle quaternions in convention order.
pub fn euler_to_quaternion<T: Real>(
    euler: &EulerAngles<T>,
    convention: EulerConvention,
) -> Quaternion<T> {
    let [a, b, c] = convention.axes();
    hamilton_product(
        &hamilton_product(&axis_quaternion(a, euler[0]), &axis_quaternion(b, euler[1])),
        &axis_quaternion(c, euler[2]),
    )
}

/// Euler angles of a unit quaternion.
pub fn quaternion_to_euler<T: Real>(
    quaternion: &Quaternion<T>,
    convention: EulerConvention,
) -> EulerAngles<T> {
    rot_mat_to_euler(&quaternion_to_rot_mat(quaternion), convention)
}

/// Unit axis and angle of a unit quaternion.
///
/// The angle is `2·atan2(|v|, q_r)`, equal to `2·acos(q_r)` for unit input, and lies in
/// `[0, 2π]`. The axis is `v / |v|`. When `|v|` vanishes the rotation is the identity and the
/// axis defaults to `[1, 0, 0]`.
pub fn quaternion_to_axis_angle<T: Real>(quaternion: &Quaternion<T>) -> AxisAngle<T> {
    let v = [quaternion[0], quaternion[1], quaternion[2]];
    let sin_half = norm3(&v);
    let angle = T::two() * sin_half.atan2(quaternion[3]);
    if sin_half < T::tolerance() {
        return [T::one(), T::zero(), T::zero(), angle];
    }
    [v[0] / sin_half, v[1] / sin_half, v[2] / sin_half, angle]
}

/// Unit quaternion `[e·sin(θ/2), cos(θ/2)]` of an axis and angle.
pub fn axis_angle_to_quaternion<T: Real>(axis_angle: &AxisAngle<T>) -> Quaternion<T> {
    let (s, c) = (axis_angle[3] * T::half()).sin_cos();
    [axis_angle[0] * s, axis_angle[1] * s, axis_angle[2] * s, c]
}

/// Rotation vector of a unit quaternion, with angle in `[0, π]`.
pub fn quaternion_to_rot_vec<T: Real>(quaternion: &Quaternion<T>) -> RotVec<T> {
    // q and -q are the same rotation, take the one with a non-negative real part
    let q = if quaternion[3] < T::zero() {
        quaternion.map(|v| -v)
    } else {
        *quaternion
    };
    let v = [q[0], q[1], q[2]];
    let sin_half = norm3(&v);
    if sin_half < T::tolerance() {
        return scale3(&v, T::two());
    }
    let angle = T::two() * sin_half.atan2(q[3]);
    scale3(&v, angle / sin_half)
}

/// Unit quaternion of a rotation vector.
pub fn rot_vec_to_quaternion<T: Real>(rot_vec: &RotVec<T>) -> Quaternion<T> {
    let angle = norm3(rot_vec);
    if angle < T::tolerance() {
        return [
            rot_vec[0] * T::half(),
            rot_vec[1] * T::half(),
            rot_vec[2] * T::half(),
            T::one(),
        ];
    }
    let axis = scale3(rot_vec, T::one() / angle);
    axis_angle_to_quaternion(&[axis[0], axis[1], axis[2], angle])
}

/// Split a rotation vector into unit axis and angle.
///
/// A vanishing rotation vector maps to the axis `[1, 0, 0]` with a zero angle.
pub fn rot_vec_to_axis_angle<T: Real>(rot_vec: &RotVec<T>) -> AxisAngle<T> {
    let angle = norm3(rot_vec);
    if angle < T::tolerance() {
        return [T::one(), T::zero(), T::zero(), T::zero()];
    }
    [
        rot_vec[0] / angle,
        rot_vec[1] / angle,
        rot_vec[2] / angle,
        angle,
    ]
}

/// Rotation vector `θ·e` of an axis and angle.
pub fn axis_angle_to_rot_vec<T: Real>(axis_angle: &AxisAngle<T>) -> RotVec<T> {
    let [x, y, z, angle] = *axis_angle;
    [x * angle, y * angle, z * angle]
}

/// Unit axis and angle of a rotation matrix.
pub fn rot_mat_to_axis_angle<T: Real>(rot_mat: &RotMat<T>) -> AxisAngle<T> {
    rot_vec_to_axis_angle(&rot_mat_to_rot_vec(rot_mat))
}

/// Euler angles of a rotation vector.
pub fn rot_vec_to_euler<T: Real>(rot_vec: &RotVec<T>, convention: EulerConvention) -> EulerAngles<T> {
    rot_mat_to_euler(&rot_vec_to_rot_mat(rot_vec), convention)
}

/// Rotation vector of Euler angles.
pub fn euler_to_rot_vec<T: Real>(euler: &EulerAngles<T>, convention: EulerConvention) -> RotVec<T> {
    rot_mat_to_rot_vec(&euler_to_rot_mat(euler, convention))
}

/// Unit axis and angle of Euler angles.
pub fn euler_to_axis_angle<T: Real>(
    euler: &EulerAngles<T>,
    convention: EulerConvention,
) -> AxisAngle<T> {
    quaternion_to_axis_angle(&euler_to_quaternion(euler, convention))
}

/// Euler angles of an axis and angle.
pub fn axis_angle_to_euler<T: Real>(
    axis_angle: &AxisAngle<T>,
    convention: EulerConvention,
) -> EulerAngles<T> {
    rot_mat_to_euler(&axis_angle_to_rot_mat(axis_angle), convention)
}

/// Conjugate of a unit quaternion, which is its inverse.
pub fn inverse_quaternion<T: Real>(quaternion: &Quaternion<T>) -> Quaternion<T> {
    let [x, y, z, w] = *quaternion;
    [-x, -y, -z, w]
}

/// Scale a quaternion to unit norm. A vanishing quaternion maps to the identity.
pub fn normalize_quaternion<T: Real>(quaternion: &Quaternion<T>) -> Quaternion<T> {
    let norm = quaternion.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt();
    if norm < T::epsilon() {
        return [T::zero(), T::zero(), T::zero(), T::one()];
    }
    quaternion.map(|v| v / norm)
}

/// Scale the rotation angle of a unit quaternion, `q^s`.
///
/// Decomposes into axis and angle, multiplies the angle by `scale` and recomposes.
pub fn scale_quaternion_rotation_angle<T: Real>(
    quaternion: &Quaternion<T>,
    scale: T,
) -> Quaternion<T> {
    let mut axis_angle = quaternion_to_axis_angle(quaternion);
    axis_angle[3] = axis_angle[3] * scale;
    axis_angle_to_quaternion(&axis_angle)
}
