use posekit_tensor::Tensor;

use crate::batch::zip_batches;
use crate::convention::EulerConvention;
use crate::error::ConversionError;
use crate::kernels::orientation as kernels;
use crate::scalar::Real;
use crate::types::{AxisAngle, EulerAngles, Quaternion, RotMat, RotVec};

/// Convert a batch of rotation vectors to rotation matrices with Rodrigues' formula.
///
/// # Arguments
///
/// * `rot_vec` - The rotation vectors `θ·e`.
///
/// # Returns
///
/// The rotation matrices, with the batch shape of `rot_vec`.
///
/// # Example
///
/// ```
/// use posekit::{orientation, Tensor};
///
/// let rot_vec = Tensor::<[f64; 3], 1>::from_shape_vec([1], vec![[0.0, 0.0, 0.0]]).unwrap();
/// let rot_mat = orientation::rot_vec_to_rot_mat(&rot_vec);
/// assert_eq!(rot_mat.as_slice()[0], [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn rot_vec_to_rot_mat<T: Real, const N: usize>(
    rot_vec: &Tensor<RotVec<T>, N>,
) -> Tensor<RotMat<T>, N> {
    rot_vec.map(kernels::rot_vec_to_rot_mat)
}

/// Convert a batch of rotation matrices to rotation vectors.
///
/// The angle is recovered from the trace and lies in `[0, π]`. The identity maps to the zero
/// vector.
///
/// PRECONDITION: the matrices are orthonormal with determinant `+1`.
pub fn rot_mat_to_rot_vec<T: Real, const N: usize>(
    rot_mat: &Tensor<RotMat<T>, N>,
) -> Tensor<RotVec<T>, N> {
    rot_mat.map(kernels::rot_mat_to_rot_vec)
}

/// Convert a batch of Euler angles to rotation matrices.
///
/// # Arguments
///
/// * `euler` - The angles `[φ_a, φ_b, φ_c]`.
/// * `convention` - The axis order `abc`, giving `R = R_a(φ_a) · R_b(φ_b) · R_c(φ_c)`.
pub fn euler_to_rot_mat<T: Real, const N: usize>(
    euler: &Tensor<EulerAngles<T>, N>,
    convention: EulerConvention,
) -> Tensor<RotMat<T>, N> {
    euler.map(|e| kernels::euler_to_rot_mat(e, convention))
}

/// Convert a batch of rotation matrices to Euler angles.
///
/// The middle angle lies in `[-π/2, π/2]`. At gimbal lock the last angle is zero.
pub fn rot_mat_to_euler<T: Real, const N: usize>(
    rot_mat: &Tensor<RotMat<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerAngles<T>, N> {
    rot_mat.map(|r| kernels::rot_mat_to_euler(r, convention))
}

/// Convert a batch of Euler angles to unit quaternions.
pub fn euler_to_quaternion<T: Real, const N: usize>(
    euler: &Tensor<EulerAngles<T>, N>,
    convention: EulerConvention,
) -> Tensor<Quaternion<T>, N> {
    euler.map(|e| kernels::euler_to_quaternion(e, convention))
}

/// Convert a batch of unit quaternions to Euler angles.
pub fn quaternion_to_euler<T: Real, const N: usize>(
    quaternion: &Tensor<Quaternion<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerAngles<T>, N> {
    quaternion.map(|q| kernels::quaternion_to_euler(q, convention))
}

/// Convert a batch of unit quaternions to axis-angle.
///
/// The identity rotation maps to the axis `[1, 0, 0]`.
pub fn quaternion_to_axis_angle<T: Real, const N: usize>(
    quaternion: &Tensor<Quaternion<T>, N>,
) -> Tensor<AxisAngle<T>, N> {
    quaternion.map(kernels::quaternion_to_axis_angle)
}

/// Convert a batch of axis-angle pairs to unit quaternions.
pub fn axis_angle_to_quaternion<T: Real, const N: usize>(
    axis_angle: &Tensor<AxisAngle<T>, N>,
) -> Tensor<Quaternion<T>, N> {
    axis_angle.map(kernels::axis_angle_to_quaternion)
}

/// Convert a batch of unit quaternions to rotation vectors.
pub fn quaternion_to_rot_vec<T: Real, const N: usize>(
    quaternion: &Tensor<Quaternion<T>, N>,
) -> Tensor<RotVec<T>, N> {
    quaternion.map(kernels::quaternion_to_rot_vec)
}

/// Convert a batch of rotation vectors to unit quaternions.
pub fn rot_vec_to_quaternion<T: Real, const N: usize>(
    rot_vec: &Tensor<RotVec<T>, N>,
) -> Tensor<Quaternion<T>, N> {
    rot_vec.map(kernels::rot_vec_to_quaternion)
}

/// Convert a batch of rotation vectors to axis-angle.
pub fn rot_vec_to_axis_angle<T: Real, const N: usize>(
    rot_vec: &Tensor<RotVec<T>, N>,
) -> Tensor<AxisAngle<T>, N> {
    rot_vec.map(kernels::rot_vec_to_axis_angle)
}

/// Convert a batch of axis-angle pairs to rotation vectors.
pub fn axis_angle_to_rot_vec<T: Real, const N: usize>(
    axis_angle: &Tensor<AxisAngle<T>, N>,
) -> Tensor<RotVec<T>, N> {
    axis_angle.map(kernels::axis_angle_to_rot_vec)
}

/// Convert a batch of unit quaternions to rotation matrices.
pub fn quaternion_to_rot_mat<T: Real, const N: usize>(
    quaternion: &Tensor<Quaternion<T>, N>,
) -> Tensor<RotMat<T>, N> {
    quaternion.map(kernels::quaternion_to_rot_mat)
}

/// Convert a batch of rotation matrices to unit quaternions.
pub fn rot_mat_to_quaternion<T: Real, const N: usize>(
    rot_mat: &Tensor<RotMat<T>, N>,
) -> Tensor<Quaternion<T>, N> {
    rot_mat.map(kernels::rot_mat_to_quaternion)
}

/// Convert a batch of axis-angle pairs to rotation matrices.
pub fn axis_angle_to_rot_mat<T: Real, const N: usize>(
    axis_angle: &Tensor<AxisAngle<T>, N>,
) -> Tensor<RotMat<T>, N> {
    axis_angle.map(kernels::axis_angle_to_rot_mat)
}

/// Convert a batch of rotation matrices to axis-angle.
pub fn rot_mat_to_axis_angle<T: Real, const N: usize>(
    rot_mat: &Tensor<RotMat<T>, N>,
) -> Tensor<AxisAngle<T>, N> {
    rot_mat.map(kernels::rot_mat_to_axis_angle)
}

/// Convert a batch of rotation vectors to Euler angles.
pub fn rot_vec_to_euler<T: Real, const N: usize>(
    rot_vec: &Tensor<RotVec<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerAngles<T>, N> {
    rot_vec.map(|v| kernels::rot_vec_to_euler(v, convention))
}

/// Convert a batch of Euler angles to rotation vectors.
pub fn euler_to_rot_vec<T: Real, const N: usize>(
    euler: &Tensor<EulerAngles<T>, N>,
    convention: EulerConvention,
) -> Tensor<RotVec<T>, N> {
    euler.map(|e| kernels::euler_to_rot_vec(e, convention))
}

/// Convert a batch of Euler angles to axis-angle.
pub fn euler_to_axis_angle<T: Real, const N: usize>(
    euler: &Tensor<EulerAngles<T>, N>,
    convention: EulerConvention,
) -> Tensor<AxisAngle<T>, N> {
    euler.map(|e| kernels::euler_to_axis_angle(e, convention))
}

/// Convert a batch of axis-angle pairs to Euler angles.
pub fn axis_angle_to_euler<T: Real, const N: usize>(
    axis_angle: &Tensor<AxisAngle<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerAngles<T>, N> {
    axis_angle.map(|a| kernels::axis_angle_to_euler(a, convention))
}

/// Multiply two batches of quaternions, `p × q`.
///
/// Batch dimensions of size one are broadcast, so a single quaternion can be applied to a whole
/// batch.
///
/// # Errors
///
/// Returns [`ConversionError::ShapeMismatch`] if the batch shapes cannot be broadcast together.
pub fn hamilton_product<T: Real, const N: usize>(
    p: &Tensor<Quaternion<T>, N>,
    q: &Tensor<Quaternion<T>, N>,
) -> Result<Tensor<Quaternion<T>, N>, ConversionError> {
    zip_batches(p, q, kernels::hamilton_product)
}

/// Conjugate a batch of unit quaternions.
pub fn inverse_quaternion<T: Real, const N: usize>(
    quaternion: &Tensor<Quaternion<T>, N>,
) -> Tensor<Quaternion<T>, N> {
    quaternion.map(kernels::inverse_quaternion)
}

/// Scale a batch of quaternions to unit norm.
pub fn normalize_quaternion<T: Real, const N: usize>(
    quaternion: &Tensor<Quaternion<T>, N>,
) -> Tensor<Quaternion<T>, N> {
    quaternion.map(kernels::normalize_quaternion)
}

/// Multiply the rotation angle of every quaternion by `scale`.
pub fn scale_quaternion_rotation_angle<T: Real, const N: usize>(
    quaternion: &Tensor<Quaternion<T>, N>,
    scale: T,
) -> Tensor<Quaternion<T>, N> {
    quaternion.map(|q| kernels::scale_quaternion_rotation_angle(q, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use posekit_tensor::Tensor2;

    #[test]
    fn test_batch_shape_is_kept() {
        let rot_vec = Tensor2::<[f64; 3]>::from_shape_fn([2, 3], |[i, j]| {
            [0.1 * i as f64, -0.2 * j as f64, 0.3]
        });
        let rot_mat = rot_vec_to_rot_mat(&rot_vec);
        assert_eq!(rot_mat.shape, [2, 3]);

        let recovered = rot_mat_to_rot_vec(&rot_mat);
        for (a, b) in recovered.iter().zip(rot_vec.iter()) {
            for (va, vb) in a.iter().zip(b.iter()) {
                assert_relative_eq!(va, vb, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_hamilton_product_broadcast() -> Result<(), ConversionError> {
        let single = Tensor::<[f64; 4], 1>::from_shape_vec([1], vec![[0.0, 0.0, 0.0, 1.0]])?;
        let batch = Tensor::<[f64; 4], 1>::from_shape_vec(
            [2],
            vec![[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]],
        )?;
        let product = hamilton_product(&batch, &single)?;
        assert_eq!(product.as_slice(), batch.as_slice());
        Ok(())
    }

    #[test]
    fn test_hamilton_product_shape_mismatch() {
        let p = Tensor::<[f64; 4], 1>::from_shape_val([2], [0.0, 0.0, 0.0, 1.0]);
        let q = Tensor::<[f64; 4], 1>::from_shape_val([3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            hamilton_product(&p, &q),
            Err(ConversionError::ShapeMismatch {
                expected: vec![2],
                actual: vec![3],
            })
        );
    }

    #[test]
    fn test_scalar_last_order() {
        // 90 degrees about z
        let rot_vec =
            Tensor::<[f64; 3], 0>::from_shape_val([], [0.0, 0.0, std::f64::consts::FRAC_PI_2]);
        let quaternion = rot_vec_to_quaternion(&rot_vec);
        let q = quaternion.as_slice()[0];
        assert_relative_eq!(q[2], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(q[3], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }
}
