use posekit_tensor::Tensor;

use crate::batch::zip_batches;
use crate::convention::EulerConvention;
use crate::error::ConversionError;
use crate::kernels::pose as kernels;
use crate::scalar::Real;
use crate::types::{AxisAnglePose, EulerPose, MatPose, QuaternionPose, RotVecPose};

/// Convert a batch of rotation vector poses to matrix poses `[R | t]`.
pub fn rot_vec_pose_to_mat_pose<T: Real, const N: usize>(
    pose: &Tensor<RotVecPose<T>, N>,
) -> Tensor<MatPose<T>, N> {
    pose.map(kernels::rot_vec_pose_to_mat_pose)
}

/// Convert a batch of matrix poses to rotation vector poses.
pub fn mat_pose_to_rot_vec_pose<T: Real, const N: usize>(
    pose: &Tensor<MatPose<T>, N>,
) -> Tensor<RotVecPose<T>, N> {
    pose.map(kernels::mat_pose_to_rot_vec_pose)
}

/// Convert a batch of Euler poses to matrix poses.
pub fn euler_pose_to_mat_pose<T: Real, const N: usize>(
    pose: &Tensor<EulerPose<T>, N>,
    convention: EulerConvention,
) -> Tensor<MatPose<T>, N> {
    pose.map(|p| kernels::euler_pose_to_mat_pose(p, convention))
}

/// Convert a batch of matrix poses to Euler poses.
pub fn mat_pose_to_euler_pose<T: Real, const N: usize>(
    pose: &Tensor<MatPose<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerPose<T>, N> {
    pose.map(|p| kernels::mat_pose_to_euler_pose(p, convention))
}

/// Convert a batch of quaternion poses to matrix poses.
pub fn quaternion_pose_to_mat_pose<T: Real, const N: usize>(
    pose: &Tensor<QuaternionPose<T>, N>,
) -> Tensor<MatPose<T>, N> {
    pose.map(kernels::quaternion_pose_to_mat_pose)
}

/// Convert a batch of matrix poses to quaternion poses.
pub fn mat_pose_to_quaternion_pose<T: Real, const N: usize>(
    pose: &Tensor<MatPose<T>, N>,
) -> Tensor<QuaternionPose<T>, N> {
    pose.map(kernels::mat_pose_to_quaternion_pose)
}

/// Convert a batch of axis-angle poses to matrix poses.
pub fn axis_angle_pose_to_mat_pose<T: Real, const N: usize>(
    pose: &Tensor<AxisAnglePose<T>, N>,
) -> Tensor<MatPose<T>, N> {
    pose.map(kernels::axis_angle_pose_to_mat_pose)
}

/// Convert a batch of matrix poses to axis-angle poses.
pub fn mat_pose_to_axis_angle_pose<T: Real, const N: usize>(
    pose: &Tensor<MatPose<T>, N>,
) -> Tensor<AxisAnglePose<T>, N> {
    pose.map(kernels::mat_pose_to_axis_angle_pose)
}

/// Convert a batch of quaternion poses to rotation vector poses.
pub fn quaternion_pose_to_rot_vec_pose<T: Real, const N: usize>(
    pose: &Tensor<QuaternionPose<T>, N>,
) -> Tensor<RotVecPose<T>, N> {
    pose.map(kernels::quaternion_pose_to_rot_vec_pose)
}

/// Convert a batch of rotation vector poses to quaternion poses.
pub fn rot_vec_pose_to_quaternion_pose<T: Real, const N: usize>(
    pose: &Tensor<RotVecPose<T>, N>,
) -> Tensor<QuaternionPose<T>, N> {
    pose.map(kernels::rot_vec_pose_to_quaternion_pose)
}

/// Convert a batch of Euler poses to rotation vector poses.
pub fn euler_pose_to_rot_vec_pose<T: Real, const N: usize>(
    pose: &Tensor<EulerPose<T>, N>,
    convention: EulerConvention,
) -> Tensor<RotVecPose<T>, N> {
    pose.map(|p| kernels::euler_pose_to_rot_vec_pose(p, convention))
}

/// Convert a batch of rotation vector poses to Euler poses.
pub fn rot_vec_pose_to_euler_pose<T: Real, const N: usize>(
    pose: &Tensor<RotVecPose<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerPose<T>, N> {
    pose.map(|p| kernels::rot_vec_pose_to_euler_pose(p, convention))
}

/// Convert a batch of quaternion poses to Euler poses.
pub fn quaternion_pose_to_euler_pose<T: Real, const N: usize>(
    pose: &Tensor<QuaternionPose<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerPose<T>, N> {
    pose.map(|p| kernels::quaternion_pose_to_euler_pose(p, convention))
}

/// Convert a batch of Euler poses to quaternion poses.
pub fn euler_pose_to_quaternion_pose<T: Real, const N: usize>(
    pose: &Tensor<EulerPose<T>, N>,
    convention: EulerConvention,
) -> Tensor<QuaternionPose<T>, N> {
    pose.map(|p| kernels::euler_pose_to_quaternion_pose(p, convention))
}

/// Convert a batch of Euler poses to axis-angle poses.
pub fn euler_pose_to_axis_angle_pose<T: Real, const N: usize>(
    pose: &Tensor<EulerPose<T>, N>,
    convention: EulerConvention,
) -> Tensor<AxisAnglePose<T>, N> {
    pose.map(|p| kernels::euler_pose_to_axis_angle_pose(p, convention))
}

/// Convert a batch of axis-angle poses to Euler poses.
pub fn axis_angle_pose_to_euler_pose<T: Real, const N: usize>(
    pose: &Tensor<AxisAnglePose<T>, N>,
    convention: EulerConvention,
) -> Tensor<EulerPose<T>, N> {
    pose.map(|p| kernels::axis_angle_pose_to_euler_pose(p, convention))
}

/// Convert a batch of axis-angle poses to quaternion poses.
pub fn axis_angle_pose_to_quaternion_pose<T: Real, const N: usize>(
    pose: &Tensor<AxisAnglePose<T>, N>,
) -> Tensor<QuaternionPose<T>, N> {
    pose.map(kernels::axis_angle_pose_to_quaternion_pose)
}

/// Convert a batch of quaternion poses to axis-angle poses.
pub fn quaternion_pose_to_axis_angle_pose<T: Real, const N: usize>(
    pose: &Tensor<QuaternionPose<T>, N>,
) -> Tensor<AxisAnglePose<T>, N> {
    pose.map(kernels::quaternion_pose_to_axis_angle_pose)
}

/// Convert a batch of rotation vector poses to axis-angle poses.
pub fn rot_vec_pose_to_axis_angle_pose<T: Real, const N: usize>(
    pose: &Tensor<RotVecPose<T>, N>,
) -> Tensor<AxisAnglePose<T>, N> {
    pose.map(kernels::rot_vec_pose_to_axis_angle_pose)
}

/// Convert a batch of axis-angle poses to rotation vector poses.
pub fn axis_angle_pose_to_rot_vec_pose<T: Real, const N: usize>(
    pose: &Tensor<AxisAnglePose<T>, N>,
) -> Tensor<RotVecPose<T>, N> {
    pose.map(kernels::axis_angle_pose_to_rot_vec_pose)
}

/// Integrate a batch of quaternion poses over one time step.
///
/// # Arguments
///
/// * `pose` - The current poses `[t, q]`.
/// * `velocity` - The pose change per unit of time `[t_v, q_v]`.
/// * `dt` - The time step.
///
/// # Returns
///
/// The poses `[t + t_v·dt, q × q_v^dt]`. Batch dimensions of size one are broadcast, so one
/// velocity can drive a whole batch of poses.
///
/// # Errors
///
/// Returns [`ConversionError::ShapeMismatch`] if the batch shapes cannot be broadcast together.
///
/// # Example
///
/// ```
/// use posekit::{pose, Tensor};
///
/// let identity = Tensor::<[f64; 7], 0>::from_shape_val([], [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// let velocity = Tensor::<[f64; 7], 0>::from_shape_val(
///     [],
///     [1.0, 0.0, 0.0, 0.0, 0.0, 0.5f64.sin(), 0.5f64.cos()],
/// );
///
/// let next = pose::increment_quaternion_pose_with_velocity(&identity, &velocity, 2.0).unwrap();
/// let p = next.as_slice()[0];
/// assert_eq!(p[0], 2.0);
/// assert!((p[5] - 1f64.sin()).abs() < 1e-12);
/// ```
pub fn increment_quaternion_pose_with_velocity<T: Real, const N: usize>(
    pose: &Tensor<QuaternionPose<T>, N>,
    velocity: &Tensor<QuaternionPose<T>, N>,
    dt: T,
) -> Result<Tensor<QuaternionPose<T>, N>, ConversionError> {
    zip_batches(pose, velocity, |p, v| {
        kernels::increment_quaternion_pose_with_velocity(p, v, dt)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_increment_broadcasts_velocity() -> Result<(), ConversionError> {
        let poses = Tensor::<[f64; 7], 2>::from_shape_fn([2, 2], |[i, j]| {
            [i as f64, j as f64, 0.0, 0.0, 0.0, 0.0, 1.0]
        });
        let velocity = Tensor::<[f64; 7], 2>::from_shape_val(
            [1, 1],
            [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        );
        let next = increment_quaternion_pose_with_velocity(&poses, &velocity, 0.25)?;
        assert_eq!(next.shape, [2, 2]);
        for (before, after) in poses.iter().zip(next.iter()) {
            assert_eq!(after[..2], before[..2]);
            assert_relative_eq!(after[2], 0.25);
            assert_relative_eq!(after[6], 1.0);
        }
        Ok(())
    }

    #[test]
    fn test_increment_shape_mismatch() {
        let poses =
            Tensor::<[f64; 7], 1>::from_shape_val([3], [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let velocity = Tensor::<[f64; 7], 1>::from_shape_val([2], [0.0; 7]);
        assert!(matches!(
            increment_quaternion_pose_with_velocity(&poses, &velocity, 1.0),
            Err(ConversionError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_mat_pose_roundtrip() -> Result<(), ConversionError> {
        let poses = Tensor::<[f64; 6], 1>::from_shape_vec(
            [2],
            vec![[1.0, 2.0, 3.0, 0.1, 0.2, 0.3], [-1.0, 0.0, 4.0, -0.5, 0.0, 1.0]],
        )?;
        let recovered = mat_pose_to_rot_vec_pose(&rot_vec_pose_to_mat_pose(&poses));
        for (a, b) in recovered.iter().zip(poses.iter()) {
            for (va, vb) in a.iter().zip(b.iter()) {
                assert_relative_eq!(va, vb, epsilon = 1e-12);
            }
        }
        Ok(())
    }
}
