//! Per-element pose conversions.
//!
//! A pose is the translation `[x, y, z]` followed by an orientation block. Every conversion
//! converts the orientation with [`crate::kernels::orientation`] and passes the translation
//! through unchanged.

use crate::convention::EulerConvention;
use crate::kernels::orientation;
use crate::scalar::Real;
use crate::types::{
    AxisAnglePose, EulerPose, MatPose, QuaternionPose, RotMat, RotVecPose,
};

/// Split a 6-element pose into translation and orientation.
#[inline]
pub fn split_pose6<T: Copy>(pose: &[T; 6]) -> ([T; 3], [T; 3]) {
    (
        [pose[0], pose[1], pose[2]],
        [pose[3], pose[4], pose[5]],
    )
}

/// Split a 7-element pose into translation and orientation.
#[inline]
pub fn split_pose7<T: Copy>(pose: &[T; 7]) -> ([T; 3], [T; 4]) {
    (
        [pose[0], pose[1], pose[2]],
        [pose[3], pose[4], pose[5], pose[6]],
    )
}

/// Concatenate a translation and a 3-element orientation.
#[inline]
pub fn join_pose6<T: Copy>(translation: &[T; 3], orientation: &[T; 3]) -> [T; 6] {
    let [x, y, z] = *translation;
    let [a, b, c] = *orientation;
    [x, y, z, a, b, c]
}

/// Concatenate a translation and a 4-element orientation.
#[inline]
pub fn join_pose7<T: Copy>(translation: &[T; 3], orientation: &[T; 4]) -> [T; 7] {
    let [x, y, z] = *translation;
    let [a, b, c, d] = *orientation;
    [x, y, z, a, b, c, d]
}

/// Split a matrix pose `[R | t]` into the rotation matrix and the translation.
#[inline]
pub fn split_mat_pose<T: Copy>(pose: &MatPose<T>) -> (RotMat<T>, [T; 3]) {
    (
        std::array::from_fn(|i| [pose[i][0], pose[i][1], pose[i][2]]),
        [pose[0][3], pose[1][3], pose[2][3]],
    )
}

/// Build the matrix pose `[R | t]`.
#[inline]
pub fn join_mat_pose<T: Copy>(rot_mat: &RotMat<T>, translation: &[T; 3]) -> MatPose<T> {
    std::array::from_fn(|i| {
        [
            rot_mat[i][0],
            rot_mat[i][1],
            rot_mat[i][2],
            translation[i],
        ]
    })
}

/// Rotation vector pose to matrix pose.
pub fn rot_vec_pose_to_mat_pose<T: Real>(pose: &RotVecPose<T>) -> MatPose<T> {
    let (t, rot_vec) = split_pose6(pose);
    join_mat_pose(&orientation::rot_vec_to_rot_mat(&rot_vec), &t)
}

/// Matrix pose to rotation vector pose.
pub fn mat_pose_to_rot_vec_pose<T: Real>(pose: &MatPose<T>) -> RotVecPose<T> {
    let (rot_mat, t) = split_mat_pose(pose);
    join_pose6(&t, &orientation::rot_mat_to_rot_vec(&rot_mat))
}

/// Euler pose to matrix pose.
pub fn euler_pose_to_mat_pose<T: Real>(pose: &EulerPose<T>, convention: EulerConvention) -> MatPose<T> {
    let (t, euler) = split_pose6(pose);
    join_mat_pose(&orientation::euler_to_rot_mat(&euler, convention), &t)
}

/// Matrix pose to Euler pose.
pub fn mat_pose_to_euler_pose<T: Real>(pose: &MatPose<T>, convention: EulerConvention) -> EulerPose<T> {
    let (rot_mat, t) = split_mat_pose(pose);
    join_pose6(&t, &orientation::rot_mat_to_euler(&rot_mat, convention))
}

/// Quaternion pose to matrix pose.
pub fn quaternion_pose_to_mat_pose<T: Real>(pose: &QuaternionPose<T>) -> MatPose<T> {
    let (t, quaternion) = split_pose7(pose);
    join_mat_pose(&orientation::quaternion_to_rot_mat(&quaternion), &t)
}

/// Matrix pose to quaternion pose.
pub fn mat_pose_to_quaternion_pose<T: Real>(pose: &MatPose<T>) -> QuaternionPose<T> {
    let (rot_mat, t) = split_mat_pose(pose);
    join_pose7(&t, &orientation::rot_mat_to_quaternion(&rot_mat))
}

/// Axis-angle pose to matrix pose.
pub fn axis_angle_pose_to_mat_pose<T: Real>(pose: &AxisAnglePose<T>) -> MatPose<T> {
    let (t, axis_angle) = split_pose7(pose);
    join_mat_pose(&orientation::axis_angle_to_rot_mat(&axis_angle), &t)
}

/// Matrix pose to axis-angle pose.
pub fn mat_pose_to_axis_angle_pose<T: Real>(pose: &MatPose<T>) -> AxisAnglePose<T> {
    let (rot_mat, t) = split_mat_pose(pose);
    join_pose7(&t, &orientation::rot_mat_to_axis_angle(&rot_mat))
}

/// Quaternion pose to rotation vector pose.
pub fn quaternion_pose_to_rot_vec_pose<T: Real>(pose: &QuaternionPose<T>) -> RotVecPose<T> {
    let (t, quaternion) = split_pose7(pose);
    join_pose6(&t, &orientation::quaternion_to_rot_vec(&quaternion))
}

/// Rotation vector pose to quaternion pose.
pub fn rot_vec_pose_to_quaternion_pose<T: Real>(pose: &RotVecPose<T>) -> QuaternionPose<T> {
    let (t, rot_vec) = split_pose6(pose);
    join_pose7(&t, &orientation::rot_vec_to_quaternion(&rot_vec))
}

/// Euler pose to rotation vector pose.
pub fn euler_pose_to_rot_vec_pose<T: Real>(
    pose: &EulerPose<T>,
    convention: EulerConvention,
) -> RotVecPose<T> {
    let (t, euler) = split_pose6(pose);
    join_pose6(&t, &orientation::euler_to_rot_vec(&euler, convention))
}

/// Rotation vector pose to Euler pose.
pub fn rot_vec_pose_to_euler_pose<T: Real>(
    pose: &RotVecPose<T>,
    convention: EulerConvention,
) -> EulerPose<T> {
    let (t, rot_vec) = split_pose6(pose);
    join_pose6(&t, &orientation::rot_vec_to_euler(&rot_vec, convention))
}

/// Quaternion pose to Euler pose.
pub fn quaternion_pose_to_euler_pose<T: Real>(
    pose: &QuaternionPose<T>,
    convention: EulerConvention,
) -> EulerPose<T> {
    let (t, quaternion) = split_pose7(pose);
    join_pose6(&t, &orientation::quaternion_to_euler(&quaternion, convention))
}

/// Euler pose to quaternion pose.
pub fn euler_pose_to_quaternion_pose<T: Real>(
    pose: &EulerPose<T>,
    convention: EulerConvention,
) -> QuaternionPose<T> {
    let (t, euler) = split_pose6(pose);
    join_pose7(&t, &orientation::euler_to_quaternion(&euler, convention))
}

/// Euler pose to axis-angle pose.
pub fn euler_pose_to_axis_angle_pose<T: Real>(
    pose: &EulerPose<T>,
    convention: EulerConvention,
) -> AxisAnglePose<T> {
    let (t, euler) = split_pose6(pose);
    join_pose7(&t, &orientation::euler_to_axis_angle(&euler, convention))
}

/// Axis-angle pose to Euler pose.
pub fn axis_angle_pose_to_euler_pose<T: Real>(
    pose: &AxisAnglePose<T>,
    convention: EulerConvention,
) -> EulerPose<T> {
    let (t, axis_angle) = split_pose7(pose);
    join_pose6(&t, &orientation::axis_angle_to_euler(&axis_angle, convention))
}

/// Axis-angle pose to quaternion pose.
pub fn axis_angle_pose_to_quaternion_pose<T: Real>(pose: &AxisAnglePose<T>) -> QuaternionPose<T> {
    let (t, axis_angle) = split_pose7(pose);
    join_pose7(&t, &orientation::axis_angle_to_quaternion(&axis_angle))
}

/// Quaternion pose to axis-angle pose.
pub fn quaternion_pose_to_axis_angle_pose<T: Real>(pose: &QuaternionPose<T>) -> AxisAnglePose<T> {
    let (t, quaternion) = split_pose7(pose);
    join_pose7(&t, &orientation::quaternion_to_axis_angle(&quaternion))
}

/// Rotation vector pose to axis-angle pose.
pub fn rot_vec_pose_to_axis_angle_pose<T: Real>(pose: &RotVecPose<T>) -> AxisAnglePose<T> {
    let (t, rot_vec) = split_pose6(pose);
    join_pose7(&t, &orientation::rot_vec_to_axis_angle(&rot_vec))
}

/// Axis-angle pose to rotation vector pose.
pub fn axis_angle_pose_to_rot_vec_pose<T: Real>(pose: &AxisAnglePose<T>) -> RotVecPose<T> {
    let (t, axis_angle) = split_pose7(pose);
    join_pose6(&t, &orientation::axis_angle_to_rot_vec(&axis_angle))
}

/// Advance a quaternion pose by one explicit Euler step of a pose velocity.
///
/// # Arguments
///
/// * `pose` - The current pose `[t, q]`.
/// * `velocity` - The pose change per unit of time `[t_v, q_v]`.
/// * `dt` - The time step.
///
/// # Returns
///
/// The pose `[t + t_v·dt, q × q_v^dt]`. The rotation increment is applied in the frame of the
/// current orientation.
pub fn increment_quaternion_pose_with_velocity<T: Real>(
    pose: &QuaternionPose<T>,
    velocity: &QuaternionPose<T>,
    dt: T,
) -> QuaternionPose<T> {
    let (t, q) = split_pose7(pose);
    let (t_v, q_v) = split_pose7(velocity);

    let translation = [t[0] + t_v[0] * dt, t[1] + t_v[1] * dt, t[2] + t_v[2] * dt];
    let delta = orientation::scale_quaternion_rotation_angle(&q_v, dt);

    join_pose7(&translation, &orientation::hamilton_product(&q, &delta))
}
