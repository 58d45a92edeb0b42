//! Per-element coordinate and frame utilities.

use crate::kernels::linalg::{matvec33, matvec34, transpose33};
use crate::kernels::pose::{join_mat_pose, split_mat_pose};
use crate::scalar::Real;
use crate::types::{Cartesian, HomogeneousCoord, HomogeneousTransform, MatPose, Polar};

/// Convert a Cartesian coordinate to polar coordinates `[r, θ, φ]`.
///
/// `θ` is measured from the `+z` axis and `φ` counter-clockwise from `+x` towards `+y`.
/// Both angles are zero at the origin.
pub fn cartesian_to_polar_coords<T: Real>(cartesian: &Cartesian<T>) -> Polar<T> {
    let [x, y, z] = *cartesian;
    let radius = (x * x + y * y + z * z).sqrt();
    if radius < T::epsilon() {
        return [radius, T::zero(), T::zero()];
    }
    let polar = (z / radius).clamp_unit().acos();
    let azimuth = y.atan2(x);
    [radius, polar, azimuth]
}

/// Convert polar coordinates `[r, θ, φ]` to a Cartesian coordinate.
pub fn polar_to_cartesian_coords<T: Real>(polar: &Polar<T>) -> Cartesian<T> {
    let [radius, theta, phi] = *polar;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    [
        radius * sin_theta * cos_phi,
        radius * sin_theta * sin_phi,
        radius * cos_theta,
    ]
}

/// Append a `1` to a coordinate.
#[inline]
pub fn make_coordinates_homogeneous<T: Real>(coordinates: &Cartesian<T>) -> HomogeneousCoord<T> {
    let [x, y, z] = *coordinates;
    [x, y, z, T::one()]
}

/// Drop the last component of a homogeneous coordinate.
///
/// The remaining components are not divided by `w`.
#[inline]
pub fn strip_homogeneous_coordinates<T: Real>(coordinates: &HomogeneousCoord<T>) -> Cartesian<T> {
    let [x, y, z, _] = *coordinates;
    [x, y, z]
}

/// Append the row `[0, 0, 0, 1]` to a 3x4 transformation.
#[inline]
pub fn make_transformation_homogeneous<T: Real>(
    transformation: &MatPose<T>,
) -> HomogeneousTransform<T> {
    let (o, z) = (T::one(), T::zero());
    [
        transformation[0],
        transformation[1],
        transformation[2],
        [z, z, z, o],
    ]
}

/// Drop the last row of a 4x4 transformation.
#[inline]
pub fn strip_homogeneous_transformation<T: Real>(
    transformation: &HomogeneousTransform<T>,
) -> MatPose<T> {
    [transformation[0], transformation[1], transformation[2]]
}

/// Apply a 3x4 transformation to a coordinate, `T · [x, y, z, 1]ᵀ`.
#[inline]
pub fn transform_coordinates<T: Real>(
    transformation: &MatPose<T>,
    coordinates: &Cartesian<T>,
) -> Cartesian<T> {
    matvec34(transformation, &make_coordinates_homogeneous(coordinates))
}

/// Invert a general 3x4 transformation `[A | t]` as `[A⁻¹ | -A⁻¹t]`.
///
/// Returns `None` if the linear block is singular relative to its scale.
pub fn invert_transformation<T: Real>(transformation: &MatPose<T>) -> Option<MatPose<T>> {
    T::invert_affine(transformation)
}

/// Invert a rigid transformation `[R | t]` as `[Rᵀ | -Rᵀt]`.
///
/// PRECONDITION: the rotation block is orthonormal.
pub fn invert_rigid_transformation<T: Real>(transformation: &MatPose<T>) -> MatPose<T> {
    let (rot_mat, t) = split_mat_pose(transformation);
    let rot_mat_t = transpose33(&rot_mat);
    let t_inv = matvec33(&rot_mat_t, &t).map(|v| -v);
    join_mat_pose(&rot_mat_t, &t_inv)
}
