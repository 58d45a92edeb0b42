use posekit_tensor::Tensor;

use crate::batch::zip_batches;
use crate::error::ConversionError;
use crate::kernels::position as kernels;
use crate::scalar::Real;
use crate::types::{Cartesian, HomogeneousCoord, HomogeneousTransform, MatPose, Polar};

/// Convert a batch of Cartesian coordinates to polar coordinates.
///
/// # Arguments
///
/// * `cartesian` - The coordinates `[x, y, z]`.
///
/// # Returns
///
/// The coordinates `[r, θ, φ]` where `θ = acos(z / r)` is measured from the `+z` axis and
/// `φ = atan2(y, x)` counter-clockwise from the `+x` axis. The origin maps to `[0, 0, 0]`.
pub fn cartesian_to_polar_coords<T: Real, const N: usize>(
    cartesian: &Tensor<Cartesian<T>, N>,
) -> Tensor<Polar<T>, N> {
    cartesian.map(kernels::cartesian_to_polar_coords)
}

/// Convert a batch of polar coordinates `[r, θ, φ]` to Cartesian coordinates.
pub fn polar_to_cartesian_coords<T: Real, const N: usize>(
    polar: &Tensor<Polar<T>, N>,
) -> Tensor<Cartesian<T>, N> {
    polar.map(kernels::polar_to_cartesian_coords)
}

/// Append a `1` to every coordinate.
pub fn make_coordinates_homogeneous<T: Real, const N: usize>(
    coordinates: &Tensor<Cartesian<T>, N>,
) -> Tensor<HomogeneousCoord<T>, N> {
    coordinates.map(kernels::make_coordinates_homogeneous)
}

/// Drop the last component of every homogeneous coordinate.
pub fn strip_homogeneous_coordinates<T: Real, const N: usize>(
    coordinates: &Tensor<HomogeneousCoord<T>, N>,
) -> Tensor<Cartesian<T>, N> {
    coordinates.map(kernels::strip_homogeneous_coordinates)
}

/// Append the row `[0, 0, 0, 1]` to every 3x4 transformation.
pub fn make_transformation_homogeneous<T: Real, const N: usize>(
    transformation: &Tensor<MatPose<T>, N>,
) -> Tensor<HomogeneousTransform<T>, N> {
    transformation.map(kernels::make_transformation_homogeneous)
}

/// Drop the last row of every 4x4 transformation.
pub fn strip_homogeneous_transformation<T: Real, const N: usize>(
    transformation: &Tensor<HomogeneousTransform<T>, N>,
) -> Tensor<MatPose<T>, N> {
    transformation.map(kernels::strip_homogeneous_transformation)
}

/// Apply a batch of 3x4 transformations to a batch of coordinates.
///
/// Batch dimensions of size one are broadcast, so a single transformation can be applied to a
/// whole point cloud.
///
/// # Errors
///
/// Returns [`ConversionError::ShapeMismatch`] if the batch shapes cannot be broadcast together.
///
/// # Example
///
/// ```
/// use posekit::{position, Tensor};
///
/// let shift = Tensor::<[[f64; 4]; 3], 1>::from_shape_val(
///     [1],
///     [[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 2.0], [0.0, 0.0, 1.0, 3.0]],
/// );
/// let points = Tensor::<[f64; 3], 1>::from_shape_vec(
///     [2],
///     vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
/// )
/// .unwrap();
///
/// let moved = position::transform_coordinates(&shift, &points).unwrap();
/// assert_eq!(moved.as_slice(), &[[1.0, 2.0, 3.0], [2.0, 3.0, 4.0]]);
/// ```
pub fn transform_coordinates<T: Real, const N: usize>(
    transformation: &Tensor<MatPose<T>, N>,
    coordinates: &Tensor<Cartesian<T>, N>,
) -> Result<Tensor<Cartesian<T>, N>, ConversionError> {
    zip_batches(transformation, coordinates, kernels::transform_coordinates)
}

/// Invert a batch of 3x4 transformations.
///
/// Every transformation is made homogeneous, inverted as a general 4x4 matrix and stripped back
/// to 3x4. Use [`invert_rigid_transformation`] when the rotation blocks are known to be
/// orthonormal.
///
/// # Errors
///
/// Returns [`ConversionError::SingularMatrix`] if any transformation is singular.
pub fn invert_transformation<T: Real, const N: usize>(
    transformation: &Tensor<MatPose<T>, N>,
) -> Result<Tensor<MatPose<T>, N>, ConversionError> {
    transformation.try_map(|t| {
        kernels::invert_transformation(t).ok_or_else(|| {
            log::debug!("cannot invert singular transformation {t:?}");
            ConversionError::SingularMatrix
        })
    })
}

/// Invert a batch of rigid transformations `[R | t]` as `[Rᵀ | -Rᵀt]`.
pub fn invert_rigid_transformation<T: Real, const N: usize>(
    transformation: &Tensor<MatPose<T>, N>,
) -> Tensor<MatPose<T>, N> {
    transformation.map(kernels::invert_rigid_transformation)
}
