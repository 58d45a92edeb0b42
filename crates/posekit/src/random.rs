//! Uniformly distributed random rotations.
//!
//! Every generator draws uniformly on SO(3) and converts to the requested representation, so
//! the distribution does not depend on the representation.

use posekit_tensor::Tensor;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::convention::EulerConvention;
use crate::kernels::orientation as kernels;
use crate::scalar::Real;
use crate::types::{AxisAngle, EulerAngles, Quaternion, RotMat, RotVec};

/// Draw one unit quaternion uniformly on SO(3) with Shoemake's method.
pub fn sample_quaternion<T, R>(rng: &mut R) -> Quaternion<T>
where
    T: Real,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    let r1: T = rng.random();
    let r2: T = rng.random();
    let r3: T = rng.random();

    let two_pi = T::two() * T::PI();
    let (s1, s2) = ((T::one() - r1).sqrt(), r1.sqrt());

    let w = s1 * (two_pi * r2).sin();
    let x = s1 * (two_pi * r2).cos();
    let y = s2 * (two_pi * r3).sin();
    let z = s2 * (two_pi * r3).cos();

    [x, y, z, w]
}

/// A batch of uniformly distributed unit quaternions.
///
/// # Arguments
///
/// * `rng` - The random number generator.
/// * `batch_shape` - The batch shape of the output.
///
/// # Example
///
/// ```
/// use posekit::random::random_quaternion;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let q = random_quaternion::<f64, _, 2>(&mut rng, [4, 5]);
/// assert_eq!(q.shape, [4, 5]);
/// assert!(q.iter().all(|q| (q.iter().map(|v| v * v).sum::<f64>() - 1.0).abs() < 1e-12));
/// ```
pub fn random_quaternion<T, R, const N: usize>(
    rng: &mut R,
    batch_shape: [usize; N],
) -> Tensor<Quaternion<T>, N>
where
    T: Real,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    Tensor::from_shape_fn(batch_shape, |_| sample_quaternion(rng))
}

/// A batch of uniformly distributed rotation vectors, with angles in `[0, π]`.
pub fn random_rot_vec<T, R, const N: usize>(
    rng: &mut R,
    batch_shape: [usize; N],
) -> Tensor<RotVec<T>, N>
where
    T: Real,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    Tensor::from_shape_fn(batch_shape, |_| {
        kernels::quaternion_to_rot_vec(&sample_quaternion(rng))
    })
}

/// A batch of uniformly distributed axis-angle pairs, with angles in `[0, π]`.
pub fn random_axis_angle<T, R, const N: usize>(
    rng: &mut R,
    batch_shape: [usize; N],
) -> Tensor<AxisAngle<T>, N>
where
    T: Real,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    Tensor::from_shape_fn(batch_shape, |_| {
        kernels::rot_vec_to_axis_angle(&kernels::quaternion_to_rot_vec(&sample_quaternion(rng)))
    })
}

/// A batch of Euler angles of uniformly distributed rotations.
pub fn random_euler<T, R, const N: usize>(
    rng: &mut R,
    batch_shape: [usize; N],
    convention: EulerConvention,
) -> Tensor<EulerAngles<T>, N>
where
    T: Real,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    Tensor::from_shape_fn(batch_shape, |_| {
        kernels::quaternion_to_euler(&sample_quaternion(rng), convention)
    })
}

/// A batch of uniformly distributed rotation matrices.
pub fn random_rot_mat<T, R, const N: usize>(
    rng: &mut R,
    batch_shape: [usize; N],
) -> Tensor<RotMat<T>, N>
where
    T: Real,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    Tensor::from_shape_fn(batch_shape, |_| {
        kernels::quaternion_to_rot_mat(&sample_quaternion(rng))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::linalg::{matmul33, transpose33};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sample_quaternion_unit_norm() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let q: Quaternion<f32> = sample_quaternion(&mut rng);
            let norm = q.iter().map(|v| v * v).sum::<f32>().sqrt();
            assert_relative_eq!(norm, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_random_rot_mat_orthonormal() {
        let mut rng = StdRng::seed_from_u64(1);
        let rot_mat = random_rot_mat::<f64, _, 1>(&mut rng, [32]);
        for r in rot_mat.iter() {
            let eye = matmul33(r, &transpose33(r));
            for (i, row) in eye.iter().enumerate() {
                for (j, &v) in row.iter().enumerate() {
                    assert_relative_eq!(v, if i == j { 1.0 } else { 0.0 }, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_random_angles_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let axis_angle = random_axis_angle::<f64, _, 1>(&mut rng, [64]);
        assert!(axis_angle
            .iter()
            .all(|a| (0.0..=std::f64::consts::PI).contains(&a[3])));

        let euler = random_euler::<f64, _, 1>(&mut rng, [64], EulerConvention::Zyx);
        assert!(euler
            .iter()
            .all(|e| e[1].abs() <= std::f64::consts::FRAC_PI_2));

        let rot_vec = random_rot_vec::<f64, _, 2>(&mut rng, [4, 4]);
        assert_eq!(rot_vec.shape, [4, 4]);
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let a = random_quaternion::<f64, _, 1>(&mut StdRng::seed_from_u64(42), [8]);
        let b = random_quaternion::<f64, _, 1>(&mut StdRng::seed_from_u64(42), [8]);
        assert_eq!(a, b);
    }
}
