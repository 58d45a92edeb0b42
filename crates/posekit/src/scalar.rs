use glam::{DMat3, DVec3, Mat3, Vec3};
use num_traits::{Float, FloatConst};

/// The scalar type every conversion is generic over.
///
/// Implemented for `f32` and `f64`. The bound is resolved at compile time, so each conversion
/// is monomorphized for the precision the caller picks. Matrix inversion is delegated to
/// `glam` in the matching precision.
pub trait Real: Float + FloatConst + std::fmt::Debug + Send + Sync + 'static {
    /// Threshold below which an angle, norm or sine is treated as zero.
    ///
    /// This is the square root of the machine epsilon, `~1.5e-8` for `f64` and `~3.5e-4` for
    /// `f32`.
    #[inline]
    fn tolerance() -> Self {
        Self::epsilon().sqrt()
    }

    /// The constant `0.5`.
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// The constant `2.0`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Clamp the value to `[-1, 1]`, the domain of `asin` and `acos`.
    #[inline]
    fn clamp_unit(self) -> Self {
        self.max(-Self::one()).min(Self::one())
    }

    /// Invert a row-major 3x4 affine transformation `[A | t]` as `[A⁻¹ | -A⁻¹t]`.
    ///
    /// Returns `None` when `|det A|` is not above the machine epsilon times the product of the
    /// row norms of `A`, so the test does not depend on the scale of the transformation.
    fn invert_affine(transformation: &[[Self; 4]; 3]) -> Option<[[Self; 4]; 3]>;
}

macro_rules! impl_real {
    ($t:ty, $mat3:ty, $vec3:ty) => {
        impl Real for $t {
            fn invert_affine(transformation: &[[Self; 4]; 3]) -> Option<[[Self; 4]; 3]> {
                let [r0, r1, r2] = transformation;
                // glam is column-major
                let linear = <$mat3>::from_cols_array_2d(&[
                    [r0[0], r0[1], r0[2]],
                    [r1[0], r1[1], r1[2]],
                    [r2[0], r2[1], r2[2]],
                ])
                .transpose();
                let translation = <$vec3>::new(r0[3], r1[3], r2[3]);

                let scale: $t = (0..3).map(|i| linear.row(i).length()).product();
                let det = linear.determinant();
                if !(det.abs() > <$t>::EPSILON * scale) {
                    return None;
                }

                let inverse = linear.inverse();
                let t = -(inverse * translation);
                let rows = inverse.transpose().to_cols_array_2d();
                Some(std::array::from_fn(|i| {
                    [rows[i][0], rows[i][1], rows[i][2], t[i]]
                }))
            }
        }
    };
}

impl_real!(f32, Mat3, Vec3);
impl_real!(f64, DMat3, DVec3);
