//! Fixed-size representations handled by the conversions.
//!
//! All matrices are row-major: `m[row][col]`. Quaternions are scalar-last.

/// Rotation vector `θ·e = [θe_x, θe_y, θe_z]`.
pub type RotVec<T> = [T; 3];

/// Rotation matrix, row-major.
pub type RotMat<T> = [[T; 3]; 3];

/// Euler angles `[φ_a, φ_b, φ_c]` for a convention `abc`.
pub type EulerAngles<T> = [T; 3];

/// Quaternion `[q_i, q_j, q_k, q_r]`, vector part first and real part last.
pub type Quaternion<T> = [T; 4];

/// Unit axis and angle `[e_x, e_y, e_z, θ]`.
pub type AxisAngle<T> = [T; 4];

/// Matrix pose `[R | t]`, three rows of four.
pub type MatPose<T> = [[T; 4]; 3];

/// Rotation vector pose `[x, y, z, θe_x, θe_y, θe_z]`.
pub type RotVecPose<T> = [T; 6];

/// Euler pose `[x, y, z, φ_a, φ_b, φ_c]`.
pub type EulerPose<T> = [T; 6];

/// Quaternion pose `[x, y, z, q_i, q_j, q_k, q_r]`.
pub type QuaternionPose<T> = [T; 7];

/// Axis-angle pose `[x, y, z, e_x, e_y, e_z, θ]`.
pub type AxisAnglePose<T> = [T; 7];

/// Cartesian coordinate `[x, y, z]`.
pub type Cartesian<T> = [T; 3];

/// Polar coordinate `[r, θ, φ]`: radius, polar angle from `+z`, azimuth from `+x` towards `+y`.
pub type Polar<T> = [T; 3];

/// Homogeneous coordinate `[x, y, z, w]`.
pub type HomogeneousCoord<T> = [T; 4];

/// Homogeneous transformation, four rows of four.
pub type HomogeneousTransform<T> = [[T; 4]; 4];
