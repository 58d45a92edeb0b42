#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `posekit` converts between the rotation representations used in robotics and computer vision
//! (rotation vectors, rotation matrices, Euler angles, quaternions and axis-angle pairs), their
//! pose extensions with a leading translation, and Cartesian, polar and homogeneous coordinates.
//!
//! Every conversion takes a batch as a [`Tensor`] whose element type is the fixed-size
//! representation and returns a freshly allocated batch of the same shape. The scalar type is
//! any [`Real`], i.e. `f32` or `f64`.
//!
//! Conventions:
//!
//! * Matrices are row-major, `m[row][col]`.
//! * Quaternions are scalar-last, `[q_i, q_j, q_k, q_r]`.
//! * Euler angles under [`EulerConvention::Zyx`] are `[yaw, pitch, roll]` with
//!   `R = R_z(yaw) · R_y(pitch) · R_x(roll)`.
//! * Polar coordinates are `[r, θ, φ]` with `θ` measured from `+z` and `φ = atan2(y, x)`.
//!
//! # Quick Start
//!
//! ```rust
//! use posekit::{orientation, EulerConvention, Tensor};
//!
//! // a quarter turn about y
//! let rot_vec = Tensor::<[f64; 3], 1>::from_shape_vec(
//!     [1],
//!     vec![[0.0, std::f64::consts::FRAC_PI_2, 0.0]],
//! )?;
//!
//! let rot_mat = orientation::rot_vec_to_rot_mat(&rot_vec);
//! let convention: EulerConvention = "zyx".parse()?;
//! let euler = orientation::rot_mat_to_euler(&rot_mat, convention);
//! let quaternion = orientation::euler_to_quaternion(&euler, convention);
//!
//! let q = quaternion.as_slice()[0];
//! assert!((q[1] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
//! assert!((q[3] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
//! # Ok::<(), posekit::ConversionError>(())
//! ```
//!
//! Single values are rank-0 tensors, and the per-element formulas are also available directly
//! in [`kernels`].

/// Conversion between batches and flat `(shape, data)` buffers.
pub mod batch;

mod convention;

/// Error types for the conversions.
pub mod error;

/// Per-element conversion formulas.
pub mod kernels;

/// Batched orientation conversions.
pub mod orientation;

/// Batched pose conversions.
pub mod pose;

/// Batched coordinate and frame utilities.
pub mod position;

/// Random rotations for tests and benchmarks.
pub mod random;

mod scalar;

/// Fixed-size representation types.
pub mod types;

pub use crate::convention::{Axis, EulerConvention};
pub use crate::error::ConversionError;
pub use crate::scalar::Real;
pub use posekit_tensor as tensor;
pub use posekit_tensor::Tensor;
