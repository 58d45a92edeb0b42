//! Per-element formulas on fixed-size arrays.
//!
//! These are the building blocks of the batched API in [`crate::orientation`],
//! [`crate::pose`] and [`crate::position`], which apply them to every element of a
//! [`crate::Tensor`]. They are exposed for callers that work with single values.

/// Fixed-size matrix helpers.
pub mod linalg;

/// Orientation conversions.
pub mod orientation;

/// Pose conversions.
pub mod pose;

/// Coordinate and frame utilities.
pub mod position;
