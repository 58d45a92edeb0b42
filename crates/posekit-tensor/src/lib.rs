#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `posekit-tensor` provides the owned, row-major [`Tensor`] used by `posekit` to carry batches
//! of fixed-size values. The const generic `N` is the number of batch dimensions and the element
//! type carries the trailing shape, e.g. a batch of rotation matrices is a
//! `Tensor<[[f64; 3]; 3], N>`. A rank-0 tensor holds exactly one element.
//!
//! # Quick Start
//!
//! ```rust
//! use posekit_tensor::Tensor;
//!
//! // a 2x3 batch of 3-vectors
//! let t = Tensor::<[f64; 3], 2>::from_shape_val([2, 3], [0.0, 0.0, 1.0]);
//! assert_eq!(t.numel(), 6);
//!
//! // element-wise conversion keeps the batch shape
//! let norms = t.map(|v| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt());
//! assert_eq!(norms.shape, [2, 3]);
//! assert_eq!(norms.get([1, 2]), Some(&1.0));
//! ```
//!
//! Binary operations broadcast batch dimensions of size one:
//!
//! ```rust
//! use posekit_tensor::Tensor;
//!
//! let a = Tensor::<f32, 2>::from_shape_vec([2, 1], vec![1.0, 2.0]).unwrap();
//! let b = Tensor::<f32, 2>::from_shape_vec([1, 3], vec![10.0, 20.0, 30.0]).unwrap();
//! let c = a.zip_broadcast(&b, |x, y| x + y).unwrap();
//! assert_eq!(c.shape, [2, 3]);
//! assert_eq!(c.as_slice(), &[11.0, 21.0, 31.0, 12.0, 22.0, 32.0]);
//! ```

/// Broadcasting rules for binary operations over batch dimensions.
pub mod broadcast;

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

pub use crate::broadcast::broadcast_shapes;
pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};

/// Type alias for a single value wrapped as a rank-0 tensor.
pub type Tensor0<T> = Tensor<T, 0>;

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;
