use posekit_tensor::TensorError;
use thiserror::Error;

/// An error type for rotation, pose and coordinate conversions.
#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    /// The Euler convention is not a permutation of the axes `x`, `y` and `z`.
    #[error("Invalid Euler convention {0:?}. Expected a permutation of \"xyz\".")]
    InvalidConvention(String),

    /// The shape of an input does not match the arity of its representation, or two batch
    /// shapes cannot be broadcast together.
    #[error("Shape mismatch: {expected:?} != {actual:?}")]
    ShapeMismatch {
        /// The expected shape.
        expected: Vec<usize>,
        /// The shape that was provided.
        actual: Vec<usize>,
    },

    /// The transformation matrix cannot be inverted.
    #[error("The transformation matrix is singular")]
    SingularMatrix,

    /// Tensor error
    #[error("Error with the tensor: {0}")]
    TensorError(#[from] TensorError),
}

impl ConversionError {
    pub(crate) fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}
