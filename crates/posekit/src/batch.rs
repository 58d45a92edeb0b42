//! Conversion between batches of fixed-size values and flat `(shape, data)` buffers.
//!
//! A flat shape is the batch shape followed by the trailing dimensions of the representation,
//! e.g. `[2, 5, 3, 3]` for a 2x5 batch of rotation matrices.

use posekit_tensor::{Tensor, TensorError};

use crate::error::ConversionError;

fn check_flat_shape<const N: usize>(
    shape: &[usize],
    trailing: &[usize],
) -> Result<[usize; N], ConversionError> {
    let rank = N + trailing.len();
    if shape.len() != rank || shape[N..] != *trailing {
        let mut expected = shape.iter().take(N).copied().collect::<Vec<_>>();
        // pad a too short batch shape with ones
        expected.resize(N, 1);
        expected.extend_from_slice(trailing);
        return Err(ConversionError::shape_mismatch(&expected, shape));
    }
    let mut batch_shape = [0; N];
    batch_shape.copy_from_slice(&shape[..N]);
    Ok(batch_shape)
}

/// Build a batch of `K`-vectors from a flat shape and row-major data.
///
/// # Arguments
///
/// * `shape` - The batch shape followed by `K`.
/// * `data` - The flat data.
///
/// # Errors
///
/// Returns [`ConversionError::ShapeMismatch`] if `shape` is not `N` batch dimensions followed by
/// `K`, and [`ConversionError::TensorError`] if `data` does not hold exactly that many values.
///
/// # Example
///
/// ```
/// use posekit::batch::vectors_from_shape_slice;
///
/// let quaternions = vectors_from_shape_slice::<f64, 4, 1>(
///     &[2, 4],
///     &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
/// )
/// .unwrap();
/// assert_eq!(quaternions.shape, [2]);
/// assert!(vectors_from_shape_slice::<f64, 3, 1>(&[2, 4], &[0.0; 8]).is_err());
/// ```
pub fn vectors_from_shape_slice<T: Copy, const K: usize, const N: usize>(
    shape: &[usize],
    data: &[T],
) -> Result<Tensor<[T; K], N>, ConversionError> {
    let batch_shape = check_flat_shape::<N>(shape, &[K])?;
    let numel = batch_shape.iter().product::<usize>();
    if data.len() != numel * K {
        return Err(TensorError::invalid_shape(numel * K, data.len()).into());
    }
    let elements = (0..numel)
        .map(|b| std::array::from_fn(|i| data[b * K + i]))
        .collect();
    Ok(Tensor::from_shape_vec(batch_shape, elements)?)
}

/// Build a batch of `R`x`C` matrices from a flat shape and row-major data.
///
/// # Errors
///
/// Returns [`ConversionError::ShapeMismatch`] if `shape` is not `N` batch dimensions followed by
/// `[R, C]`, and [`ConversionError::TensorError`] if `data` does not hold exactly that many
/// values.
pub fn matrices_from_shape_slice<T: Copy, const R: usize, const C: usize, const N: usize>(
    shape: &[usize],
    data: &[T],
) -> Result<Tensor<[[T; C]; R], N>, ConversionError> {
    let batch_shape = check_flat_shape::<N>(shape, &[R, C])?;
    let numel = batch_shape.iter().product::<usize>();
    let stride = R * C;
    if data.len() != numel * stride {
        return Err(TensorError::invalid_shape(numel * stride, data.len()).into());
    }
    let elements = (0..numel)
        .map(|b| {
            std::array::from_fn(|i| std::array::from_fn(|j| data[b * stride + i * C + j]))
        })
        .collect();
    Ok(Tensor::from_shape_vec(batch_shape, elements)?)
}

/// Flatten a batch of `K`-vectors into its flat shape and row-major data.
pub fn vectors_to_flat<T: Copy, const K: usize, const N: usize>(
    tensor: &Tensor<[T; K], N>,
) -> (Vec<usize>, Vec<T>) {
    let mut shape = tensor.shape.to_vec();
    shape.push(K);
    let data = tensor.iter().flat_map(|v| v.iter().copied()).collect();
    (shape, data)
}

/// Flatten a batch of `R`x`C` matrices into its flat shape and row-major data.
pub fn matrices_to_flat<T: Copy, const R: usize, const C: usize, const N: usize>(
    tensor: &Tensor<[[T; C]; R], N>,
) -> (Vec<usize>, Vec<T>) {
    let mut shape = tensor.shape.to_vec();
    shape.extend_from_slice(&[R, C]);
    let data = tensor
        .iter()
        .flat_map(|m| m.iter().flat_map(|row| row.iter().copied()))
        .collect();
    (shape, data)
}

/// Apply a binary kernel over two batches, broadcasting batch dimensions of size one.
pub(crate) fn zip_batches<A, B, C, F, const N: usize>(
    lhs: &Tensor<A, N>,
    rhs: &Tensor<B, N>,
    op: F,
) -> Result<Tensor<C, N>, ConversionError>
where
    F: FnMut(&A, &B) -> C,
{
    log::trace!(
        "broadcasting batch shapes {:?} and {:?}",
        lhs.shape,
        rhs.shape
    );
    lhs.zip_broadcast(rhs, op).map_err(|err| match err {
        TensorError::DimensionMismatch { .. } => {
            ConversionError::shape_mismatch(&lhs.shape, &rhs.shape)
        }
        err => err.into(),
    })
}
