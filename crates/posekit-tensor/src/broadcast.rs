use crate::tensor::{get_strides_from_shape, Tensor, TensorError};

/// Compute the broadcast shape of two batch shapes of the same rank.
///
/// Dimensions broadcast when they are equal or when either of them is one.
///
/// # Errors
///
/// Returns [`TensorError::DimensionMismatch`] when a pair of dimensions is neither equal nor one.
///
/// # Example
///
/// ```
/// use posekit_tensor::broadcast_shapes;
///
/// assert_eq!(broadcast_shapes([4, 1], [1, 3]).unwrap(), [4, 3]);
/// assert!(broadcast_shapes([4, 2], [3, 2]).is_err());
/// ```
pub fn broadcast_shapes<const N: usize>(
    lhs: [usize; N],
    rhs: [usize; N],
) -> Result<[usize; N], TensorError> {
    let mut shape = [0; N];
    for (out, (&a, &b)) in shape.iter_mut().zip(lhs.iter().zip(rhs.iter())) {
        *out = match (a, b) {
            (a, b) if a == b => a,
            (1, b) => b,
            (a, 1) => a,
            _ => {
                return Err(TensorError::dimension_mismatch(
                    "Batch shapes cannot be broadcast together",
                    &lhs,
                    &rhs,
                ))
            }
        };
    }
    Ok(shape)
}

impl<T, const N: usize> Tensor<T, N> {
    /// Apply an element-wise operation on two tensors, broadcasting dimensions of size one.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes cannot be broadcast together.
    pub fn zip_broadcast<U, V, F>(
        &self,
        other: &Tensor<U, N>,
        mut op: F,
    ) -> Result<Tensor<V, N>, TensorError>
    where
        F: FnMut(&T, &U) -> V,
    {
        if self.shape == other.shape {
            return self.element_wise_op(other, op);
        }

        let shape = broadcast_shapes(self.shape, other.shape)?;
        let out_strides = get_strides_from_shape(shape);
        let numel = shape.iter().product::<usize>();

        // size-one dimensions contribute no offset
        let lhs_strides = broadcast_strides(self.shape, self.strides);
        let rhs_strides = broadcast_strides(other.shape, other.strides);

        let (lhs, rhs) = (self.as_slice(), other.as_slice());
        let mut data = Vec::with_capacity(numel);
        for offset in 0..numel {
            let mut rem = offset;
            let (mut lhs_offset, mut rhs_offset) = (0, 0);
            for dim in 0..N {
                let idx = rem / out_strides[dim];
                rem %= out_strides[dim];
                lhs_offset += idx * lhs_strides[dim];
                rhs_offset += idx * rhs_strides[dim];
            }
            data.push(op(&lhs[lhs_offset], &rhs[rhs_offset]));
        }

        Tensor::from_shape_vec(shape, data)
    }
}

fn broadcast_strides<const N: usize>(shape: [usize; N], strides: [usize; N]) -> [usize; N] {
    let mut out = strides;
    for (stride, &dim) in out.iter_mut().zip(shape.iter()) {
        if dim == 1 {
            *stride = 0;
        }
    }
    out
}
