use thiserror::Error;

/// Errors raised while building or combining batches.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// The batch shape holds a different number of elements than the data.
    #[error("batch shape holds {expected} elements but {actual} were given")]
    InvalidShape {
        /// Number of elements implied by the batch shape
        expected: usize,
        /// Number of elements in the data
        actual: usize,
    },

    /// Two batch shapes cannot be combined.
    #[error("{message}: {expected} vs {actual}")]
    DimensionMismatch {
        /// What the shapes were combined for
        message: String,
        /// Shape of the left operand
        expected: String,
        /// Shape of the right operand
        actual: String,
    },
}

impl TensorError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// # Examples
///
/// ```rust
/// use posekit_tensor::get_strides_from_shape;
///
/// let strides = get_strides_from_shape([2, 3, 4]);
/// assert_eq!(strides, [12, 4, 1]);
///
/// // a rank-0 tensor has no strides
/// assert_eq!(get_strides_from_shape([]), []);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array (tensor) with owned, contiguous row-major data.
///
/// # Type Parameters
///
/// * `T` - The element type stored in the tensor. For pose and rotation batches this is a
///   fixed-size array such as `[f64; 4]` or `[[f64; 3]; 3]`.
/// * `N` - The number of batch dimensions. `N = 0` holds a single element.
///
/// Tensors are `Send` and `Sync` whenever `T` is.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T, const N: usize> {
    data: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use posekit_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.shape, [2, 2]);
    /// assert_eq!(t.strides, [2, 1]);
    /// ```
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Tensor` with every element set to `value`.
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            data: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Create a new `Tensor` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called once per element, in memory order, with the index of the
    /// element to generate.
    ///
    /// # Example
    ///
    /// ```
    /// use posekit_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_fn([2, 2], |[i, j]| (i * 2 + j) as u8);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], mut f: F) -> Self
    where
        F: FnMut([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let data: Vec<T> = (0..numel)
            .map(|i| {
                let mut index = [0; N];
                let mut j = i;
                for k in (0..N).rev() {
                    index[k] = j % shape[k];
                    j /= shape[k];
                }
                f(index)
            })
            .collect();
        Self {
            data,
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Get the data of the tensor as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements of the tensor in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Get the offset of the element at the given index.
    ///
    /// Returns `None` when any index component is out of bounds.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Get the element at the given index, checking if the index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use posekit_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.get([1, 0]), Some(&3));
    /// assert!(t.get([2, 0]).is_none());
    /// ```
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.get_iter_offset(index).and_then(|i| self.data.get(i))
    }

    /// Apply a function to each element of the tensor.
    ///
    /// The output keeps the shape of `self`.
    pub fn map<U, F>(&self, f: F) -> Tensor<U, N>
    where
        F: FnMut(&T) -> U,
    {
        Tensor {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// Apply a fallible function to each element of the tensor.
    ///
    /// # Errors
    ///
    /// The first error returned by `f` is propagated and no tensor is produced.
    pub fn try_map<U, E, F>(&self, f: F) -> Result<Tensor<U, N>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        let data = self.data.iter().map(f).collect::<Result<Vec<U>, E>>()?;
        Ok(Tensor {
            data,
            shape: self.shape,
            strides: self.strides,
        })
    }

    /// Apply an element-wise operation on two tensors with identical shapes.
    ///
    /// # Errors
    ///
    /// If the shapes of the tensors differ, an error is returned. Use
    /// [`Tensor::zip_broadcast`] when batch dimensions of size one should be expanded.
    pub fn element_wise_op<U, V, F>(
        &self,
        other: &Tensor<U, N>,
        mut op: F,
    ) -> Result<Tensor<V, N>, TensorError>
    where
        F: FnMut(&T, &U) -> V,
    {
        if self.shape != other.shape {
            return Err(TensorError::dimension_mismatch(
                "Element-wise operations require identical shapes",
                &self.shape,
                &other.shape,
            ));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| op(a, b))
            .collect();

        Ok(Tensor {
            data,
            shape: self.shape,
            strides: self.strides,
        })
    }
}
