//! Dense-operator construction on top of Faer.

use crate::core::traits::{Indexing, MatVec};
use faer::Mat;

/// Dense operators usable by the kernel, constructible from raw storage.
pub trait DenseOperator<T>: MatVec<Vec<T>> + Indexing {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;
}

impl<T: Copy + num_traits::Float> DenseOperator<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), nrows * ncols, "from_raw: storage length mismatch");
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }
}
