// CSR sparse operator

use crate::core::traits::{Indexing, MatVec};
use num_traits::Float;

/// Compressed sparse row matrix.
///
/// Stores the usual three-array form: `row_ptr` has `nrows + 1` entries, and
/// the column indices / values of row `i` live in `row_ptr[i]..row_ptr[i+1]`.
/// Implements [`MatVec`] so a sparse operator drives the Arnoldi step exactly
/// like a dense one.
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Float> CsrMatrix<T> {
    /// Build a CSR matrix from raw row-ptr, col-idx, and values.
    ///
    /// # Panics
    /// Panics if the arrays are structurally inconsistent: wrong `row_ptr`
    /// length, non-monotone row offsets, out-of-range column index, or a
    /// values/col-idx length mismatch.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), nrows + 1, "from_csr: row_ptr must have nrows + 1 entries");
        assert_eq!(row_ptr[0], 0, "from_csr: row_ptr must start at 0");
        assert!(
            row_ptr.windows(2).all(|w| w[0] <= w[1]),
            "from_csr: row_ptr must be non-decreasing"
        );
        assert_eq!(row_ptr[nrows], col_idx.len(), "from_csr: row_ptr end must equal nnz");
        assert_eq!(col_idx.len(), values.len(), "from_csr: col_idx/values length mismatch");
        assert!(
            col_idx.iter().all(|&j| j < ncols),
            "from_csr: column index out of range"
        );
        Self { nrows, ncols, row_ptr, col_idx, values }
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }
}

impl<T: Float> MatVec<Vec<T>> for CsrMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.ncols, x.len(), "spmv: input vector has wrong length");
        assert_eq!(self.nrows, y.len(), "spmv: output vector has wrong length");
        for i in 0..self.nrows {
            let mut acc = T::zero();
            for p in self.row_ptr[i]..self.row_ptr[i + 1] {
                acc = acc + self.values[p] * x[self.col_idx[p]];
            }
            y[i] = acc;
        }
    }
}

impl<T> Indexing for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
}
