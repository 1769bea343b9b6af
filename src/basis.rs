//! Growable container for the orthonormal Krylov basis.
//!
//! The basis is owned by the caller across iterations: the step reads columns
//! `0..=k` and returns the candidate for column `k + 1`, which the caller
//! pushes here. Orthonormality of the stored columns is the caller's
//! precondition; the container only enforces column length.

use crate::core::traits::InnerProduct;
use crate::error::KrylovError;
use num_traits::Float;

/// Ordered collection of basis columns, all of length `dim`.
#[derive(Debug)]
pub struct KrylovBasis<T> {
    dim: usize,
    columns: Vec<Vec<T>>,
}

impl<T: Float + Send + Sync> KrylovBasis<T> {
    /// Seed a basis with `v / ‖v‖₂` as column 0.
    ///
    /// A zero seed cannot span a Krylov subspace and is rejected.
    pub fn from_seed(seed: Vec<T>) -> Result<Self, KrylovError> {
        let ip = ();
        let beta = ip.norm(&seed);
        if beta == T::zero() {
            return Err(KrylovError::ZeroSeed);
        }
        let dim = seed.len();
        let v0 = seed.into_iter().map(|x| x / beta).collect();
        Ok(Self { dim, columns: vec![v0] })
    }
}

impl<T> KrylovBasis<T> {
    /// Empty basis for vectors of length `dim`, pre-allocating `capacity`
    /// column slots.
    pub fn with_capacity(dim: usize, capacity: usize) -> Self {
        Self { dim, columns: Vec::with_capacity(capacity) }
    }

    /// Append a column.
    ///
    /// # Panics
    /// Panics if `column.len() != dim`.
    pub fn push(&mut self, column: Vec<T>) {
        assert_eq!(column.len(), self.dim, "push: column has wrong length");
        self.columns.push(column);
    }

    /// The `i`-th basis column.
    pub fn column(&self, i: usize) -> &Vec<T> {
        &self.columns[i]
    }

    /// Number of stored columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if no column has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Length of each column.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Iterate over the stored columns in order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec<T>> {
        self.columns.iter()
    }
}
