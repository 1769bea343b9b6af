//! Application of a pre-built LU factor pair by triangular solves.
//!
//! The pair (L, U) approximates some preconditioning operator M ≈ L·U; its
//! action on a vector is M⁻¹ r = U⁻¹ (L⁻¹ r), computed by forward then back
//! substitution. Building the factors (ILU, exact LU, ...) is the caller's
//! business; this type only validates and applies them.

use crate::error::KrylovError;
use faer::Mat;
use num_traits::Float;

/// Lower/upper triangular factor pair.
///
/// Only the respective triangles are read: entries above the diagonal of `l`
/// and below the diagonal of `u` are ignored.
pub struct LuFactors<T> {
    l: Mat<T>,
    u: Mat<T>,
    n: usize,
}

impl<T: Float> LuFactors<T> {
    /// Wrap a factor pair, checking that both are square and of equal size.
    pub fn new(l: Mat<T>, u: Mat<T>) -> Result<Self, KrylovError> {
        if l.nrows() != l.ncols() || u.nrows() != u.ncols() {
            return Err(KrylovError::FactorError(
                "triangular factors must be square".into(),
            ));
        }
        if l.nrows() != u.nrows() {
            return Err(KrylovError::FactorError(format!(
                "factor dimensions disagree: L is {0}x{0}, U is {1}x{1}",
                l.nrows(),
                u.nrows()
            )));
        }
        let n = l.nrows();
        Ok(Self { l, u, n })
    }

    /// The identity pair, M = I. Useful as the no-op preconditioner.
    pub fn identity(n: usize) -> Self {
        let eye = |i: usize, j: usize| if i == j { T::one() } else { T::zero() };
        Self { l: Mat::from_fn(n, n, eye), u: Mat::from_fn(n, n, eye), n }
    }

    /// Dimension of the factors.
    pub fn nrows(&self) -> usize {
        self.n
    }

    /// Apply M⁻¹: solve L z = r forward, then U w = z backward.
    ///
    /// # Panics
    /// Panics if `r.len()` does not match the factor dimension.
    pub fn apply(&self, r: &[T]) -> Result<Vec<T>, KrylovError> {
        assert_eq!(r.len(), self.n, "apply: vector has wrong length");
        let z = self.solve_lower(r)?;
        self.solve_upper(&z)
    }

    // forward substitution on the lower triangle of l
    fn solve_lower(&self, r: &[T]) -> Result<Vec<T>, KrylovError> {
        let mut z = r.to_vec();
        for i in 0..self.n {
            for j in 0..i {
                z[i] = z[i] - self.l[(i, j)] * z[j];
            }
            let d = self.l[(i, i)];
            if d == T::zero() {
                return Err(KrylovError::ZeroPivot(i));
            }
            z[i] = z[i] / d;
        }
        Ok(z)
    }

    // back substitution on the upper triangle of u
    fn solve_upper(&self, z: &[T]) -> Result<Vec<T>, KrylovError> {
        let mut w = z.to_vec();
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                w[i] = w[i] - self.u[(i, j)] * w[j];
            }
            let d = self.u[(i, i)];
            if d == T::zero() {
                return Err(KrylovError::ZeroPivot(i));
            }
            w[i] = w[i] / d;
        }
        Ok(w)
    }
}
