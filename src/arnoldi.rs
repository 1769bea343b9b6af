//! Single step of the Arnoldi process (Saad §6.3).
//!
//! Given an orthonormal Krylov basis V with columns 0..=k, one step computes
//! the k-th Hessenberg column and the candidate for basis column k+1:
//!
//! - candidate `w = A·V[:,k]`, or `U⁻¹L⁻¹A·V[:,k]` through a supplied factor
//!   pair;
//! - modified Gram-Schmidt: for each i ≤ k, `h[i] = w·V[:,i]` against the
//!   already-deflated `w`, then `w ← w − h[i]·V[:,i]`;
//! - `h[k+1] = ‖w‖₂`; if that residual is negligible the subspace is
//!   invariant under A (happy breakdown) and no new column exists, otherwise
//!   the candidate is `w / h[k+1]`.
//!
//! The step is pure: it reads the operator, basis, and factors, and returns
//! fresh data. The caller owns the loop over k, pushes each returned column
//! onto the basis, and accumulates the Hessenberg matrix.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems, 2nd
//!   Edition. SIAM. §6.3

use crate::basis::KrylovBasis;
use crate::core::traits::{InnerProduct, MatVec};
use crate::error::KrylovError;
use crate::precond::LuFactors;
use num_traits::Float;

/// Outcome of one Arnoldi step.
#[derive(Clone, Debug)]
pub struct StepResult<T> {
    /// Hessenberg column: `k + 2` entries, projection coefficients in
    /// `0..=k`, residual norm at `k + 1`.
    pub column: Vec<T>,
    /// Unit-length extension of the basis, or `None` on breakdown.
    pub next: Option<Vec<T>>,
}

impl<T: Copy> StepResult<T> {
    /// The subdiagonal entry `h[k+1]`.
    pub fn residual_norm(&self) -> T {
        *self.column.last().expect("Hessenberg column is never empty")
    }

    /// True if the Krylov subspace is invariant and cannot be extended.
    pub fn is_breakdown(&self) -> bool {
        self.next.is_none()
    }
}

/// Arnoldi step kernel with its numerical knobs.
///
/// # Type Parameters
/// * `T` - Scalar type (e.g., f32, f64)
pub struct ArnoldiStep<T> {
    /// Breakdown threshold, relative to the candidate norm before
    /// orthogonalization. Zero restores an exact `h[k+1] == 0` test.
    pub breakdown_tol: T,
    /// Run a second Gram-Schmidt sweep, folding the corrections into the
    /// Hessenberg column.
    pub reorthogonalize: bool,
}

impl<T: Float> ArnoldiStep<T> {
    /// Kernel with the default breakdown tolerance (1e-14) and a single
    /// orthogonalization sweep.
    pub fn new() -> Self {
        Self {
            breakdown_tol: num_traits::cast::<f64, T>(1e-14).unwrap(),
            reorthogonalize: false,
        }
    }

    /// Set the relative breakdown tolerance.
    pub fn with_breakdown_tol(mut self, tol: T) -> Self {
        self.breakdown_tol = tol;
        self
    }

    /// Enable the second orthogonalization sweep.
    pub fn with_reorthogonalization(mut self) -> Self {
        self.reorthogonalize = true;
        self
    }

    /// Compute Hessenberg column k and the candidate basis column k+1.
    ///
    /// Reads basis columns `0..=k`; on success the caller is expected to push
    /// the returned vector as column `k + 1`. With `factors` supplied the
    /// operator is `U⁻¹L⁻¹A` instead of `A`.
    ///
    /// # Panics
    /// Panics if the basis holds fewer than `k + 1` columns, or on any
    /// operator/basis/factor dimension mismatch.
    pub fn step<M>(
        &self,
        a: &M,
        basis: &KrylovBasis<T>,
        k: usize,
        factors: Option<&LuFactors<T>>,
    ) -> Result<StepResult<T>, KrylovError>
    where
        M: MatVec<Vec<T>>,
        (): InnerProduct<Vec<T>, Scalar = T>,
    {
        assert!(k < basis.len(), "step: basis must hold columns 0..=k");
        let ip = ();
        let n = basis.dim();

        let mut w = vec![T::zero(); n];
        a.matvec(basis.column(k), &mut w);
        if let Some(m) = factors {
            w = m.apply(&w)?;
        }
        // scale for the relative breakdown test
        let scale = ip.norm(&w);

        // Modified Gram-Schmidt: project against the current, already
        // deflated w, one basis column at a time.
        let mut column = vec![T::zero(); k + 2];
        for i in 0..=k {
            let hi = ip.dot(&w, basis.column(i));
            column[i] = hi;
            for (wj, vj) in w.iter_mut().zip(basis.column(i)) {
                *wj = *wj - hi * *vj;
            }
        }
        if self.reorthogonalize {
            for i in 0..=k {
                let corr = ip.dot(&w, basis.column(i));
                column[i] = column[i] + corr;
                for (wj, vj) in w.iter_mut().zip(basis.column(i)) {
                    *wj = *wj - corr * *vj;
                }
            }
        }

        let res = ip.norm(&w);
        column[k + 1] = res;
        if res <= self.breakdown_tol * scale {
            return Ok(StepResult { column, next: None });
        }

        let inv = T::one() / res;
        let next = w.into_iter().map(|wi| wi * inv).collect();
        Ok(StepResult { column, next: Some(next) })
    }
}

impl<T: Float> Default for ArnoldiStep<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One Arnoldi step with default knobs.
pub fn arnoldi_step<M, T>(
    a: &M,
    basis: &KrylovBasis<T>,
    k: usize,
    factors: Option<&LuFactors<T>>,
) -> Result<StepResult<T>, KrylovError>
where
    M: MatVec<Vec<T>>,
    (): InnerProduct<Vec<T>, Scalar = T>,
    T: Float,
{
    ArnoldiStep::new().step(a, basis, k, factors)
}
