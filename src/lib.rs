//! arnoldi: single-step Arnoldi iteration for Krylov subspace methods
//!
//! This crate provides the building block of Krylov-subspace algorithms: one
//! step of the Arnoldi process, extending an orthonormal basis by one vector
//! and producing the matching Hessenberg column. Dense (Faer) and sparse
//! (CSR) operators are supported through a common matrix-vector capability
//! trait, and the product can be routed through a pre-built LU factor pair
//! for preconditioned iterations. The surrounding loop, and everything built
//! on top of it (GMRES, eigenvalue extraction, restarts), belongs to the
//! caller.

pub mod arnoldi;
pub mod basis;
pub mod core;
pub mod error;
pub mod matrix;
pub mod precond;

// Re-exports for convenience
pub use arnoldi::*;
pub use basis::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use precond::*;
