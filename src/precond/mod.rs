//! Preconditioner application for the Arnoldi step.
//!
//! Only the application side lives here: the step accepts a pre-built factor
//! pair and solves two triangular systems per candidate vector.

pub mod lu;
pub use lu::LuFactors;
