//! Matrix module: dense and sparse operator types.

pub mod dense;
pub use dense::DenseOperator;
pub mod sparse;
pub use sparse::CsrMatrix;
