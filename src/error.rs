use thiserror::Error;

// Unified error type for the crate

#[derive(Error, Debug)]
pub enum KrylovError {
    #[error("factor error: {0}")]
    FactorError(String),
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("zero seed vector: cannot start a Krylov basis")]
    ZeroSeed,
}
