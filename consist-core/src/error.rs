//! Errors returned by consist and rolling stock operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistError {
    /// A unit (or position) that is not part of the consist stock was referenced.
    #[error("{unit} is not part of consist #{consist}")]
    NotFound { unit: String, consist: u32 },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Arithmetic on a quantity that cannot support it, e.g. a zero capacity divisor.
    #[error("degenerate arithmetic: {0}")]
    ArithmeticDegenerate(String),
}

pub type ConsistResult<T> = Result<T, ConsistError>;
