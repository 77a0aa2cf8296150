//! Error type for group parameter handling, delta multiplication and
//! vector generation.

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid group parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("negative scalar")]
    NegativeScalar,

    #[error("empty range: lower bound is not below upper bound")]
    EmptyRange,

    #[error("range upper bound exceeds the group order")]
    RangeExceedsOrder,

    #[error("no multiple of the squared cofactor in the target range")]
    NoAlignedTarget,

    #[error("unexpected GCD {gcd:#x} between clamped scalar and group order")]
    UnexpectedGcd { gcd: BigUint },

    #[error("construction failed: no clamped candidate found")]
    ConstructionExhausted,

    #[error("value does not fit in {width} bytes")]
    EncodingOverflow { width: usize },

    #[error("invalid length {got}: expected {expected} bytes")]
    InvalidLength { expected: usize, got: usize },

    #[error("unknown curve family: {0}")]
    UnknownCurve(String),
}

pub type Result<T> = core::result::Result<T, Error>;
