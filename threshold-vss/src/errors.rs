//! Secret-sharing errors.

/// Secret-sharing error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("duplicate share index")]
    DuplicateShareIndex,
    #[error("rejection sampling exhausted")]
    ExhaustedSampling,
    #[error("not enough shares: required {required}, provided {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("random source failure")]
    RandomSource,
}

/// Secret-sharing result.
pub type Result<T> = std::result::Result<T, Error>;
