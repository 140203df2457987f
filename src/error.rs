use thiserror::Error;

use crate::bounds::BoundSpec;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("bounds must be one of {}, got {token:?}", BoundSpec::expected())]
    InvalidBoundSpec { token: String },

    #[error("bad value for range")]
    BadValue,

    #[error("range lower bound must be less than or equal to range upper bound")]
    LowerExceedsUpper,

    #[error("no implicit conversion into range")]
    NotConvertible(#[source] Box<RangeError>),

    #[error("result of range union would not be contiguous")]
    NonContiguousUnion,

    #[error("range bound has no successor")]
    SuccessorOverflow,
}
