use std::num::TryFromIntError;

use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JuicedError {
    #[error("Conversion failure")]
    ConversionFailure,

    #[error("Out of range integral conversion attempted")]
    OutOfRangeIntegralConversion,

    #[error("The vault version received is unknown")]
    UnknownVaultVersion,

    #[error("The sort filter received is unknown")]
    UnknownSortFilter,

    #[error("The vault snapshot has not been loaded yet")]
    MissingSnapshot,

    #[error("The amount of the action is zero")]
    ZeroAmount,
}

impl<T> From<TryFromPrimitiveError<T>> for JuicedError
where
    T: TryFromPrimitive,
{
    fn from(_: TryFromPrimitiveError<T>) -> Self {
        JuicedError::ConversionFailure
    }
}

impl From<TryFromIntError> for JuicedError {
    fn from(_: TryFromIntError) -> Self {
        JuicedError::OutOfRangeIntegralConversion
    }
}

impl From<strum::ParseError> for JuicedError {
    fn from(_: strum::ParseError) -> Self {
        JuicedError::UnknownSortFilter
    }
}

pub type JuicedResult<T = ()> = std::result::Result<T, JuicedError>;
