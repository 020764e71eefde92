use crate::constants::{MAX_PRECISION, MAX_SCALE};
use alloc::string::{String, ToString};
use core::fmt;
use decimal_parser::ParserError;

/// Error type for the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The text could not be parsed as a decimal literal.
    MalformedInput(String),
    /// A value needs more digits than the target precision allows.
    PrecisionOverflow { inferred: i32, target: i32 },
    /// Moving a value to a new scale would not fit in 128 bits.
    RescaleOverflow { value: i128, from_scale: i32, to_scale: i32 },
    /// Moving a value to a smaller scale would discard non-zero digits.
    RescaleDataLoss { value: i128, from_scale: i32, to_scale: i32 },
    /// The precision/scale pair cannot describe a 128 bit decimal.
    InvalidDecimalType { precision: i32, scale: i32 },
    /// Metadata was read before any value was observed.
    MetadataUnset,
}

impl From<ParserError> for Error {
    #[inline]
    fn from(err: ParserError) -> Self {
        match err {
            ParserError::ExceedsMaximumPrecision(precision) => Self::PrecisionOverflow {
                inferred: i32::try_from(precision).unwrap_or(i32::MAX),
                target: MAX_PRECISION,
            },
            err => Self::MalformedInput(err.to_string()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MalformedInput(ref err) => write!(f, "Invalid decimal: {}", err),
            Self::PrecisionOverflow { inferred, target } => write!(
                f,
                "Decimal value with precision {} does not fit into the target precision {}",
                inferred, target
            ),
            Self::RescaleOverflow {
                value,
                from_scale,
                to_scale,
            } => write!(
                f,
                "Rescaling {} from scale {} to scale {} overflows 128 bits",
                value, from_scale, to_scale
            ),
            Self::RescaleDataLoss {
                value,
                from_scale,
                to_scale,
            } => write!(
                f,
                "Rescaling {} from scale {} to scale {} would discard digits",
                value, from_scale, to_scale
            ),
            Self::InvalidDecimalType { precision, scale } => write!(
                f,
                "Invalid decimal type ({}, {}): precision must be within 1..={} and scale within 0..=min(precision, {})",
                precision, scale, MAX_PRECISION, MAX_SCALE
            ),
            Self::MetadataUnset => f.pad("Decimal metadata has not observed any values"),
        }
    }
}
