#![no_std]

mod base_10;
mod scientific;

pub use base_10::parse_radix_10;
pub use scientific::parse_scientific;

use base_10::Digits;

/// The largest number of significant digits an `i128` mantissa can carry without loss.
pub const MAX_PRECISION: u32 = 38;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParserError {
    /// Parser input was empty
    EmptyInput,
    /// The literal needs this many digits, more than a 128 bit mantissa can hold
    ExceedsMaximumPrecision(u32),
    /// Invalid character was found when parsing
    InvalidCharacter,
    /// Multiple decimal points were found in the input string
    MultipleDecimalPoints,
    /// Number contained valid characters, none of which were digits
    NoDigits,
    /// Input named a special value (NaN or infinity)
    SpecialValue,
    /// When parsing scientific notation, the base could not be extracted
    UnableToExtractBase,
    /// When parsing scientific notation, the exponent could not be extracted
    UnableToExtractExponent,
    /// When parsing scientific notation, the exponent could not be parsed
    UnableToParseExponent,
}

impl core::fmt::Display for ParserError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParserError::EmptyInput => write!(f, "empty"),
            ParserError::ExceedsMaximumPrecision(precision) => {
                write!(f, "precision {} exceeds the maximum representable precision", precision)
            }
            ParserError::InvalidCharacter => write!(f, "unknown character"),
            ParserError::MultipleDecimalPoints => write!(f, "two decimal points"),
            ParserError::NoDigits => write!(f, "no digits found"),
            ParserError::SpecialValue => write!(f, "special values have no fixed-point representation"),
            ParserError::UnableToExtractBase => write!(f, "failed to parse"),
            ParserError::UnableToExtractExponent => write!(f, "failed to parse"),
            ParserError::UnableToParseExponent => write!(f, "failed to parse"),
        }
    }
}

/// A parsed literal: `value * 10^-scale`, plus the number of digits needed to hold it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalComponents {
    pub value: i128,
    pub precision: u32,
    pub scale: u32,
}

/// Parses a base 10 literal such as `-12.50`, `.5` or `1.23E+7` exactly.
///
/// Leading zeros are not significant. The reported precision is never smaller than the scale
/// (so `0.00123` has precision 5) and never smaller than 1. Exponents that would leave a
/// negative scale are folded into the mantissa so that the scale is always `>= 0`.
pub fn parse_decimal(input: &str) -> Result<DecimalComponents, ParserError> {
    if is_special(input) {
        return Err(ParserError::SpecialValue);
    }
    if input.bytes().any(|b| b == b'e' || b == b'E') {
        parse_scientific(input)
    } else {
        parse_radix_10(input)
    }
}

fn is_special(input: &str) -> bool {
    let unsigned = input.strip_prefix(|c| c == '-' || c == '+').unwrap_or(input);
    ["nan", "snan", "inf", "infinity"]
        .iter()
        .any(|special| unsigned.eq_ignore_ascii_case(special))
}

#[inline]
fn pow10(exp: u32) -> u128 {
    10u128.pow(exp)
}

/// Applies the exponent to the collected digits and produces the final components.
pub(crate) fn handle_data(digits: Digits, exponent: i64) -> Result<DecimalComponents, ParserError> {
    let mut precision = i64::from(digits.significant);
    let mut scale = i64::from(digits.fractional) - exponent;
    // Digits the mantissa has to grow by to move the decimal point right, e.g. 1.2E+10
    let mut shift = 0;

    if scale < 0 {
        if digits.mantissa != 0 {
            shift = -scale;
            precision += shift;
        }
        scale = 0;
    }

    let precision = precision.max(scale).max(1);
    if precision > i64::from(MAX_PRECISION) {
        let precision = u32::try_from(precision).unwrap_or(u32::MAX);
        return Err(ParserError::ExceedsMaximumPrecision(precision));
    }

    // At most 38 digits, always below i128::MAX
    let value = (digits.mantissa * pow10(shift as u32)) as i128;
    Ok(DecimalComponents {
        value: if digits.negative { -value } else { value },
        precision: precision as u32,
        scale: scale as u32,
    })
}
