use crate::{handle_data, DecimalComponents, ParserError, MAX_PRECISION};

/// Digits collected from the plain (exponent free) part of a literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Digits {
    pub mantissa: u128,
    pub negative: bool,
    /// Digits after the first non-zero digit, including trailing zeros
    pub significant: u32,
    /// Digits after the decimal point, including leading zeros
    pub fractional: u32,
}

#[inline]
pub fn parse_radix_10(str: &str) -> Result<DecimalComponents, ParserError> {
    let digits = parse_digits(str.as_bytes())?;
    handle_data(digits, 0)
}

#[inline]
pub(crate) fn parse_digits(bytes: &[u8]) -> Result<Digits, ParserError> {
    match bytes {
        [b'-', rest @ ..] => dispatch_digits::<true>(rest),
        [b'+', rest @ ..] => dispatch_digits::<false>(rest),
        [_, ..] => dispatch_digits::<false>(bytes),
        [] => Err(ParserError::EmptyInput),
    }
}

/// Walks the digits following an optional sign:
///
/// * NEG - we've encountered a `-` and the number is negative
#[inline]
fn dispatch_digits<const NEG: bool>(bytes: &[u8]) -> Result<Digits, ParserError> {
    let mut digits = Digits {
        negative: NEG,
        ..Digits::default()
    };
    let mut point = false;
    let mut has = false;

    for &b in bytes {
        match b {
            b'0'..=b'9' => {
                has = true;
                handle_digit(&mut digits, point, b - b'0');
            }
            b'.' if !point => point = true,
            b => return tail_invalid_digit(b),
        }
    }

    if has {
        Ok(digits)
    } else {
        tail_no_has()
    }
}

#[inline]
fn handle_digit(digits: &mut Digits, point: bool, digit: u8) {
    if point {
        digits.fractional = digits.fractional.saturating_add(1);
    }
    // Leading zeros carry no precision
    if digits.significant == 0 && digit == 0 {
        return;
    }
    digits.significant = digits.significant.saturating_add(1);
    // Past 38 digits only the count matters; the literal is rejected once it is complete
    if digits.significant <= MAX_PRECISION {
        digits.mantissa = digits.mantissa * 10 + u128::from(digit);
    }
}

#[inline(never)]
#[cold]
fn tail_invalid_digit<T>(digit: u8) -> Result<T, ParserError> {
    match digit {
        b'.' => Err(ParserError::MultipleDecimalPoints),
        _ => Err(ParserError::InvalidCharacter),
    }
}

#[inline(never)]
#[cold]
fn tail_no_has<T>() -> Result<T, ParserError> {
    Err(ParserError::NoDigits)
}
