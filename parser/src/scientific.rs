use crate::{base_10::parse_digits, handle_data, DecimalComponents, ParserError};

/// Parses a literal carrying an exponent, e.g. `1.23E+7` or `5e-3`.
pub fn parse_scientific(input: &str) -> Result<DecimalComponents, ParserError> {
    let mut split = input.splitn(2, |c| c == 'e' || c == 'E');

    let base = split.next().ok_or(ParserError::UnableToExtractBase)?;
    let exp = split.next().ok_or(ParserError::UnableToExtractExponent)?;

    let digits = parse_digits(base.as_bytes())?;
    // `str::parse` accepts a leading `+` or `-`
    let exp: i32 = exp.parse().map_err(|_| ParserError::UnableToParseExponent)?;

    handle_data(digits, i64::from(exp))
}
