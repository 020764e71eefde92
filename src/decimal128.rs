use crate::{
    constants::{MAX_PRECISION, MAX_SCALE, POWERS_10},
    error::Error,
    view::DecimalValueView,
};
use decimal_parser::parse_decimal;
use num_traits::ToPrimitive;
use tracing::debug;

/// A fixed `(precision, scale)` pair describing a column of 128 bit decimals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(try_from = "crate::serde::DecimalTypeParts")
)]
pub struct DecimalType {
    pub(crate) precision: i32,
    pub(crate) scale: i32,
}

impl DecimalType {
    /// Creates a decimal type with `1 <= precision <= 38` and `0 <= scale <= precision`.
    ///
    /// ```
    /// use decimal_inference::DecimalType;
    ///
    /// assert!(DecimalType::try_new(5, 2).is_ok());
    /// assert!(DecimalType::try_new(0, 0).is_err());
    /// assert!(DecimalType::try_new(3, 4).is_err());
    /// ```
    pub const fn try_new(precision: i32, scale: i32) -> Result<Self, Error> {
        if precision < 1 || precision > MAX_PRECISION || scale < 0 || scale > MAX_SCALE || scale > precision {
            return Err(Error::InvalidDecimalType { precision, scale });
        }
        Ok(DecimalType { precision, scale })
    }

    pub const fn precision(&self) -> i32 {
        self.precision
    }

    pub const fn scale(&self) -> i32 {
        self.scale
    }
}

/// How digits are discarded when a value moves to a smaller scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingStrategy {
    /// Drop the discarded digits, e.g. 1.29 -> 1.2, -1.29 -> -1.2.
    #[default]
    ToZero,
    /// When a number is halfway between two others, it is rounded toward the nearest even
    /// number. Also known as "Bankers Rounding".
    /// e.g.
    /// 6.5 -> 6, 7.5 -> 8
    /// -6.5 -> -6, -7.5 -> -8
    MidpointNearestEven,
    /// Refuse to discard non-zero digits, e.g. 1.20 -> 1.2 but 1.29 fails.
    Exact,
}

/// A 128 bit scaled integer worth `value * 10^-scale`, materialized against a [`DecimalType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(try_from = "crate::serde::FixedDecimal128Parts")
)]
pub struct FixedDecimal128 {
    value: i128,
    precision: i32,
    scale: i32,
}

impl FixedDecimal128 {
    /// Wraps an already scaled integer without checking it against the type's precision.
    pub const fn from_i128_with_type(value: i128, decimal_type: &DecimalType) -> Self {
        FixedDecimal128 {
            value,
            precision: decimal_type.precision,
            scale: decimal_type.scale,
        }
    }

    /// Parses `text` and materializes it against `decimal_type`, truncating any digits beyond
    /// the target scale.
    ///
    /// Fails when the literal is malformed, when it needs more digits than the target precision
    /// (including literals wider than any 128 bit decimal), or when moving it to the target scale
    /// overflows 128 bits.
    ///
    /// ```
    /// use decimal_inference::{DecimalType, FixedDecimal128};
    ///
    /// let decimal_type = DecimalType::try_new(5, 3).unwrap();
    /// let value = FixedDecimal128::from_str_with_type("1.5", &decimal_type).unwrap();
    /// assert_eq!(value.mantissa(), 1500);
    /// assert_eq!(value.to_string(), "1.500");
    /// ```
    pub fn from_str_with_type(text: &str, decimal_type: &DecimalType) -> Result<Self, Error> {
        Self::from_str_with_strategy(text, decimal_type, RoundingStrategy::default())
    }

    pub fn from_str_with_strategy(
        text: &str,
        decimal_type: &DecimalType,
        strategy: RoundingStrategy,
    ) -> Result<Self, Error> {
        let parsed = parse_decimal(text).map_err(|err| match Error::from(err) {
            Error::PrecisionOverflow { inferred, .. } => Error::PrecisionOverflow {
                inferred,
                target: decimal_type.precision,
            },
            err => err,
        })?;
        // Both are bounded by 38 in the parser
        let inferred_precision = parsed.precision as i32;
        let inferred_scale = parsed.scale as i32;

        if inferred_precision > decimal_type.precision {
            return Err(Error::PrecisionOverflow {
                inferred: inferred_precision,
                target: decimal_type.precision,
            });
        }

        let value = if inferred_scale != decimal_type.scale {
            rescale_with_strategy(parsed.value, inferred_scale, decimal_type.scale, strategy)?
        } else {
            parsed.value
        };
        Ok(Self::from_i128_with_type(value, decimal_type))
    }

    /// Materializes a host value through its canonical string form.
    pub fn from_view<V: DecimalValueView + ?Sized>(value: &V, decimal_type: &DecimalType) -> Result<Self, Error> {
        Self::from_str_with_type(&value.to_canonical_string(), decimal_type)
    }

    /// The unscaled integer.
    pub const fn mantissa(&self) -> i128 {
        self.value
    }

    pub const fn precision(&self) -> i32 {
        self.precision
    }

    pub const fn scale(&self) -> i32 {
        self.scale
    }

    pub const fn decimal_type(&self) -> DecimalType {
        DecimalType {
            precision: self.precision,
            scale: self.scale,
        }
    }

    pub const fn is_sign_negative(&self) -> bool {
        self.value < 0
    }

    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn scale_factor(&self) -> i128 {
        POWERS_10[self.scale as usize]
    }
}

/// Moves `value` from `from_scale` to `to_scale`, truncating toward zero when the scale shrinks.
pub fn rescale(value: i128, from_scale: i32, to_scale: i32) -> Result<i128, Error> {
    rescale_with_strategy(value, from_scale, to_scale, RoundingStrategy::ToZero)
}

/// Moves `value` from `from_scale` to `to_scale` using the given strategy when the scale
/// shrinks. Growing the scale is exact and fails only when the result overflows 128 bits.
///
/// ```
/// use decimal_inference::{rescale_with_strategy, RoundingStrategy};
///
/// assert_eq!(rescale_with_strategy(15, 1, 3, RoundingStrategy::ToZero).unwrap(), 1500);
/// assert_eq!(rescale_with_strategy(125, 2, 1, RoundingStrategy::ToZero).unwrap(), 12);
/// assert_eq!(rescale_with_strategy(125, 2, 1, RoundingStrategy::MidpointNearestEven).unwrap(), 12);
/// assert_eq!(rescale_with_strategy(135, 2, 1, RoundingStrategy::MidpointNearestEven).unwrap(), 14);
/// ```
pub fn rescale_with_strategy(
    value: i128,
    from_scale: i32,
    to_scale: i32,
    strategy: RoundingStrategy,
) -> Result<i128, Error> {
    let delta = i64::from(to_scale) - i64::from(from_scale);
    debug!(%value, from_scale, to_scale, "rescaling decimal");

    if delta == 0 || value == 0 {
        return Ok(value);
    }

    let overflow = || Error::RescaleOverflow {
        value,
        from_scale,
        to_scale,
    };

    if delta > 0 {
        let factor = power_of_ten(delta).ok_or_else(overflow)?;
        return value.checked_mul(factor).ok_or_else(overflow);
    }

    // Any 128 bit value divided by more than 10^38 truncates to zero; a 10^39 divisor could not
    // round up either since i128::MAX is below half of it.
    let Some(divisor) = power_of_ten(-delta) else {
        if strategy == RoundingStrategy::Exact {
            return Err(Error::RescaleDataLoss {
                value,
                from_scale,
                to_scale,
            });
        }
        return Ok(0);
    };
    let quotient = value / divisor;
    let remainder = value % divisor;

    let rounded = match strategy {
        RoundingStrategy::ToZero => quotient,
        RoundingStrategy::Exact if remainder != 0 => {
            return Err(Error::RescaleDataLoss {
                value,
                from_scale,
                to_scale,
            })
        }
        RoundingStrategy::Exact => quotient,
        RoundingStrategy::MidpointNearestEven => {
            let remainder = remainder.unsigned_abs();
            let half = divisor.unsigned_abs() / 2;
            if remainder > half || (remainder == half && quotient % 2 != 0) {
                quotient + value.signum()
            } else {
                quotient
            }
        }
    };
    Ok(rounded)
}

fn power_of_ten(exp: i64) -> Option<i128> {
    usize::try_from(exp).ok().and_then(|exp| POWERS_10.get(exp).copied())
}

impl ToPrimitive for FixedDecimal128 {
    fn to_i64(&self) -> Option<i64> {
        (self.value / self.scale_factor()).to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        Some(self.value / self.scale_factor())
    }

    fn to_u64(&self) -> Option<u64> {
        (self.value / self.scale_factor()).to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        (self.value / self.scale_factor()).to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        let value = self.value.to_f64()?;
        Some(value / self.scale_factor() as f64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn convert(text: &str, precision: i32, scale: i32) -> Result<FixedDecimal128, Error> {
        FixedDecimal128::from_str_with_type(text, &DecimalType::try_new(precision, scale).unwrap())
    }

    #[test]
    fn decimal_type_bounds() {
        assert!(DecimalType::try_new(38, 38).is_ok());
        assert_eq!(
            DecimalType::try_new(39, 0),
            Err(Error::InvalidDecimalType { precision: 39, scale: 0 })
        );
        assert!(DecimalType::try_new(5, -1).is_err());
    }

    #[test]
    fn converts_matching_scale() {
        let value = convert("-12.34", 4, 2).unwrap();
        assert_eq!(value.mantissa(), -1234);
        assert_eq!(value.decimal_type(), DecimalType::try_new(4, 2).unwrap());
    }

    #[test]
    fn converts_with_larger_scale() {
        let value = convert("1.5", 5, 3).unwrap();
        assert_eq!(value.mantissa(), 1500);
        assert_eq!(value.scale(), 3);
        assert_eq!(value.precision(), 5);
    }

    #[test]
    fn converts_with_smaller_scale_truncates() {
        assert_eq!(convert("1.239", 4, 2).unwrap().mantissa(), 123);
        assert_eq!(convert("-1.239", 4, 2).unwrap().mantissa(), -123);
    }

    #[test]
    fn rejects_excess_precision() {
        assert_eq!(
            convert("12345", 4, 0),
            Err(Error::PrecisionOverflow { inferred: 5, target: 4 })
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(convert("", 4, 0), Err(Error::MalformedInput(_))));
        assert!(matches!(convert("1..2", 4, 0), Err(Error::MalformedInput(_))));
        assert!(matches!(convert("NaN", 4, 0), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn rescale_up_overflows() {
        let max = i128::MAX / 10 + 1;
        assert_eq!(
            rescale(max, 0, 1),
            Err(Error::RescaleOverflow {
                value: max,
                from_scale: 0,
                to_scale: 1,
            })
        );
        assert!(rescale(1, 0, 39).is_err());
        assert_eq!(rescale(0, 0, 60), Ok(0));
    }

    #[test]
    fn rescale_down_beyond_range_is_zero() {
        assert_eq!(rescale(i128::MAX, 40, 0), Ok(0));
        assert_eq!(
            rescale_with_strategy(i128::MIN, 39, 0, RoundingStrategy::MidpointNearestEven),
            Ok(0)
        );
    }

    #[test]
    fn bankers_rounding_on_midpoints() {
        let round = |value| rescale_with_strategy(value, 1, 0, RoundingStrategy::MidpointNearestEven).unwrap();
        assert_eq!(round(65), 6);
        assert_eq!(round(75), 8);
        assert_eq!(round(-65), -6);
        assert_eq!(round(-75), -8);
        assert_eq!(round(66), 7);
        assert_eq!(round(-64), -6);
    }

    #[test]
    fn exact_rescale_rejects_discarded_digits() {
        assert_eq!(rescale_with_strategy(1200, 3, 2, RoundingStrategy::Exact), Ok(120));
        assert_eq!(
            rescale_with_strategy(1290, 3, 1, RoundingStrategy::Exact),
            Err(Error::RescaleDataLoss {
                value: 1290,
                from_scale: 3,
                to_scale: 1,
            })
        );
        assert!(rescale_with_strategy(-5, 40, 0, RoundingStrategy::Exact).is_err());
        let decimal_type = DecimalType::try_new(4, 2).unwrap();
        assert_eq!(
            FixedDecimal128::from_str_with_strategy("1.500", &decimal_type, RoundingStrategy::Exact)
                .unwrap()
                .mantissa(),
            150
        );
        assert!(matches!(
            FixedDecimal128::from_str_with_strategy("1.239", &decimal_type, RoundingStrategy::Exact),
            Err(Error::RescaleDataLoss { .. })
        ));
    }

    #[test]
    fn excess_digits_report_target_precision() {
        let decimal_type = DecimalType::try_new(10, 0).unwrap();
        assert_eq!(
            FixedDecimal128::from_str_with_type("1234567890123456789012345678901234567890", &decimal_type),
            Err(Error::PrecisionOverflow { inferred: 40, target: 10 })
        );
    }

    #[test]
    fn to_primitive_truncates() {
        let value = convert("-7.99", 3, 2).unwrap();
        assert_eq!(value.to_i64(), Some(-7));
        assert_eq!(value.to_u64(), None);
        assert_eq!(value.to_f64(), Some(-7.99));
    }
}
