use crate::{
    constants::MAX_STR_BUFFER_SIZE,
    decimal128::FixedDecimal128,
    view::{DecimalKind, DecimalTuple},
};

use arrayvec::{ArrayString, ArrayVec};

use core::fmt;

// impl that doesn't allocate for serialization purposes.
pub(crate) fn to_str_internal(value: &FixedDecimal128) -> ArrayString<MAX_STR_BUFFER_SIZE> {
    // Get the scale - where we need to put the decimal point
    let scale = value.scale() as usize;

    // Convert to a string and manipulate that (neg at front, inject decimal)
    let mut chars = ArrayVec::<_, MAX_STR_BUFFER_SIZE>::new();
    let mut working = value.mantissa().unsigned_abs();
    while working > 0 {
        chars.push(char::from(b'0' + (working % 10) as u8));
        working /= 10;
    }
    while scale >= chars.len() {
        chars.push('0');
    }

    let len = chars.len();
    let mut rep = ArrayString::new();
    if value.is_sign_negative() {
        rep.push('-');
    }
    for i in 0..len {
        if i == len - scale {
            rep.push('.');
        }
        rep.push(chars[len - i - 1]);
    }
    rep
}

impl fmt::Display for FixedDecimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rep = to_str_internal(self);
        f.pad(rep.as_str())
    }
}

// Scientific string rules: plain notation unless the exponent is positive or the value is
// smaller than 1E-6, in which case a single digit leads and the adjusted exponent follows.
impl fmt::Display for DecimalTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match self.kind {
            DecimalKind::NaN => return f.write_str("NaN"),
            DecimalKind::SignalingNaN => return f.write_str("sNaN"),
            DecimalKind::Infinite => return f.write_str("Infinity"),
            DecimalKind::Finite => {}
        }

        let exponent = i64::from(self.exponent);
        let len = self.digits.len() as i64;
        let adjusted = exponent + len - 1;
        let digit = |d: &u8| char::from(b'0' + d);

        if exponent <= 0 && adjusted >= -6 {
            // Digits left of the decimal point
            let whole = len + exponent;
            if whole <= 0 {
                f.write_str("0.")?;
                for _ in 0..-whole {
                    f.write_str("0")?;
                }
            }
            for (i, d) in self.digits.iter().enumerate() {
                if whole > 0 && i as i64 == whole {
                    f.write_str(".")?;
                }
                write!(f, "{}", digit(d))?;
            }
            return Ok(());
        }

        let (first, rest) = self.digits.split_first().unwrap_or((&0, &[][..]));
        write!(f, "{}", digit(first))?;
        if !rest.is_empty() {
            f.write_str(".")?;
            for d in rest {
                write!(f, "{}", digit(d))?;
            }
        }
        write!(f, "E{}{}", if adjusted < 0 { '-' } else { '+' }, adjusted.abs())
    }
}

#[cfg(test)]
mod test {
    use crate::{DecimalTuple, DecimalType, FixedDecimal128};
    use alloc::{format, string::ToString};

    fn fixed(value: i128, precision: i32, scale: i32) -> FixedDecimal128 {
        FixedDecimal128::from_i128_with_type(value, &DecimalType::try_new(precision, scale).unwrap())
    }

    #[test]
    fn display_places_decimal_point() {
        assert_eq!(fixed(1500, 5, 3).to_string(), "1.500");
        assert_eq!(fixed(-1234, 4, 2).to_string(), "-12.34");
        assert_eq!(fixed(5, 3, 3).to_string(), "0.005");
        assert_eq!(fixed(-5, 3, 3).to_string(), "-0.005");
        assert_eq!(fixed(0, 2, 2).to_string(), "0.00");
        assert_eq!(fixed(0, 1, 0).to_string(), "0");
        assert_eq!(fixed(42, 2, 0).to_string(), "42");
    }

    #[test]
    fn display_does_not_overflow_max_capacity() {
        assert_eq!(
            fixed(i128::MIN, 38, 38).to_string(),
            "-1.70141183460469231731687303715884105728"
        );
        assert_eq!(fixed(i128::MAX, 38, 0).to_string(), i128::MAX.to_string());
    }

    #[test]
    fn display_honours_padding() {
        assert_eq!(format!("{:>6}", fixed(15, 2, 1)), "   1.5");
    }

    #[test]
    fn tuple_plain_notation() {
        let cases: [(&[u8], i32, &str); 6] = [
            (&[1, 2, 3], -2, "1.23"),
            (&[1, 2, 3], 0, "123"),
            (&[1, 2, 3], -5, "0.00123"),
            (&[1], -6, "0.000001"),
            (&[0], -2, "0.00"),
            (&[1, 5, 0], -2, "1.50"),
        ];
        for (digits, exponent, expected) in cases {
            let value = DecimalTuple::new(false, digits, exponent).unwrap();
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn tuple_scientific_notation() {
        let cases: [(&[u8], i32, &str); 5] = [
            (&[1], 5, "1E+5"),
            (&[1, 2, 3], 1, "1.23E+3"),
            (&[1], -7, "1E-7"),
            (&[1, 2], -9, "1.2E-8"),
            (&[0], 3, "0E+3"),
        ];
        for (digits, exponent, expected) in cases {
            let value = DecimalTuple::new(false, digits, exponent).unwrap();
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn tuple_special_values() {
        assert_eq!(DecimalTuple::nan().to_string(), "NaN");
        assert_eq!(DecimalTuple::signaling_nan().to_string(), "sNaN");
        assert_eq!(DecimalTuple::infinity(true).to_string(), "-Infinity");
        assert_eq!(DecimalTuple::from_i128_with_scale(-25, 1).to_string(), "-2.5");
    }
}
