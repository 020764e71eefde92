use crate::{
    decimal128::{DecimalType, FixedDecimal128},
    error::Error,
};

/// The unvalidated form of a [`DecimalType`], checked on the way in.
#[derive(::serde::Deserialize)]
pub struct DecimalTypeParts {
    precision: i32,
    scale: i32,
}

impl TryFrom<DecimalTypeParts> for DecimalType {
    type Error = Error;

    fn try_from(parts: DecimalTypeParts) -> Result<Self, Self::Error> {
        DecimalType::try_new(parts.precision, parts.scale)
    }
}

/// The unvalidated form of a [`FixedDecimal128`]. Only the type is checked, matching
/// [`FixedDecimal128::from_i128_with_type`].
#[derive(::serde::Deserialize)]
pub struct FixedDecimal128Parts {
    value: i128,
    precision: i32,
    scale: i32,
}

impl TryFrom<FixedDecimal128Parts> for FixedDecimal128 {
    type Error = Error;

    fn try_from(parts: FixedDecimal128Parts) -> Result<Self, Self::Error> {
        let decimal_type = DecimalType::try_new(parts.precision, parts.scale)?;
        Ok(FixedDecimal128::from_i128_with_type(parts.value, &decimal_type))
    }
}
