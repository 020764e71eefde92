use crate::{decimal128::DecimalType, view::DecimalTuple};

use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;

impl Arbitrary for DecimalType {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(u8, u8)>, fn((u8, u8)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // precision within 1..=38, scale within 0..=precision
        any::<(u8, u8)>().prop_map(|(precision, scale)| {
            let precision = i32::from(precision % 38) + 1;
            let scale = i32::from(scale) % (precision + 1);
            DecimalType { precision, scale }
        })
    }
}

impl Arbitrary for DecimalTuple {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(bool, u64, i8)>, fn((bool, u64, i8)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // exponents stay within what a 128 bit decimal can materialize
        any::<(bool, u64, i8)>().prop_map(|(negative, mantissa, exponent)| {
            DecimalTuple::from_mantissa(negative, u128::from(mantissa), i32::from(exponent % 19))
        })
    }
}
