#![no_main]

use decimal_inference::{DecimalMetadata, DecimalTuple, DecimalType, FixedDecimal128};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data<'a> {
    generic_str: &'a str,

    precision: i32,
    scale: i32,

    negative: bool,
    digits: Vec<u8>,
    exponent: i32,
}

libfuzzer_sys::fuzz_target!(|data: Data<'_>| {
    if let Ok(decimal_type) = DecimalType::try_new(data.precision, data.scale) {
        if let Ok(value) = FixedDecimal128::from_str_with_type(data.generic_str, &decimal_type) {
            assert_eq!(value.decimal_type(), decimal_type);
        }
    }

    if let Ok(value) = DecimalTuple::new(data.negative, data.digits, data.exponent) {
        let mut metadata = DecimalMetadata::new();
        metadata.update_from_value(&value);
        assert!(metadata.precision() >= 1);
        assert!(metadata.scale() >= 0);
    }
});
