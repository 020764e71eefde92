use crate::view::{mantissa_digits, DecimalValueView};
use alloc::{borrow::Cow, string::String, string::ToString};
use rust_decimal::Decimal;

// rust_decimal has no special values; its scale maps straight onto a negative exponent.
impl DecimalValueView for Decimal {
    fn digits(&self) -> Cow<'_, [u8]> {
        Cow::Owned(mantissa_digits(self.mantissa().unsigned_abs()))
    }

    fn exponent(&self) -> i32 {
        // Scale never exceeds 28
        -(self.scale() as i32)
    }

    fn is_nan(&self) -> bool {
        false
    }

    fn is_sign_negative(&self) -> bool {
        Decimal::is_sign_negative(self)
    }

    fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}
