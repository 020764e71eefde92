// The maximum number of decimal digits a 128 bit mantissa can hold without loss
pub const MAX_PRECISION: i32 = 38;
// The maximum supported scale; a scale can never exceed the precision
pub const MAX_SCALE: i32 = 38;

// Sentinel for a precision or scale that has not been observed yet
pub(crate) const UNSET: i32 = i32::MIN;

// Sign, decimal point and a leading zero on top of the digits
pub(crate) const MAX_STR_BUFFER_SIZE: usize = 48;

pub(crate) const POWERS_10: [i128; 39] = {
    let mut powers = [1i128; 39];
    let mut i = 1;
    while i < powers.len() {
        powers[i] = powers[i - 1] * 10;
        i += 1;
    }
    powers
};
