/// Computes the smallest `(precision, scale)` pair that holds `digits * 10^exponent` exactly.
///
/// `digit_count` is the number of significant digits stored by the source and `exponent` the
/// power of ten applied to them. When the stored digits cannot account for the magnitude on
/// their own, the implicit zeros are added to the precision: leading zeros for fractions
/// (`[1, 2, 3] * 10^-5` is `0.00123`, precision 5, scale 5) and trailing zeros for integers
/// (`[7] * 10^4` is `70000`, precision 5, scale 0).
///
/// Integers with more stored digits than their exponent report their digit count as the
/// precision and a scale of zero.
///
/// A `digit_count` of zero describes the value zero and is treated as a single digit, so the
/// precision is always at least 1.
///
/// ```
/// use decimal_inference::infer_precision_and_scale;
///
/// assert_eq!(infer_precision_and_scale(3, -2), (3, 2));
/// assert_eq!(infer_precision_and_scale(1, 3), (4, 0));
/// ```
pub fn infer_precision_and_scale(digit_count: i32, exponent: i32) -> (i32, i32) {
    let digit_count = digit_count.max(1);
    let abs_exponent = exponent.saturating_abs();

    if digit_count <= abs_exponent {
        // Leading zeros when the exponent is negative, trailing zeros otherwise
        let (additional_zeros, scale) = if exponent < 0 {
            (abs_exponent - digit_count, abs_exponent)
        } else {
            (exponent, 0)
        };
        (digit_count.saturating_add(additional_zeros), scale)
    } else {
        let scale = if exponent < 0 { abs_exponent } else { 0 };
        (digit_count, scale)
    }
}
