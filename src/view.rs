use crate::{error::Error, infer::infer_precision_and_scale};
use alloc::{borrow::Cow, format, string::String, string::ToString, vec, vec::Vec};
use core::marker::PhantomData;

/// A read-only view of one arbitrary precision decimal held by some host.
///
/// The value represented is `digits * 10^exponent`, negated when `is_sign_negative` is set.
/// Implementations describe their own value; nothing in this crate inspects a host object any
/// other way.
pub trait DecimalValueView {
    /// The significant digits, most significant first. Zero may be reported as `[0]` or `[]`.
    fn digits(&self) -> Cow<'_, [u8]>;

    /// The power of ten applied to `digits`.
    fn exponent(&self) -> i32;

    fn is_nan(&self) -> bool;

    /// Values with no finite representation. Includes NaN.
    fn is_special(&self) -> bool {
        self.is_nan()
    }

    fn is_sign_negative(&self) -> bool;

    /// The canonical string form, parsed when the value is materialized.
    fn to_canonical_string(&self) -> String;

    fn inspect(&self) -> Inspection {
        let digits = self.digits();
        Inspection {
            digit_count: i32::try_from(digits.len()).unwrap_or(i32::MAX),
            exponent: self.exponent(),
            is_zero: digits.iter().all(|d| *d == 0),
            is_special: self.is_special(),
        }
    }
}

impl<V: DecimalValueView + ?Sized> DecimalValueView for &V {
    fn digits(&self) -> Cow<'_, [u8]> {
        (**self).digits()
    }

    fn exponent(&self) -> i32 {
        (**self).exponent()
    }

    fn is_nan(&self) -> bool {
        (**self).is_nan()
    }

    fn is_special(&self) -> bool {
        (**self).is_special()
    }

    fn is_sign_negative(&self) -> bool {
        (**self).is_sign_negative()
    }

    fn to_canonical_string(&self) -> String {
        (**self).to_canonical_string()
    }

    fn inspect(&self) -> Inspection {
        (**self).inspect()
    }
}

/// The shape of a single value as seen by precision/scale inference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Inspection {
    pub digit_count: i32,
    pub exponent: i32,
    pub is_zero: bool,
    pub is_special: bool,
}

impl Inspection {
    /// The minimal `(precision, scale)` for this value. Zero counts as one digit.
    pub fn precision_and_scale(&self) -> (i32, i32) {
        let digit_count = if self.is_zero { 1 } else { self.digit_count };
        infer_precision_and_scale(digit_count, self.exponent)
    }
}

/// Distinguishes finite decimals from the special values a host may carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecimalKind {
    #[default]
    Finite,
    NaN,
    SignalingNaN,
    Infinite,
}

/// An owned decimal in sign/digits/exponent form.
///
/// Digits are stored without leading zeros; zero is stored as the single digit `0`. Special
/// values carry no digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecimalTuple {
    pub(crate) negative: bool,
    pub(crate) digits: Vec<u8>,
    pub(crate) exponent: i32,
    pub(crate) kind: DecimalKind,
}

impl DecimalTuple {
    /// Builds a finite decimal from its digits, failing when a digit is not within `0..=9`.
    ///
    /// ```
    /// use decimal_inference::DecimalTuple;
    ///
    /// let value = DecimalTuple::new(true, [0u8, 1, 2, 5], -2).unwrap();
    /// assert_eq!(value.digits(), &[1, 2, 5]);
    /// assert_eq!(value.to_string(), "-1.25");
    /// ```
    pub fn new(negative: bool, digits: impl Into<Vec<u8>>, exponent: i32) -> Result<Self, Error> {
        let mut digits = digits.into();
        if let Some(digit) = digits.iter().find(|d| **d > 9) {
            return Err(Error::MalformedInput(format!("digit {} is out of range", digit)));
        }
        let leading = digits.iter().take_while(|d| **d == 0).count();
        digits.drain(..leading);
        if digits.is_empty() {
            digits.push(0);
        }
        Ok(DecimalTuple {
            negative,
            digits,
            exponent,
            kind: DecimalKind::Finite,
        })
    }

    /// Builds a finite decimal from an unsigned coefficient.
    pub fn from_mantissa(negative: bool, mantissa: u128, exponent: i32) -> Self {
        DecimalTuple {
            negative,
            digits: mantissa_digits(mantissa),
            exponent,
            kind: DecimalKind::Finite,
        }
    }

    /// Builds a finite decimal worth `value * 10^-scale`.
    pub fn from_i128_with_scale(value: i128, scale: i32) -> Self {
        Self::from_mantissa(value < 0, value.unsigned_abs(), scale.saturating_neg())
    }

    pub const fn nan() -> Self {
        Self::special(false, DecimalKind::NaN)
    }

    pub const fn signaling_nan() -> Self {
        Self::special(false, DecimalKind::SignalingNaN)
    }

    pub const fn infinity(negative: bool) -> Self {
        Self::special(negative, DecimalKind::Infinite)
    }

    const fn special(negative: bool, kind: DecimalKind) -> Self {
        DecimalTuple {
            negative,
            digits: Vec::new(),
            exponent: 0,
            kind,
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    pub const fn kind(&self) -> DecimalKind {
        self.kind
    }

    pub const fn is_sign_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.kind == DecimalKind::Finite && self.digits.iter().all(|d| *d == 0)
    }
}

impl DecimalValueView for DecimalTuple {
    fn digits(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.digits)
    }

    fn exponent(&self) -> i32 {
        self.exponent
    }

    fn is_nan(&self) -> bool {
        matches!(self.kind, DecimalKind::NaN | DecimalKind::SignalingNaN)
    }

    fn is_special(&self) -> bool {
        self.kind != DecimalKind::Finite
    }

    fn is_sign_negative(&self) -> bool {
        self.negative
    }

    fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

/// Splits a coefficient into its decimal digits, most significant first.
pub(crate) fn mantissa_digits(mut mantissa: u128) -> Vec<u8> {
    if mantissa == 0 {
        return vec![0];
    }
    let mut digits = Vec::with_capacity(39);
    while mantissa > 0 {
        digits.push((mantissa % 10) as u8);
        mantissa /= 10;
    }
    digits.reverse();
    digits
}

/// Turns host objects into decimal views.
///
/// This is the capability handed to an inference pass up front. An adapter returns `None` for
/// objects that are not decimals; those objects are left out of inference.
pub trait DecimalAdapter {
    type Object: ?Sized;
    type View<'a>: DecimalValueView
    where
        Self: 'a;

    fn view<'a>(&'a self, object: &'a Self::Object) -> Option<Self::View<'a>>;
}

/// An adapter for hosts whose objects already are decimal views.
#[derive(Debug)]
pub struct DirectAdapter<V: ?Sized>(PhantomData<fn(&V)>);

impl<V: ?Sized> DirectAdapter<V> {
    pub const fn new() -> Self {
        DirectAdapter(PhantomData)
    }
}

impl<V: ?Sized> Default for DirectAdapter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: DecimalValueView + ?Sized> DecimalAdapter for DirectAdapter<V> {
    type Object = V;
    type View<'a> = &'a V where Self: 'a;

    fn view<'a>(&'a self, object: &'a V) -> Option<&'a V> {
        Some(object)
    }
}
