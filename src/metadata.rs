use crate::{
    constants::UNSET,
    decimal128::{DecimalType, FixedDecimal128},
    error::Error,
    view::{DecimalAdapter, DecimalValueView},
};
use alloc::string::String;
use core::cmp::max;
use tracing::{debug, trace};

/// A running `(precision, scale)` pair wide enough for every value folded into it.
///
/// Starts unset and only ever widens. Special values (NaN, infinities) are ignored.
///
/// ```
/// use decimal_inference::{DecimalMetadata, DecimalTuple};
///
/// let mut metadata = DecimalMetadata::new();
/// metadata.update_from_value(&DecimalTuple::new(false, [1u8, 2, 3], -2).unwrap());
/// metadata.update_from_value(&DecimalTuple::nan());
/// assert_eq!((metadata.precision(), metadata.scale()), (3, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct DecimalMetadata {
    precision: i32,
    scale: i32,
}

impl Default for DecimalMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalMetadata {
    /// Metadata that has not observed any value; both fields hold `i32::MIN`.
    pub const fn new() -> Self {
        Self::with_precision_and_scale(UNSET, UNSET)
    }

    pub const fn with_precision_and_scale(precision: i32, scale: i32) -> Self {
        DecimalMetadata { precision, scale }
    }

    pub const fn precision(&self) -> i32 {
        self.precision
    }

    pub const fn scale(&self) -> i32 {
        self.scale
    }

    pub const fn is_set(&self) -> bool {
        self.precision != UNSET
    }

    /// Widens to cover a value needing `suggested_precision` digits with `suggested_scale` of
    /// them fractional.
    ///
    /// An integer value (scale 0) that raises the running precision also gets room for the
    /// scale already committed by earlier fractional values, since the column shares a single
    /// scale. The correction is only applied when the *running* precision is exceeded, which
    /// makes the result depend on the order of updates in some cases.
    pub fn update(&mut self, suggested_precision: i32, suggested_scale: i32) {
        let current_precision = self.precision;
        self.precision = max(current_precision, suggested_precision);
        self.scale = max(self.scale, suggested_scale);

        if suggested_scale == 0 && suggested_precision > current_precision {
            self.precision = self.precision.saturating_add(self.scale);
            trace!(
                precision = self.precision,
                scale = self.scale,
                "widened precision for integer value"
            );
        }
        trace!(
            suggested_precision,
            suggested_scale,
            precision = self.precision,
            scale = self.scale,
            "updated decimal metadata"
        );
    }

    /// Returns the widened metadata, leaving `self` untouched.
    #[must_use]
    pub fn updated(mut self, suggested_precision: i32, suggested_scale: i32) -> Self {
        self.update(suggested_precision, suggested_scale);
        self
    }

    /// Widens to cover one value. NaN and other special values leave the metadata unchanged.
    pub fn update_from_value<V: DecimalValueView + ?Sized>(&mut self, value: &V) {
        if value.is_special() {
            debug!("skipping special decimal value");
            return;
        }
        let (precision, scale) = value.inspect().precision_and_scale();
        self.update(precision, scale);
    }

    /// The decimal type implied by everything observed so far.
    pub fn to_decimal_type(&self) -> Result<DecimalType, Error> {
        if !self.is_set() {
            return Err(Error::MetadataUnset);
        }
        DecimalType::try_new(self.precision, self.scale)
    }
}

/// One inference pass over one column of host objects.
///
/// The adapter is the only way the pass looks at a host object. Objects it does not recognise
/// as decimals are counted and skipped.
pub struct ColumnInference<'a, A: DecimalAdapter + ?Sized> {
    adapter: &'a A,
    metadata: DecimalMetadata,
    observed: usize,
    skipped: usize,
}

impl<'a, A: DecimalAdapter + ?Sized> ColumnInference<'a, A> {
    pub fn new(adapter: &'a A) -> Self {
        ColumnInference {
            adapter,
            metadata: DecimalMetadata::new(),
            observed: 0,
            skipped: 0,
        }
    }

    /// Folds one object into the running metadata. Returns `false` when the object was skipped,
    /// either because it is not a decimal or because it is a special value.
    pub fn observe(&mut self, object: &A::Object) -> bool {
        match self.adapter.view(object) {
            Some(view) if !view.is_special() => {
                self.metadata.update_from_value(&view);
                self.observed += 1;
                true
            }
            Some(_) => {
                debug!("skipping special decimal value");
                self.skipped += 1;
                false
            }
            None => {
                debug!("skipping object that is not a decimal");
                self.skipped += 1;
                false
            }
        }
    }

    pub fn observe_all<'o, I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = &'o A::Object>,
        A::Object: 'o,
    {
        for object in objects {
            self.observe(object);
        }
    }

    pub fn metadata(&self) -> DecimalMetadata {
        self.metadata
    }

    /// Number of objects folded into the metadata.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Number of objects left out of the metadata.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Materializes one object against `decimal_type`, typically the type returned by
    /// [`ColumnInference::finish`].
    pub fn materialize(&self, object: &A::Object, decimal_type: &DecimalType) -> Result<FixedDecimal128, Error> {
        let view = self
            .adapter
            .view(object)
            .ok_or_else(|| Error::MalformedInput(String::from("object is not a decimal")))?;
        FixedDecimal128::from_view(&view, decimal_type)
    }

    /// Ends the pass and returns the column's decimal type.
    pub fn finish(self) -> Result<DecimalType, Error> {
        debug!(
            observed = self.observed,
            skipped = self.skipped,
            precision = self.metadata.precision,
            scale = self.metadata.scale,
            "finished decimal inference"
        );
        self.metadata.to_decimal_type()
    }
}
