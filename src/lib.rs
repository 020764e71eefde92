#![doc = include_str!(concat!(env!("OUT_DIR"), "/README-lib.md"))]
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod constants;
mod decimal128;
mod error;
mod infer;
mod metadata;
mod str;
mod view;

#[cfg(feature = "rust-decimal")]
mod interop;
#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;

pub use constants::{MAX_PRECISION, MAX_SCALE};
pub use decimal128::{rescale, rescale_with_strategy, DecimalType, FixedDecimal128, RoundingStrategy};
pub use decimal_parser::{parse_decimal, DecimalComponents, ParserError};
pub use error::Error;
pub use infer::infer_precision_and_scale;
pub use metadata::{ColumnInference, DecimalMetadata};
pub use view::{DecimalAdapter, DecimalKind, DecimalTuple, DecimalValueView, DirectAdapter, Inspection};

/// A convenience module appropriate for glob imports (`use decimal_inference::prelude::*;`).
pub mod prelude {
    pub use crate::{DecimalMetadata, DecimalType, DecimalValueView, FixedDecimal128, RoundingStrategy};
}

/// Shortcut for `core::result::Result<T, decimal_inference::Error>`. Useful to distinguish
/// between `decimal_inference` and `std` types.
pub type Result<T> = core::result::Result<T, Error>;
