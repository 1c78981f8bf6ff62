#![doc = include_str!("../README.md")]

mod error;
mod format;
mod search;
mod sequence;
mod table;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::Error;
pub use format::{CArray, PlainList};
pub use search::find_min_ratio;
pub use sequence::{last_term, Sequence};
pub use table::{Iter, RatioTable, RatioTableBuilder, MAX_EXPONENT, MAX_PRECISION};
