//! Unit Converter - fixed-table conversion between length and mass units
//!
//! The core is an immutable table of directional rules keyed by the ordered
//! `(from, to)` unit pair. A lookup either yields `value * factor` or an
//! [`UnsupportedConversion`], which is an expected outcome rather than a fault.
//!
//! # Supported conversions
//!
//! | from      | to        | factor |
//! |-----------|-----------|--------|
//! | meter     | kilometer | 0.001  |
//! | kilometer | meter     | 1000   |
//! | gram      | kilogram  | 0.001  |
//! | kilogram  | gram      | 1000   |
//!
//! # Example
//!
//! ```
//! use unit_converter::{convert, Unit};
//!
//! assert_eq!(convert(2.0, Unit::Kilometer, Unit::Meter), Ok(2000.0));
//! assert!(convert(10.0, Unit::Meter, Unit::Gram).is_err());
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use crate::core::{convert, ConversionForm, ConversionTable, FormOutcome};
pub use error::{ConvertError, ConvertResult, UnsupportedConversion};
pub use types::{ConversionRequest, ConversionRule, Unit};
