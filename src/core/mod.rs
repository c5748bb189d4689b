//! Conversion table evaluator and form boundary

pub mod form;
pub mod table;

pub use form::{ConversionForm, FormOutcome};
pub use table::{convert, ConversionTable, STANDARD_RULES};
