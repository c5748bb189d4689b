use thiserror::Error;

use crate::types::Unit;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// No rule is registered for the ordered `(from, to)` pair.
///
/// This is an expected outcome of a lookup, not a fault.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Conversion not supported: {from} -> {to}")]
pub struct UnsupportedConversion {
    pub from: Unit,
    pub to: Unit,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedConversion),

    #[error("Unknown unit: '{0}' (expected one of: meter, kilometer, gram, kilogram)")]
    UnknownUnit(String),

    #[error("No unit selected for '{0}'")]
    MissingUnit(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
