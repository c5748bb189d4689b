//! Conversion form state
//!
//! Mirrors the single-page form: a value input with a minimum of 1, two unit
//! selectors that start on an empty placeholder, and a Convert action that
//! stays disabled until both units are chosen. The placeholder is `None` and
//! is resolved here, so the evaluator only ever sees concrete units.

use crate::core::table::ConversionTable;
use crate::error::{ConvertError, ConvertResult, UnsupportedConversion};
use crate::types::{ConversionRequest, Unit};
use std::fmt;

/// Smallest value the form accepts
pub const MIN_VALUE: f64 = 1.0;

/// Shown in place of a number when the pair has no rule
pub const NOT_SUPPORTED_MESSAGE: &str = "Conversion not supported";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionForm {
    pub value: f64,
    pub from: Option<Unit>,
    pub to: Option<Unit>,
}

impl Default for ConversionForm {
    fn default() -> Self {
        Self {
            value: MIN_VALUE,
            from: None,
            to: None,
        }
    }
}

impl ConversionForm {
    #[must_use]
    pub fn new(value: f64, from: Option<Unit>, to: Option<Unit>) -> Self {
        Self { value, from, to }
    }

    /// Whether the Convert action is enabled
    pub fn can_submit(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Turn the form into a concrete request
    pub fn to_request(&self) -> ConvertResult<ConversionRequest> {
        let from = self
            .from
            .ok_or_else(|| ConvertError::MissingUnit("from".to_string()))?;
        let to = self
            .to
            .ok_or_else(|| ConvertError::MissingUnit("to".to_string()))?;

        if self.value.is_nan() || self.value < MIN_VALUE {
            return Err(ConvertError::Validation(format!(
                "Value must be at least {}, got {}",
                MIN_VALUE, self.value
            )));
        }

        Ok(ConversionRequest::new(self.value, from, to))
    }

    /// Submit the form against `table`
    ///
    /// Missing selections and out-of-range values are errors. An unsupported
    /// pair is a regular outcome.
    pub fn submit(&self, table: &ConversionTable) -> ConvertResult<FormOutcome> {
        let request = self.to_request()?;
        Ok(FormOutcome::from(request.evaluate(table)))
    }
}

/// Result of a submitted form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormOutcome {
    Converted(f64),
    Unsupported(UnsupportedConversion),
}

impl FormOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            FormOutcome::Converted(v) => Some(*v),
            FormOutcome::Unsupported(_) => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, FormOutcome::Converted(_))
    }

    /// Result line shown under the form
    pub fn message(&self) -> String {
        format!("Converted value: {self}")
    }
}

impl From<Result<f64, UnsupportedConversion>> for FormOutcome {
    fn from(result: Result<f64, UnsupportedConversion>) -> Self {
        match result {
            Ok(v) => FormOutcome::Converted(v),
            Err(e) => FormOutcome::Unsupported(e),
        }
    }
}

impl fmt::Display for FormOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormOutcome::Converted(v) => write!(f, "{v}"),
            FormOutcome::Unsupported(_) => f.write_str(NOT_SUPPORTED_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = ConversionForm::default();
        assert_eq!(form.value, 1.0);
        assert!(form.from.is_none());
        assert!(form.to.is_none());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_can_submit_requires_both_units() {
        assert!(!ConversionForm::new(1.0, Some(Unit::Meter), None).can_submit());
        assert!(!ConversionForm::new(1.0, None, Some(Unit::Meter)).can_submit());
        assert!(ConversionForm::new(1.0, Some(Unit::Meter), Some(Unit::Gram)).can_submit());
    }

    #[test]
    fn test_missing_unit_names_the_field() {
        let err = ConversionForm::new(2.0, None, Some(Unit::Gram))
            .to_request()
            .unwrap_err();
        assert!(matches!(err, ConvertError::MissingUnit(ref f) if f == "from"));

        let err = ConversionForm::new(2.0, Some(Unit::Gram), None)
            .to_request()
            .unwrap_err();
        assert!(matches!(err, ConvertError::MissingUnit(ref f) if f == "to"));
    }

    #[test]
    fn test_value_below_minimum_rejected() {
        let form = ConversionForm::new(0.5, Some(Unit::Meter), Some(Unit::Kilometer));
        assert!(matches!(form.to_request(), Err(ConvertError::Validation(_))));

        let form = ConversionForm::new(f64::NAN, Some(Unit::Meter), Some(Unit::Kilometer));
        assert!(matches!(form.to_request(), Err(ConvertError::Validation(_))));
    }

    #[test]
    fn test_submit_supported() {
        let table = ConversionTable::standard();
        let form = ConversionForm::new(2.0, Some(Unit::Kilometer), Some(Unit::Meter));
        let outcome = form.submit(&table).unwrap();
        assert_eq!(outcome, FormOutcome::Converted(2000.0));
        assert_eq!(outcome.message(), "Converted value: 2000");
    }

    #[test]
    fn test_submit_unsupported_is_ok() {
        let table = ConversionTable::standard();
        let form = ConversionForm::new(10.0, Some(Unit::Meter), Some(Unit::Gram));
        let outcome = form.submit(&table).unwrap();
        assert!(!outcome.is_supported());
        assert_eq!(outcome.value(), None);
        assert_eq!(
            outcome.message(),
            "Converted value: Conversion not supported"
        );
    }
}
