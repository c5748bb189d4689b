use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

//==============================================================================
// Units
//==============================================================================

/// Measurement units known to the converter (closed set)
///
/// Units fall into implicit families (length: meter/kilometer, mass:
/// gram/kilogram), but nothing here models that. Whether two units convert
/// is decided only by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Meter,
    Kilometer,
    Gram,
    Kilogram,
}

impl Unit {
    /// All units, in selector order
    pub const ALL: [Unit; 4] = [Unit::Meter, Unit::Kilometer, Unit::Gram, Unit::Kilogram];

    /// Lowercase identifier used on the command line and in JSON
    pub fn id(&self) -> &'static str {
        match self {
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
        }
    }

    /// Capitalized display label
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Meter => "Meter",
            Unit::Kilometer => "Kilometer",
            Unit::Gram => "Gram",
            Unit::Kilogram => "Kilogram",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConvertError::UnknownUnit(trimmed.to_string()))
    }
}

//==============================================================================
// Selections (form boundary)
//==============================================================================

/// Parse a selector value where the empty string is the "not yet chosen" placeholder
pub fn parse_selection(s: &str) -> Result<Option<Unit>, ConvertError> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// Serde helper accepting `null`, a missing field, `""` or a unit identifier
pub fn deserialize_selection<'de, D>(deserializer: D) -> Result<Option<Unit>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_selection(&s).map_err(serde::de::Error::custom),
    }
}

//==============================================================================
// Rules and requests
//==============================================================================

/// A directional conversion: `value(to) = value(from) * factor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRule {
    pub from: Unit,
    pub to: Unit,
    pub factor: f64,
}

impl ConversionRule {
    pub const fn new(from: Unit, to: Unit, factor: f64) -> Self {
        Self { from, to, factor }
    }
}

/// A single conversion to evaluate. Created per evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionRequest {
    pub fn new(value: f64, from: Unit, to: Unit) -> Self {
        Self { value, from, to }
    }
}
