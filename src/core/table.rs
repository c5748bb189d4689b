use crate::error::{ConvertError, ConvertResult, UnsupportedConversion};
use crate::types::{ConversionRequest, ConversionRule, Unit};
use std::collections::HashMap;
use std::sync::OnceLock;

/// The authoritative rule set. Each direction is registered on its own.
pub const STANDARD_RULES: [ConversionRule; 4] = [
    ConversionRule::new(Unit::Meter, Unit::Kilometer, 0.001),
    ConversionRule::new(Unit::Kilometer, Unit::Meter, 1000.0),
    ConversionRule::new(Unit::Gram, Unit::Kilogram, 0.001),
    ConversionRule::new(Unit::Kilogram, Unit::Gram, 1000.0),
];

static GLOBAL_TABLE: OnceLock<ConversionTable> = OnceLock::new();

/// Immutable lookup table of directional conversion rules
///
/// Rules are keyed by the ordered `(from, to)` pair. There is no inverse
/// derivation and no identity rule: a pair is supported only if it was
/// registered.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    rules: Vec<ConversionRule>,
    factors: HashMap<(Unit, Unit), f64>,
}

impl ConversionTable {
    /// Table holding [`STANDARD_RULES`]
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
            factors: STANDARD_RULES
                .iter()
                .map(|rule| ((rule.from, rule.to), rule.factor))
                .collect(),
        }
    }

    /// Process-wide standard table, built on first use
    pub fn global() -> &'static ConversionTable {
        GLOBAL_TABLE.get_or_init(Self::standard)
    }

    /// Build a table from explicit rules
    ///
    /// Factors must be finite and strictly positive, and each ordered pair may
    /// appear once.
    pub fn from_rules(rules: impl IntoIterator<Item = ConversionRule>) -> ConvertResult<Self> {
        let mut table = Self {
            rules: Vec::new(),
            factors: HashMap::new(),
        };

        for rule in rules {
            if !rule.factor.is_finite() || rule.factor <= 0.0 {
                return Err(ConvertError::Validation(format!(
                    "Factor for {} -> {} must be a positive finite number, got {}",
                    rule.from, rule.to, rule.factor
                )));
            }
            if table.factors.contains_key(&(rule.from, rule.to)) {
                return Err(ConvertError::Validation(format!(
                    "Duplicate rule for {} -> {}",
                    rule.from, rule.to
                )));
            }
            table.factors.insert((rule.from, rule.to), rule.factor);
            table.rules.push(rule);
        }

        Ok(table)
    }

    /// Factor registered for the ordered pair, if any
    pub fn factor(&self, from: Unit, to: Unit) -> Option<f64> {
        self.factors.get(&(from, to)).copied()
    }

    pub fn is_supported(&self, from: Unit, to: Unit) -> bool {
        self.factors.contains_key(&(from, to))
    }

    /// Convert `value` from one unit to another
    ///
    /// Returns [`UnsupportedConversion`] when the pair has no rule, including
    /// same-unit pairs. `value` is not range-checked; NaN and infinities pass
    /// through the multiplication unchanged in kind.
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> Result<f64, UnsupportedConversion> {
        self.factor(from, to)
            .map(|factor| value * factor)
            .ok_or(UnsupportedConversion { from, to })
    }

    /// Rules in registration order
    pub fn rules(&self) -> impl Iterator<Item = &ConversionRule> {
        self.rules.iter()
    }

    /// Units reachable from `from`, in registration order
    pub fn targets(&self, from: Unit) -> Vec<Unit> {
        self.rules
            .iter()
            .filter(|rule| rule.from == from)
            .map(|rule| rule.to)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConversionRequest {
    /// Evaluate this request against `table`
    pub fn evaluate(&self, table: &ConversionTable) -> Result<f64, UnsupportedConversion> {
        table.convert(self.value, self.from, self.to)
    }
}

/// Convert using the standard table
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, UnsupportedConversion> {
    ConversionTable::global().convert(value, from, to)
}
