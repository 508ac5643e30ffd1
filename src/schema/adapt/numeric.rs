//! Numeric coercion for spreadsheet-exported text.
//!
//! Quantities in the policy table arrive formatted for humans (`"974,365"`).
//! Separators are stripped before parsing; anything still unparsable, and
//! any missing cell, becomes zero. Zero means "no replenishment impact" in
//! every aggregation downstream.

/// Characters treated as digit-group separators
const SEPARATORS: [char; 5] = [',', '_', ' ', '\'', '\u{a0}'];

/// Outcome of coercing one raw cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    /// The cell held a finite number
    Parsed(f64),
    /// The cell was null or blank
    Missing,
    /// The cell held text that is not a finite number
    Unparsable,
}

impl Coerced {
    /// The value used for aggregation
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Parsed(v) => v,
            Self::Missing | Self::Unparsable => 0.0,
        }
    }
}

/// Coerce a raw cell into a number
#[must_use]
pub fn coerce_number(raw: Option<&str>) -> Coerced {
    let Some(raw) = raw else {
        return Coerced::Missing;
    };

    let cleaned: String = raw.trim().chars().filter(|c| !SEPARATORS.contains(c)).collect();
    if cleaned.is_empty() {
        return Coerced::Missing;
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Coerced::Parsed(v),
        _ => Coerced::Unparsable,
    }
}

/// Running tally of coercions applied to a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoercionStats {
    pub parsed: usize,
    pub missing: usize,
    pub unparsable: usize,
}

impl CoercionStats {
    pub fn record(&mut self, outcome: Coerced) {
        match outcome {
            Coerced::Parsed(_) => self.parsed += 1,
            Coerced::Missing => self.missing += 1,
            Coerced::Unparsable => self.unparsable += 1,
        }
    }

    /// Number of cells that were replaced with zero
    #[must_use]
    pub const fn defaulted(&self) -> usize {
        self.missing + self.unparsable
    }
}
