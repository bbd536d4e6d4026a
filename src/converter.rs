use serde::{Deserialize, Serialize};

use crate::error::SizeError;
use crate::locale::Locale;
use crate::unit::Unit;

pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// How [`format_size`] renders the numeric part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub decimal_places: usize,
    pub locale: Locale,
}

impl FormatOptions {
    pub fn new(decimal_places: usize, locale: Locale) -> Self {
        Self { decimal_places, locale }
    }

    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { decimal_places: DEFAULT_DECIMAL_PLACES, locale: Locale::invariant() }
    }
}

/// A size paired with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeValue {
    pub size: f64,
    pub unit: Unit,
}

impl From<(f64, Unit)> for SizeValue {
    fn from((size, unit): (f64, Unit)) -> Self {
        SizeValue { size, unit }
    }
}

fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), SizeError> {
    // NaN fails the comparison and is rejected along with negatives.
    if value >= 0.0 { Ok(()) } else { Err(SizeError::invalid_argument(name, value)) }
}

/// Convert `size` expressed in `from` into `to`.
pub fn convert(size: f64, from: Unit, to: Unit) -> Result<f64, SizeError> {
    ensure_non_negative("size", size)?;
    if from == to {
        return Ok(size);
    }
    let bytes = size * from.multiplier();
    Ok(bytes / to.multiplier())
}

/// Render `size` as `"<number> <suffix>"`, e.g. `"1.50 MB"`.
///
/// Negative sizes are rendered as-is.
pub fn format_size(size: f64, unit: Unit, options: &FormatOptions) -> String {
    format!("{} {}", options.locale.format_fixed(size, options.decimal_places), unit.suffix())
}

/// Pick the largest unit in which `bytes` is at least 1.
pub fn best_unit(bytes: f64) -> Result<(f64, Unit), SizeError> {
    ensure_non_negative("bytes", bytes)?;
    let unit = Unit::ALL
        .iter()
        .rev()
        .copied()
        .find(|unit| bytes >= unit.multiplier())
        .unwrap_or(Unit::Bytes);
    Ok((bytes / unit.multiplier(), unit))
}

/// Format a byte count in its best unit.
pub fn humanize(bytes: f64, options: &FormatOptions) -> Result<String, SizeError> {
    let (size, unit) = best_unit(bytes)?;
    Ok(format_size(size, unit, options))
}
