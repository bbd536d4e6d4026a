//! Numeric formatting conventions.
//!
//! Only the decimal separator varies between locales: sizes are rendered in
//! fixed-point notation without digit grouping.

use std::fmt;
use std::str::FromStr;

use crate::error::SizeError;

const COMMA_LANGUAGES: &[&str] = &[
    "cs", "da", "de", "es", "fi", "fr", "it", "nb", "nl", "pl", "pt", "ru", "sv", "tr", "uk",
];

const DOT_LANGUAGES: &[&str] = &["en", "he", "hi", "ja", "ko", "th", "zh"];

/// Fraction digits needed to print any finite `f64` exactly (the smallest
/// subnormal has 1074). Digits past this are always zero.
pub const MAX_EXACT_FRACTION_DIGITS: usize = 1100;

/// Environment variables consulted by [`Locale::from_env`], highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    name: String,
    decimal_separator: char,
}

impl Locale {
    pub fn invariant() -> Self {
        Locale { name: "invariant".to_string(), decimal_separator: '.' }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Resolve the locale from `LC_ALL`, `LC_NUMERIC` or `LANG`.
    ///
    /// The first non-empty variable wins, as in POSIX. If its value is not a
    /// recognized locale the result is `None`; lower-priority variables are
    /// not consulted.
    pub fn from_env() -> Option<Self> {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .and_then(|value| value.parse().ok())
    }

    /// Render `value` with exactly `places` fractional digits.
    ///
    /// Rounding follows the standard library's exact decimal expansion, so
    /// values that sit exactly halfway round to the even digit.
    pub fn format_fixed(&self, value: f64, places: usize) -> String {
        let exact = places.min(MAX_EXACT_FRACTION_DIGITS);
        let mut rendered = format!("{value:.exact$}");
        if places > exact && value.is_finite() {
            rendered.extend(std::iter::repeat_n('0', places - exact));
        }
        if self.decimal_separator == '.' {
            rendered
        } else {
            rendered.replacen('.', self.decimal_separator.encode_utf8(&mut [0; 4]), 1)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::invariant()
    }
}

impl FromStr for Locale {
    type Err = SizeError;

    /// Accepts `invariant`, `C`, `POSIX` and tags such as `de_DE.UTF-8`, `fr-FR` or `en`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Drop the codeset and modifier: "de_DE.UTF-8@euro" -> "de_DE".
        let tag = trimmed.split(['.', '@']).next().unwrap_or_default();
        let lowered = tag.to_ascii_lowercase();

        if matches!(lowered.as_str(), "" | "c" | "posix" | "invariant") {
            return Ok(Locale::invariant());
        }

        let language = lowered.split(['_', '-']).next().unwrap_or_default();
        let decimal_separator = if COMMA_LANGUAGES.contains(&language) {
            ','
        } else if DOT_LANGUAGES.contains(&language) {
            '.'
        } else {
            return Err(SizeError::UnsupportedLocale(trimmed.to_string()));
        };

        Ok(Locale { name: tag.replace('_', "-"), decimal_separator })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
