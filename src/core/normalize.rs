//! Lenient numeric normalization.
//!
//! Project metrics arrive in mixed encodings: plain JSON numbers, numeric
//! strings, percentages (`"22%"`), currency amounts (`"SAR 150,000"`) and
//! magnitude suffixes (`"1.5m"`). Every stage reads numbers through this
//! module so that the coercion policy lives in one place:
//!
//! - parsable values become [`Coerced::Parsed`], clamped to be non-negative
//! - anything else becomes [`Coerced::Defaulted`] with `0.0`
//!
//! Nothing here returns an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::features::RawValue;

static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)usd|sar|eur|gbp|aed|riyals?|[$€£¥]").unwrap());
static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([+-]?(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?)([kmb])?(%)?$").unwrap()
});

/// Outcome of coercing one raw value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Coerced {
    /// The value was understood; negatives are already clamped to zero.
    Parsed(f64),
    /// The value could not be read and was replaced.
    Defaulted(f64),
}

impl Coerced {
    pub fn value(self) -> f64 {
        match self {
            Coerced::Parsed(v) | Coerced::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(self) -> bool {
        matches!(self, Coerced::Defaulted(_))
    }
}

/// A number recovered from text, before percent handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericText {
    pub value: f64,
    pub percent: bool,
}

/// Parse numeric text, tolerating currency markers, separators and
/// k/m/b magnitude suffixes. Returns `None` when no number is present.
pub fn parse_numeric_text(raw: &str) -> Option<NumericText> {
    let stripped = CURRENCY.replace_all(raw.trim(), "");
    let compact: String = stripped
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect();

    let caps = NUMERIC.captures(&compact)?;
    let mut value: f64 = caps.get(1)?.as_str().parse().ok()?;
    if let Some(suffix) = caps.get(2) {
        value *= match suffix.as_str() {
            "k" | "K" => 1e3,
            "m" | "M" => 1e6,
            _ => 1e9,
        };
    }

    value.is_finite().then_some(NumericText {
        value,
        percent: caps.get(3).is_some(),
    })
}

/// Clamp a finite number to be non-negative.
pub fn coerce_number(value: f64) -> Coerced {
    if value.is_finite() {
        Coerced::Parsed(value.max(0.0))
    } else {
        Coerced::Defaulted(0.0)
    }
}

/// Coerce numeric text. A trailing `%` always divides by 100, whatever
/// scale the feature is on: `"25%"` is `0.25`.
pub fn coerce_text(raw: &str) -> Coerced {
    match parse_numeric_text(raw) {
        Some(NumericText { value, percent }) => {
            coerce_number(if percent { value / 100.0 } else { value })
        }
        None => Coerced::Defaulted(0.0),
    }
}

/// Coerce any raw field value into a canonical non-negative float.
pub fn coerce_raw(raw: &RawValue) -> Coerced {
    match raw {
        RawValue::Integer(i) => coerce_number(*i as f64),
        RawValue::Float(f) => coerce_number(*f),
        RawValue::Text(s) => coerce_text(s),
        RawValue::Other(_) => Coerced::Defaulted(0.0),
    }
}
