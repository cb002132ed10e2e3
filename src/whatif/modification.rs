//! Parsing and applying single feature modifications.
//!
//! A modification is one of:
//!
//! - an absolute value: a JSON number or plain numeric text (`"750000"`)
//! - a signed delta: `"+350000"`, `"-2"`
//! - a signed percentage: `"+20%"`, `"-15%"`
//!
//! Arithmetic happens in the units the original value is displayed in, so
//! `"+2"` on a text value `"40%"` gives `"42%"`. Results are clamped to be
//! non-negative and written back in the original encoding.

use thiserror::Error;

use crate::core::{parse_numeric_text, NumericText, RawValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("Malformed modification for '{feature}': {raw:?}")]
    MalformedModification { feature: String, raw: String },

    #[error("Unsupported value for '{feature}': only numbers and numeric text can be modified")]
    UnsupportedValue { feature: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modification {
    Absolute(f64),
    Delta(f64),
    Percent(f64),
}

impl Modification {
    pub fn parse(feature: &str, raw: &RawValue) -> Result<Self, ScenarioError> {
        match raw {
            RawValue::Integer(i) => Ok(Modification::Absolute(*i as f64)),
            RawValue::Float(f) if f.is_finite() => Ok(Modification::Absolute(*f)),
            RawValue::Float(_) | RawValue::Other(_) => Err(ScenarioError::UnsupportedValue {
                feature: feature.to_string(),
            }),
            RawValue::Text(text) => Self::parse_text(feature, text),
        }
    }

    fn parse_text(feature: &str, text: &str) -> Result<Self, ScenarioError> {
        let trimmed = text.trim();
        let malformed = || ScenarioError::MalformedModification {
            feature: feature.to_string(),
            raw: text.to_string(),
        };

        let NumericText { value, percent } = parse_numeric_text(trimmed).ok_or_else(malformed)?;
        let signed = trimmed.starts_with('+') || trimmed.starts_with('-');

        Ok(match (signed, percent) {
            (true, true) => Modification::Percent(value),
            (true, false) => Modification::Delta(value),
            (false, _) => Modification::Absolute(value),
        })
    }

    /// New value, in displayed units, never negative.
    pub fn apply_to(self, original: f64) -> f64 {
        let value = match self {
            Modification::Absolute(v) => v,
            Modification::Delta(d) => original + d,
            Modification::Percent(p) => original * (1.0 + p / 100.0),
        };
        value.max(0.0)
    }
}

/// Apply a modification to a raw value, preserving its encoding.
///
/// Relative modifications need a numeric original; absolute ones replace
/// anything.
pub fn apply_modification(
    feature: &str,
    original: &RawValue,
    modification: Modification,
) -> Result<RawValue, ScenarioError> {
    let unsupported = || ScenarioError::UnsupportedValue {
        feature: feature.to_string(),
    };

    match original {
        RawValue::Integer(i) => Ok(RawValue::Integer(
            modification.apply_to(*i as f64).trunc() as i64,
        )),
        RawValue::Float(f) => Ok(RawValue::Float(modification.apply_to(*f))),
        RawValue::Text(text) => match parse_numeric_text(text) {
            Some(NumericText { value, percent }) => Ok(RawValue::Text(format_text(
                modification.apply_to(value),
                percent,
            ))),
            None => match modification {
                Modification::Absolute(v) => Ok(RawValue::Text(format_text(v.max(0.0), false))),
                _ => Err(unsupported()),
            },
        },
        RawValue::Other(_) => match modification {
            Modification::Absolute(v) => Ok(RawValue::Float(v.max(0.0))),
            _ => Err(unsupported()),
        },
    }
}

fn format_text(value: f64, percent: bool) -> String {
    let number = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    };
    if percent {
        format!("{number}%")
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: impl Into<RawValue>) -> Result<Modification, ScenarioError> {
        Modification::parse("budget", &raw.into())
    }

    #[test]
    fn parses_all_forms() {
        assert_eq!(parse(750_000i64), Ok(Modification::Absolute(750_000.0)));
        assert_eq!(parse("750000"), Ok(Modification::Absolute(750_000.0)));
        assert_eq!(parse("+350000"), Ok(Modification::Delta(350_000.0)));
        assert_eq!(parse("-2"), Ok(Modification::Delta(-2.0)));
        assert_eq!(parse("+20%"), Ok(Modification::Percent(20.0)));
        assert_eq!(parse("-15%"), Ok(Modification::Percent(-15.0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse("+abc"),
            Err(ScenarioError::MalformedModification {
                feature: "budget".into(),
                raw: "+abc".into(),
            })
        );
        assert!(matches!(
            Modification::parse("budget", &RawValue::Other(serde_json::Value::Bool(true))),
            Err(ScenarioError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn results_clamp_at_zero() {
        assert_eq!(Modification::Delta(-500.0).apply_to(100.0), 0.0);
        assert_eq!(Modification::Percent(-150.0).apply_to(100.0), 0.0);
    }

    #[test]
    fn integer_stays_integer() {
        let out = apply_modification("team_size", &RawValue::Integer(3), Modification::Percent(50.0));
        assert_eq!(out, Ok(RawValue::Integer(4)));
    }

    #[test]
    fn text_stays_text() {
        let out = apply_modification(
            "budget",
            &RawValue::from("150000"),
            Modification::Delta(350_000.0),
        );
        assert_eq!(out, Ok(RawValue::from("500000")));

        let pct = apply_modification(
            "hypothesis_validation_rate",
            &RawValue::from("40%"),
            Modification::Delta(2.0),
        );
        assert_eq!(pct, Ok(RawValue::from("42%")));
    }

    #[test]
    fn relative_change_on_unreadable_value_fails() {
        let out = apply_modification("budget", &RawValue::from("lots"), Modification::Delta(1.0));
        assert!(matches!(out, Err(ScenarioError::UnsupportedValue { .. })));
    }
}
