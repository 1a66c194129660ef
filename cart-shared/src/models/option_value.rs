use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar option value as it appears in cart and base-price files.
///
/// Integers and floats are kept apart: `9` and `9.0` render differently
/// and so produce different price keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            // serde_json keeps the fractional part of floats ("9.0")
            OptionValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value.into())
    }
}

impl From<f64> for OptionValue {
    /// Non-finite floats have no JSON form and fall back to their text rendering.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(OptionValue::Number)
            .unwrap_or_else(|| OptionValue::Text(value.to_string()))
    }
}
