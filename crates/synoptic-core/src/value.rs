use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single answer captured by a UI host.
///
/// Serialized untagged so a host can exchange a plain JSON object of
/// `key -> value`. Every JSON string deserializes as [`Value::Text`], so a
/// date answer comes back from JSON as its ISO text; [`Value::as_date`]
/// reads either form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    Date(jiff::civil::Date),
}

impl Value {
    /// Whether this value counts as an answer.
    ///
    /// Blank text and unchecked boxes are unanswered. Numbers and dates are
    /// always answered, so a count of zero nodes is still reportable.
    pub fn is_answered(&self) -> bool {
        match self {
            Value::Text(text) => !text.trim().is_empty(),
            Value::Bool(checked) => *checked,
            Value::Number(n) => n.is_finite(),
            Value::Date(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// A date answer, whether held as a date or as `YYYY-MM-DD` text.
    pub fn as_date(&self) -> Option<jiff::civil::Date> {
        match self {
            Value::Date(date) => Some(*date),
            Value::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text.trim()),
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(true) => f.write_str("Yes"),
            Value::Bool(false) => f.write_str("No"),
            Value::Date(date) => write!(f, "{date}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(checked: bool) -> Self {
        Value::Bool(checked)
    }
}

impl From<jiff::civil::Date> for Value {
    fn from(date: jiff::civil::Date) -> Self {
        Value::Date(date)
    }
}
