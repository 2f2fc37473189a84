use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::CoreError;
use crate::value::Value;
use crate::visibility::{Condition, VisibilityRule};

/// The widget kind a host renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Numeric input, optionally bounded by a [`NumericRange`].
    Number,
    /// Calendar date.
    Date,
    /// Exactly one of `options`.
    SingleSelect,
    /// One boolean member of a "select all that apply" group.
    MultiSelectCheckbox,
    /// Multi-line free text.
    TextArea,
}

/// Defines the valid range for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericRange {
    pub min: f64,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl NumericRange {
    /// Whole numbers from `min` upward.
    pub const fn count(min: f64, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    /// Any non-negative measurement (sizes, distances, weights).
    pub const fn measurement() -> Self {
        Self {
            min: 0.0,
            max: None,
            step: None,
        }
    }

    pub const fn percentage() -> Self {
        Self {
            min: 0.0,
            max: Some(100.0),
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min {
            return false;
        }
        if let Some(max) = self.max
            && value > max
        {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// Static declarative description of one question on a checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSchema {
    /// Unique within a form.
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    /// Ordered choices for [`FieldKind::SingleSelect`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "VisibilityRule::is_always")]
    pub visible_when: VisibilityRule,
}

impl FieldSchema {
    fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            options: Vec::new(),
            range: None,
            default: None,
            visible_when: VisibilityRule::always(),
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn textarea(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub fn number(key: &str, label: &str, range: NumericRange) -> Self {
        Self::new(key, label, FieldKind::Number).with_range(range)
    }

    pub fn date(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn select(key: &str, label: &str, options: &[&str]) -> Self {
        let mut field = Self::new(key, label, FieldKind::SingleSelect);
        field.options = options.iter().map(|o| o.to_string()).collect();
        field
    }

    pub fn checkbox(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::MultiSelectCheckbox)
    }

    /// Add a condition to this field's visibility rule.
    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = self.visible_when.and(condition);
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_range(mut self, range: NumericRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Entry-time validation of a value a host wants to store.
    ///
    /// Blank text is always accepted for text-like, select and date fields;
    /// it simply counts as unanswered. Date fields also take ISO `YYYY-MM-DD`
    /// text, which is how a date arrives from a JSON host.
    pub fn check(&self, value: &Value) -> Result<(), CoreError> {
        match (self.kind, value) {
            (FieldKind::Text | FieldKind::TextArea, Value::Text(_)) => Ok(()),
            (FieldKind::SingleSelect, Value::Text(text)) => {
                if text.trim().is_empty() || self.options.iter().any(|o| o == text) {
                    Ok(())
                } else {
                    Err(CoreError::InvalidOption {
                        key: self.key.clone(),
                        value: text.clone(),
                    })
                }
            }
            (FieldKind::Number, Value::Number(n)) => match self.range {
                Some(range) if !range.contains(*n) => Err(ValidationError {
                    key: self.key.clone(),
                    value: *n,
                    expected_range: range,
                    message: format!(
                        "{} {} is outside range [{}, {}]",
                        self.label,
                        value,
                        range.min,
                        range
                            .max
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "∞".to_string()),
                    ),
                }
                .into()),
                _ => Ok(()),
            },
            (FieldKind::Date, Value::Date(_)) => Ok(()),
            (FieldKind::Date, Value::Text(text))
                if text.trim().is_empty() || value.as_date().is_some() =>
            {
                Ok(())
            }
            (FieldKind::MultiSelectCheckbox, Value::Bool(_)) => Ok(()),
            (expected, _) => Err(CoreError::KindMismatch {
                key: self.key.clone(),
                expected,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub key: String,
    pub value: f64,
    pub expected_range: NumericRange,
    pub message: String,
}
