use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::value::Value;

/// Read access to answers for rule evaluation.
///
/// Implementations return `None` for keys that are absent *or* unanswered
/// (blank text, unchecked box), so rules never see placeholder values.
pub trait AnswerLookup {
    fn lookup(&self, key: &str) -> Option<&Value>;
}

/// One predicate over a single prior answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    /// The answer is exactly `value`.
    Equals { key: String, value: String },
    /// The answer is one of `values`.
    OneOf { key: String, values: Vec<String> },
    /// The answer contains `needle` (e.g. any "G4" grade, any "MiNEN" type).
    Contains { key: String, needle: String },
    /// The checkbox is ticked.
    Checked { key: String },
    /// The field has any answer.
    Answered { key: String },
    /// The numeric answer is at least `min`.
    AtLeast { key: String, min: f64 },
}

impl Condition {
    pub fn equals(key: &str, value: &str) -> Self {
        Condition::Equals {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn one_of(key: &str, values: &[&str]) -> Self {
        Condition::OneOf {
            key: key.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn contains(key: &str, needle: &str) -> Self {
        Condition::Contains {
            key: key.to_string(),
            needle: needle.to_string(),
        }
    }

    pub fn checked(key: &str) -> Self {
        Condition::Checked {
            key: key.to_string(),
        }
    }

    pub fn answered(key: &str) -> Self {
        Condition::Answered {
            key: key.to_string(),
        }
    }

    pub fn at_least(key: &str, min: f64) -> Self {
        Condition::AtLeast {
            key: key.to_string(),
            min,
        }
    }

    /// The answer key this condition reads.
    pub fn key(&self) -> &str {
        match self {
            Condition::Equals { key, .. }
            | Condition::OneOf { key, .. }
            | Condition::Contains { key, .. }
            | Condition::Checked { key }
            | Condition::Answered { key }
            | Condition::AtLeast { key, .. } => key,
        }
    }

    pub fn evaluate(&self, answers: &impl AnswerLookup) -> bool {
        let Some(answer) = answers.lookup(self.key()) else {
            return false;
        };
        match self {
            Condition::Equals { value, .. } => answer.as_text() == Some(value.as_str()),
            Condition::OneOf { values, .. } => answer
                .as_text()
                .is_some_and(|text| values.iter().any(|v| v == text)),
            Condition::Contains { needle, .. } => {
                answer.as_text().is_some_and(|text| text.contains(needle.as_str()))
            }
            Condition::Checked { .. } => answer.as_bool() == Some(true),
            Condition::Answered { .. } => true,
            Condition::AtLeast { min, .. } => answer.as_number().is_some_and(|n| n >= *min),
        }
    }
}

/// AND of simple conditions. An empty rule is always satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisibilityRule {
    #[serde(default)]
    pub all_of: Vec<Condition>,
}

impl VisibilityRule {
    pub fn always() -> Self {
        Self::default()
    }

    pub fn when(condition: Condition) -> Self {
        Self {
            all_of: vec![condition],
        }
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.all_of.push(condition);
        self
    }

    pub fn is_always(&self) -> bool {
        self.all_of.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.all_of.iter().map(Condition::key)
    }

    pub fn is_satisfied(&self, answers: &impl AnswerLookup) -> bool {
        self.all_of.iter().all(|c| c.evaluate(answers))
    }
}

impl From<Condition> for VisibilityRule {
    fn from(condition: Condition) -> Self {
        Self::when(condition)
    }
}

/// Whether a field or group governed by `rule` is shown given `answers`.
pub fn is_visible(rule: &VisibilityRule, answers: &impl AnswerLookup) -> bool {
    rule.is_satisfied(answers)
}
