use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::value::Value;
use crate::visibility::AnswerLookup;

/// The flat `key -> value` store a UI host fills while a case is edited.
///
/// Keys are namespaced by the owning form: a store only ever answers for
/// the form it was created for, so identical keys (`case_id`,
/// `margin_status`, ...) in different checklists can never collide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerStore {
    pub form_id: String,
    #[serde(default)]
    pub values: BTreeMap<String, Value>,
}

impl AnswerStore {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn belongs_to(&self, form_id: &str) -> bool {
        self.form_id == form_id
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set an answer, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Builder-style [`set`](Self::set), handy for hosts and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(Value::is_answered)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AnswerLookup for AnswerStore {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| v.is_answered())
    }
}
