use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::answers::AnswerStore;
use crate::form::FormSchema;
use crate::section::{Item, SectionSchema};
use crate::value::Value;
use crate::visibility::AnswerLookup;

/// The answers of a store that are currently meaningful for a form.
///
/// Built by walking the form in declaration order: a field is visible only
/// when every enclosing section rule and its own rule hold against answers
/// already admitted, so a whole hidden cascade drops out at once. Only
/// visible, answered values are admitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedAnswers {
    pub form_id: String,
    values: BTreeMap<String, Value>,
    visible: BTreeSet<String>,
}

impl ResolvedAnswers {
    pub fn empty(form_id: &str) -> Self {
        Self {
            form_id: form_id.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Display text of an admitted answer.
    pub fn display(&self, key: &str) -> Option<String> {
        self.values.get(key).map(ToString::to_string)
    }

    pub fn is_field_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
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

    /// Record a field as visible, admitting its value when answered.
    pub(crate) fn admit(&mut self, key: &str, value: Option<&Value>) {
        self.visible.insert(key.to_string());
        if let Some(value) = value.filter(|v| v.is_answered()) {
            self.values.insert(key.to_string(), value.clone());
        }
    }
}

impl AnswerLookup for ResolvedAnswers {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

pub(crate) fn resolve(schema: &FormSchema, store: &AnswerStore) -> ResolvedAnswers {
    let mut resolved = ResolvedAnswers::empty(&schema.id);

    if !store.belongs_to(&schema.id) {
        warn!(
            form_id = %schema.id,
            store_form_id = %store.form_id,
            "answer store belongs to another form; ignoring its answers"
        );
        return resolved;
    }

    for section in &schema.sections {
        resolve_section(section, store, &mut resolved);
    }

    debug!(
        form_id = %schema.id,
        stored = store.len(),
        visible = resolved.visible.len(),
        admitted = resolved.len(),
        "resolved answers"
    );
    resolved
}

fn resolve_section(section: &SectionSchema, store: &AnswerStore, resolved: &mut ResolvedAnswers) {
    if !section.visible_when.is_satisfied(&*resolved) {
        return;
    }
    for item in &section.items {
        match item {
            Item::Field(field) => {
                if field.visible_when.is_satisfied(&*resolved) {
                    resolved.admit(&field.key, store.get(&field.key));
                }
            }
            Item::Section(nested) => resolve_section(nested, store, resolved),
            Item::Line(_) | Item::Note { .. } => {}
        }
    }
}
