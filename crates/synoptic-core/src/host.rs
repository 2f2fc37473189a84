use tracing::warn;

use crate::answers::AnswerStore;
use crate::error::CoreError;
use crate::field::FieldSchema;
use crate::form::FormSchema;
use crate::resolve::ResolvedAnswers;
use crate::section::{Item, SectionSchema};
use crate::value::Value;

/// The capabilities a UI host lends to the core while a form is shown.
pub trait FormHost {
    /// Render a section or group title. `depth` is 0 for top-level sections.
    fn heading(&mut self, title: &str, depth: usize);

    /// Render static guidance text.
    fn note(&mut self, text: &str);

    /// Render a labeled input and return its current value, or `None` when
    /// the user left it empty. `current` is the stored answer, falling back
    /// to the field default.
    fn input(&mut self, field: &FieldSchema, current: Option<&Value>) -> Option<Value>;
}

/// Walk `schema` top to bottom the way a UI pass would, collecting input
/// for every currently visible field into `store`.
///
/// Visibility is re-evaluated as values come in, so answering a gating
/// select reveals its dependents within the same pass. Rejected values are
/// logged, left out of the store, and returned; the pass always completes.
/// Hidden fields keep their stale values, which resolution keeps out of
/// reports.
pub fn present(
    schema: &FormSchema,
    store: &mut AnswerStore,
    host: &mut impl FormHost,
) -> Vec<CoreError> {
    if !store.belongs_to(&schema.id) {
        return vec![CoreError::FormMismatch {
            expected: schema.id.clone(),
            found: store.form_id.clone(),
        }];
    }

    let mut shown = ResolvedAnswers::empty(&schema.id);
    let mut rejected = Vec::new();
    for section in &schema.sections {
        present_section(section, 0, store, host, &mut shown, &mut rejected);
    }
    rejected
}

fn present_section(
    section: &SectionSchema,
    depth: usize,
    store: &mut AnswerStore,
    host: &mut impl FormHost,
    shown: &mut ResolvedAnswers,
    rejected: &mut Vec<CoreError>,
) {
    if !section.visible_when.is_satisfied(&*shown) {
        return;
    }
    if let Some(title) = &section.title {
        host.heading(title, depth);
    }

    for item in &section.items {
        match item {
            Item::Field(field) => {
                if !field.visible_when.is_satisfied(&*shown) {
                    continue;
                }
                let current = store.get(&field.key).or(field.default.as_ref()).cloned();
                match host.input(field, current.as_ref()) {
                    Some(value) => match field.check(&value) {
                        Ok(()) => {
                            store.set(field.key.clone(), value);
                        }
                        Err(e) => {
                            warn!(form_id = %store.form_id, key = %field.key, error = %e, "rejected answer");
                            rejected.push(e);
                        }
                    },
                    None => {
                        store.remove(&field.key);
                    }
                }
                shown.admit(&field.key, store.get(&field.key));
            }
            Item::Section(nested) => {
                present_section(nested, depth + 1, store, host, shown, rejected);
            }
            Item::Note { text } => host.note(text),
            Item::Line(_) => {}
        }
    }
}
