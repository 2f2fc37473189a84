//! synoptic-checklists
//!
//! The CAP/AJCC cancer checklists as static form schemas. Pure data: each
//! checklist declares its questions, visibility cascades and report lines,
//! and nothing else. Every schema is complete on its own; protocols are
//! revised per organ, so no checklist borrows from another.

pub mod checklists;
pub mod error;

use synoptic_core::{AnswerStore, CoreError, FieldSchema, FormSchema, ValidationError};

use error::ChecklistError;

/// Trait implemented by each cancer checklist.
pub trait Checklist: Send + Sync {
    /// Unique identifier, also the form id of its answer stores
    /// (e.g. "hcc", "kidney").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "Hepatocellular Carcinoma").
    fn name(&self) -> &str;

    /// The complete form: sections, fields, visibility and report lines.
    fn schema(&self) -> &FormSchema;

    /// Look up a field, failing for keys this checklist does not declare.
    fn field(&self, key: &str) -> Result<&FieldSchema, ChecklistError> {
        self.schema()
            .field(key)
            .ok_or_else(|| ChecklistError::UnknownField {
                checklist_id: self.id().to_string(),
                key: key.to_string(),
            })
    }

    /// Range-check every visible, answered numeric field.
    ///
    /// Hidden answers are skipped: they never reach a report.
    fn validate_answers(&self, answers: &AnswerStore) -> Vec<ValidationError> {
        let schema = self.schema();
        let resolved = schema.resolve(answers);

        let mut errors = Vec::new();
        for field in schema.fields() {
            if let Some(value) = resolved.get(&field.key)
                && let Err(CoreError::Validation(error)) = field.check(value)
            {
                errors.push(error);
            }
        }
        if !errors.is_empty() {
            tracing::debug!(checklist = self.id(), count = errors.len(), "out-of-range answers");
        }
        errors
    }
}

/// Return all registered checklists.
pub fn all_checklists() -> Vec<Box<dyn Checklist>> {
    vec![
        Box::new(checklists::hcc::Hcc),
        Box::new(checklists::ampulla::AmpullaOfVater),
        Box::new(checklists::colorectal::Colorectal),
        Box::new(checklists::kidney::Kidney),
    ]
}

/// Look up a checklist by ID.
pub fn get_checklist(id: &str) -> Option<Box<dyn Checklist>> {
    all_checklists().into_iter().find(|c| c.id() == id)
}

/// Like [`get_checklist`], for callers that treat an unknown id as an error.
pub fn require_checklist(id: &str) -> Result<Box<dyn Checklist>, ChecklistError> {
    get_checklist(id).ok_or_else(|| ChecklistError::UnknownChecklist(id.to_string()))
}
