use synoptic_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("unknown checklist: {0}")]
    UnknownChecklist(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown field '{key}' for checklist '{checklist_id}'")]
    UnknownField { checklist_id: String, key: String },
}
