use thiserror::Error;

use crate::field::{FieldKind, ValidationError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field '{key}' for form '{form_id}'")]
    UnknownField { form_id: String, key: String },

    #[error("answers belong to form '{found}', expected '{expected}'")]
    FormMismatch { expected: String, found: String },

    #[error("field '{key}' expects a {expected:?} value")]
    KindMismatch { key: String, expected: FieldKind },

    #[error("'{value}' is not an option of field '{key}'")]
    InvalidOption { key: String, value: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
