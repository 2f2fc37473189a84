use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use crate::answers::AnswerStore;
use crate::error::CoreError;
use crate::form::FormSchema;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    Editing,
    ReportGenerated,
}

/// One user editing one case on one checklist.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub form_id: String,
    pub state: SessionState,
    pub answers: AnswerStore,
    pub created_at: Timestamp,
    pub generated_at: Option<Timestamp>,
}

impl Session {
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            id: Uuid::new_v4(),
            form_id: schema.id.clone(),
            state: SessionState::Editing,
            answers: AnswerStore::new(&schema.id),
            created_at: Timestamp::now(),
            generated_at: None,
        }
    }

    /// Validate and store one answer, returning the value it replaced.
    pub fn set_answer(
        &mut self,
        schema: &FormSchema,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, CoreError> {
        if schema.id != self.form_id {
            return Err(CoreError::FormMismatch {
                expected: self.form_id.clone(),
                found: schema.id.clone(),
            });
        }
        let field = schema.field(key).ok_or_else(|| CoreError::UnknownField {
            form_id: schema.id.clone(),
            key: key.to_string(),
        })?;

        let value = value.into();
        field.check(&value)?;
        Ok(self.answers.set(key, value))
    }

    pub fn clear_answer(&mut self, key: &str) -> Option<Value> {
        self.answers.remove(key)
    }

    /// Record that a report was produced. Generating again is allowed and
    /// simply re-assembles from the current answers.
    pub fn mark_report_generated(&mut self) {
        self.state = SessionState::ReportGenerated;
        self.generated_at = Some(Timestamp::now());
    }

    /// Discard all answers and begin a fresh case on the same checklist.
    pub fn start_new_case(&mut self) {
        info!(session_id = %self.id, form_id = %self.form_id, "starting new case");
        self.id = Uuid::new_v4();
        self.state = SessionState::Editing;
        self.answers.clear();
        self.created_at = Timestamp::now();
        self.generated_at = None;
    }
}
