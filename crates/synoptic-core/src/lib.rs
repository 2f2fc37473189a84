//! synoptic-core
//!
//! Pure domain types for synoptic pathology checklists: field, section and
//! form schemas, visibility rules, line templates, the answer store, and
//! the session lifecycle. Shared by the checklist data, UI hosts and the
//! report assembler; nothing here renders or exports.

pub mod answers;
pub mod error;
pub mod field;
pub mod filename;
pub mod form;
pub mod host;
pub mod line;
pub mod resolve;
pub mod section;
pub mod session;
pub mod value;
pub mod visibility;

pub use answers::AnswerStore;
pub use error::CoreError;
pub use field::{FieldKind, FieldSchema, NumericRange, ValidationError};
pub use filename::report_filename;
pub use form::{FormSchema, SchemaIssue};
pub use host::{FormHost, present};
pub use line::{DetailStyle, LineTemplate, ListEntry};
pub use resolve::ResolvedAnswers;
pub use section::{Item, SectionSchema};
pub use session::{Session, SessionState};
pub use value::Value;
pub use visibility::{AnswerLookup, Condition, VisibilityRule, is_visible};
