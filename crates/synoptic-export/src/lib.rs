//! synoptic-export
//!
//! Plain-text report assembly from a checklist schema and its answers,
//! plus DOCX export and persisted report settings.

pub mod assemble;
pub mod docx;
pub mod error;
pub mod lines;
pub mod render;
pub mod settings;
pub mod styles;

pub use assemble::{AssembledReport, ReportAssembler, assemble_report};
pub use error::ExportError;
pub use settings::{ReportSettings, load_settings, save_settings};
