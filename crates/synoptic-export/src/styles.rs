use serde::{Deserialize, Serialize};

/// Document styling for DOCX reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for report lines (e.g. "Courier New", "Calibri").
    pub body_font: String,

    /// Font for the report title and section headers.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Report title font size in points.
    pub title_size: usize,

    /// Section header font size in points.
    pub section_size: usize,

    /// Left indent per nesting level, in points.
    pub indent_points: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            title_size: 14,
            section_size: 12,
            indent_points: 18,
            margin_inches: 1.0,
        }
    }
}
