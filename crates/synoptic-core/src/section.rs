use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::field::FieldSchema;
use crate::line::LineTemplate;
use crate::visibility::{Condition, VisibilityRule};

/// One entry of a section, in display and report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Item {
    Field(FieldSchema),
    Section(SectionSchema),
    Line(LineTemplate),
    /// Guidance shown by the host only; never reported.
    Note { text: String },
}

/// An ordered group of fields, report lines and nested groups.
///
/// Top-level sections become the report's all-caps headers. Nested
/// sections are conditional sub-groups: their lines are indented one
/// level and their optional title only appears when they emit something.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Boilerplate printed right after the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    #[serde(default, skip_serializing_if = "VisibilityRule::is_always")]
    pub visible_when: VisibilityRule,
    /// Report-only gate for a top-level section. When set, the header is
    /// printed exactly when the rule holds, even over an empty body.
    #[serde(default, skip_serializing_if = "VisibilityRule::is_always")]
    pub report_when: VisibilityRule,
    /// Leave the whole section out of the report when its body is empty.
    #[serde(default)]
    pub omit_when_empty: bool,
    pub items: Vec<Item>,
}

impl SectionSchema {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    /// An untitled sub-group.
    pub fn group() -> Self {
        Self::default()
    }

    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = self.visible_when.and(condition);
        self
    }

    pub fn preamble(mut self, text: &str) -> Self {
        self.preamble = Some(text.to_string());
        self
    }

    pub fn report_when(mut self, condition: Condition) -> Self {
        self.report_when = self.report_when.and(condition);
        self
    }

    pub fn omit_when_empty(mut self) -> Self {
        self.omit_when_empty = true;
        self
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.items.push(Item::Field(field));
        self
    }

    pub fn section(mut self, section: SectionSchema) -> Self {
        self.items.push(Item::Section(section));
        self
    }

    pub fn line(mut self, line: LineTemplate) -> Self {
        self.items.push(Item::Line(line));
        self
    }

    pub fn note(mut self, text: &str) -> Self {
        self.items.push(Item::Note {
            text: text.to_string(),
        });
        self
    }

    /// All fields in declaration order, nested groups included.
    pub fn fields(&self) -> Vec<&FieldSchema> {
        let mut fields = Vec::new();
        collect_fields(&self.items, &mut fields);
        fields
    }

    /// All line templates in declaration order, nested groups included.
    pub fn lines(&self) -> Vec<&LineTemplate> {
        let mut lines = Vec::new();
        collect_lines(&self.items, &mut lines);
        lines
    }
}

fn collect_fields<'a>(items: &'a [Item], out: &mut Vec<&'a FieldSchema>) {
    for item in items {
        match item {
            Item::Field(field) => out.push(field),
            Item::Section(section) => collect_fields(&section.items, out),
            Item::Line(_) | Item::Note { .. } => {}
        }
    }
}

fn collect_lines<'a>(items: &'a [Item], out: &mut Vec<&'a LineTemplate>) {
    for item in items {
        match item {
            Item::Line(line) => out.push(line),
            Item::Section(section) => collect_lines(&section.items, out),
            Item::Field(_) | Item::Note { .. } => {}
        }
    }
}
