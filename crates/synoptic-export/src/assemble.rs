use jiff::civil::{Date, DateTime};
use serde::Serialize;
use tracing::{debug, warn};

use synoptic_core::{AnswerStore, FormSchema, Item, ResolvedAnswers, report_filename};

use crate::lines::{Emitted, LineEmitter};
use crate::render;
use crate::settings::ReportSettings;

const END_MARKER: &str = "End of Report";

/// A finished plain-text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledReport {
    pub form_id: String,
    pub title: String,
    pub slug: String,
    /// Top-level section titles that made it into the report, in order.
    pub sections: Vec<String>,
    pub text: String,
}

impl AssembledReport {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// `{slug}_pathology_report_{YYYYMMDD_HHMMSS}.txt`
    pub fn suggested_filename(&self, at: DateTime) -> String {
        report_filename(&self.slug, at)
    }
}

/// Walks a form schema and its answers into report text.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    settings: ReportSettings,
}

impl ReportAssembler {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Assemble the report for `store` as of `date`.
    ///
    /// Never fails: unanswered and hidden fields produce no lines, and a
    /// line whose template cannot be rendered is logged and skipped.
    pub fn assemble(&self, schema: &FormSchema, store: &AnswerStore, date: Date) -> AssembledReport {
        let answers = schema.resolve(store);
        let emitter = LineEmitter::new(&answers, &self.settings.list_separator);

        let mut lines: Vec<Emitted> = Vec::new();
        let mut sections = Vec::new();

        match render::render_header(schema, date) {
            Ok(header) => lines.extend(header.lines().map(|l| (0, l.to_string()))),
            Err(e) => {
                warn!(form_id = %schema.id, error = %e, "report header failed to render");
                lines.push((0, schema.title.clone()));
            }
        }

        for section in &schema.sections {
            if !section.visible_when.is_satisfied(&answers) {
                continue;
            }
            let gated = !section.report_when.is_always();
            if gated && !section.report_when.is_satisfied(&answers) {
                continue;
            }
            let mut body = Vec::new();
            emit_items(&section.items, 0, &emitter, &answers, &mut body);
            if body.is_empty() && section.omit_when_empty && !gated {
                continue;
            }

            lines.push((0, String::new()));
            if let Some(title) = &section.title {
                lines.push((0, title.clone()));
                sections.push(title.clone());
            }
            if let Some(preamble) = &section.preamble {
                lines.extend(preamble.split('\n').map(|l| (0, l.to_string())));
            }
            lines.extend(body);
        }

        lines.push((0, String::new()));
        lines.push((0, END_MARKER.to_string()));

        let text = self.join(&lines);
        debug!(
            form_id = %schema.id,
            sections = sections.len(),
            lines = lines.len(),
            "assembled report"
        );

        AssembledReport {
            form_id: schema.id.clone(),
            title: schema.title.clone(),
            slug: schema.slug.clone(),
            sections,
            text,
        }
    }

    fn join(&self, lines: &[Emitted]) -> String {
        let mut text = String::new();
        for (depth, line) in lines {
            if !line.is_empty() {
                text.push_str(&" ".repeat(depth * self.settings.indent_width));
                text.push_str(line);
            }
            text.push('\n');
        }
        text
    }
}

/// Emit a section body. Nested groups print their title (if any) at
/// `depth` and their items one level deeper, but only when those items
/// produce something.
fn emit_items(
    items: &[Item],
    depth: usize,
    emitter: &LineEmitter<'_>,
    answers: &ResolvedAnswers,
    out: &mut Vec<Emitted>,
) {
    for item in items {
        match item {
            Item::Line(line) => emitter.emit(line, depth, out),
            Item::Section(nested) => {
                if !nested.visible_when.is_satisfied(answers) {
                    continue;
                }
                let mut body = Vec::new();
                emit_items(&nested.items, depth + 1, emitter, answers, &mut body);
                if body.is_empty() {
                    continue;
                }
                if let Some(title) = &nested.title {
                    out.push((depth, title.clone()));
                }
                out.extend(body);
            }
            Item::Field(_) | Item::Note { .. } => {}
        }
    }
}

/// Assemble with default settings.
pub fn assemble_report(schema: &FormSchema, store: &AnswerStore, date: Date) -> AssembledReport {
    ReportAssembler::default().assemble(schema, store, date)
}
