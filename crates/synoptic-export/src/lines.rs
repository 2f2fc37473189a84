use std::collections::BTreeMap;

use tracing::warn;

use synoptic_core::{LineTemplate, ListEntry, ResolvedAnswers};

use crate::render;

/// One report line before indentation: nesting depth and text.
pub type Emitted = (usize, String);

/// Turns line templates into report lines against resolved answers.
///
/// Only admitted (visible, answered) values are ever read, so a line for
/// an unanswered or hidden field simply produces nothing.
pub struct LineEmitter<'a> {
    answers: &'a ResolvedAnswers,
    list_separator: &'a str,
}

impl<'a> LineEmitter<'a> {
    pub fn new(answers: &'a ResolvedAnswers, list_separator: &'a str) -> Self {
        Self {
            answers,
            list_separator,
        }
    }

    /// Append whatever `line` emits at `depth` to `out`.
    pub fn emit(&self, line: &LineTemplate, depth: usize, out: &mut Vec<Emitted>) {
        match line {
            LineTemplate::Value {
                label,
                key,
                prefix,
                suffix,
                details,
            } => {
                if let Some(value) = self.answers.display(key) {
                    out.push((depth, format!("{label}: {prefix}{value}{suffix}")));
                    self.emit_all(details, depth + 1, out);
                }
            }
            LineTemplate::List {
                label,
                entries,
                details,
            } => {
                let checked = self.checked(entries);
                if !checked.is_empty() {
                    let joined = checked.join(self.list_separator);
                    out.push((depth, format!("{label}: {joined}")));
                    self.emit_all(details, depth + 1, out);
                }
            }
            LineTemplate::Bullets { entries } => {
                for entry in self.checked(entries) {
                    out.push((depth, format!("- {entry}")));
                }
            }
            LineTemplate::Text { key } => {
                if let Some(text) = self.answers.display(key) {
                    out.push((depth, text));
                }
            }
            LineTemplate::Static { text } => out.push((depth, text.clone())),
            LineTemplate::Template {
                source,
                requires,
                optional,
            } => {
                if let Some(text) = self.template(source, requires, optional) {
                    out.push((depth, text));
                }
            }
            LineTemplate::When { rule, line } => {
                if rule.is_satisfied(self.answers) {
                    self.emit(line, depth, out);
                }
            }
            LineTemplate::FirstOf { lines } => {
                let before = out.len();
                for line in lines {
                    self.emit(line, depth, out);
                    if out.len() > before {
                        break;
                    }
                }
            }
        }
    }

    fn emit_all(&self, lines: &[LineTemplate], depth: usize, out: &mut Vec<Emitted>) {
        for line in lines {
            self.emit(line, depth, out);
        }
    }

    /// Rendered text of each checked entry, in declaration order.
    fn checked(&self, entries: &[ListEntry]) -> Vec<String> {
        entries
            .iter()
            .filter(|entry| self.answers.get(&entry.key).and_then(|v| v.as_bool()) == Some(true))
            .map(|entry| {
                let detail = entry.detail.as_deref().and_then(|key| self.answers.display(key));
                entry.render(detail.as_deref())
            })
            .collect()
    }

    fn template(&self, source: &str, requires: &[String], optional: &[String]) -> Option<String> {
        let mut values = BTreeMap::new();
        for key in requires {
            values.insert(key.as_str(), self.answers.display(key)?);
        }
        for key in optional {
            if let Some(value) = self.answers.display(key) {
                values.insert(key.as_str(), value);
            }
        }

        match render::render_line(source, &values) {
            Ok(rendered) => {
                let trimmed = rendered.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Err(e) => {
                warn!(error = %e, "line template failed to render; omitting line");
                None
            }
        }
    }
}
