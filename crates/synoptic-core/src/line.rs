use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::visibility::{Condition, VisibilityRule};

/// How a checked entry's free-text detail is attached to its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DetailStyle {
    /// `Right lobe (segment 7)`
    #[default]
    Parenthesized,
    /// `Other: caudate process`
    Labeled,
}

/// One checkbox of a "select all that apply" group as it reads in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListEntry {
    /// Checkbox key.
    pub key: String,
    pub text: String,
    /// Optional free-text key whose answer is attached to `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub style: DetailStyle,
    /// Replaces `text` when the detail is unanswered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain: Option<String>,
}

impl ListEntry {
    pub fn new(key: &str, text: &str) -> Self {
        Self {
            key: key.to_string(),
            text: text.to_string(),
            detail: None,
            style: DetailStyle::Parenthesized,
            plain: None,
        }
    }

    pub fn with_detail(mut self, key: &str) -> Self {
        self.detail = Some(key.to_string());
        self.style = DetailStyle::Parenthesized;
        self
    }

    pub fn with_labeled_detail(mut self, key: &str) -> Self {
        self.detail = Some(key.to_string());
        self.style = DetailStyle::Labeled;
        self
    }

    pub fn or_plain(mut self, text: &str) -> Self {
        self.plain = Some(text.to_string());
        self
    }

    /// Render this entry given the (already visible and answered) detail.
    pub fn render(&self, detail: Option<&str>) -> String {
        match (detail, self.style) {
            (Some(d), DetailStyle::Parenthesized) => format!("{} ({d})", self.text),
            (Some(d), DetailStyle::Labeled) => format!("{}: {d}", self.text),
            (None, _) => self.plain.clone().unwrap_or_else(|| self.text.clone()),
        }
    }
}

/// Declarative mapping from answers to report lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum LineTemplate {
    /// `{label}: {prefix}{value}{suffix}`, followed by indented details.
    Value {
        label: String,
        key: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        prefix: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        suffix: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        details: Vec<LineTemplate>,
    },
    /// `{label}: a, b (detail), c` over the checked entries.
    List {
        label: String,
        entries: Vec<ListEntry>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        details: Vec<LineTemplate>,
    },
    /// One `- entry` line per checked entry.
    Bullets { entries: Vec<ListEntry> },
    /// The raw, possibly multi-line, answer.
    Text { key: String },
    /// Fixed text.
    Static { text: String },
    /// A tera template rendered against the visible answers. Only emitted
    /// once every `requires` key is answered; `optional` keys may be
    /// referenced behind `is defined` tests.
    Template {
        source: String,
        #[serde(default)]
        requires: Vec<String>,
        #[serde(default)]
        optional: Vec<String>,
    },
    /// Emits `line` only while `rule` holds.
    When {
        rule: VisibilityRule,
        line: Box<LineTemplate>,
    },
    /// The first alternative that emits anything.
    FirstOf { lines: Vec<LineTemplate> },
}

impl LineTemplate {
    pub fn value(label: &str, key: &str) -> Self {
        LineTemplate::Value {
            label: label.to_string(),
            key: key.to_string(),
            prefix: String::new(),
            suffix: String::new(),
            details: Vec::new(),
        }
    }

    pub fn list(label: &str, entries: Vec<ListEntry>) -> Self {
        LineTemplate::List {
            label: label.to_string(),
            entries,
            details: Vec::new(),
        }
    }

    pub fn bullets(entries: Vec<ListEntry>) -> Self {
        LineTemplate::Bullets { entries }
    }

    pub fn text(key: &str) -> Self {
        LineTemplate::Text {
            key: key.to_string(),
        }
    }

    pub fn fixed(text: &str) -> Self {
        LineTemplate::Static {
            text: text.to_string(),
        }
    }

    pub fn template(source: &str) -> Self {
        LineTemplate::Template {
            source: source.to_string(),
            requires: Vec::new(),
            optional: Vec::new(),
        }
    }

    pub fn when(condition: Condition, line: LineTemplate) -> Self {
        LineTemplate::When {
            rule: VisibilityRule::when(condition),
            line: Box::new(line),
        }
    }

    pub fn first_of(lines: Vec<LineTemplate>) -> Self {
        LineTemplate::FirstOf { lines }
    }

    /// Add required keys to a [`LineTemplate::Template`].
    pub fn requires(mut self, keys: &[&str]) -> Self {
        debug_assert!(
            matches!(self, LineTemplate::Template { .. }),
            "requires() only applies to template lines"
        );
        if let LineTemplate::Template { requires, .. } = &mut self {
            requires.extend(keys.iter().map(|k| k.to_string()));
        }
        self
    }

    /// Add optional keys to a [`LineTemplate::Template`].
    pub fn optional(mut self, keys: &[&str]) -> Self {
        debug_assert!(
            matches!(self, LineTemplate::Template { .. }),
            "optional() only applies to template lines"
        );
        if let LineTemplate::Template { optional, .. } = &mut self {
            optional.extend(keys.iter().map(|k| k.to_string()));
        }
        self
    }

    pub fn with_prefix(mut self, text: &str) -> Self {
        debug_assert!(
            matches!(self, LineTemplate::Value { .. }),
            "with_prefix() only applies to value lines"
        );
        if let LineTemplate::Value { prefix, .. } = &mut self {
            *prefix = text.to_string();
        }
        self
    }

    pub fn with_suffix(mut self, text: &str) -> Self {
        debug_assert!(
            matches!(self, LineTemplate::Value { .. }),
            "with_suffix() only applies to value lines"
        );
        if let LineTemplate::Value { suffix, .. } = &mut self {
            *suffix = text.to_string();
        }
        self
    }

    /// Attach an indented detail line, emitted only when this line emits.
    pub fn with_detail(mut self, line: LineTemplate) -> Self {
        debug_assert!(
            matches!(self, LineTemplate::Value { .. } | LineTemplate::List { .. }),
            "with_detail() only applies to value and list lines"
        );
        match &mut self {
            LineTemplate::Value { details, .. } | LineTemplate::List { details, .. } => {
                details.push(line);
            }
            _ => {}
        }
        self
    }

    /// Every answer key this template reads, rule keys included.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        match self {
            LineTemplate::Value { key, details, .. } => {
                keys.push(key);
                for line in details {
                    line.collect_keys(keys);
                }
            }
            LineTemplate::List {
                entries, details, ..
            } => {
                collect_entry_keys(entries, keys);
                for line in details {
                    line.collect_keys(keys);
                }
            }
            LineTemplate::Bullets { entries } => collect_entry_keys(entries, keys),
            LineTemplate::Text { key } => keys.push(key),
            LineTemplate::Static { .. } => {}
            LineTemplate::Template {
                requires, optional, ..
            } => {
                keys.extend(requires.iter().map(String::as_str));
                keys.extend(optional.iter().map(String::as_str));
            }
            LineTemplate::When { rule, line } => {
                keys.extend(rule.keys());
                line.collect_keys(keys);
            }
            LineTemplate::FirstOf { lines } => {
                for line in lines {
                    line.collect_keys(keys);
                }
            }
        }
    }
}

fn collect_entry_keys<'a>(entries: &'a [ListEntry], keys: &mut Vec<&'a str>) {
    for entry in entries {
        keys.push(&entry.key);
        if let Some(detail) = &entry.detail {
            keys.push(detail);
        }
    }
}
