use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::answers::AnswerStore;
use crate::field::{FieldKind, FieldSchema};
use crate::line::LineTemplate;
use crate::resolve::{self, ResolvedAnswers};
use crate::section::{Item, SectionSchema};
use crate::visibility::{Condition, VisibilityRule};

/// One complete checklist: the ordered sections of a cancer protocol plus
/// the identity used in report headers and filenames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormSchema {
    /// Registry id and answer-store namespace (e.g. `hcc`).
    pub id: String,
    /// Human-readable checklist name.
    pub name: String,
    /// Report title line.
    pub title: String,
    /// Staging standard (e.g. `AJCC 8th Edition`).
    pub standard: String,
    pub posting_date: String,
    /// Filename prefix for exported reports.
    pub slug: String,
    pub sections: Vec<SectionSchema>,
}

/// A structural defect in a form definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
#[ts(export)]
pub enum SchemaIssue {
    #[error("field key '{key}' is declared more than once")]
    DuplicateKey { key: String },

    #[error("section '{section}' reports key '{key}' it does not declare")]
    UndeclaredLineKey { section: String, key: String },

    #[error("rule on '{owner}' reads '{key}' before it is declared")]
    ForwardReference { owner: String, key: String },

    #[error("rule on '{owner}' compares '{key}' with '{value}', which is not one of its options")]
    UnknownOption {
        owner: String,
        key: String,
        value: String,
    },

    #[error("select field '{key}' has no options")]
    MissingOptions { key: String },
}

impl FormSchema {
    /// Every field in declaration order.
    pub fn fields(&self) -> Vec<&FieldSchema> {
        self.sections.iter().flat_map(SectionSchema::fields).collect()
    }

    pub fn field(&self, key: &str) -> Option<&FieldSchema> {
        self.fields().into_iter().find(|f| f.key == key)
    }

    /// Keep only the answers that are currently visible for this form.
    pub fn resolve(&self, store: &AnswerStore) -> ResolvedAnswers {
        resolve::resolve(self, store)
    }

    /// Check the structural invariants a checklist definition must hold.
    pub fn validate(&self) -> Result<(), Vec<SchemaIssue>> {
        let mut issues = Vec::new();
        let all_fields: HashMap<&str, &FieldSchema> =
            self.fields().into_iter().map(|f| (f.key.as_str(), f)).collect();

        let mut declared: HashSet<&str> = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            let name = section
                .title
                .clone()
                .unwrap_or_else(|| format!("#{}", index + 1));

            check_rule(&name, &section.visible_when, &declared, &all_fields, &mut issues);
            walk_items(&section.items, &mut declared, &all_fields, &mut issues);
            // The gate is usually a field of the section itself.
            check_rule(&name, &section.report_when, &declared, &all_fields, &mut issues);

            let own: HashSet<&str> = section.fields().into_iter().map(|f| f.key.as_str()).collect();
            let mut reported = HashSet::new();
            for line in section.lines() {
                for key in line.keys() {
                    if !own.contains(key) && reported.insert(key) {
                        issues.push(SchemaIssue::UndeclaredLineKey {
                            section: name.clone(),
                            key: key.to_string(),
                        });
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

fn walk_items<'a>(
    items: &'a [Item],
    declared: &mut HashSet<&'a str>,
    all_fields: &HashMap<&str, &FieldSchema>,
    issues: &mut Vec<SchemaIssue>,
) {
    for item in items {
        match item {
            Item::Field(field) => {
                check_rule(&field.key, &field.visible_when, declared, all_fields, issues);
                if field.kind == FieldKind::SingleSelect && field.options.is_empty() {
                    issues.push(SchemaIssue::MissingOptions {
                        key: field.key.clone(),
                    });
                }
                if !declared.insert(&field.key) {
                    issues.push(SchemaIssue::DuplicateKey {
                        key: field.key.clone(),
                    });
                }
            }
            Item::Section(nested) => {
                let owner = nested.title.as_deref().unwrap_or("group");
                check_rule(owner, &nested.visible_when, declared, all_fields, issues);
                walk_items(&nested.items, declared, all_fields, issues);
            }
            Item::Line(line) => {
                if let LineTemplate::When { rule, .. } = line {
                    check_options("line", rule, all_fields, issues);
                }
            }
            Item::Note { .. } => {}
        }
    }
}

fn check_rule(
    owner: &str,
    rule: &VisibilityRule,
    declared: &HashSet<&str>,
    all_fields: &HashMap<&str, &FieldSchema>,
    issues: &mut Vec<SchemaIssue>,
) {
    for key in rule.keys() {
        if !declared.contains(key) {
            issues.push(SchemaIssue::ForwardReference {
                owner: owner.to_string(),
                key: key.to_string(),
            });
        }
    }
    check_options(owner, rule, all_fields, issues);
}

fn check_options(
    owner: &str,
    rule: &VisibilityRule,
    all_fields: &HashMap<&str, &FieldSchema>,
    issues: &mut Vec<SchemaIssue>,
) {
    for condition in &rule.all_of {
        let Some(field) = all_fields.get(condition.key()) else {
            continue;
        };
        if field.kind != FieldKind::SingleSelect {
            continue;
        }
        let unknown: Vec<&String> = match condition {
            Condition::Equals { value, .. } => vec![value],
            Condition::OneOf { values, .. } => values.iter().collect(),
            Condition::Contains { needle, .. } => {
                if field.options.iter().any(|o| o.contains(needle.as_str())) {
                    Vec::new()
                } else {
                    vec![needle]
                }
            }
            _ => Vec::new(),
        };

        for value in unknown {
            if !matches!(condition, Condition::Contains { .. }) && field.options.contains(value) {
                continue;
            }
            issues.push(SchemaIssue::UnknownOption {
                owner: owner.to_string(),
                key: field.key.clone(),
                value: value.clone(),
            });
        }
    }
}
