pub mod ampulla;
pub mod colorectal;
pub mod hcc;
pub mod kidney;

use synoptic_core::{Condition, FieldSchema};

/// A radio group: a single select that starts on its first option.
pub(crate) fn radio(key: &str, label: &str, options: &[&str]) -> FieldSchema {
    let field = FieldSchema::select(key, label, options);
    match options.first() {
        Some(first) => field.with_default(*first),
        None => field,
    }
}

/// Free-text detail revealed by ticking `checkbox`.
pub(crate) fn detail(key: &str, label: &str, checkbox: &str) -> FieldSchema {
    FieldSchema::text(key, label).visible_when(Condition::checked(checkbox))
}

/// Free-text detail revealed by choosing `option` on `select`.
pub(crate) fn explain(key: &str, label: &str, select: &str, option: &str) -> FieldSchema {
    FieldSchema::text(key, label).visible_when(Condition::equals(select, option))
}
