use std::collections::BTreeMap;

use jiff::civil::Date;
use tera::{Context, Tera};

use synoptic_core::FormSchema;

use crate::error::ExportError;

const HEADER_TEMPLATE: &str = "{{ title }}
Date: {{ date }}
Standard: {{ standard }}
Protocol Posting Date: {{ posting_date }}";

/// Render the four report header lines for `schema` on `date`.
pub fn render_header(schema: &FormSchema, date: Date) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("header", HEADER_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut context = Context::new();
    context.insert("title", &schema.title);
    context.insert("date", &date.strftime("%Y-%m-%d").to_string());
    context.insert("standard", &schema.standard);
    context.insert("posting_date", &schema.posting_date);

    let rendered = tera.render("header", &context)?;
    Ok(rendered)
}

/// Render a line template against answer display strings.
///
/// Autoescaping is off: reports are plain text.
pub fn render_line(source: &str, values: &BTreeMap<&str, String>) -> Result<String, ExportError> {
    let mut context = Context::new();
    for (key, value) in values {
        context.insert(*key, value);
    }
    let rendered = Tera::one_off(source, &context, false)?;
    Ok(rendered)
}
