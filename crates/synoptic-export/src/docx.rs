use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType};

use crate::assemble::AssembledReport;
use crate::error::ExportError;
use crate::settings::ReportSettings;
use crate::styles::DocumentStyles;

const TWIPS_PER_INCH: f64 = 1440.0;
const TWIPS_PER_POINT: usize = 20;

/// Generate a DOCX document from an assembled report.
///
/// The report text is read line by line:
/// - the first line (report title) → "Title" heading
/// - a reported section title after a blank line → "Section" heading
/// - `- item` → bullet paragraph
/// - `Label: value` → bold label run followed by the value
/// - leading indentation → left paragraph indent per level
pub fn generate_docx(
    report: &AssembledReport,
    settings: &ReportSettings,
) -> Result<Vec<u8>, ExportError> {
    let styles = &settings.styles;
    let margin = (styles.margin_inches * TWIPS_PER_INCH).round() as i32;

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Section", "section heading", styles.section_size));

    let mut previous_blank = false;
    for (index, line) in report.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            previous_blank = true;
            continue;
        }

        let depth = indent_level(line, settings.indent_width);
        let paragraph = if index == 0 {
            heading_paragraph(trimmed, "Title", styles)
        } else if previous_blank && depth == 0 && report.sections.iter().any(|s| s == trimmed) {
            heading_paragraph(trimmed, "Section", styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, depth, styles)
        } else {
            body_paragraph(trimmed, depth, styles)
        };
        docx = docx.add_paragraph(paragraph);
        previous_blank = false;
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(form_id = %report.form_id, bytes = buf.get_ref().len(), "generated docx");
    Ok(buf.into_inner())
}

fn indent_level(line: &str, indent_width: usize) -> usize {
    let spaces = line.len() - line.trim_start_matches(' ').len();
    spaces / indent_width.max(1)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn indented(depth: usize, styles: &DocumentStyles) -> Paragraph {
    let para = Paragraph::new().align(AlignmentType::Left);
    if depth == 0 {
        return para;
    }
    let left = (depth * styles.indent_points * TWIPS_PER_POINT) as i32;
    para.indent(Some(left), None, None, None)
}

fn bullet_paragraph(text: &str, depth: usize, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = body_run("\u{2022} ", styles);
    let mut para = indented(depth, styles).add_run(bullet_run);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_paragraph(text: &str, depth: usize, styles: &DocumentStyles) -> Paragraph {
    let mut para = indented(depth, styles);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `Label: value` into a bold label and a plain value.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    match text.split_once(": ") {
        Some((label, value)) if !label.is_empty() => vec![
            body_run(&format!("{label}: "), styles).bold(),
            body_run(value, styles),
        ],
        _ => vec![body_run(text, styles)],
    }
}
