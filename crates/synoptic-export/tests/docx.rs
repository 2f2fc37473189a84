use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild, read_docx};
use jiff::civil::date;

use synoptic_checklists::require_checklist;
use synoptic_core::AnswerStore;
use synoptic_export::docx::generate_docx;
use synoptic_export::{AssembledReport, ReportSettings, assemble_report};

fn hcc_report() -> AssembledReport {
    let checklist = require_checklist("hcc").unwrap();
    let store = AnswerStore::new("hcc")
        .with("partial_minor", true)
        .with("histologic_type", "Other histologic type not listed")
        .with("histologic_other", "Spindle cell variant");
    assemble_report(checklist.schema(), &store, date(2025, 6, 1))
}

fn paragraphs(bytes: &[u8]) -> Vec<Paragraph> {
    let docx = read_docx(bytes).unwrap();
    docx.document
        .children
        .into_iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(*p),
            _ => None,
        })
        .collect()
}

fn runs(p: &Paragraph) -> Vec<&Run> {
    p.children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(run.as_ref()),
            _ => None,
        })
        .collect()
}

fn run_text(run: &Run) -> String {
    run.children
        .iter()
        .filter_map(|child| match child {
            RunChild::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}

fn text(p: &Paragraph) -> String {
    runs(p).into_iter().map(run_text).collect()
}

fn style(p: &Paragraph) -> Option<&str> {
    p.property.style.as_ref().map(|s| s.val.as_str())
}

fn left_indent(p: &Paragraph) -> Option<i32> {
    p.property.indent.as_ref().and_then(|i| i.start)
}

fn find<'a>(paras: &'a [Paragraph], needle: &str) -> &'a Paragraph {
    paras
        .iter()
        .find(|p| text(p).contains(needle))
        .unwrap_or_else(|| panic!("no paragraph containing {needle}"))
}

#[test]
fn headings_use_title_and_section_styles() {
    let bytes = generate_docx(&hcc_report(), &ReportSettings::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    let paras = paragraphs(&bytes);

    let title = &paras[0];
    assert_eq!(text(title), "HEPATOCELLULAR CARCINOMA PATHOLOGY REPORT");
    assert_eq!(style(title), Some("Title"));

    let margins = paras.iter().find(|p| text(p) == "MARGINS").unwrap();
    assert_eq!(style(margins), Some("Section"));

    // Body lines carry no heading style.
    assert_eq!(style(find(&paras, "2025-06-01")), None);
}

#[test]
fn labels_are_bold_and_values_plain() {
    let bytes = generate_docx(&hcc_report(), &ReportSettings::default()).unwrap();
    let paras = paragraphs(&bytes);

    let histologic = find(&paras, "Histologic Type:");
    let label_runs = runs(histologic);
    assert_eq!(label_runs.len(), 2);
    assert_eq!(run_text(label_runs[0]).trim_end(), "Histologic Type:");
    assert!(label_runs[0].run_property.bold.is_some());
    assert_eq!(run_text(label_runs[1]), "Other histologic type not listed");
    assert!(label_runs[1].run_property.bold.is_none());
    assert_eq!(left_indent(histologic), None);
}

#[test]
fn indented_lines_get_a_left_indent_per_level() {
    let bytes = generate_docx(&hcc_report(), &ReportSettings::default()).unwrap();
    let paras = paragraphs(&bytes);

    // One level at the default 18pt indent, in twips.
    let specified = find(&paras, "Specified type:");
    assert_eq!(left_indent(specified), Some(360));
    assert_eq!(run_text(runs(specified)[1]), "Spindle cell variant");

    let bullet = find(&paras, "Partial hepatectomy, minor");
    let bullet_runs = runs(bullet);
    assert_eq!(run_text(bullet_runs[0]).trim_end(), "\u{2022}");
    assert_eq!(left_indent(bullet), Some(360));
    assert!(!text(bullet).contains("- "));
}

#[test]
fn docx_accepts_every_empty_report() {
    for id in ["hcc", "ampulla_vater", "colorectal", "kidney"] {
        let checklist = require_checklist(id).unwrap();
        let report = assemble_report(checklist.schema(), &AnswerStore::new(id), date(2025, 6, 1));
        let bytes = generate_docx(&report, &ReportSettings::default()).unwrap();
        let paras = paragraphs(&bytes);
        assert_eq!(text(&paras[0]), report.title, "{id}");
        assert_eq!(text(paras.last().unwrap()), "End of Report", "{id}");
    }
}
