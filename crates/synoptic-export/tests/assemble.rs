use jiff::civil::{date, datetime};

use synoptic_checklists::require_checklist;
use synoptic_core::AnswerStore;
use synoptic_export::{AssembledReport, ReportAssembler, ReportSettings, assemble_report};

fn assemble(id: &str, store: &AnswerStore) -> AssembledReport {
    let checklist = require_checklist(id).unwrap();
    assemble_report(checklist.schema(), store, date(2025, 6, 1))
}

#[test]
fn empty_hcc_store_yields_only_headers() {
    let report = assemble("hcc", &AnswerStore::new("hcc"));
    let expected = "\
HEPATOCELLULAR CARCINOMA PATHOLOGY REPORT
Date: 2025-06-01
Standard: AJCC-UICC 8th Edition
Protocol Posting Date: June 2022

CASE SUMMARY (HEPATOCELLULAR CARCINOMA)

SPECIMEN
Procedure(s):

TUMOR

TUMOR 1 CHARACTERISTICS

MARGINS

REGIONAL LYMPH NODES

DISTANT METASTASIS

PATHOLOGIC STAGE CLASSIFICATION (pTNM, AJCC 8th Edition)
Reporting of pT, pN, and (when applicable) pM categories is based on information
available to the pathologist at the time the report is issued. As per the AJCC
(Chapter 1, 8th Ed.) it is the managing physician's responsibility to establish
the final pathologic stage based upon all pertinent information, including but
potentially not limited to this pathology report.


ADDITIONAL FINDINGS

SPECIAL STUDIES

End of Report
";
    assert_eq!(report.text, expected);
    assert!(!report.sections.contains(&"COMMENTS".to_string()));
}

#[test]
fn every_checklist_ends_with_marker() {
    for id in ["hcc", "ampulla_vater", "colorectal", "kidney"] {
        let report = assemble(id, &AnswerStore::new(id));
        assert!(report.text.ends_with("\nEnd of Report\n"), "{id}");
        assert!(!report.text.contains("Generated on"), "{id}");
        assert_eq!(report.lines().nth(1), Some("Date: 2025-06-01"));
    }
}

#[test]
fn specified_histologic_type_is_indented_under_its_parent() {
    let store = AnswerStore::new("hcc")
        .with("histologic_type", "Other histologic type not listed")
        .with("histologic_other", "Spindle cell variant");
    let report = assemble("hcc", &store);
    assert!(report.text.contains(
        "Histologic Type: Other histologic type not listed\n  Specified type: Spindle cell variant\n"
    ));
}

#[test]
fn involved_margin_without_detail_has_no_parenthetical() {
    let store = AnswerStore::new("hcc")
        .with("margin_status", "Invasive carcinoma present at margin")
        .with("parenchymal_involved", true);
    let report = assemble("hcc", &store);
    assert!(report.text.contains("Margin Status: Invasive carcinoma present at margin\n"));
    assert!(report.text.contains("  Involved Margin(s): Parenchymal\n"));

    let with_detail = store.with("parenchymal_involved_detail", "focal");
    let report = assemble("hcc", &with_detail);
    assert!(report.text.contains("  Involved Margin(s): Parenchymal (focal)\n"));
}

#[test]
fn unanswered_tumor_status_leaves_no_sub_line() {
    let store = AnswerStore::new("hcc").with("ln_status", "Regional lymph nodes present");
    let report = assemble("hcc", &store);
    assert!(report.text.contains(
        "REGIONAL LYMPH NODES\nRegional Lymph Node Status: Regional lymph nodes present\n"
    ));
    assert!(!report.text.contains("Tumor Status"));
}

#[test]
fn stale_cascade_answers_stay_out_of_the_report() {
    let store = AnswerStore::new("hcc")
        .with("ln_status", "Not applicable (no regional lymph nodes submitted or found)")
        .with("ln_tumor_status", "Tumor present in regional lymph node(s)")
        .with("ln_positive_method", "Exact number")
        .with("ln_positive_exact", 3.0);
    let report = assemble("hcc", &store);
    assert!(report.text.contains("Regional Lymph Node Status: Not applicable"));
    assert!(!report.text.contains("Tumor Status"));
    assert!(!report.text.contains("Number of positive nodes"));
}

#[test]
fn assembly_is_deterministic() {
    let store = AnswerStore::new("kidney")
        .with("procedure", "Radical nephrectomy")
        .with("site_upper_pole", true)
        .with("site_lower_pole", true)
        .with("greatest_dimension", 7.5)
        .with("comments", "Reviewed at consensus conference.");
    let first = assemble("kidney", &store);
    let second = assemble("kidney", &store);
    assert_eq!(first, second);
}

#[test]
fn lines_follow_declaration_order() {
    let store = AnswerStore::new("kidney")
        .with("comments", "See addendum.")
        .with("pt_category", "pT2b: Tumor greater than 10 cm, limited to the kidney")
        .with("margin_status", "All margins negative for invasive carcinoma")
        .with("procedure", "Partial nephrectomy")
        .with("case_id", "S25-1234");
    let report = assemble("kidney", &store);

    let position = |needle: &str| {
        report
            .text
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle}"))
    };
    let order = [
        position("Case ID: S25-1234"),
        position("Procedure: Partial nephrectomy"),
        position("Margin Status: All margins"),
        position("pT: pT2b"),
        position("COMMENTS\nSee addendum."),
    ];
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{order:?}");
}

#[test]
fn ampulla_pm_prints_only_distant_metastasis() {
    let not_applicable = AnswerStore::new("ampulla_vater").with(
        "pm_category",
        "Not applicable - pM cannot be determined from the submitted specimen(s)",
    );
    let report = assemble("ampulla_vater", &not_applicable);
    assert!(!report.text.contains("pM:"));

    let metastatic =
        AnswerStore::new("ampulla_vater").with("pm_category", "pM1: Distant metastasis");
    let report = assemble("ampulla_vater", &metastatic);
    assert!(report.text.contains("pM: pM1: Distant metastasis\n"));
}

#[test]
fn kidney_optional_sections_appear_only_when_answered() {
    let report = assemble("kidney", &AnswerStore::new("kidney"));
    for title in [
        "IMMUNOHISTOCHEMISTRY",
        "MOLECULAR TESTING",
        "PROGNOSTIC ASSESSMENT",
        "FINAL DIAGNOSIS",
        "CLINICAL RECOMMENDATIONS",
        "COMMENTS",
    ] {
        assert!(!report.text.contains(title), "{title} should be omitted");
    }

    let store = AnswerStore::new("kidney")
        .with("ihc_performed", true)
        .with("cd10_antibody", true)
        .with("cd10_result", "Positive")
        .with("cd10_intensity", "Strong")
        .with("cd10_percentage", 80.0)
        .with("pax8_antibody", true)
        .with("pax8_result", "Negative")
        .with("final_diagnosis", "Clear cell renal cell carcinoma, WHO/ISUP grade 2.");
    let report = assemble("kidney", &store);
    assert!(report.text.contains(
        "\nIMMUNOHISTOCHEMISTRY\n  CD10: Positive (Strong) 80%\n  PAX8: Negative\n"
    ));
    assert!(report.text.contains(
        "\nFINAL DIAGNOSIS\nClear cell renal cell carcinoma, WHO/ISUP grade 2.\n"
    ));
    assert!(!report.text.contains("MOLECULAR TESTING"));
    assert!(report.sections.contains(&"IMMUNOHISTOCHEMISTRY".to_string()));
}

#[test]
fn kidney_optional_headers_follow_their_gate_checkbox() {
    let store = AnswerStore::new("kidney")
        .with("ihc_performed", true)
        .with("molecular_performed", true);
    let report = assemble("kidney", &store);
    assert!(report.text.contains("\nIMMUNOHISTOCHEMISTRY\n\nMOLECULAR TESTING\n\n"));
    assert!(!report.text.contains("PROGNOSTIC ASSESSMENT"));
    assert!(report.sections.contains(&"IMMUNOHISTOCHEMISTRY".to_string()));
    assert!(report.sections.contains(&"MOLECULAR TESTING".to_string()));

    // Answers under an unticked gate never reach the report.
    let store = AnswerStore::new("kidney")
        .with("prognostic_assessment", false)
        .with("risk_stratification", "Low risk");
    let report = assemble("kidney", &store);
    assert!(!report.text.contains("PROGNOSTIC ASSESSMENT"));
    assert!(!report.text.contains("Low risk"));
}

#[test]
fn kidney_dimensions_join_measured_axes() {
    let store = AnswerStore::new("kidney")
        .with("kidney_weight", 250.0)
        .with("kidney_length", 12.0)
        .with("kidney_height", 4.5);
    let report = assemble("kidney", &store);
    assert!(report.text.contains("Kidney Weight: 250 g\n"));
    assert!(report.text.contains("Kidney Dimensions: 12 x 4.5 cm\n"));
}

#[test]
fn kidney_distant_metastasis_prefers_not_applicable() {
    let store = AnswerStore::new("kidney")
        .with("dm_not_applicable", true)
        .with("dm_specify", true)
        .with("dm_sites", "Lung");
    let report = assemble("kidney", &store);
    assert!(report.text.contains("Distant Site(s) Involved: Not applicable\n"));
    assert!(!report.text.contains("Distant Site(s) Involved: Lung"));
}

#[test]
fn colorectal_special_studies_carry_biomarker_note() {
    let report = assemble("colorectal", &AnswerStore::new("colorectal"));
    assert!(report.text.contains(
        "\nSPECIAL STUDIES\nFor reporting molecular testing and immunohistochemistry for mismatch repair\n"
    ));
}

#[test]
fn hcc_procedures_are_bulleted() {
    let store = AnswerStore::new("hcc")
        .with("partial_minor", true)
        .with("procedure_other", true)
        .with("procedure_other_specify", "Caudate process");
    let report = assemble("hcc", &store);
    assert!(report.text.contains(
        "Procedure(s):\n  - Partial hepatectomy, minor (less than 3 segments)\n  - Other: Caudate process\n"
    ));
}

#[test]
fn foreign_store_contributes_nothing() {
    let store = AnswerStore::new("kidney").with("case_id", "S25-9");
    let report = assemble("hcc", &store);
    assert!(!report.text.contains("S25-9"));
}

#[test]
fn custom_settings_change_indent_and_separator() {
    let settings = ReportSettings {
        indent_width: 4,
        list_separator: "; ".to_string(),
        ..ReportSettings::default()
    };
    let store = AnswerStore::new("hcc")
        .with("histologic_type", "Other histologic type not listed")
        .with("histologic_other", "Spindle cell variant")
        .with("additional_cirrhosis", true)
        .with("additional_steatosis", true);
    let schema = require_checklist("hcc").unwrap();
    let report = ReportAssembler::new(settings).assemble(schema.schema(), &store, date(2025, 6, 1));
    assert!(report.text.contains("\n    Specified type: Spindle cell variant\n"));
    assert!(report.text.contains("Additional Findings: Cirrhosis; Steatosis\n"));
}

#[test]
fn suggested_filename_uses_slug_and_timestamp() {
    let report = assemble("ampulla_vater", &AnswerStore::new("ampulla_vater"));
    assert_eq!(
        report.suggested_filename(datetime(2025, 6, 1, 14, 30, 5, 0)),
        "ampulla_vater_pathology_report_20250601_143005.txt"
    );
}
