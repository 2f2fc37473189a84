use std::sync::LazyLock;

use synoptic_core::{
    Condition, FieldSchema, FormSchema, LineTemplate, ListEntry, NumericRange, SectionSchema,
};

use super::{detail, explain, radio};
use crate::Checklist;

/// Kidney nephrectomy, AJCC 8th Edition, with the optional
/// immunohistochemistry, molecular and prognostic sections.
pub struct Kidney;

const SIZE_MEASURED: &str = "Greatest dimension in Centimeters (cm)";
const MARGINS_INVOLVED: &str = "Invasive carcinoma present at margin";
const LN_PRESENT: &str = "Regional lymph nodes present";
const LN_TUMOR_PRESENT: &str = "Tumor present in regional lymph node(s)";
const T_SUFFIX_M: &str = "(m) multiple primary synchronous tumors in a single organ";

const TNM_PREAMBLE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information
available to the pathologist at the time the report is issued.
";

const TNM_NOTE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information available to the pathologist at the time the report is issued. As per the AJCC (Chapter 1, 8th Ed.) it is the managing physician's responsibility to establish the final pathologic stage based upon all pertinent information, including but potentially not limited to this pathology report.";

/// Prints whichever of the three dimensions were measured.
const DIMENSIONS_TEMPLATE: &str = "{% set dims = [] %}\
{% if kidney_length is defined %}{% set dims = dims | concat(with=kidney_length) %}{% endif %}\
{% if kidney_width is defined %}{% set dims = dims | concat(with=kidney_width) %}{% endif %}\
{% if kidney_height is defined %}{% set dims = dims | concat(with=kidney_height) %}{% endif %}\
{% if dims | length > 0 %}Kidney Dimensions: {{ dims | join(sep=\" x \") }} cm{% endif %}";

/// `(checkbox key, form label, report text)`. Report texts are the short
/// forms used in the histologic type line.
const HISTOLOGIC_TYPES: [(&str, &str, &str); 21] = [
    (
        "clear_cell_rcc",
        "Clear cell renal cell carcinoma",
        "Clear cell renal cell carcinoma",
    ),
    (
        "multilocular_cystic",
        "Multilocular cystic renal neoplasm of low malignant potential",
        "Multilocular cystic renal neoplasm of low malignant potential",
    ),
    (
        "papillary_rcc",
        "Papillary renal cell carcinoma",
        "Papillary renal cell carcinoma",
    ),
    (
        "chromophobe_rcc",
        "Chromophobe renal cell carcinoma",
        "Chromophobe renal cell carcinoma",
    ),
    (
        "other_oncocytic",
        "Other oncocytic tumors of the kidney",
        "Other oncocytic tumors",
    ),
    (
        "collecting_duct",
        "Collecting duct carcinoma",
        "Collecting duct carcinoma",
    ),
    (
        "clear_cell_papillary",
        "Clear cell papillary renal cell tumor",
        "Clear cell papillary renal cell tumor",
    ),
    (
        "mucinous_tubular",
        "Mucinous tubular and spindle renal cell carcinoma",
        "Mucinous tubular and spindle renal cell carcinoma",
    ),
    (
        "tubulocystic",
        "Tubulocystic renal cell carcinoma",
        "Tubulocystic renal cell carcinoma",
    ),
    (
        "acquired_cystic",
        "Acquired cystic disease-associated renal cell carcinoma",
        "Acquired cystic disease-associated renal cell carcinoma",
    ),
    (
        "eosinophilic_solid",
        "Eosinophilic solid and cystic renal cell carcinoma",
        "Eosinophilic solid and cystic renal cell carcinoma",
    ),
    (
        "rcc_nos",
        "Renal cell carcinoma, NOS (unclassified)",
        "Renal cell carcinoma, NOS",
    ),
    (
        "tfe3_rearranged",
        "TFE3-rearranged renal cell carcinoma",
        "TFE3-rearranged renal cell carcinoma",
    ),
    (
        "tfeb_altered",
        "TFEB-altered renal cell carcinoma",
        "TFEB-altered renal cell carcinoma",
    ),
    (
        "eloc_mutated",
        "ELOC (formerly TCEB1)-mutated renal cell carcinoma",
        "ELOC-mutated renal cell carcinoma",
    ),
    (
        "fh_deficient",
        "Fumarate hydratase-deficient renal cell carcinoma",
        "Fumarate hydratase-deficient renal cell carcinoma",
    ),
    (
        "sdh_deficient",
        "Succinate dehydrogenase-deficient (SDH) renal cell carcinoma",
        "SDH-deficient renal cell carcinoma",
    ),
    (
        "alk_rearranged",
        "ALK-rearranged renal cell carcinoma",
        "ALK-rearranged renal cell carcinoma",
    ),
    (
        "smarcb1_deficient",
        "SMARCB1-deficient renal medullary carcinoma",
        "SMARCB1-deficient renal medullary carcinoma",
    ),
    (
        "subtype_pending",
        "Renal cell carcinoma, subtype pending additional studies",
        "Renal cell carcinoma, subtype pending additional studies",
    ),
    (
        "other_histologic",
        "Other histologic type not listed",
        "Other histologic type",
    ),
];

const EXTENTS: [(&str, &str, &str); 10] = [
    ("extent_limited_kidney", "Limited to kidney", "Limited to kidney"),
    (
        "extent_perinephric",
        "Extends into perinephric tissue (beyond renal capsule)",
        "Extends into perinephric tissue",
    ),
    ("extent_renal_sinus", "Extends into renal sinus", "Extends into renal sinus"),
    (
        "extent_pelvicalyceal",
        "Extends into pelvicalyceal system",
        "Extends into pelvicalyceal system",
    ),
    (
        "extent_renal_vein",
        "Extends into renal vein or its segmental branches",
        "Extends into renal vein",
    ),
    (
        "extent_ivc",
        "Extends into inferior vena cava",
        "Extends into inferior vena cava",
    ),
    (
        "extent_gerota",
        "Extends beyond renal Gerota's fascia (renal fascia)",
        "Extends beyond Gerota's fascia",
    ),
    (
        "extent_adrenal_direct",
        "Directly invades adrenal gland (T4)",
        "Directly invades adrenal gland (T4)",
    ),
    (
        "extent_adrenal_noncontiguous",
        "Involves adrenal gland non-contiguously (M1)",
        "Involves adrenal gland non-contiguously (M1)",
    ),
    (
        "extent_other_organs",
        "Extends into other organ(s) / structure(s)",
        "Extends into other organs/structures",
    ),
];

/// `(checkbox key, detail key, text)` for partial nephrectomy margins.
const INVOLVED_MARGINS: [(&str, &str, &str); 8] = [
    ("margin_renal_parenchymal", "renal_parenchymal_detail", "Renal parenchymal"),
    ("margin_renal_capsular", "renal_capsular_detail", "Renal capsular"),
    ("margin_renal_sinus", "renal_sinus_detail", "Renal sinus soft tissue"),
    ("margin_renal_hilar", "renal_hilar_detail", "Renal hilar soft tissue"),
    (
        "margin_renal_vein",
        "renal_vein_detail",
        "Renal vein (tumor invades or is adherent to vein wall at margin)",
    ),
    ("margin_ureteral", "ureteral_detail", "Ureteral"),
    ("margin_perinephric_fat", "perinephric_fat_detail", "Perinephric fat"),
    ("margin_gerota_fascia", "gerota_fascia_detail", "Gerota's fascia"),
];

const NODAL_SITES: [(&str, &str, &str); 8] = [
    ("node_hilar", "hilar_detail", "Hilar"),
    ("node_precaval", "precaval_detail", "Precaval"),
    ("node_interaortocaval", "interaortocaval_detail", "Interaortocaval"),
    ("node_paracaval", "paracaval_detail", "Paracaval"),
    ("node_retrocaval", "retrocaval_detail", "Retrocaval"),
    ("node_preaortic", "preaortic_detail", "Preaortic"),
    ("node_paraaortic", "paraaortic_detail", "Paraaortic"),
    ("node_retroaortic", "retroaortic_detail", "Retroaortic"),
];

/// `(key prefix, report name)` per antibody.
const ANTIBODIES: [(&str, &str); 5] = [
    ("cd10", "CD10"),
    ("ck7", "CK7"),
    ("vimentin", "Vimentin"),
    ("pax8", "PAX8"),
    ("rcc", "RCC Marker"),
];

impl Checklist for Kidney {
    fn id(&self) -> &str {
        "kidney"
    }

    fn name(&self) -> &str {
        "Kidney"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| FormSchema {
            id: "kidney".to_string(),
            name: "Kidney".to_string(),
            title: "KIDNEY TUMOR PATHOLOGY REPORT".to_string(),
            standard: "AJCC 8th Edition".to_string(),
            posting_date: "June 2025".to_string(),
            slug: "kidney".to_string(),
            sections: vec![
                case_summary(),
                specimen(),
                tumor(),
                margins(),
                lymph_nodes(),
                distant_metastasis(),
                ptnm(),
                additional_findings(),
                immunohistochemistry(),
                molecular_testing(),
                prognostic_assessment(),
                free_text("FINAL DIAGNOSIS", "final_diagnosis", "Final Diagnosis"),
                free_text(
                    "CLINICAL RECOMMENDATIONS",
                    "recommendations",
                    "Clinical Recommendations",
                ),
                free_text("COMMENTS", "comments", "Comment(s)"),
            ],
        });
        &SCHEMA
    }
}

fn case_summary() -> SectionSchema {
    SectionSchema::new("CASE SUMMARY (KIDNEY: Nephrectomy)")
        .field(FieldSchema::text("case_id", "Case ID"))
        .field(FieldSchema::text("patient_name", "Patient Name"))
        .field(FieldSchema::number(
            "age",
            "Age",
            NumericRange::count(0.0, Some(120.0)),
        ))
        .field(FieldSchema::select("gender", "Gender", &["Male", "Female"]))
        .field(FieldSchema::date("date_of_procedure", "Date of Procedure"))
        .field(FieldSchema::text("pathologist", "Pathologist"))
        .field(FieldSchema::text("clinical_diagnosis", "Clinical Diagnosis"))
        .line(LineTemplate::value("Case ID", "case_id"))
        .line(LineTemplate::value("Patient Name", "patient_name"))
        .line(LineTemplate::value("Age", "age"))
        .line(LineTemplate::value("Gender", "gender"))
        .line(LineTemplate::value("Date of Procedure", "date_of_procedure"))
        .line(LineTemplate::value("Pathologist", "pathologist"))
        .line(LineTemplate::value("Clinical Diagnosis", "clinical_diagnosis"))
}

fn specimen() -> SectionSchema {
    SectionSchema::new("SPECIMEN")
        .field(FieldSchema::select(
            "procedure",
            "Procedure",
            &[
                "Partial nephrectomy",
                "Total (simple) nephrectomy",
                "Radical nephrectomy",
                "Other",
                "Not specified",
            ],
        ))
        .field(explain("procedure_other", "Specify other procedure", "procedure", "Other"))
        .line(
            LineTemplate::value("Procedure", "procedure")
                .with_detail(LineTemplate::value("Details", "procedure_other")),
        )
        .field(FieldSchema::select(
            "laterality",
            "Specimen Laterality",
            &["Right", "Left", "Other", "Not specified"],
        ))
        .field(explain(
            "laterality_other",
            "Specify other laterality",
            "laterality",
            "Other",
        ))
        .line(
            LineTemplate::value("Specimen Laterality", "laterality")
                .with_detail(LineTemplate::value("Details", "laterality_other")),
        )
        .field(FieldSchema::number(
            "kidney_weight",
            "Kidney Weight (g)",
            NumericRange::measurement(),
        ))
        .field(FieldSchema::number(
            "kidney_length",
            "Length (cm)",
            NumericRange::measurement(),
        ))
        .field(FieldSchema::number(
            "kidney_width",
            "Width (cm)",
            NumericRange::measurement(),
        ))
        .field(FieldSchema::number(
            "kidney_height",
            "Height (cm)",
            NumericRange::measurement(),
        ))
        .line(LineTemplate::value("Kidney Weight", "kidney_weight").with_suffix(" g"))
        .line(
            LineTemplate::template(DIMENSIONS_TEMPLATE).optional(&[
                "kidney_length",
                "kidney_width",
                "kidney_height",
            ]),
        )
}

fn tumor() -> SectionSchema {
    let mut section = SectionSchema::new("TUMOR")
        .field(FieldSchema::select(
            "focality",
            "Tumor Focality",
            &["Unifocal", "Multifocal"],
        ))
        .field(
            FieldSchema::number(
                "tumor_number",
                "Number of tumors",
                NumericRange::count(2.0, None),
            )
            .visible_when(Condition::equals("focality", "Multifocal")),
        )
        .line(
            LineTemplate::value("Tumor Focality", "focality")
                .with_detail(LineTemplate::value("Number of tumors", "tumor_number")),
        )
        .field(FieldSchema::checkbox("site_upper_pole", "Upper pole"))
        .field(FieldSchema::checkbox("site_middle", "Middle"))
        .field(FieldSchema::checkbox("site_lower_pole", "Lower pole"))
        .field(FieldSchema::checkbox("site_other", "Other"))
        .field(detail("other_site_detail", "Specify other site", "site_other"))
        .field(FieldSchema::checkbox("site_not_specified", "Not specified"))
        .line(LineTemplate::list(
            "Tumor Site",
            vec![
                ListEntry::new("site_upper_pole", "Upper pole"),
                ListEntry::new("site_middle", "Middle"),
                ListEntry::new("site_lower_pole", "Lower pole"),
                ListEntry::new("site_other", "Other").with_detail("other_site_detail"),
                ListEntry::new("site_not_specified", "Not specified"),
            ],
        ))
        .note("If multiple tumors are present, document the size of the largest tumor.")
        .field(radio(
            "size_method",
            "Size measurement",
            &[SIZE_MEASURED, "Cannot be determined"],
        ))
        .field(
            FieldSchema::number(
                "greatest_dimension",
                "Greatest dimension (cm)",
                NumericRange::measurement(),
            )
            .visible_when(Condition::equals("size_method", SIZE_MEASURED)),
        )
        .field(
            FieldSchema::checkbox("additional_dims", "Additional dimensions")
                .visible_when(Condition::equals("size_method", SIZE_MEASURED)),
        )
        .field(
            FieldSchema::number("size_x", "Width (cm)", NumericRange::measurement())
                .visible_when(Condition::checked("additional_dims")),
        )
        .field(
            FieldSchema::number("size_y", "Height (cm)", NumericRange::measurement())
                .visible_when(Condition::checked("additional_dims")),
        )
        .field(
            FieldSchema::checkbox("other_tumors", "Other tumor dimensions")
                .visible_when(Condition::equals("size_method", SIZE_MEASURED)),
        )
        .field(
            FieldSchema::textarea(
                "other_tumor_sizes",
                "Greatest Dimension of Other Tumor(s) (cm)",
            )
            .visible_when(Condition::checked("other_tumors")),
        )
        .field(explain(
            "size_explain",
            "Explain why size cannot be determined",
            "size_method",
            "Cannot be determined",
        ))
        .line(
            LineTemplate::template(
                "Tumor Size: {{ greatest_dimension }} cm\
                 {% if size_x is defined and size_y is defined %} \
                 x {{ size_x }} cm x {{ size_y }} cm{% endif %}",
            )
            .requires(&["greatest_dimension"])
            .optional(&["size_x", "size_y"]),
        )
        .line(LineTemplate::when(
            Condition::equals("size_method", "Cannot be determined"),
            LineTemplate::template(
                "Tumor Size: Cannot be determined\
                 {% if size_explain is defined %} ({{ size_explain }}){% endif %}",
            )
            .optional(&["size_explain"]),
        ))
        .line(LineTemplate::value(
            "Greatest Dimension of Other Tumor(s)",
            "other_tumor_sizes",
        ));

    for (key, label, _) in HISTOLOGIC_TYPES {
        section = section.field(FieldSchema::checkbox(key, label));
        if key == "other_oncocytic" {
            section = section.field(detail(
                "oncocytic_detail",
                "Specify oncocytic tumor type",
                key,
            ));
        }
    }

    section = section
        .field(detail(
            "other_histologic_detail",
            "Specify other histologic type",
            "other_histologic",
        ))
        .line(LineTemplate::list(
            "Histologic Type",
            HISTOLOGIC_TYPES
                .iter()
                .map(|&(key, _, text)| ListEntry::new(key, text))
                .collect(),
        ))
        .field(FieldSchema::textarea("histologic_comment", "Histologic Type Comment"))
        .line(LineTemplate::value("Histologic Type Comment", "histologic_comment"))
        .note("See table for renal carcinoma subtype grading requirements")
        .field(FieldSchema::select(
            "grade",
            "Histologic Grade (WHO / ISUP)",
            &[
                "G1, nucleoli absent or inconspicuous at 400x magnification",
                "G2, nucleoli conspicuous and visible at 400x magnification, not prominent at 100x magnification",
                "G3, nucleoli conspicuous at 100x magnification",
                "G4, extreme nuclear pleomorphism and / or multinucleated giant cells and / or rhabdoid and / or sarcomatoid differentiation",
                "GX, cannot be assessed",
                "Not applicable",
            ],
        ))
        .field(
            FieldSchema::text("g4_specify", "Specify G4 features")
                .visible_when(Condition::contains("grade", "G4")),
        )
        .field(
            FieldSchema::text("grade_na_reason", "Reason for not applicable")
                .visible_when(Condition::contains("grade", "Not applicable")),
        )
        .line(
            LineTemplate::value("Histologic Grade", "grade")
                .with_detail(LineTemplate::value("G4 Features", "g4_specify")),
        )
        .field(FieldSchema::textarea("grade_comment", "Histologic Grade Comment"))
        .line(LineTemplate::value("Histologic Grade Comment", "grade_comment"));

    for (key, label, _) in EXTENTS {
        section = section.field(FieldSchema::checkbox(key, label));
    }

    section
        .field(detail(
            "other_organs_detail",
            "Specify other organs/structures",
            "extent_other_organs",
        ))
        .field(FieldSchema::checkbox("extent_cannot_determine", "Cannot be determined"))
        .field(detail(
            "extent_explain",
            "Explain why cannot be determined",
            "extent_cannot_determine",
        ))
        .line(LineTemplate::list(
            "Tumor Extent",
            EXTENTS
                .iter()
                .map(|&(key, _, text)| ListEntry::new(key, text))
                .collect(),
        ))
        // Histologic features
        .field(FieldSchema::checkbox(
            "no_sarcomatoid_rhabdoid",
            "Sarcomatoid or rhabdoid features not identified",
        ))
        .field(FieldSchema::checkbox("sarcomatoid_present", "Sarcomatoid features present"))
        .field(
            FieldSchema::number(
                "sarcomatoid_percentage",
                "Percentage of Sarcomatoid Element (%)",
                NumericRange::percentage(),
            )
            .visible_when(Condition::checked("sarcomatoid_present")),
        )
        .field(FieldSchema::checkbox("rhabdoid_present", "Rhabdoid features present"))
        .field(
            FieldSchema::number(
                "rhabdoid_percentage",
                "Percentage of Rhabdoid Element (%)",
                NumericRange::percentage(),
            )
            .visible_when(Condition::checked("rhabdoid_present")),
        )
        .field(FieldSchema::checkbox("other_features", "Other"))
        .field(detail("other_features_detail", "Specify other features", "other_features"))
        .field(FieldSchema::checkbox("features_cannot_determine", "Cannot be determined"))
        .field(detail("features_explain", "Explain", "features_cannot_determine"))
        .line(
            LineTemplate::template(
                "Sarcomatoid Features: Present\
                 {% if sarcomatoid_percentage is defined %} ({{ sarcomatoid_percentage }}%){% endif %}",
            )
            .requires(&["sarcomatoid_present"])
            .optional(&["sarcomatoid_percentage"]),
        )
        .line(
            LineTemplate::template(
                "Rhabdoid Features: Present\
                 {% if rhabdoid_percentage is defined %} ({{ rhabdoid_percentage }}%){% endif %}",
            )
            .requires(&["rhabdoid_present"])
            .optional(&["rhabdoid_percentage"]),
        )
        .line(LineTemplate::when(
            Condition::checked("no_sarcomatoid_rhabdoid"),
            LineTemplate::fixed("Sarcomatoid or rhabdoid features: Not identified"),
        ))
        .field(FieldSchema::select(
            "necrosis",
            "Tumor Necrosis",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(
            FieldSchema::number(
                "necrosis_percentage",
                "Percentage of Tumor Necrosis (%)",
                NumericRange::percentage(),
            )
            .visible_when(Condition::equals("necrosis", "Present")),
        )
        .field(explain("necrosis_explain", "Explain", "necrosis", "Cannot be determined"))
        .line(
            LineTemplate::template(
                "Tumor Necrosis: {{ necrosis }}\
                 {% if necrosis_percentage is defined %} ({{ necrosis_percentage }}%){% endif %}",
            )
            .requires(&["necrosis"])
            .optional(&["necrosis_percentage"]),
        )
        .note("(excluding renal vein and its segmental branches and inferior vena cava)")
        .field(FieldSchema::select(
            "vascular_invasion",
            "Lymphatic and/or Small Vessel Vascular Invasion",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(explain(
            "vascular_explain",
            "Explain",
            "vascular_invasion",
            "Cannot be determined",
        ))
        .line(LineTemplate::value(
            "Lymphatic and/or Vascular Invasion",
            "vascular_invasion",
        ))
        .field(FieldSchema::textarea("tumor_comment", "Tumor Comment"))
        .line(LineTemplate::value("Tumor Comment", "tumor_comment"))
}

fn margins() -> SectionSchema {
    let mut involved = SectionSchema::group()
        .visible_when(Condition::equals("margin_status", MARGINS_INVOLVED))
        .note("For partial nephrectomy only");
    for (key, detail_key, text) in INVOLVED_MARGINS {
        let label = if key == "margin_renal_vein" {
            "Details"
        } else {
            "Distance (mm)"
        };
        involved = involved
            .field(FieldSchema::checkbox(key, text))
            .field(detail(detail_key, label, key));
    }
    involved = involved.line(LineTemplate::list(
        "Involved margin(s)",
        INVOLVED_MARGINS
            .iter()
            .map(|&(key, detail_key, text)| ListEntry::new(key, text).with_detail(detail_key))
            .collect(),
    ));

    SectionSchema::new("MARGINS")
        .field(FieldSchema::select(
            "margin_status",
            "Margin Status",
            &["All margins negative for invasive carcinoma", MARGINS_INVOLVED],
        ))
        .line(LineTemplate::value("Margin Status", "margin_status"))
        .section(involved)
        .field(FieldSchema::checkbox("margin_other", "Other"))
        .field(detail("margin_other_detail", "Specify other margin", "margin_other"))
        .field(FieldSchema::checkbox("margin_cannot_determine", "Cannot be determined"))
        .field(detail("margin_explain", "Explain", "margin_cannot_determine"))
        .field(FieldSchema::checkbox("margin_not_applicable", "Not applicable"))
        .field(FieldSchema::textarea("margin_comment", "Margin Comment"))
        .line(LineTemplate::value("Margin Comment", "margin_comment"))
}

fn lymph_nodes() -> SectionSchema {
    let counts = ["Exact number", "At least", "Other", "Cannot be determined"];

    let mut tumor_present =
        SectionSchema::group().visible_when(Condition::equals("ln_tumor_status", LN_TUMOR_PRESENT));
    for (key, detail_key, text) in NODAL_SITES {
        tumor_present = tumor_present
            .field(FieldSchema::checkbox(key, text))
            .field(detail(detail_key, &format!("{text} node details"), key));
    }
    tumor_present = tumor_present
        .field(FieldSchema::checkbox("node_other", "Other"))
        .field(detail("other_nodal_detail", "Specify other nodal site", "node_other"))
        .field(radio(
            "largest_met_method",
            "Size of largest metastatic deposit (cm)",
            &[
                "Exact size",
                "At least",
                "Greater than",
                "Less than",
                "Other",
                "Cannot be determined",
            ],
        ));
    for (suffix, method, label) in [
        ("exact", "Exact size", "Exact size (cm)"),
        ("atleast", "At least", "At least (cm)"),
        ("greater", "Greater than", "Greater than (cm)"),
        ("less", "Less than", "Less than (cm)"),
    ] {
        tumor_present = tumor_present.field(
            FieldSchema::number(
                &format!("largest_met_{suffix}"),
                label,
                NumericRange::measurement(),
            )
            .visible_when(Condition::equals("largest_met_method", method)),
        );
    }
    tumor_present = tumor_present
        .field(explain("largest_met_other", "Specify other", "largest_met_method", "Other"))
        .field(explain(
            "largest_met_explain",
            "Explain",
            "largest_met_method",
            "Cannot be determined",
        ))
        .field(FieldSchema::text(
            "largest_met_site",
            "Specify Nodal Site with Largest Metastatic Deposit",
        ))
        .field(FieldSchema::select(
            "ene",
            "Extranodal Extension (ENE)",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(explain(
            "ene_location",
            "Specify Location of Involved Lymph Node(s)",
            "ene",
            "Present",
        ))
        .field(explain("ene_explain", "Explain", "ene", "Cannot be determined"));

    let mut nodal_entries: Vec<ListEntry> = NODAL_SITES
        .iter()
        .map(|&(key, detail_key, text)| ListEntry::new(key, text).with_detail(detail_key))
        .collect();
    nodal_entries.push(ListEntry::new("node_other", "Other").with_detail("other_nodal_detail"));

    let deposit_label = "Size of largest metastatic deposit";
    let present = SectionSchema::group()
        .visible_when(Condition::equals("ln_status", LN_PRESENT))
        .field(FieldSchema::select(
            "ln_tumor_status",
            "Tumor in lymph nodes",
            &["All regional lymph nodes negative for tumor", LN_TUMOR_PRESENT],
        ))
        .line(LineTemplate::value("Tumor Status", "ln_tumor_status"))
        .field(
            radio("ln_positive_method", "Number of positive nodes", &counts)
                .visible_when(Condition::equals("ln_tumor_status", LN_TUMOR_PRESENT)),
        )
        .field(
            FieldSchema::number(
                "ln_positive_exact",
                "Exact number of positive nodes",
                NumericRange::count(0.0, None),
            )
            .visible_when(Condition::equals("ln_positive_method", "Exact number")),
        )
        .field(
            FieldSchema::number(
                "ln_positive_atleast",
                "At least number of positive nodes",
                NumericRange::count(0.0, None),
            )
            .visible_when(Condition::equals("ln_positive_method", "At least")),
        )
        .field(explain("ln_positive_other", "Specify other", "ln_positive_method", "Other"))
        .field(explain(
            "ln_positive_explain",
            "Explain",
            "ln_positive_method",
            "Cannot be determined",
        ))
        .line(LineTemplate::first_of(vec![
            LineTemplate::value("Number of positive nodes", "ln_positive_exact"),
            LineTemplate::value("Number of positive nodes", "ln_positive_atleast")
                .with_prefix("At least "),
        ]))
        .section(tumor_present)
        .line(LineTemplate::list("Nodal Site(s) Involved", nodal_entries))
        .line(LineTemplate::first_of(vec![
            LineTemplate::value(deposit_label, "largest_met_exact").with_suffix(" cm"),
            LineTemplate::value(deposit_label, "largest_met_atleast")
                .with_prefix("At least ")
                .with_suffix(" cm"),
            LineTemplate::value(deposit_label, "largest_met_greater")
                .with_prefix("Greater than ")
                .with_suffix(" cm"),
            LineTemplate::value(deposit_label, "largest_met_less")
                .with_prefix("Less than ")
                .with_suffix(" cm"),
        ]))
        .line(LineTemplate::value(
            "Nodal site with largest metastatic deposit",
            "largest_met_site",
        ))
        .line(
            LineTemplate::value("Extranodal Extension", "ene")
                .with_detail(LineTemplate::value("Location", "ene_location")),
        )
        .field(radio("ln_examined_method", "Number of examined nodes", &counts))
        .field(
            FieldSchema::number(
                "ln_examined_exact",
                "Exact number of examined nodes",
                NumericRange::count(0.0, None),
            )
            .visible_when(Condition::equals("ln_examined_method", "Exact number")),
        )
        .field(
            FieldSchema::number(
                "ln_examined_atleast",
                "At least number of examined nodes",
                NumericRange::count(0.0, None),
            )
            .visible_when(Condition::equals("ln_examined_method", "At least")),
        )
        .field(explain("ln_examined_other", "Specify other", "ln_examined_method", "Other"))
        .field(explain(
            "ln_examined_explain",
            "Explain",
            "ln_examined_method",
            "Cannot be determined",
        ))
        .line(LineTemplate::first_of(vec![
            LineTemplate::value("Number of nodes examined", "ln_examined_exact"),
            LineTemplate::value("Number of nodes examined", "ln_examined_atleast")
                .with_prefix("At least "),
        ]));

    SectionSchema::new("REGIONAL LYMPH NODES")
        .field(FieldSchema::select(
            "ln_status",
            "Regional Lymph Node Status",
            &[
                "Not applicable (no regional lymph nodes submitted or found)",
                LN_PRESENT,
            ],
        ))
        .line(LineTemplate::value("Regional Lymph Node Status", "ln_status"))
        .section(present)
        .field(FieldSchema::textarea("ln_comment", "Regional Lymph Node Comment"))
        .line(LineTemplate::value("Regional Lymph Node Comment", "ln_comment"))
}

fn distant_metastasis() -> SectionSchema {
    SectionSchema::new("DISTANT METASTASIS")
        .field(FieldSchema::checkbox("dm_not_applicable", "Not applicable"))
        .field(FieldSchema::checkbox("dm_specify", "Specify site(s)"))
        .field(
            FieldSchema::textarea("dm_sites", "Specify distant metastasis sites")
                .visible_when(Condition::checked("dm_specify")),
        )
        .field(FieldSchema::checkbox("dm_cannot_determine", "Cannot be determined"))
        .field(detail("dm_explain", "Explain", "dm_cannot_determine"))
        .line(LineTemplate::first_of(vec![
            LineTemplate::when(
                Condition::checked("dm_not_applicable"),
                LineTemplate::fixed("Distant Site(s) Involved: Not applicable"),
            ),
            LineTemplate::value("Distant Site(s) Involved", "dm_sites"),
        ]))
}

fn ptnm() -> SectionSchema {
    SectionSchema::new("pTNM CLASSIFICATION (AJCC 8th Edition)")
        .preamble(TNM_PREAMBLE)
        .note(TNM_NOTE)
        .field(FieldSchema::checkbox("modified_not_applicable", "Not applicable"))
        .field(FieldSchema::checkbox("modified_y", "y (post-neoadjuvant therapy)"))
        .field(FieldSchema::checkbox("modified_r", "r (recurrence)"))
        .line(LineTemplate::list(
            "Modified Classification",
            vec![
                ListEntry::new("modified_y", "y (post-neoadjuvant therapy)"),
                ListEntry::new("modified_r", "r (recurrence)"),
            ],
        ))
        .field(FieldSchema::select(
            "pt_category",
            "pT Category",
            &[
                "pT not assigned (cannot be determined based on available pathological information)",
                "pT0: No evidence of primary tumor",
                "pT1a: Tumor less than or equal to 4 cm in greatest dimension, limited to the kidney",
                "pT1b: Tumor greater than 4 cm but less than or equal to 7 cm in greatest dimension limited to the kidney",
                "pT1 (subcategory cannot be determined)",
                "pT2a: Tumor greater than 7 cm but less than or equal to 10 cm in greatest dimension, limited to the kidney",
                "pT2b: Tumor greater than 10 cm, limited to the kidney",
                "pT2 (subcategory cannot be determined)",
                "pT3a: Tumor extends into the renal vein or its segmental branches, or invades the pelvicalyceal system, or invades perirenal and / or renal sinus fat but not beyond Gerota's fascia",
                "pT3b: Tumor extends into the vena cava below the diaphragm",
                "pT3c: Tumor extends into the vena cava above the diaphragm or invades the wall of the vena cava",
                "pT3 (subcategory cannot be determined)",
                "pT4: Tumor invades beyond Gerota's fascia (including contiguous extension into the ipsilateral adrenal gland)",
            ],
        ))
        .line(LineTemplate::value("pT", "pt_category"))
        .field(radio(
            "t_suffix_applicable",
            "T Suffix",
            &["Not applicable", T_SUFFIX_M],
        ))
        .line(LineTemplate::when(
            Condition::equals("t_suffix_applicable", T_SUFFIX_M),
            LineTemplate::fixed(&format!("T Suffix: {T_SUFFIX_M}")),
        ))
        .field(FieldSchema::select(
            "pn_category",
            "pN Category",
            &[
                "pN not assigned (no nodes submitted or found)",
                "pN not assigned (cannot be determined based on available pathological information)",
                "pN0: No regional lymph node metastasis",
                "pN1: Metastasis in regional lymph node(s)",
            ],
        ))
        .line(LineTemplate::value("pN", "pn_category"))
        .field(FieldSchema::select(
            "pm_category",
            "pM Category",
            &[
                "Not applicable - pM cannot be determined from the submitted specimen(s)",
                "pM1: Distant metastasis (including non-contiguous adrenal gland involvement)",
            ],
        ))
        .line(LineTemplate::value("pM", "pm_category"))
}

fn additional_findings() -> SectionSchema {
    SectionSchema::new("ADDITIONAL FINDINGS")
        .field(FieldSchema::checkbox("additional_insufficient", "Insufficient tissue"))
        .field(FieldSchema::checkbox(
            "additional_no_change",
            "No significant pathologic change identified",
        ))
        .field(FieldSchema::checkbox("additional_glomerular", "Glomerular disease"))
        .field(detail(
            "glomerular_type",
            "Specify type of glomerular disease",
            "additional_glomerular",
        ))
        .field(FieldSchema::checkbox(
            "additional_tubulointerstitial",
            "Tubulointerstitial disease",
        ))
        .field(detail(
            "tubulointerstitial_type",
            "Specify type of tubulointerstitial disease",
            "additional_tubulointerstitial",
        ))
        .field(FieldSchema::checkbox("additional_vascular", "Vascular disease"))
        .field(detail(
            "vascular_type",
            "Specify type of vascular disease",
            "additional_vascular",
        ))
        .field(FieldSchema::checkbox("additional_cysts", "Cyst(s)"))
        .field(detail("cysts_type", "Specify type of cyst(s)", "additional_cysts"))
        .field(FieldSchema::checkbox("additional_adenomas", "Papillary adenoma(s)"))
        .field(detail(
            "adenomas_detail",
            "Papillary adenoma details",
            "additional_adenomas",
        ))
        .field(FieldSchema::checkbox("additional_other", "Other"))
        .field(detail(
            "additional_other_detail",
            "Specify other findings",
            "additional_other",
        ))
        .line(LineTemplate::list(
            "Additional Findings in Kidney",
            vec![
                ListEntry::new("additional_insufficient", "Insufficient tissue"),
                ListEntry::new(
                    "additional_no_change",
                    "No significant pathologic change identified",
                ),
                ListEntry::new("additional_glomerular", "Glomerular disease")
                    .with_detail("glomerular_type"),
                ListEntry::new("additional_tubulointerstitial", "Tubulointerstitial disease")
                    .with_detail("tubulointerstitial_type"),
                ListEntry::new("additional_vascular", "Vascular disease")
                    .with_detail("vascular_type"),
                ListEntry::new("additional_cysts", "Cyst(s)").with_detail("cysts_type"),
                ListEntry::new("additional_adenomas", "Papillary adenoma(s)")
                    .with_detail("adenomas_detail"),
                ListEntry::new("additional_other", "Other").with_detail("additional_other_detail"),
            ],
        ))
}

fn immunohistochemistry() -> SectionSchema {
    let mut results = SectionSchema::group().visible_when(Condition::checked("ihc_performed"));
    for (prefix, name) in ANTIBODIES {
        let antibody = format!("{prefix}_antibody");
        let result = format!("{prefix}_result");
        let intensity = format!("{prefix}_intensity");
        let percentage = format!("{prefix}_percentage");

        results = results
            .field(FieldSchema::checkbox(&antibody, name))
            .field(
                FieldSchema::select(&result, &format!("{name} Result"), &["Positive", "Negative"])
                    .visible_when(Condition::checked(&antibody)),
            )
            .field(
                FieldSchema::select(
                    &intensity,
                    &format!("{name} Intensity"),
                    &["Weak", "Moderate", "Strong"],
                )
                .visible_when(Condition::checked(&antibody))
                .visible_when(Condition::equals(&result, "Positive")),
            )
            .field(
                FieldSchema::number(&percentage, &format!("{name} %"), NumericRange::percentage())
                    .visible_when(Condition::checked(&antibody))
                    .visible_when(Condition::equals(&result, "Positive")),
            )
            .line(
                LineTemplate::template(&format!(
                    "{name}: {{{{ {result} }}}}\
                     {{% if {intensity} is defined %}} ({{{{ {intensity} }}}}){{% endif %}}\
                     {{% if {percentage} is defined %}} {{{{ {percentage} }}}}%{{% endif %}}"
                ))
                .requires(&[result.as_str()])
                .optional(&[intensity.as_str(), percentage.as_str()]),
            );
    }
    results = results.field(FieldSchema::textarea(
        "other_ihc",
        "Other Immunohistochemistry Results",
    ));

    SectionSchema::new("IMMUNOHISTOCHEMISTRY")
        .report_when(Condition::checked("ihc_performed"))
        .note("If applicable - Optional section for recording immunohistochemistry results")
        .field(FieldSchema::checkbox("ihc_performed", "Immunohistochemistry performed"))
        .section(results)
        .line(LineTemplate::value("Other IHC", "other_ihc"))
}

fn molecular_testing() -> SectionSchema {
    SectionSchema::new("MOLECULAR TESTING")
        .report_when(Condition::checked("molecular_performed"))
        .note("If applicable - Optional section for recording molecular testing results")
        .field(FieldSchema::checkbox("molecular_performed", "Molecular testing performed"))
        .section(
            SectionSchema::group()
                .visible_when(Condition::checked("molecular_performed"))
                .field(FieldSchema::checkbox("vhl_testing", "VHL gene mutation testing"))
                .field(detail("vhl_result", "VHL testing result", "vhl_testing"))
                .field(FieldSchema::textarea("other_molecular", "Other Molecular Markers")),
        )
        .line(LineTemplate::value("VHL gene mutation testing", "vhl_result"))
        .line(LineTemplate::value("Other Molecular Markers", "other_molecular"))
}

fn prognostic_assessment() -> SectionSchema {
    let score = |key: &str, label: &str, max: f64| {
        FieldSchema::number(key, label, NumericRange::count(0.0, Some(max)))
    };

    SectionSchema::new("PROGNOSTIC ASSESSMENT")
        .report_when(Condition::checked("prognostic_assessment"))
        .note("Optional section for risk stratification")
        .field(FieldSchema::checkbox(
            "prognostic_assessment",
            "Perform prognostic assessment",
        ))
        .section(
            SectionSchema::group()
                .visible_when(Condition::checked("prognostic_assessment"))
                .field(score("tumor_size_score", "Tumor Size Score", 10.0))
                .field(score("grade_score", "Grade Score", 10.0))
                .field(score("stage_score", "Stage Score", 10.0))
                .field(score("overall_score", "Overall Prognostic Score", 30.0))
                .field(FieldSchema::select(
                    "risk_stratification",
                    "Risk Stratification",
                    &["Low risk", "Intermediate risk", "High risk"],
                )),
        )
        .line(LineTemplate::value("Tumor Size Score", "tumor_size_score"))
        .line(LineTemplate::value("Grade Score", "grade_score"))
        .line(LineTemplate::value("Stage Score", "stage_score"))
        .line(LineTemplate::value("Overall Prognostic Score", "overall_score"))
        .line(LineTemplate::value("Risk Stratification", "risk_stratification"))
}

/// A free-text section that only appears once something is written in it.
fn free_text(title: &str, key: &str, label: &str) -> SectionSchema {
    SectionSchema::new(title)
        .omit_when_empty()
        .field(FieldSchema::textarea(key, label))
        .line(LineTemplate::text(key))
}
