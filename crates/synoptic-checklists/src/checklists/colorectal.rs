use std::sync::LazyLock;

use synoptic_core::{
    Condition, FieldSchema, FormSchema, LineTemplate, ListEntry, NumericRange, SectionSchema,
};

use super::{detail, explain, radio};
use crate::Checklist;

/// Colon and rectum resection, AJCC 8th Edition.
pub struct Colorectal;

const HISTOLOGIC_OTHER: &str = "Other histologic type not listed";
const HISTOLOGIC_CANNOT: &str = "Carcinoma, type cannot be determined";
const GRADE_CANNOT: &str = "GX, cannot be assessed";
const SIZE_MEASURED: &str = "Greatest dimension in cm";
const ADJACENT_STRUCTURES: &str = "Directly invades or adheres to adjacent structure(s)";
const MARGINS_NEGATIVE: &str = "All margins negative for invasive carcinoma";
const MARGINS_INVOLVED: &str = "Invasive carcinoma present at margin";
const HGD_AT_MARGIN: &str = "High-grade dysplasia / intramucosal carcinoma present at margin";
const LGD_AT_MARGIN: &str = "Low-grade dysplasia present at margin";
const LN_PRESENT: &str = "Regional lymph nodes present";
const LN_TUMOR_PRESENT: &str = "Tumor present in regional lymph node(s)";
const T_SUFFIX_M: &str = "(m) multiple primary synchronous tumors in a single organ";

const TNM_PREAMBLE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information
available to the pathologist at the time the report is issued.
";

const TNM_NOTE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information available to the pathologist at the time the report is issued. As per the AJCC (Chapter 1, 8th Ed.) it is the managing physician's responsibility to establish the final pathologic stage based upon all pertinent information, including but potentially not limited to this pathology report.";

const BIOMARKER_PREAMBLE: &str = "For reporting molecular testing and immunohistochemistry for mismatch repair
proteins, and for other cancer biomarker testing results, the CAP Colorectal
Biomarker Template should be used. Pending biomarker studies should be listed
in the Comments section of this report.";

/// `(checkbox key, detail key, text)` for each tumor site.
const SITES: [(&str, &str, &str); 11] = [
    ("site_cecum", "cecum_detail", "Cecum"),
    ("site_ileocecal", "ileocecal_detail", "Ileocecal valve"),
    ("site_ascending", "ascending_detail", "Ascending colon"),
    ("site_hepatic", "hepatic_detail", "Hepatic flexure"),
    ("site_transverse", "transverse_detail", "Transverse colon"),
    ("site_splenic", "splenic_detail", "Splenic flexure"),
    ("site_descending", "descending_detail", "Descending colon"),
    ("site_sigmoid", "sigmoid_detail", "Sigmoid colon"),
    ("site_rectosigmoid", "rectosigmoid_detail", "Rectosigmoid"),
    ("site_rectum", "rectum_detail", "Rectum"),
    ("site_colon_nos", "colon_nos_detail", "Colon, NOS"),
];

const INVASIVE_MARGINS: [(&str, &str); 6] = [
    ("proximal", "Proximal"),
    ("distal", "Distal"),
    ("radial", "Radial (circumferential)"),
    ("mesenteric", "Mesenteric"),
    ("deep", "Deep"),
    ("mucosal", "Mucosal"),
];

const NON_INVASIVE_MARGINS: [(&str, &str); 5] = [
    ("proximal", "Proximal"),
    ("distal", "Distal"),
    ("mucosal", "Mucosal"),
    ("other", "Other"),
    ("cannot", "Cannot be determined"),
];

impl Checklist for Colorectal {
    fn id(&self) -> &str {
        "colorectal"
    }

    fn name(&self) -> &str {
        "Colon and Rectum"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| FormSchema {
            id: "colorectal".to_string(),
            name: "Colon and Rectum".to_string(),
            title: "COLORECTAL CANCER PATHOLOGY REPORT".to_string(),
            standard: "AJCC 8th Edition".to_string(),
            posting_date: "June 2025".to_string(),
            slug: "colorectal".to_string(),
            sections: vec![
                case_summary(),
                specimen(),
                tumor(),
                margins(),
                lymph_nodes(),
                distant_metastasis(),
                ptnm(),
                additional_findings(),
                SectionSchema::new("SPECIAL STUDIES").preamble(BIOMARKER_PREAMBLE),
                comments(),
            ],
        });
        &SCHEMA
    }
}

fn case_summary() -> SectionSchema {
    SectionSchema::new("CASE SUMMARY (COLON AND RECTUM: Resection)")
        .field(FieldSchema::text("case_id", "Case ID"))
        .field(FieldSchema::text("patient_name", "Patient Name"))
        .field(FieldSchema::date("date_of_procedure", "Date of Procedure"))
        .field(FieldSchema::text("pathologist", "Pathologist"))
        .line(LineTemplate::value("Case ID", "case_id"))
        .line(LineTemplate::value("Patient Name", "patient_name"))
        .line(LineTemplate::value("Date of Procedure", "date_of_procedure"))
        .line(LineTemplate::value("Pathologist", "pathologist"))
}

fn specimen() -> SectionSchema {
    SectionSchema::new("SPECIMEN")
        .field(FieldSchema::select(
            "procedure",
            "Procedure",
            &[
                "Right hemicolectomy",
                "Transverse colectomy",
                "Left hemicolectomy",
                "Sigmoidectomy",
                "Low anterior resection",
                "Total abdominal colectomy",
                "Abdominoperineal resection",
                "Other",
                "Not specified",
            ],
        ))
        .field(explain("procedure_other", "Specify other procedure", "procedure", "Other"))
        .line(
            LineTemplate::value("Procedure", "procedure")
                .with_detail(LineTemplate::value("Details", "procedure_other")),
        )
        .note("Macroscopic evaluation of mesorectum is required only for rectal cancers.")
        .field(FieldSchema::select(
            "mesorectum",
            "Macroscopic Evaluation of Mesorectum",
            &[
                "Not applicable",
                "Complete",
                "Near complete",
                "Incomplete",
                "Cannot be determined",
            ],
        ))
        .field(explain(
            "mesorectum_explain",
            "Explain",
            "mesorectum",
            "Cannot be determined",
        ))
        .line(
            LineTemplate::value("Macroscopic Evaluation of Mesorectum", "mesorectum")
                .with_detail(LineTemplate::value("Explanation", "mesorectum_explain")),
        )
}

fn tumor() -> SectionSchema {
    let mut section = SectionSchema::new("TUMOR");
    for (key, detail_key, text) in SITES {
        section = section
            .field(FieldSchema::checkbox(key, text))
            .field(detail(detail_key, &format!("{text} details"), key));
    }

    section
        .field(FieldSchema::checkbox("site_cannot_determine", "Cannot be determined"))
        .field(detail("site_explain", "Explain", "site_cannot_determine"))
        .line(LineTemplate::list(
            "Tumor Site",
            SITES
                .iter()
                .map(|&(key, detail_key, text)| ListEntry::new(key, text).with_detail(detail_key))
                .collect(),
        ))
        .field(FieldSchema::select(
            "rectal_location",
            "Rectal Tumor Location (required for rectal primaries only)",
            &[
                "Not applicable",
                "Entirely above anterior peritoneal reflection",
                "Entirely below anterior peritoneal reflection",
                "Straddles anterior peritoneal reflection",
                "Not specified",
            ],
        ))
        .line(LineTemplate::value("Rectal Tumor Location", "rectal_location"))
        .field(FieldSchema::select(
            "histologic_type",
            "Histologic Type",
            &[
                "Adenocarcinoma",
                "Mucinous adenocarcinoma",
                "Poorly cohesive carcinoma",
                "Signet-ring cell carcinoma",
                "Medullary carcinoma",
                "Serrated adenocarcinoma",
                "Micropapillary adenocarcinoma",
                "Adenoma-like adenocarcinoma",
                "Adenosquamous carcinoma",
                "Undifferentiated carcinoma, NOS",
                "Carcinoma with sarcomatoid component",
                "Large cell neuroendocrine carcinoma",
                "Small cell neuroendocrine carcinoma",
                "Mixed neuroendocrine-non-neuroendocrine neoplasm (MiNEN)",
                HISTOLOGIC_OTHER,
                HISTOLOGIC_CANNOT,
            ],
        ))
        .field(
            FieldSchema::text("minen_components", "Specify components")
                .visible_when(Condition::contains("histologic_type", "MiNEN")),
        )
        .field(explain(
            "histologic_other",
            "Specify other type",
            "histologic_type",
            HISTOLOGIC_OTHER,
        ))
        .field(explain(
            "histologic_cannot",
            "Explain",
            "histologic_type",
            HISTOLOGIC_CANNOT,
        ))
        .line(
            LineTemplate::value("Histologic Type", "histologic_type")
                .with_detail(LineTemplate::value("Components", "minen_components"))
                .with_detail(LineTemplate::value("Specified type", "histologic_other")),
        )
        .field(FieldSchema::textarea("histologic_comment", "Histologic Type Comment"))
        .line(LineTemplate::value("Histologic Type Comment", "histologic_comment"))
        .field(FieldSchema::select(
            "grade",
            "Histologic Grade",
            &[
                "G1, well-differentiated",
                "G2, moderately differentiated",
                "G3, poorly differentiated",
                "G4, undifferentiated",
                "Other",
                GRADE_CANNOT,
                "Not applicable",
            ],
        ))
        .field(explain("grade_other", "Specify other grade", "grade", "Other"))
        .field(explain("grade_cannot", "Explain", "grade", GRADE_CANNOT))
        .line(
            LineTemplate::value("Histologic Grade", "grade")
                .with_detail(LineTemplate::value("Specified grade", "grade_other")),
        )
        // Size
        .field(radio(
            "size_method",
            "Size measurement",
            &[SIZE_MEASURED, "Cannot be determined"],
        ))
        .field(
            FieldSchema::number("size_cm", "Size (cm)", NumericRange::measurement())
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
        .field(explain(
            "size_explain",
            "Explain why size cannot be determined",
            "size_method",
            "Cannot be determined",
        ))
        .line(
            LineTemplate::template(
                "Tumor Size: {{ size_cm }} cm\
                 {% if size_x is defined and size_y is defined %} \
                 x {{ size_x }} cm x {{ size_y }} cm{% endif %}",
            )
            .requires(&["size_cm"])
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
        // Multiple primaries
        .field(radio(
            "multiple_primary",
            "Multiple primary sites",
            &["Not applicable", "Present"],
        ))
        .section(
            SectionSchema::group()
                .visible_when(Condition::equals("multiple_primary", "Present"))
                .field(FieldSchema::textarea(
                    "multiple_details",
                    "Describe multiple primary sites",
                ))
                .note("Please complete a separate checklist for each primary site"),
        )
        .line(LineTemplate::when(
            Condition::equals("multiple_primary", "Present"),
            LineTemplate::value("Multiple Primary Sites", "multiple_primary")
                .with_detail(LineTemplate::value("Details", "multiple_details")),
        ))
        // Extent
        .field(FieldSchema::select(
            "tumor_extent",
            "Tumor Extent",
            &[
                "No invasion (high-grade dysplasia)",
                "Invades lamina propria / muscularis mucosae (intramucosal carcinoma)",
                "Invades submucosa",
                "Invades into muscularis propria",
                "Invades through muscularis propria into the pericolic or perirectal tissue",
                "Invades visceral peritoneum",
                ADJACENT_STRUCTURES,
                "Cannot be determined",
                "No evidence of primary tumor",
            ],
        ))
        .field(explain(
            "adjacent_structures",
            "Specify adjacent structures",
            "tumor_extent",
            ADJACENT_STRUCTURES,
        ))
        .field(explain(
            "extent_explain",
            "Explain",
            "tumor_extent",
            "Cannot be determined",
        ))
        .line(
            LineTemplate::value("Tumor Extent", "tumor_extent")
                .with_detail(LineTemplate::value("Adjacent structures", "adjacent_structures")),
        )
        .section(submucosal_invasion())
        .line(LineTemplate::when(
            Condition::equals("submucosal_applicable", "Present"),
            LineTemplate::value("Sub-mucosal Invasion", "submucosal_applicable")
                .with_detail(LineTemplate::value("Depth", "submucosal_depth"))
                .with_detail(LineTemplate::value("Extent", "submucosal_extent")),
        ))
        .field(FieldSchema::select(
            "perforation",
            "Macroscopic Tumor Perforation",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(explain(
            "perforation_explain",
            "Explain",
            "perforation",
            "Cannot be determined",
        ))
        .line(LineTemplate::value("Macroscopic Tumor Perforation", "perforation"))
        // Lymphatic and vascular invasion
        .field(FieldSchema::checkbox("lvi_not_identified", "Not identified"))
        .field(FieldSchema::checkbox("lvi_small", "Small vessel"))
        .field(detail("lvi_small_detail", "Small vessel details", "lvi_small"))
        .field(FieldSchema::checkbox(
            "lvi_large_intramural",
            "Large vessel (venous), intramural",
        ))
        .field(detail(
            "lvi_large_intramural_detail",
            "Large vessel intramural details",
            "lvi_large_intramural",
        ))
        .field(FieldSchema::checkbox(
            "lvi_large_extramural",
            "Large vessel (venous), extramural",
        ))
        .field(detail(
            "lvi_large_extramural_detail",
            "Large vessel extramural details",
            "lvi_large_extramural",
        ))
        .field(FieldSchema::checkbox("lvi_present_nos", "Present, NOS"))
        .field(detail("lvi_nos_detail", "Present NOS details", "lvi_present_nos"))
        .field(FieldSchema::checkbox("lvi_cannot_determine", "Cannot be determined"))
        .field(detail(
            "lvi_cannot_explain",
            "Cannot be determined - explain",
            "lvi_cannot_determine",
        ))
        .line(LineTemplate::list(
            "Lymphatic and/or Vascular Invasion",
            vec![
                ListEntry::new("lvi_not_identified", "Not identified"),
                ListEntry::new("lvi_small", "Small vessel").with_detail("lvi_small_detail"),
                ListEntry::new("lvi_large_intramural", "Large vessel (venous), intramural")
                    .with_detail("lvi_large_intramural_detail"),
                ListEntry::new("lvi_large_extramural", "Large vessel (venous), extramural")
                    .with_detail("lvi_large_extramural_detail"),
                ListEntry::new("lvi_present_nos", "Present, NOS").with_detail("lvi_nos_detail"),
            ],
        ))
        .field(FieldSchema::select(
            "pni",
            "Perineural Invasion",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(explain("pni_explain", "Explain", "pni", "Cannot be determined"))
        .line(LineTemplate::value("Perineural Invasion", "pni"))
        // Budding
        .field(FieldSchema::select(
            "budding",
            "Tumor Budding Score (required only when applicable)",
            &[
                "Not applicable",
                "Low (0-4)",
                "Intermediate (5-9)",
                "High (10 or more)",
                "Cannot be determined",
            ],
        ))
        .field(explain("budding_explain", "Explain", "budding", "Cannot be determined"))
        .line(LineTemplate::value("Tumor Budding Score", "budding"))
        .field(radio(
            "buds_method",
            "Number of tumor buds per 'hotspot' field",
            &["Specify number", "Other", "Cannot be determined"],
        ))
        .field(
            FieldSchema::number(
                "buds_number",
                "Number in one 'hotspot' field (area = 0.785 mm²)",
                NumericRange::count(0.0, None),
            )
            .visible_when(Condition::equals("buds_method", "Specify number")),
        )
        .field(explain("buds_other", "Specify other", "buds_method", "Other"))
        .field(explain("buds_explain", "Explain", "buds_method", "Cannot be determined"))
        .field(FieldSchema::select(
            "polyp_type",
            "Type of Polyp in which Invasive Carcinoma Arose",
            &[
                "None identified",
                "Tubular adenoma",
                "Villous adenoma",
                "Tubulovillous adenoma",
                "Traditional serrated adenoma",
                "Sessile serrated adenoma / sessile serrated polyp",
                "Hamartomatous polyp",
                "Other",
            ],
        ))
        .field(explain("polyp_other", "Specify other polyp type", "polyp_type", "Other"))
        .line(LineTemplate::value("Type of Polyp", "polyp_type"))
        .field(FieldSchema::select(
            "treatment_effect",
            "Treatment Effect",
            &[
                "No known presurgical therapy",
                "Present, with no viable cancer cells (complete response, score 0)",
                "Present, with single cells or rare small groups of cancer cells (near complete response, score 1)",
                "Present, with residual cancer showing evident tumor regression, but more than single cells or rare small groups of cancer cells (partial response, score 2)",
                "Present, NOS",
                "Absent, with extensive residual cancer and no evident tumor regression (poor or no response, score 3)",
                "Cannot be determined",
            ],
        ))
        .field(explain(
            "treatment_explain",
            "Explain",
            "treatment_effect",
            "Cannot be determined",
        ))
        .line(LineTemplate::value("Treatment Effect", "treatment_effect"))
        .field(FieldSchema::textarea("tumor_comment", "Tumor Comment"))
        .line(LineTemplate::value("Tumor Comment", "tumor_comment"))
}

/// Depth and extent of submucosal invasion, asked for pT1 tumors.
fn submucosal_invasion() -> SectionSchema {
    SectionSchema::group()
        .field(radio(
            "submucosal_applicable",
            "Sub-mucosal invasion (required only for pT1 tumors)",
            &["Not applicable (not a pT1 tumor)", "Not identified", "Present"],
        ))
        .section(
            SectionSchema::group()
                .visible_when(Condition::equals("submucosal_applicable", "Present"))
                .field(FieldSchema::select(
                    "submucosal_depth",
                    "Depth of Sub-mucosal Invasion",
                    &[
                        "Less than 1 mm",
                        "Greater than or equal to 1 mm and less than 2 mm",
                        "Greater than 2 mm",
                        "Exact depth in mm",
                        "Cannot be determined",
                    ],
                ))
                .field(
                    FieldSchema::number("depth_mm", "Depth (mm)", NumericRange::measurement())
                        .visible_when(Condition::equals("submucosal_depth", "Exact depth in mm")),
                )
                .field(explain(
                    "depth_explain",
                    "Explain",
                    "submucosal_depth",
                    "Cannot be determined",
                ))
                .field(FieldSchema::select(
                    "submucosal_extent",
                    "Extent of Sub-mucosal Invasion",
                    &[
                        "Tumor invades into upper one third of submucosa",
                        "Tumor invades into middle one third of submucosa",
                        "Tumor invades into lower one third of submucosa",
                        "Cannot be determined",
                    ],
                ))
                .field(explain(
                    "extent_sub_explain",
                    "Explain",
                    "submucosal_extent",
                    "Cannot be determined",
                )),
        )
}

/// Margin checkboxes keyed by `key_of(name)` with free-text details keyed
/// by `detail_of(name)`, reported as one list line.
fn margin_list(
    mut group: SectionSchema,
    margins: &[(&str, &str)],
    key_of: impl Fn(&str) -> String,
    detail_of: impl Fn(&str) -> String,
    label: &str,
) -> SectionSchema {
    let mut entries = Vec::new();
    for &(name, text) in margins {
        let (key, detail_key) = (key_of(name), detail_of(name));
        group = group
            .field(FieldSchema::checkbox(&key, text))
            .field(detail(&detail_key, &format!("{text} details"), &key));
        if name != "cannot" {
            entries.push(ListEntry::new(&key, text).with_detail(&detail_key));
        }
    }
    group.line(LineTemplate::list(label, entries))
}

fn margins() -> SectionSchema {
    let closest = margin_list(
        SectionSchema::group().visible_when(Condition::equals("margin_status", MARGINS_NEGATIVE)),
        &INVASIVE_MARGINS,
        |name| format!("{name}_closest"),
        |name| format!("{name}_detail"),
        "Closest margin(s)",
    )
    .field(radio(
        "distance_method",
        "Distance measurement",
        &[
            "Exact distance in cm",
            "Greater than 1 cm",
            "Exact distance in mm",
            "Greater than 10 mm",
            "Other",
            "Cannot be determined",
        ],
    ))
    .field(
        FieldSchema::number("distance_cm", "Distance (cm)", NumericRange::measurement())
            .visible_when(Condition::equals("distance_method", "Exact distance in cm")),
    )
    .field(
        FieldSchema::number("distance_mm", "Distance (mm)", NumericRange::measurement())
            .visible_when(Condition::equals("distance_method", "Exact distance in mm")),
    )
    .field(explain("distance_other", "Specify other", "distance_method", "Other"))
    .field(explain(
        "distance_explain",
        "Explain",
        "distance_method",
        "Cannot be determined",
    ))
    .line(LineTemplate::first_of(vec![
        LineTemplate::value("Distance to closest margin", "distance_cm").with_suffix(" cm"),
        LineTemplate::value("Distance to closest margin", "distance_mm").with_suffix(" mm"),
        LineTemplate::when(
            Condition::one_of("distance_method", &["Greater than 1 cm", "Greater than 10 mm"]),
            LineTemplate::value("Distance to closest margin", "distance_method"),
        ),
    ]));

    let involved = margin_list(
        SectionSchema::group().visible_when(Condition::equals("margin_status", MARGINS_INVOLVED)),
        &INVASIVE_MARGINS,
        |name| format!("{name}_involved"),
        |name| format!("{name}_involved_detail"),
        "Involved margin(s)",
    );

    let high_grade = margin_list(
        SectionSchema::group()
            .visible_when(Condition::equals("non_invasive_status", HGD_AT_MARGIN)),
        &NON_INVASIVE_MARGINS,
        |name| format!("hgd_{name}"),
        |name| format!("hgd_{name}_detail"),
        "Involved margin(s)",
    );

    let low_grade = margin_list(
        SectionSchema::group()
            .visible_when(Condition::equals("non_invasive_status", LGD_AT_MARGIN)),
        &NON_INVASIVE_MARGINS,
        |name| format!("lgd_{name}"),
        |name| format!("lgd_{name}_detail"),
        "Involved margin(s)",
    );

    SectionSchema::new("MARGINS")
        .field(radio(
            "margin_status",
            "Margin status",
            &[
                MARGINS_NEGATIVE,
                MARGINS_INVOLVED,
                "Other",
                "Cannot be determined",
                "Not applicable",
            ],
        ))
        .line(LineTemplate::value(
            "Margin Status for Invasive Carcinoma",
            "margin_status",
        ))
        .section(closest)
        .section(involved)
        .field(explain("margin_other_detail", "Specify other", "margin_status", "Other"))
        .field(explain(
            "margin_cannot_explain",
            "Explain",
            "margin_status",
            "Cannot be determined",
        ))
        .field(radio(
            "non_invasive_status",
            "Non-invasive tumor margin status",
            &[
                "All margins negative for high-grade dysplasia / intramucosal carcinoma and low-grade dysplasia",
                HGD_AT_MARGIN,
                LGD_AT_MARGIN,
                "Other",
                "Cannot be determined",
                "Not applicable",
            ],
        ))
        .line(LineTemplate::value(
            "Margin Status for Non-Invasive Tumor",
            "non_invasive_status",
        ))
        .section(high_grade)
        .section(low_grade)
        .field(explain(
            "non_invasive_other",
            "Specify other",
            "non_invasive_status",
            "Other",
        ))
        .field(explain(
            "non_invasive_explain",
            "Explain",
            "non_invasive_status",
            "Cannot be determined",
        ))
        .field(FieldSchema::textarea("margin_comment", "Margin Comment"))
        .line(LineTemplate::value("Margin Comment", "margin_comment"))
}

fn lymph_nodes() -> SectionSchema {
    let counts = ["Exact number", "At least", "Other", "Cannot be determined"];

    let present = SectionSchema::group()
        .visible_when(Condition::equals("ln_status", LN_PRESENT))
        .field(radio(
            "ln_tumor_status",
            "Tumor in lymph nodes",
            &["All regional lymph nodes negative for tumor", LN_TUMOR_PRESENT],
        ))
        .line(LineTemplate::value("Tumor status", "ln_tumor_status"))
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

    let deposits = SectionSchema::group()
        .visible_when(Condition::equals("tumor_deposits", "Present"))
        .field(radio(
            "deposits_method",
            "Number of deposits",
            &["Specify number", "Other", "Cannot be determined"],
        ))
        .field(
            FieldSchema::number(
                "deposits_number",
                "Number of tumor deposits",
                NumericRange::count(0.0, None),
            )
            .visible_when(Condition::equals("deposits_method", "Specify number")),
        )
        .field(explain("deposits_other", "Specify other", "deposits_method", "Other"))
        .field(explain(
            "deposits_explain",
            "Explain",
            "deposits_method",
            "Cannot be determined",
        ));

    SectionSchema::new("REGIONAL LYMPH NODES")
        .field(radio(
            "ln_status",
            "Regional lymph node status",
            &[
                "Not applicable (no regional lymph nodes submitted or found)",
                LN_PRESENT,
                "Other",
                "Cannot be determined",
            ],
        ))
        .line(LineTemplate::value("Regional Lymph Node Status", "ln_status"))
        .section(present)
        .field(explain("ln_other_detail", "Specify other", "ln_status", "Other"))
        .field(explain(
            "ln_cannot_explain",
            "Explain",
            "ln_status",
            "Cannot be determined",
        ))
        .field(radio(
            "tumor_deposits",
            "Tumor deposits",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .section(deposits)
        .field(explain(
            "deposits_cannot_explain",
            "Explain",
            "tumor_deposits",
            "Cannot be determined",
        ))
        .line(
            LineTemplate::value("Tumor Deposits", "tumor_deposits")
                .with_detail(LineTemplate::value("Number of tumor deposits", "deposits_number")),
        )
        .field(FieldSchema::textarea("ln_comment", "Regional Lymph Node Comment"))
        .line(LineTemplate::value("Regional Lymph Node Comment", "ln_comment"))
}

fn distant_metastasis() -> SectionSchema {
    SectionSchema::new("DISTANT METASTASIS")
        .field(FieldSchema::checkbox("dm_not_applicable", "Not applicable"))
        .field(FieldSchema::checkbox("dm_non_regional_ln", "Non-regional lymph node(s)"))
        .field(detail(
            "dm_non_regional_detail",
            "Non-regional lymph node details",
            "dm_non_regional_ln",
        ))
        .field(FieldSchema::checkbox("dm_liver", "Liver"))
        .field(detail("dm_liver_detail", "Liver metastasis details", "dm_liver"))
        .field(FieldSchema::checkbox("dm_other", "Other"))
        .field(detail("dm_other_detail", "Specify other distant sites", "dm_other"))
        .field(FieldSchema::checkbox("dm_cannot_determine", "Cannot be determined"))
        .field(detail(
            "dm_cannot_detail",
            "Cannot be determined details",
            "dm_cannot_determine",
        ))
        .line(LineTemplate::list(
            "Distant Site(s) Involved",
            vec![
                ListEntry::new("dm_not_applicable", "Not applicable"),
                ListEntry::new("dm_non_regional_ln", "Non-regional lymph node(s)")
                    .with_detail("dm_non_regional_detail"),
                ListEntry::new("dm_liver", "Liver").with_detail("dm_liver_detail"),
                ListEntry::new("dm_other", "Other").with_detail("dm_other_detail"),
            ],
        ))
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
                "pTis: Carcinoma in situ, intramucosal carcinoma (involvement of lamina propria with no extension through muscularis mucosae)",
                "pT1: Tumor invades the submucosa (through the muscularis mucosa but not into the muscularis propria)",
                "pT2: Tumor invades the muscularis propria",
                "pT3: Tumor invades through the muscularis propria into pericolorectal tissues",
                "pT4a: Tumor invades through the visceral peritoneum",
                "pT4b: Tumor directly invades or adheres to adjacent organs or structures",
                "pT4 (subcategory cannot be determined)",
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
                "pN1a: One regional lymph node is positive",
                "pN1b: Two or three regional lymph nodes are positive",
                "pN1c: No regional lymph nodes are positive, but there are tumor deposits in the subserosa, mesentery, nonperitonealized pericolic or perirectal / mesorectal tissues",
                "pN1 (subcategory cannot be determined)",
                "pN2a: Four to six regional lymph nodes are positive",
                "pN2b: Seven or more regional lymph nodes are positive",
                "pN2 (subcategory cannot be assessed)",
            ],
        ))
        .line(LineTemplate::value("pN", "pn_category"))
        .field(FieldSchema::select(
            "pm_category",
            "pM Category",
            &[
                "Not applicable - pM cannot be determined from the submitted specimen(s)",
                "pM1a: Metastasis to one site or organ is identified without peritoneal metastasis",
                "pM1b: Metastasis to two or more sites or organs is identified without peritoneal metastasis",
                "pM1c: Metastasis to the peritoneal surface is identified alone or with other site or organ metastases",
                "pM1 (subcategory cannot be determined)",
            ],
        ))
        .line(LineTemplate::value("pM", "pm_category"))
}

fn additional_findings() -> SectionSchema {
    let findings = [
        ("additional_none", "None identified"),
        ("additional_adenoma", "Adenoma(s)"),
        ("additional_uc", "Ulcerative colitis"),
        ("additional_crohn", "Crohn disease"),
        ("additional_diverticulosis", "Diverticulosis"),
        (
            "additional_dysplasia_ibd",
            "Dysplasia arising in inflammatory bowel disease",
        ),
    ];

    let mut section = SectionSchema::new("ADDITIONAL FINDINGS");
    let mut entries = Vec::new();
    for (key, text) in findings {
        section = section.field(FieldSchema::checkbox(key, text));
        entries.push(ListEntry::new(key, text));
    }
    entries.push(ListEntry::new("additional_other", "Other").with_detail("additional_other_detail"));

    section
        .field(FieldSchema::checkbox("additional_other", "Other"))
        .field(detail(
            "additional_other_detail",
            "Specify other findings",
            "additional_other",
        ))
        .line(LineTemplate::list("Additional Findings", entries))
}

fn comments() -> SectionSchema {
    SectionSchema::new("COMMENTS")
        .omit_when_empty()
        .field(FieldSchema::textarea("comments", "Comment(s)"))
        .line(LineTemplate::text("comments"))
}
