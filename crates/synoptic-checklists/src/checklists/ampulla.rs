use std::sync::LazyLock;

use synoptic_core::{
    Condition, FieldSchema, FormSchema, LineTemplate, ListEntry, NumericRange, SectionSchema,
};

use super::{detail, explain, radio};
use crate::Checklist;

/// Ampulla of Vater resection, AJCC 8th Edition.
pub struct AmpullaOfVater;

const HISTOLOGIC_OTHER: &str = "Other histologic type not listed";
const GRADE_CANNOT: &str = "GX, cannot be assessed";
const SIZE_UNIFOCAL: &str = "Unifocal invasive carcinoma";
const SIZE_MULTIFOCAL: &str = "Multifocal invasive carcinoma in association with IAPN";
const MARGINS_NEGATIVE: &str = "All margins negative for invasive carcinoma";
const MARGINS_INVOLVED: &str = "Invasive carcinoma present at margin";
const HGD_AT_MARGIN: &str =
    "High-grade dysplasia and / or high-grade intraepithelial neoplasia present at margin";
const LN_PRESENT: &str = "Regional lymph nodes present";
const LN_TUMOR_PRESENT: &str = "Tumor present in regional lymph node(s)";
const T_SUFFIX_M: &str = "(m) multiple primary synchronous tumors in a single organ";
const PM1: &str = "pM1: Distant metastasis";

const TNM_PREAMBLE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information
available to the pathologist at the time the report is issued.
";

const TNM_NOTE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information available to the pathologist at the time the report is issued. As per the AJCC (Chapter 1, 8th Ed.) it is the managing physician's responsibility to establish the final pathologic stage based upon all pertinent information, including but potentially not limited to this pathology report.";

/// Margins listed for both closest and involved invasive carcinoma, as
/// `(key suffix, report text)`.
const PANCREATODUODENAL_MARGINS: [(&str, &str); 8] = [
    ("deep", "Deep (radial)"),
    ("duodenal", "Duodenal mucosal"),
    ("pancreatic_duct", "Pancreatic duct"),
    ("bile_duct", "Bile duct"),
    ("pancreatic_neck", "Pancreatic neck / parenchymal"),
    ("uncinate", "Uncinate (retroperitoneal / SMA)"),
    ("proximal", "Proximal (gastric or duodenal)"),
    ("distal", "Distal (duodenal or jejunal)"),
];

impl Checklist for AmpullaOfVater {
    fn id(&self) -> &str {
        "ampulla_vater"
    }

    fn name(&self) -> &str {
        "Ampulla of Vater"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| FormSchema {
            id: "ampulla_vater".to_string(),
            name: "Ampulla of Vater".to_string(),
            title: "AMPULLA OF VATER PATHOLOGY REPORT".to_string(),
            standard: "AJCC 8th Edition".to_string(),
            posting_date: "June 2025".to_string(),
            slug: "ampulla_vater".to_string(),
            sections: vec![
                case_summary(),
                specimen(),
                tumor(),
                margins(),
                lymph_nodes(),
                distant_metastasis(),
                ptnm(),
                additional_findings(),
                special_studies(),
                comments(),
            ],
        });
        &SCHEMA
    }
}

fn case_summary() -> SectionSchema {
    SectionSchema::new("CASE SUMMARY (AMPULLA OF VATER)")
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
                "Ampullectomy",
                "Pancreaticoduodenectomy (Whipple resection)",
                "Other",
                "Not specified",
            ],
        ))
        .field(explain("procedure_other", "Specify other procedure", "procedure", "Other"))
        .line(
            LineTemplate::value("Procedure", "procedure")
                .with_detail(LineTemplate::value("Details", "procedure_other")),
        )
}

fn tumor() -> SectionSchema {
    let sites_with_detail = [
        "(Peri-) Ampullary-duodenal",
        "Mixed intra-ampullary and (peri-) ampullary-duodenal, NOS",
        "Other",
        "Cannot be determined",
    ];

    let organs = [
        ("organ_stomach", "Stomach"),
        ("organ_gallbladder", "Gallbladder"),
        ("organ_omentum", "Omentum"),
        ("organ_celiac", "Celiac axis"),
        ("organ_sma", "Superior mesenteric artery"),
        ("organ_hepatic", "Common hepatic artery"),
    ];

    let extents = [
        ("extent_cis", "Carcinoma in situ / high-grade dysplasia"),
        ("extent_ampulla", "Limited to ampulla of Vater or sphincter of Oddi"),
        ("extent_sphincter", "Invades beyond sphincter of Oddi"),
        ("extent_submucosa", "Invades into duodenal submucosa"),
        ("extent_muscularis", "Invades into muscularis propria of duodenum"),
        ("extent_pancreas_05", "Directly invades pancreas (up to 0.5 cm)"),
        ("extent_pancreas_more", "Extends more than 0.5 cm into pancreas"),
        ("extent_peripancreatic", "Extends into peripancreatic soft tissues"),
        ("extent_periduodenal", "Extends into periduodenal tissue"),
        ("extent_serosa", "Extends into duodenal serosa"),
        ("extent_other_organs", "Invades other adjacent organ(s)"),
        ("extent_no_evidence", "No evidence of primary tumor"),
        ("extent_cannot_determine", "Cannot be determined"),
    ];

    let mut section = SectionSchema::new("TUMOR")
        .field(FieldSchema::select(
            "tumor_site",
            "Tumor Site",
            &[
                "Intra-ampullary papillary-tubular neoplasm (IAPN)-associated",
                "Ampullary ductal origin",
                "(Peri-) Ampullary-duodenal",
                "Mixed intra-ampullary and (peri-) ampullary-duodenal, NOS",
                "Other",
                "Cannot be determined",
                "Not specified",
            ],
        ))
        .field(
            FieldSchema::text("tumor_site_detail", "Tumor site details")
                .visible_when(Condition::one_of("tumor_site", &sites_with_detail)),
        )
        .line(
            LineTemplate::value("Tumor Site", "tumor_site")
                .with_detail(LineTemplate::value("Details", "tumor_site_detail")),
        )
        .field(FieldSchema::select(
            "histologic_type",
            "Histologic Type",
            &[
                "Adenocarcinoma, pancreaticobiliary-type",
                "Adenocarcinoma, intestinal-type",
                "Adenocarcinoma with mixed features (pancreaticobiliary- and intestinal-type)",
                "Adenocarcinoma, NOS",
                "Adenocarcinoma arising in intra-ampullary papillary-tubular neoplasm (IAPN)",
                "Mucinous adenocarcinoma",
                "Poorly cohesive carcinoma",
                "Signet-ring cell carcinoma",
                "Medullary carcinoma",
                "Adenosquamous carcinoma",
                "Large cell neuroendocrine carcinoma",
                "Small cell neuroendocrine carcinoma",
                "Undifferentiated carcinoma, NOS",
                "Mixed neuroendocrine-non-neuroendocrine neoplasm (MiNEN)",
                HISTOLOGIC_OTHER,
                "Carcinoma, NOS",
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
            "tumor_size_type",
            "Tumor size type",
            &[SIZE_UNIFOCAL, SIZE_MULTIFOCAL, "Cannot be determined"],
        ))
        .field(
            FieldSchema::number("size_cm", "Greatest dimension (cm)", NumericRange::measurement())
                .visible_when(Condition::equals("tumor_size_type", SIZE_UNIFOCAL)),
        )
        .field(
            FieldSchema::checkbox("additional_dims", "Additional dimensions")
                .visible_when(Condition::equals("tumor_size_type", SIZE_UNIFOCAL)),
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
            FieldSchema::number(
                "largest_focus",
                "Size of largest focus (cm)",
                NumericRange::measurement(),
            )
            .visible_when(Condition::equals("tumor_size_type", SIZE_MULTIFOCAL)),
        )
        .field(
            FieldSchema::number(
                "aggregate_size",
                "Aggregate size of all foci (cm) (if known)",
                NumericRange::measurement(),
            )
            .visible_when(Condition::equals("tumor_size_type", SIZE_MULTIFOCAL)),
        )
        .field(
            FieldSchema::number(
                "invasive_percentage",
                "Invasive component percentage (if known)",
                NumericRange::percentage(),
            )
            .visible_when(Condition::equals("tumor_size_type", SIZE_MULTIFOCAL)),
        )
        .field(explain(
            "size_explain",
            "Explain why size cannot be determined",
            "tumor_size_type",
            "Cannot be determined",
        ))
        .line(
            LineTemplate::value("Tumor Size Type", "tumor_size_type")
                .with_detail(
                    LineTemplate::template(
                        "Greatest dimension: {{ size_cm }} cm\
                         {% if size_x is defined and size_y is defined %} \
                         x {{ size_x }} cm x {{ size_y }} cm{% endif %}",
                    )
                    .requires(&["size_cm"])
                    .optional(&["size_x", "size_y"]),
                )
                .with_detail(
                    LineTemplate::value("Size of largest focus", "largest_focus").with_suffix(" cm"),
                )
                .with_detail(
                    LineTemplate::value("Aggregate size of all foci", "aggregate_size")
                        .with_suffix(" cm"),
                )
                .with_detail(
                    LineTemplate::value("Invasive component percentage", "invasive_percentage")
                        .with_suffix("%"),
                )
                .with_detail(LineTemplate::value("Explanation", "size_explain")),
        );

    // Extent
    for (key, label) in extents {
        section = section.field(FieldSchema::checkbox(key, label));
    }
    for (key, label) in organs {
        section = section.field(
            FieldSchema::checkbox(key, label).visible_when(Condition::checked("extent_other_organs")),
        );
    }
    let mut organ_entries: Vec<ListEntry> = organs
        .iter()
        .map(|&(key, label)| ListEntry::new(key, label))
        .collect();
    organ_entries.push(ListEntry::new("organ_other", "Other").with_detail("organ_other_detail"));

    section
        .field(
            FieldSchema::checkbox("organ_other", "Other")
                .visible_when(Condition::checked("extent_other_organs")),
        )
        .field(detail("organ_other_detail", "Specify other organ", "organ_other"))
        .field(detail("extent_explain", "Explain", "extent_cannot_determine"))
        .line(
            LineTemplate::list(
                "Tumor Extent",
                extents
                    .iter()
                    .map(|&(key, label)| ListEntry::new(key, label))
                    .collect(),
            )
            .with_detail(LineTemplate::list("Adjacent organs involved", organ_entries)),
        )
        .field(FieldSchema::select(
            "lvi",
            "Lymphatic and/or Vascular Invasion",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(explain("lvi_explain", "Explain", "lvi", "Cannot be determined"))
        .line(LineTemplate::value("Lymphatic and/or Vascular Invasion", "lvi"))
        .field(FieldSchema::select(
            "pni",
            "Perineural Invasion",
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(explain("pni_explain", "Explain", "pni", "Cannot be determined"))
        .line(LineTemplate::value("Perineural Invasion", "pni"))
        .field(FieldSchema::select(
            "treatment_effect",
            "Treatment Effect",
            &[
                "No known presurgical therapy",
                "Present, with no viable cancer cells (complete response, score 0)",
                "Present, with single cells or rare small groups of cancer cells (near complete response, score 1)",
                "Present, with residual cancer showing evident tumor regression (partial response, score 2)",
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

/// Checkbox list with a free-text detail per margin. Keys are
/// `{prefix}_{suffix}` and `{prefix}_{suffix}_detail`.
fn margin_checklist(
    mut group: SectionSchema,
    prefix: &str,
    margins: &[(&str, &str)],
    label: &str,
) -> SectionSchema {
    let mut entries = Vec::new();
    for &(suffix, text) in margins {
        let key = format!("{prefix}_{suffix}");
        let detail_key = format!("{key}_detail");
        group = group
            .field(FieldSchema::checkbox(&key, text))
            .field(detail(&detail_key, &format!("{text} details"), &key));
        entries.push(ListEntry::new(&key, text).with_detail(&detail_key));
    }

    let other = format!("{prefix}_other");
    let cannot = format!("{prefix}_cannot_determine");
    entries.push(ListEntry::new(&other, "Other").with_detail(&format!("{other}_detail")));
    group
        .field(FieldSchema::checkbox(&other, "Other"))
        .field(detail(&format!("{other}_detail"), "Specify other margin", &other))
        .field(FieldSchema::checkbox(&cannot, "Cannot be determined"))
        .field(detail(
            &format!("{prefix}_cannot_detail"),
            "Cannot be determined details",
            &cannot,
        ))
        .line(LineTemplate::list(label, entries))
}

fn margins() -> SectionSchema {
    let closest = margin_checklist(
        SectionSchema::group().visible_when(Condition::equals("margin_status", MARGINS_NEGATIVE)),
        "margin",
        &PANCREATODUODENAL_MARGINS,
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
            "Not applicable",
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

    let involved = margin_checklist(
        SectionSchema::group().visible_when(Condition::equals("margin_status", MARGINS_INVOLVED)),
        "involved",
        &PANCREATODUODENAL_MARGINS,
        "Involved margin(s)",
    );

    let hgd = margin_checklist(
        SectionSchema::group().visible_when(Condition::equals("dysplasia_status", HGD_AT_MARGIN)),
        "hgd",
        &[
            ("pancreatic_neck", "Pancreatic neck / parenchymal margin"),
            ("bile_duct", "Bile duct margin"),
            ("proximal", "Proximal (gastric or duodenal)"),
            ("distal", "Distal (duodenal or jejunal)"),
        ],
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
        .field(explain("margin_other_status", "Specify other", "margin_status", "Other"))
        .field(explain(
            "margin_cannot_explain",
            "Explain",
            "margin_status",
            "Cannot be determined",
        ))
        .field(radio(
            "dysplasia_status",
            "Dysplasia margin status",
            &[
                "All margins negative for high-grade dysplasia and / or high-grade intraepithelial neoplasia",
                HGD_AT_MARGIN,
                "Other",
                "Cannot be determined",
                "Not applicable",
            ],
        ))
        .line(LineTemplate::value(
            "Margin Status for Dysplasia and Intraepithelial Neoplasia",
            "dysplasia_status",
        ))
        .section(hgd)
        .field(explain("dysplasia_other", "Specify other", "dysplasia_status", "Other"))
        .field(explain(
            "dysplasia_explain",
            "Explain",
            "dysplasia_status",
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
                ListEntry::new("dm_cannot_determine", "Cannot be determined")
                    .with_detail("dm_cannot_detail"),
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
                "pTis: Carcinoma in situ",
                "pT1a: Tumor limited to ampulla of Vater or sphincter of Oddi",
                "pT1b: Tumor invades beyond the sphincter of Oddi (perisphincteric invasion) and / or into the duodenal submucosa",
                "pT1 (subcategory cannot be determined)",
                "pT2: Tumor invades into the muscularis propria of the duodenum",
                "pT3a: Tumor directly invades pancreas (up to 0.5 cm)",
                "pT3b: Tumor extends more than 0.5 cm into the pancreas, or extends into peripancreatic tissue or periduodenal tissue or duodenal serosa without involvement of the celiac axis or superior mesenteric artery",
                "pT3 (subcategory cannot be determined)",
                "pT4: Tumor involves the celiac axis, superior mesenteric artery, and / or common hepatic artery, irrespective of size",
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
                "pN1: Metastasis to one to three regional lymph nodes",
                "pN2: Metastasis to four or more regional lymph nodes",
            ],
        ))
        .line(LineTemplate::value("pN", "pn_category"))
        .field(FieldSchema::select(
            "pm_category",
            "pM Category",
            &[
                "Not applicable - pM cannot be determined from the submitted specimen(s)",
                PM1,
            ],
        ))
        // The "cannot be determined" choice is recorded but never printed.
        .line(LineTemplate::when(
            Condition::equals("pm_category", PM1),
            LineTemplate::value("pM", "pm_category"),
        ))
}

fn additional_findings() -> SectionSchema {
    SectionSchema::new("ADDITIONAL FINDINGS")
        .field(FieldSchema::checkbox("additional_none", "None identified"))
        .field(FieldSchema::checkbox("additional_dysplasia", "Dysplasia / adenoma"))
        .field(FieldSchema::checkbox("additional_other", "Other"))
        .field(detail(
            "additional_other_detail",
            "Specify other findings",
            "additional_other",
        ))
        .line(LineTemplate::list(
            "Additional Findings",
            vec![
                ListEntry::new("additional_none", "None identified"),
                ListEntry::new("additional_dysplasia", "Dysplasia / adenoma"),
                ListEntry::new("additional_other", "Other").with_detail("additional_other_detail"),
            ],
        ))
}

fn special_studies() -> SectionSchema {
    SectionSchema::new("SPECIAL STUDIES")
        .field(radio(
            "ancillary_performed",
            "Ancillary studies",
            &["Not performed", "Performed"],
        ))
        .field(
            FieldSchema::textarea("ancillary_details", "Specify ancillary studies performed")
                .visible_when(Condition::equals("ancillary_performed", "Performed")),
        )
        .line(
            LineTemplate::value("Ancillary Studies", "ancillary_performed")
                .with_detail(LineTemplate::value("Details", "ancillary_details")),
        )
}

fn comments() -> SectionSchema {
    SectionSchema::new("COMMENTS")
        .omit_when_empty()
        .field(FieldSchema::textarea("comments", "Comment(s)"))
        .line(LineTemplate::text("comments"))
}
