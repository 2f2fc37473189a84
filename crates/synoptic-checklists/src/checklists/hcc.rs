use std::sync::LazyLock;

use synoptic_core::{
    Condition, FieldSchema, FormSchema, LineTemplate, ListEntry, NumericRange, SectionSchema,
};

use super::{detail, explain, radio};
use crate::Checklist;

/// Hepatocellular carcinoma resection, AJCC-UICC 8th Edition.
/// Up to five tumor nodules are documented individually.
pub struct Hcc;

/// Tumor nodules with their own characteristics section.
pub const MAX_TUMORS: usize = 5;

const HISTOLOGIC_OTHER: &str = "Other histologic type not listed";
const HISTOLOGIC_CANNOT: &str = "Carcinoma, type cannot be determined";
const GRADE_CANNOT: &str = "GX, cannot be assessed";
const SIZE_MEASURED: &str = "Greatest dimension of viable tumor in cm";
const NECROSIS_INCOMPLETE: &str = "Incomplete necrosis (viable tumor present)";
const MARGINS_NEGATIVE: &str = "All margins negative for invasive carcinoma";
const MARGINS_INVOLVED: &str = "Invasive carcinoma present at margin";
const LN_PRESENT: &str = "Regional lymph nodes present";
const LN_TUMOR_PRESENT: &str = "Tumor present in regional lymph node(s)";

const TNM_PREAMBLE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information
available to the pathologist at the time the report is issued. As per the AJCC
(Chapter 1, 8th Ed.) it is the managing physician's responsibility to establish
the final pathologic stage based upon all pertinent information, including but
potentially not limited to this pathology report.
";

const TNM_NOTE: &str = "Reporting of pT, pN, and (when applicable) pM categories is based on information available to the pathologist at the time the report is issued. As per the AJCC (Chapter 1, 8th Ed.) it is the managing physician's responsibility to establish the final pathologic stage based upon all pertinent information, including but potentially not limited to this pathology report.";

impl Checklist for Hcc {
    fn id(&self) -> &str {
        "hcc"
    }

    fn name(&self) -> &str {
        "Hepatocellular Carcinoma"
    }

    fn schema(&self) -> &FormSchema {
        static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
            let mut sections = vec![case_summary(), specimen(), tumor()];
            sections.extend((0..MAX_TUMORS).map(tumor_characteristics));
            sections.extend([
                margins(),
                lymph_nodes(),
                distant_metastasis(),
                pathologic_stage(),
                additional_findings(),
                special_studies(),
                comments(),
            ]);

            FormSchema {
                id: "hcc".to_string(),
                name: "Hepatocellular Carcinoma".to_string(),
                title: "HEPATOCELLULAR CARCINOMA PATHOLOGY REPORT".to_string(),
                standard: "AJCC-UICC 8th Edition".to_string(),
                posting_date: "June 2022".to_string(),
                slug: "hcc".to_string(),
                sections,
            }
        });
        &SCHEMA
    }
}

fn case_summary() -> SectionSchema {
    SectionSchema::new("CASE SUMMARY (HEPATOCELLULAR CARCINOMA)")
        .field(FieldSchema::text("case_id", "Case ID"))
        .field(FieldSchema::text("patient_name", "Patient Name"))
        .field(FieldSchema::select("liver_location", "Liver Location", &["Liver"]))
        .field(FieldSchema::date("date_of_procedure", "Date of Procedure"))
        .field(FieldSchema::text("pathologist", "Pathologist"))
        .line(LineTemplate::value("Case ID", "case_id"))
        .line(LineTemplate::value("Patient Name", "patient_name"))
        .line(LineTemplate::value("Date of Procedure", "date_of_procedure"))
        .line(LineTemplate::value("Pathologist", "pathologist"))
        .line(LineTemplate::value("Location", "liver_location"))
}

fn specimen() -> SectionSchema {
    SectionSchema::new("SPECIMEN")
        .field(FieldSchema::checkbox("wedge_resection", "Wedge resection"))
        .field(FieldSchema::checkbox(
            "partial_major",
            "Partial hepatectomy, major (3 segments or more)",
        ))
        .field(FieldSchema::checkbox(
            "partial_minor",
            "Partial hepatectomy, minor (less than 3 segments)",
        ))
        .field(FieldSchema::checkbox(
            "partial_nos",
            "Partial hepatectomy (not otherwise specified)",
        ))
        .field(FieldSchema::checkbox("total_hepatectomy", "Total hepatectomy"))
        .field(FieldSchema::checkbox("procedure_other", "Other (specify)"))
        .field(detail(
            "procedure_other_specify",
            "Specify other procedure",
            "procedure_other",
        ))
        .field(FieldSchema::checkbox("procedure_not_specified", "Not specified"))
        .line(LineTemplate::fixed("Procedure(s):"))
        .section(SectionSchema::group().line(LineTemplate::bullets(vec![
            ListEntry::new("wedge_resection", "Wedge resection"),
            ListEntry::new("partial_major", "Partial hepatectomy, major (3 segments or more)"),
            ListEntry::new("partial_minor", "Partial hepatectomy, minor (less than 3 segments)"),
            ListEntry::new("partial_nos", "Partial hepatectomy (not otherwise specified)"),
            ListEntry::new("total_hepatectomy", "Total hepatectomy"),
            ListEntry::new("procedure_other", "Other").with_labeled_detail("procedure_other_specify"),
            ListEntry::new("procedure_not_specified", "Not specified"),
        ])))
}

fn tumor() -> SectionSchema {
    SectionSchema::new("TUMOR")
        .field(FieldSchema::select(
            "histologic_type",
            "Histologic Type",
            &[
                "Hepatocellular carcinoma",
                "Hepatocellular carcinoma, fibrolamellar",
                "Hepatocellular carcinoma, scirrhous",
                "Hepatocellular carcinoma, clear cell type",
                HISTOLOGIC_OTHER,
                HISTOLOGIC_CANNOT,
            ],
        ))
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
                .with_detail(LineTemplate::value("Specified type", "histologic_other"))
                .with_detail(LineTemplate::value("Explanation", "histologic_cannot")),
        )
        .field(FieldSchema::textarea("histologic_comment", "Histologic Type Comment"))
        .line(LineTemplate::value("Histologic Type Comment", "histologic_comment"))
        .note("For multiple tumors, select the worst grade.")
        .field(FieldSchema::select(
            "grade",
            "Histologic Grade",
            &[
                "G1, well differentiated",
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
        .field(explain("grade_not_applicable", "Explain", "grade", "Not applicable"))
        .line(
            LineTemplate::value("Histologic Grade", "grade")
                .with_detail(LineTemplate::value("Specified grade", "grade_other"))
                .with_detail(LineTemplate::value("Explanation", "grade_cannot")),
        )
        .field(FieldSchema::select(
            "focality",
            "Tumor Focality",
            &["Solitary", "Multiple", "Cannot be determined"],
        ))
        .field(explain(
            "focality_multiple",
            "Describe multiple tumors",
            "focality",
            "Multiple",
        ))
        .field(explain(
            "focality_cannot",
            "Explain",
            "focality",
            "Cannot be determined",
        ))
        .line(
            LineTemplate::value("Tumor Focality", "focality")
                .with_detail(LineTemplate::value("Details", "focality_multiple"))
                .with_detail(LineTemplate::value("Explanation", "focality_cannot")),
        )
        .note("For multiple tumors, repeat this section for up to 5 largest tumor nodules.")
        .field(
            FieldSchema::number(
                "num_tumors",
                "Number of tumor nodules to document (max 5)",
                NumericRange::count(1.0, Some(MAX_TUMORS as f64)),
            )
            .with_default(1_i64),
        )
}

/// `TUMOR n CHARACTERISTICS`; keys carry the zero-based nodule index.
fn tumor_characteristics(index: usize) -> SectionSchema {
    let n = index + 1;
    let k = |name: &str| format!("{name}_{index}");

    let mut section = SectionSchema::new(&format!("TUMOR {n} CHARACTERISTICS"));
    if index > 0 {
        section = section.visible_when(Condition::at_least("num_tumors", n as f64));
    }

    let sites = [
        ("right_lobe", "Right lobe"),
        ("left_lobe", "Left lobe"),
        ("caudate_lobe", "Caudate lobe"),
        ("quadrate_lobe", "Quadrate lobe"),
    ];
    section = section.field(FieldSchema::text(
        &k("tumor_id"),
        &format!("Tumor {n} Identification"),
    ));
    for (key, label) in sites {
        section = section
            .field(FieldSchema::checkbox(&k(key), label))
            .field(detail(
                &k(&format!("{key}_detail")),
                &format!("{label} details"),
                &k(key),
            ));
    }
    let mut site_entries: Vec<ListEntry> = sites
        .iter()
        .map(|&(key, label)| ListEntry::new(&k(key), label).with_detail(&k(&format!("{key}_detail"))))
        .collect();
    site_entries.push(
        ListEntry::new(&k("segmental_location"), "Segmental location")
            .with_labeled_detail(&k("segmental_detail")),
    );
    site_entries.push(ListEntry::new(&k("site_other"), "Other").with_labeled_detail(&k("site_other_detail")));

    let size_method = k("size_method");
    let necrosis_method = k("necrosis_method");

    section
        .field(FieldSchema::checkbox(&k("segmental_location"), "Segmental location (specify)"))
        .field(detail(
            &k("segmental_detail"),
            "Segmental location details",
            &k("segmental_location"),
        ))
        .field(FieldSchema::checkbox(&k("site_other"), "Other (specify)"))
        .field(detail(&k("site_other_detail"), "Other site details", &k("site_other")))
        .line(LineTemplate::value("Tumor Identification", &k("tumor_id")))
        .line(LineTemplate::list("Tumor Site", site_entries))
        // Size
        .field(radio(
            &size_method,
            &format!("Size measurement method for Tumor {n}"),
            &[SIZE_MEASURED, "Cannot be determined"],
        ))
        .field(
            FieldSchema::number(&k("size_cm"), "Greatest dimension (cm)", NumericRange::measurement())
                .visible_when(Condition::equals(&size_method, SIZE_MEASURED)),
        )
        .field(
            FieldSchema::checkbox(&k("additional_dims"), "Additional dimensions")
                .visible_when(Condition::equals(&size_method, SIZE_MEASURED)),
        )
        .field(
            FieldSchema::number(&k("size_x"), "Width (cm)", NumericRange::measurement())
                .visible_when(Condition::checked(&k("additional_dims"))),
        )
        .field(
            FieldSchema::number(&k("size_y"), "Height (cm)", NumericRange::measurement())
                .visible_when(Condition::checked(&k("additional_dims"))),
        )
        .field(
            FieldSchema::number(
                &k("gross_size"),
                "Greatest dimension on gross exam (cm)",
                NumericRange::measurement(),
            )
            .visible_when(Condition::equals(&size_method, SIZE_MEASURED)),
        )
        .field(explain(
            &k("size_explain"),
            "Explain why size cannot be determined",
            &size_method,
            "Cannot be determined",
        ))
        .line(
            LineTemplate::template(&format!(
                "Tumor Size: {{{{ size_cm_{index} }}}} cm\
                 {{% if size_x_{index} is defined and size_y_{index} is defined %}} \
                 x {{{{ size_x_{index} }}}} cm x {{{{ size_y_{index} }}}} cm{{% endif %}}"
            ))
            .requires(&[k("size_cm").as_str()])
            .optional(&[k("size_x").as_str(), k("size_y").as_str()]),
        )
        .line(LineTemplate::value("Greatest Dimension on Gross Exam", &k("gross_size")).with_suffix(" cm"))
        .line(LineTemplate::when(
            Condition::equals(&size_method, "Cannot be determined"),
            LineTemplate::template(&format!(
                "Tumor Size: Cannot be determined\
                 {{% if size_explain_{index} is defined %}} ({{{{ size_explain_{index} }}}}){{% endif %}}"
            ))
            .optional(&[k("size_explain").as_str()]),
        ))
        // Treatment effect
        .field(FieldSchema::select(
            &k("treatment_effect"),
            &format!("Treatment Effect for Tumor {n}"),
            &[
                "No known presurgical therapy",
                "Complete necrosis (no viable tumor)",
                NECROSIS_INCOMPLETE,
                "No necrosis",
                "Cannot be determined",
            ],
        ))
        .field(
            radio(
                &necrosis_method,
                "Necrosis extent method",
                &["Specify percentage", "Other", "Cannot be determined"],
            )
            .visible_when(Condition::equals(&k("treatment_effect"), NECROSIS_INCOMPLETE)),
        )
        .field(
            FieldSchema::number(
                &k("necrosis_percent"),
                "Necrosis percentage",
                NumericRange::count(0.0, Some(100.0)),
            )
            .visible_when(Condition::equals(&necrosis_method, "Specify percentage")),
        )
        .field(explain(&k("necrosis_other"), "Specify other", &necrosis_method, "Other"))
        .field(explain(
            &k("necrosis_cannot"),
            "Explain",
            &necrosis_method,
            "Cannot be determined",
        ))
        .field(explain(
            &k("treatment_explain"),
            "Explain",
            &k("treatment_effect"),
            "Cannot be determined",
        ))
        .line(
            LineTemplate::value("Treatment Effect", &k("treatment_effect"))
                .with_detail(
                    LineTemplate::value("Extent of Tumor Necrosis", &k("necrosis_percent"))
                        .with_suffix("%"),
                )
                .with_detail(LineTemplate::value("Extent of Tumor Necrosis", &k("necrosis_other"))),
        )
        .field(FieldSchema::select(
            &k("satellitosis"),
            &format!("Satellitosis for Tumor {n}"),
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .line(LineTemplate::value("Satellitosis", &k("satellitosis")))
        // Extent
        .field(FieldSchema::checkbox(&k("confined_liver"), "Confined to liver"))
        .field(FieldSchema::checkbox(
            &k("major_portal"),
            "Involves a major branch of the portal vein",
        ))
        .field(FieldSchema::checkbox(&k("hepatic_vein"), "Involves hepatic vein(s)"))
        .field(FieldSchema::checkbox(
            &k("visceral_peritoneum"),
            "Perforates visceral peritoneum",
        ))
        .field(FieldSchema::checkbox(&k("gallbladder"), "Directly invades gallbladder"))
        .field(FieldSchema::checkbox(&k("diaphragm"), "Directly invades diaphragm"))
        .field(FieldSchema::checkbox(
            &k("adjacent_organs"),
            "Directly invades other adjacent organ(s)",
        ))
        .field(detail(
            &k("adjacent_specify"),
            "Specify adjacent organs",
            &k("adjacent_organs"),
        ))
        .field(FieldSchema::checkbox(&k("extent_cannot"), "Cannot be determined"))
        .field(detail(&k("extent_explain"), "Explain", &k("extent_cannot")))
        .field(FieldSchema::checkbox(&k("no_primary"), "No evidence of primary tumor"))
        .line(LineTemplate::list(
            "Tumor Extent",
            vec![
                ListEntry::new(&k("confined_liver"), "Confined to liver"),
                ListEntry::new(&k("major_portal"), "Involves a major branch of the portal vein"),
                ListEntry::new(&k("hepatic_vein"), "Involves hepatic vein(s)"),
                ListEntry::new(&k("visceral_peritoneum"), "Perforates visceral peritoneum"),
                ListEntry::new(&k("gallbladder"), "Directly invades gallbladder"),
                ListEntry::new(&k("diaphragm"), "Directly invades diaphragm"),
                ListEntry::new(&k("adjacent_organs"), "Directly invades other adjacent organ(s)")
                    .with_labeled_detail(&k("adjacent_specify")),
                ListEntry::new(&k("no_primary"), "No evidence of primary tumor"),
            ],
        ))
        // Vascular invasion
        .field(FieldSchema::checkbox(&k("vascular_not_identified"), "Not identified"))
        .field(FieldSchema::checkbox(&k("vascular_small"), "Small vessel"))
        .field(detail(
            &k("vascular_small_detail"),
            "Small vessel details",
            &k("vascular_small"),
        ))
        .field(FieldSchema::checkbox(
            &k("vascular_large"),
            "Large vessel (major branch of hepatic vein or portal vein)",
        ))
        .field(detail(
            &k("vascular_large_detail"),
            "Large vessel details",
            &k("vascular_large"),
        ))
        .field(FieldSchema::checkbox(
            &k("vascular_present_nos"),
            "Present (not otherwise specified)",
        ))
        .field(detail(
            &k("vascular_nos_detail"),
            "Present NOS details",
            &k("vascular_present_nos"),
        ))
        .field(FieldSchema::checkbox(&k("vascular_cannot"), "Cannot be determined"))
        .field(detail(
            &k("vascular_cannot_detail"),
            "Vascular invasion cannot be determined - explain",
            &k("vascular_cannot"),
        ))
        .line(LineTemplate::list(
            "Vascular Invasion",
            vec![
                ListEntry::new(&k("vascular_not_identified"), "Not identified"),
                ListEntry::new(&k("vascular_small"), "Small vessel")
                    .with_detail(&k("vascular_small_detail")),
                ListEntry::new(&k("vascular_large"), "Large vessel")
                    .with_detail(&k("vascular_large_detail"))
                    .or_plain("Large vessel (major branch of hepatic vein or portal vein)"),
                ListEntry::new(&k("vascular_present_nos"), "Present (not otherwise specified)"),
            ],
        ))
        .field(FieldSchema::select(
            &k("pni"),
            &format!("Perineural Invasion for Tumor {n}"),
            &["Not identified", "Present", "Cannot be determined"],
        ))
        .field(explain(
            &k("pni_detail"),
            "Perineural invasion details",
            &k("pni"),
            "Present",
        ))
        .field(explain(&k("pni_explain"), "Explain", &k("pni"), "Cannot be determined"))
        .line(
            LineTemplate::value("Perineural Invasion", &k("pni"))
                .with_detail(LineTemplate::value("Details", &k("pni_detail"))),
        )
        .field(FieldSchema::textarea(
            &k("tumor_comment"),
            &format!("Tumor {n} Comment"),
        ))
        .line(LineTemplate::value("Tumor Comment", &k("tumor_comment")))
}

fn margins() -> SectionSchema {
    let closest = SectionSchema::group()
        .visible_when(Condition::equals("margin_status", MARGINS_NEGATIVE))
        .field(FieldSchema::checkbox("parenchymal_closest", "Parenchymal"))
        .field(detail(
            "parenchymal_detail",
            "Parenchymal details",
            "parenchymal_closest",
        ))
        .field(FieldSchema::checkbox("margin_other_closest", "Other (specify)"))
        .field(detail(
            "margin_other_detail",
            "Other margin details",
            "margin_other_closest",
        ))
        .field(FieldSchema::checkbox("margin_closest_cannot", "Cannot be determined"))
        .field(detail("margin_closest_explain", "Explain", "margin_closest_cannot"))
        .line(LineTemplate::list(
            "Closest Margin(s)",
            vec![
                ListEntry::new("parenchymal_closest", "Parenchymal").with_detail("parenchymal_detail"),
                ListEntry::new("margin_other_closest", "Other").with_detail("margin_other_detail"),
            ],
        ))
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
            LineTemplate::value("Distance to Closest Margin", "distance_cm").with_suffix(" cm"),
            LineTemplate::value("Distance to Closest Margin", "distance_mm").with_suffix(" mm"),
            LineTemplate::when(
                Condition::one_of("distance_method", &["Greater than 1 cm", "Greater than 10 mm"]),
                LineTemplate::value("Distance to Closest Margin", "distance_method"),
            ),
        ]));

    let involved = SectionSchema::group()
        .visible_when(Condition::equals("margin_status", MARGINS_INVOLVED))
        .field(FieldSchema::checkbox("parenchymal_involved", "Parenchymal"))
        .field(detail(
            "parenchymal_involved_detail",
            "Parenchymal involved details",
            "parenchymal_involved",
        ))
        .field(FieldSchema::checkbox("margin_involved_other", "Other (specify)"))
        .field(detail(
            "margin_involved_other_detail",
            "Other involved margin details",
            "margin_involved_other",
        ))
        .field(FieldSchema::checkbox("margin_involved_cannot", "Cannot be determined"))
        .field(detail("margin_involved_explain", "Explain", "margin_involved_cannot"))
        .line(LineTemplate::list(
            "Involved Margin(s)",
            vec![
                ListEntry::new("parenchymal_involved", "Parenchymal")
                    .with_detail("parenchymal_involved_detail"),
                ListEntry::new("margin_involved_other", "Other")
                    .with_detail("margin_involved_other_detail"),
            ],
        ));

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
        .line(LineTemplate::value("Margin Status", "margin_status"))
        .section(closest)
        .section(involved)
        .field(explain("margin_other_specify", "Specify other", "margin_status", "Other"))
        .field(explain(
            "margin_cannot_explain",
            "Explain",
            "margin_status",
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
        .field(explain("ln_other_specify", "Specify other", "ln_status", "Other"))
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
            ],
        ))
}

fn pathologic_stage() -> SectionSchema {
    SectionSchema::new("PATHOLOGIC STAGE CLASSIFICATION (pTNM, AJCC 8th Edition)")
        .preamble(TNM_PREAMBLE)
        .note(TNM_NOTE)
        .field(FieldSchema::checkbox("tnm_not_applicable", "Not applicable"))
        .field(detail(
            "tnm_not_applicable_detail",
            "Not applicable details",
            "tnm_not_applicable",
        ))
        .field(FieldSchema::checkbox("tnm_m", "m (multiple primary tumors)"))
        .field(FieldSchema::checkbox("tnm_r", "r (recurrent)"))
        .field(FieldSchema::checkbox("tnm_y", "y (post-treatment)"))
        .line(LineTemplate::list(
            "TNM Descriptors",
            vec![
                ListEntry::new("tnm_m", "m (multiple primary tumors)"),
                ListEntry::new("tnm_r", "r (recurrent)"),
                ListEntry::new("tnm_y", "y (post-treatment)"),
            ],
        ))
        .field(FieldSchema::select(
            "pt_category",
            "pT Category",
            &[
                "pT not assigned (cannot be determined based on available pathological information)",
                "pT0: No evidence of primary tumor",
                "pT1a: Solitary tumor less than or equal to 2 cm",
                "pT1b: Solitary tumor greater than 2 cm without vascular invasion",
                "pT1 (subcategory cannot be determined)",
                "pT2: Solitary tumor greater than 2 cm with vascular invasion, or multiple tumors, none greater than 5 cm",
                "pT3: Multiple tumors, at least one of which is greater than 5 cm",
                "pT4: Single tumor or multiple tumors of any size involving a major branch of the portal vein or hepatic vein, or tumor(s) with direct invasion of adjacent organs other than the gallbladder or with perforation of visceral peritoneum",
            ],
        ))
        .line(LineTemplate::value("pT", "pt_category"))
        .field(FieldSchema::select(
            "pn_category",
            "pN Category",
            &[
                "pN not assigned (no nodes submitted or found)",
                "pN not assigned (cannot be determined based on available pathological information)",
                "pN0: No regional lymph node metastasis",
                "pN1: Regional lymph node metastasis",
            ],
        ))
        .line(LineTemplate::value("pN", "pn_category"))
        .field(FieldSchema::select(
            "pm_category",
            "pM Category",
            &[
                "Not applicable - pM cannot be determined from the submitted specimen(s)",
                "pM1: Distant metastasis",
            ],
        ))
        .line(LineTemplate::value("pM", "pm_category"))
}

fn additional_findings() -> SectionSchema {
    SectionSchema::new("ADDITIONAL FINDINGS")
        .field(FieldSchema::checkbox("additional_none", "None identified"))
        .field(FieldSchema::checkbox("additional_fibrosis", "Fibrosis"))
        .field(detail(
            "fibrosis_detail",
            "Specify extent, providing name of the scheme and assessment scale used",
            "additional_fibrosis",
        ))
        .field(FieldSchema::checkbox("additional_cirrhosis", "Cirrhosis"))
        .field(FieldSchema::checkbox("additional_lgd_nodule", "Low-grade dysplastic nodule"))
        .field(FieldSchema::checkbox("additional_hgd_nodule", "High-grade dysplastic nodule"))
        .field(FieldSchema::checkbox("additional_steatosis", "Steatosis"))
        .field(FieldSchema::checkbox("additional_steatohepatitis", "Steatohepatitis"))
        .field(FieldSchema::checkbox("additional_iron", "Iron overload"))
        .field(FieldSchema::checkbox("additional_hepatitis", "Chronic hepatitis"))
        .field(detail("hepatitis_etiology", "Specify etiology", "additional_hepatitis"))
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
                ListEntry::new("additional_fibrosis", "Fibrosis").with_detail("fibrosis_detail"),
                ListEntry::new("additional_cirrhosis", "Cirrhosis"),
                ListEntry::new("additional_lgd_nodule", "Low-grade dysplastic nodule"),
                ListEntry::new("additional_hgd_nodule", "High-grade dysplastic nodule"),
                ListEntry::new("additional_steatosis", "Steatosis"),
                ListEntry::new("additional_steatohepatitis", "Steatohepatitis"),
                ListEntry::new("additional_iron", "Iron overload"),
                ListEntry::new("additional_hepatitis", "Chronic hepatitis")
                    .with_detail("hepatitis_etiology"),
                ListEntry::new("additional_other", "Other").with_detail("additional_other_detail"),
            ],
        ))
}

fn special_studies() -> SectionSchema {
    SectionSchema::new("SPECIAL STUDIES")
        .field(FieldSchema::textarea("ancillary_studies", "Ancillary Studies (specify)"))
        .line(LineTemplate::value("Ancillary Studies", "ancillary_studies"))
}

fn comments() -> SectionSchema {
    SectionSchema::new("COMMENTS")
        .omit_when_empty()
        .field(FieldSchema::textarea("comments", "Comment(s)"))
        .line(LineTemplate::text("comments"))
}
