use synoptic_core::{
    AnswerStore, Condition, FieldSchema, FormSchema, LineTemplate, ListEntry, NumericRange,
    SchemaIssue, SectionSchema,
};

fn nodes_form() -> FormSchema {
    FormSchema {
        id: "test".to_string(),
        name: "Test".to_string(),
        title: "TEST PATHOLOGY REPORT".to_string(),
        standard: "AJCC 8th Edition".to_string(),
        posting_date: "June 2025".to_string(),
        slug: "test".to_string(),
        sections: vec![
            SectionSchema::new("REGIONAL LYMPH NODES")
                .field(FieldSchema::select(
                    "ln_status",
                    "Regional Lymph Node Status",
                    &["Not applicable", "Regional lymph nodes present"],
                ))
                .line(LineTemplate::value("Regional Lymph Node Status", "ln_status"))
                .section(
                    SectionSchema::group()
                        .visible_when(Condition::equals("ln_status", "Regional lymph nodes present"))
                        .field(FieldSchema::select(
                            "ln_tumor_status",
                            "Tumor Status",
                            &["Tumor present", "All nodes negative"],
                        ))
                        .line(LineTemplate::value("Tumor Status", "ln_tumor_status"))
                        .field(
                            FieldSchema::number(
                                "ln_positive",
                                "Number of positive nodes",
                                NumericRange::count(1.0, None),
                            )
                            .visible_when(Condition::equals("ln_tumor_status", "Tumor present")),
                        )
                        .line(LineTemplate::value("Number of positive nodes", "ln_positive")),
                ),
            SectionSchema::new("DISTANT METASTASIS")
                .field(FieldSchema::checkbox("dm_liver", "Liver"))
                .field(
                    FieldSchema::text("dm_liver_detail", "Specify")
                        .visible_when(Condition::checked("dm_liver")),
                )
                .line(LineTemplate::list(
                    "Distant Site(s) Involved",
                    vec![ListEntry::new("dm_liver", "Liver").with_detail("dm_liver_detail")],
                )),
        ],
    }
}

#[test]
fn well_formed_form_validates() {
    assert_eq!(nodes_form().validate(), Ok(()));
}

#[test]
fn fields_are_listed_in_declaration_order() {
    let form = nodes_form();
    let keys: Vec<&str> = form.fields().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(
        keys,
        [
            "ln_status",
            "ln_tumor_status",
            "ln_positive",
            "dm_liver",
            "dm_liver_detail"
        ]
    );
    assert!(form.field("ln_positive").is_some());
    assert!(form.field("nope").is_none());
}

#[test]
fn hidden_cascade_drops_stale_answers() {
    let form = nodes_form();
    let store = AnswerStore::new("test")
        .with("ln_status", "Not applicable")
        .with("ln_tumor_status", "Tumor present")
        .with("ln_positive", 4_i64)
        .with("dm_liver_detail", "segment 4");

    let resolved = form.resolve(&store);
    assert!(resolved.get("ln_status").is_some());
    assert!(resolved.get("ln_tumor_status").is_none());
    assert!(resolved.get("ln_positive").is_none());
    assert!(resolved.get("dm_liver_detail").is_none());
    assert!(!resolved.is_field_visible("ln_positive"));
    assert_eq!(resolved.len(), 1);
}

#[test]
fn visible_cascade_is_admitted() {
    let form = nodes_form();
    let store = AnswerStore::new("test")
        .with("ln_status", "Regional lymph nodes present")
        .with("ln_tumor_status", "Tumor present")
        .with("ln_positive", 4_i64);

    let resolved = form.resolve(&store);
    assert_eq!(resolved.display("ln_positive").as_deref(), Some("4"));
    assert!(resolved.is_field_visible("dm_liver"));
    assert!(!resolved.is_field_visible("dm_liver_detail"));
}

#[test]
fn foreign_store_contributes_nothing() {
    let form = nodes_form();
    let store = AnswerStore::new("kidney").with("ln_status", "Not applicable");
    assert!(form.resolve(&store).is_empty());
}

#[test]
fn duplicate_keys_are_reported() {
    let mut form = nodes_form();
    form.sections[1] = form.sections[1]
        .clone()
        .field(FieldSchema::checkbox("dm_liver", "Liver again"));

    let issues = form.validate().unwrap_err();
    assert!(issues.contains(&SchemaIssue::DuplicateKey {
        key: "dm_liver".to_string()
    }));
}

#[test]
fn line_keys_must_live_in_their_section() {
    let mut form = nodes_form();
    form.sections[1] = form.sections[1]
        .clone()
        .line(LineTemplate::value("Status", "ln_status"));

    let issues = form.validate().unwrap_err();
    assert_eq!(
        issues,
        vec![SchemaIssue::UndeclaredLineKey {
            section: "DISTANT METASTASIS".to_string(),
            key: "ln_status".to_string(),
        }]
    );
}

#[test]
fn rules_may_not_read_ahead() {
    let mut form = nodes_form();
    form.sections[0] = form.sections[0]
        .clone()
        .visible_when(Condition::checked("dm_liver"));

    let issues = form.validate().unwrap_err();
    assert!(issues.contains(&SchemaIssue::ForwardReference {
        owner: "REGIONAL LYMPH NODES".to_string(),
        key: "dm_liver".to_string(),
    }));
}

#[test]
fn report_gate_may_read_its_own_section() {
    let mut form = nodes_form();
    form.sections[1] = form.sections[1]
        .clone()
        .report_when(Condition::checked("dm_liver"));
    assert_eq!(form.validate(), Ok(()));

    form.sections[0] = form.sections[0]
        .clone()
        .report_when(Condition::checked("dm_liver"));
    let issues = form.validate().unwrap_err();
    assert_eq!(
        issues,
        vec![SchemaIssue::ForwardReference {
            owner: "REGIONAL LYMPH NODES".to_string(),
            key: "dm_liver".to_string(),
        }]
    );
}

#[test]
fn rule_values_must_be_options() {
    let mut form = nodes_form();
    form.sections[1] = form.sections[1].clone().field(
        FieldSchema::text("dm_note", "Note")
            .visible_when(Condition::equals("ln_status", "Regional lymph nodes PRESENT")),
    );

    let issues = form.validate().unwrap_err();
    assert!(issues.contains(&SchemaIssue::UnknownOption {
        owner: "dm_note".to_string(),
        key: "ln_status".to_string(),
        value: "Regional lymph nodes PRESENT".to_string(),
    }));
}

#[test]
fn selects_need_options() {
    let mut form = nodes_form();
    form.sections[1] = form.sections[1]
        .clone()
        .field(FieldSchema::select("dm_kind", "Kind", &[]));

    let issues = form.validate().unwrap_err();
    assert!(issues.contains(&SchemaIssue::MissingOptions {
        key: "dm_kind".to_string()
    }));
}

#[test]
fn schema_round_trips_through_json() {
    let form = nodes_form();
    let json = serde_json::to_string(&form).unwrap();
    let back: FormSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(back, form);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "with_detail() only applies to value and list lines")]
fn detail_on_a_template_line_is_refused() {
    let _ = LineTemplate::template("Size: {{ size }}")
        .with_detail(LineTemplate::value("Note", "note"));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "requires() only applies to template lines")]
fn required_keys_on_a_value_line_are_refused() {
    let _ = LineTemplate::value("Size", "size").requires(&["size"]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "with_suffix() only applies to value lines")]
fn suffix_on_a_static_line_is_refused() {
    let _ = LineTemplate::fixed("Size: not reported").with_suffix(" cm");
}
