use jiff::civil::date;

use synoptic_core::{
    AnswerStore, Condition, FieldSchema, FormSchema, LineTemplate, ListEntry, NumericRange,
    SectionSchema,
};
use synoptic_export::assemble_report;

fn form(lines: Vec<LineTemplate>) -> FormSchema {
    let mut section = SectionSchema::new("TUMOR")
        .field(FieldSchema::select(
            "method",
            "Method",
            &["Exact", "At least", "Cannot be determined"],
        ))
        .field(
            FieldSchema::number("size", "Size", NumericRange::measurement())
                .visible_when(Condition::equals("method", "Exact")),
        )
        .field(FieldSchema::checkbox("left", "Left"))
        .field(FieldSchema::checkbox("right", "Right"))
        .field(FieldSchema::text("right_detail", "Right detail"))
        .field(FieldSchema::textarea("note", "Note"));
    for line in lines {
        section = section.line(line);
    }
    FormSchema {
        id: "test".to_string(),
        name: "Test".to_string(),
        title: "TEST PATHOLOGY REPORT".to_string(),
        standard: "AJCC 8th Edition".to_string(),
        posting_date: "June 2025".to_string(),
        slug: "test".to_string(),
        sections: vec![section],
    }
}

fn body(schema: &FormSchema, store: &AnswerStore) -> Vec<String> {
    let report = assemble_report(schema, store, date(2025, 1, 2));
    report
        .lines()
        .skip_while(|l| *l != "TUMOR")
        .skip(1)
        .take_while(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn first_of_takes_the_first_alternative_that_emits() {
    let schema = form(vec![LineTemplate::first_of(vec![
        LineTemplate::value("Size", "size").with_suffix(" cm"),
        LineTemplate::when(
            Condition::equals("method", "Cannot be determined"),
            LineTemplate::fixed("Size: Cannot be determined"),
        ),
        LineTemplate::fixed("Size: not reported"),
    ])]);

    let store = AnswerStore::new("test").with("method", "Exact").with("size", 2.5);
    assert_eq!(body(&schema, &store), ["Size: 2.5 cm"]);

    let store = AnswerStore::new("test")
        .with("method", "Cannot be determined")
        .with("size", 2.5);
    assert_eq!(body(&schema, &store), ["Size: Cannot be determined"]);

    assert_eq!(body(&schema, &AnswerStore::new("test")), ["Size: not reported"]);
}

#[test]
fn broken_templates_are_omitted() {
    let schema = form(vec![
        LineTemplate::template("Size: {{ size | no_such_filter }}").requires(&["size"]),
        LineTemplate::template("{% if size is defined %}{% endif %}").optional(&["size"]),
        LineTemplate::value("Method", "method"),
    ]);
    let store = AnswerStore::new("test").with("method", "Exact").with("size", 1.0);
    assert_eq!(body(&schema, &store), ["Method: Exact"]);
}

#[test]
fn template_waits_for_required_keys() {
    let schema = form(vec![
        LineTemplate::template("Tumor Size: {{ size }} cm ({{ method }})")
            .requires(&["size", "method"]),
    ]);
    assert!(body(&schema, &AnswerStore::new("test").with("method", "Exact")).is_empty());

    let store = AnswerStore::new("test").with("method", "Exact").with("size", 3.0);
    assert_eq!(body(&schema, &store), ["Tumor Size: 3 cm (Exact)"]);
}

#[test]
fn lists_bullets_and_details() {
    let entries = vec![
        ListEntry::new("left", "Left"),
        ListEntry::new("right", "Right").with_detail("right_detail"),
    ];
    let schema = form(vec![
        LineTemplate::list("Laterality", entries.clone())
            .with_detail(LineTemplate::value("Note", "note")),
        LineTemplate::bullets(entries),
    ]);

    let store = AnswerStore::new("test")
        .with("left", true)
        .with("right", true)
        .with("right_detail", "upper pole")
        .with("note", "bilateral");
    assert_eq!(
        body(&schema, &store),
        [
            "Laterality: Left, Right (upper pole)",
            "  Note: bilateral",
            "- Left",
            "- Right (upper pole)",
        ]
    );

    // A detail never prints without its parent line.
    let store = AnswerStore::new("test").with("note", "bilateral");
    assert!(body(&schema, &store).is_empty());
}

#[test]
fn titled_groups_print_only_when_they_emit() {
    let mut schema = form(Vec::new());
    schema.sections[0] = schema.sections[0].clone().section(
        SectionSchema::new("Additional dimensions")
            .visible_when(Condition::equals("method", "Exact"))
            .line(LineTemplate::value("Size", "size")),
    );

    let store = AnswerStore::new("test").with("method", "Exact");
    assert!(body(&schema, &store).is_empty());

    let store = store.with("size", 4.0);
    assert_eq!(body(&schema, &store), ["Additional dimensions", "  Size: 4"]);
}
