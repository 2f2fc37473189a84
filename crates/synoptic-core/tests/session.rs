use synoptic_core::{
    AnswerStore, Condition, CoreError, FieldKind, FieldSchema, FormHost, FormSchema, NumericRange,
    SectionSchema, Session, SessionState, Value, present, report_filename,
};

fn form() -> FormSchema {
    FormSchema {
        id: "test".to_string(),
        name: "Test".to_string(),
        title: "TEST PATHOLOGY REPORT".to_string(),
        standard: "AJCC 8th Edition".to_string(),
        posting_date: "June 2025".to_string(),
        slug: "test".to_string(),
        sections: vec![
            SectionSchema::new("TUMOR")
                .note("Select all that apply.")
                .field(FieldSchema::select(
                    "focality",
                    "Tumor Focality",
                    &["Solitary", "Multiple"],
                ))
                .field(
                    FieldSchema::number("num_tumors", "Number of tumors", NumericRange::count(1.0, Some(5.0)))
                        .with_default(1_i64)
                        .visible_when(Condition::equals("focality", "Multiple")),
                )
                .field(FieldSchema::number(
                    "size_cm",
                    "Greatest dimension (cm)",
                    NumericRange::measurement(),
                ))
                .field(FieldSchema::checkbox("satellitosis", "Satellitosis"))
                .field(FieldSchema::date("procedure_date", "Date of Procedure")),
        ],
    }
}

#[test]
fn field_check_accepts_matching_kinds() {
    let f = form();
    assert!(f.field("focality").unwrap().check(&Value::from("Solitary")).is_ok());
    assert!(f.field("focality").unwrap().check(&Value::from("")).is_ok());
    assert!(f.field("size_cm").unwrap().check(&Value::from(2.35)).is_ok());
    assert!(f.field("satellitosis").unwrap().check(&Value::from(true)).is_ok());
    assert!(
        f.field("procedure_date")
            .unwrap()
            .check(&Value::from(jiff::civil::date(2025, 3, 14)))
            .is_ok()
    );
}

#[test]
fn field_check_rejects_bad_values() {
    let f = form();
    assert!(matches!(
        f.field("focality").unwrap().check(&Value::from("Several")),
        Err(CoreError::InvalidOption { .. })
    ));
    assert!(matches!(
        f.field("size_cm").unwrap().check(&Value::from("big")),
        Err(CoreError::KindMismatch {
            expected: FieldKind::Number,
            ..
        })
    ));

    let err = f
        .field("num_tumors")
        .unwrap()
        .check(&Value::from(6_i64))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: Number of tumors 6 is outside range [1, 5]"
    );
    assert!(f.field("num_tumors").unwrap().check(&Value::from(2.5)).is_err());
    assert!(f.field("size_cm").unwrap().check(&Value::from(-1.0)).is_err());
}

#[test]
fn set_answer_validates_against_schema() {
    let f = form();
    let mut session = Session::new(&f);
    assert_eq!(session.state, SessionState::Editing);

    assert_eq!(session.set_answer(&f, "focality", "Multiple").unwrap(), None);
    assert_eq!(
        session.set_answer(&f, "focality", "Solitary").unwrap(),
        Some(Value::from("Multiple"))
    );
    assert!(matches!(
        session.set_answer(&f, "unknown", "x"),
        Err(CoreError::UnknownField { .. })
    ));
    assert!(session.set_answer(&f, "num_tumors", 9_i64).is_err());
    assert_eq!(session.answers.len(), 1);

    assert_eq!(session.clear_answer("focality"), Some(Value::from("Solitary")));
    assert!(session.answers.is_empty());
}

#[test]
fn date_shaped_answers_fit_text_and_date_fields() {
    let mut f = form();
    f.sections[0] = f.sections[0]
        .clone()
        .field(FieldSchema::text("case_id", "Case ID"));
    let mut session = Session::new(&f);

    assert!(session.set_answer(&f, "case_id", "2025-06-01").is_ok());
    assert_eq!(session.answers.get("case_id"), Some(&Value::from("2025-06-01")));

    let from_json: Value = serde_json::from_str("\"2025-03-14\"").unwrap();
    assert!(session.set_answer(&f, "procedure_date", from_json).is_ok());
    assert!(session.set_answer(&f, "procedure_date", "").is_ok());
    assert!(matches!(
        session.set_answer(&f, "procedure_date", "last Tuesday"),
        Err(CoreError::KindMismatch {
            expected: FieldKind::Date,
            ..
        })
    ));
}

#[test]
fn set_answer_rejects_foreign_schema() {
    let f = form();
    let mut other = form();
    other.id = "other".to_string();

    let mut session = Session::new(&f);
    assert!(matches!(
        session.set_answer(&other, "focality", "Solitary"),
        Err(CoreError::FormMismatch { .. })
    ));
}

#[test]
fn lifecycle_is_one_way_until_new_case() {
    let f = form();
    let mut session = Session::new(&f);
    session.set_answer(&f, "satellitosis", true).unwrap();

    session.mark_report_generated();
    assert_eq!(session.state, SessionState::ReportGenerated);
    assert!(session.generated_at.is_some());

    // Generating again keeps the state and the answers.
    session.mark_report_generated();
    assert_eq!(session.state, SessionState::ReportGenerated);
    assert_eq!(session.answers.len(), 1);

    let old_id = session.id;
    session.start_new_case();
    assert_ne!(session.id, old_id);
    assert_eq!(session.state, SessionState::Editing);
    assert!(session.answers.is_empty());
    assert!(session.generated_at.is_none());
    assert_eq!(session.form_id, "test");
}

#[test]
fn filename_follows_download_convention() {
    let at = jiff::civil::date(2025, 6, 9).at(14, 5, 7, 0);
    assert_eq!(
        report_filename("ampulla_vater", at),
        "ampulla_vater_pathology_report_20250609_140507.txt"
    );
}

/// Answers from a scripted list; records what it was asked.
struct ScriptedHost {
    replies: Vec<(&'static str, Option<Value>)>,
    asked: Vec<(String, Option<Value>)>,
    headings: Vec<(String, usize)>,
    notes: Vec<String>,
}

impl ScriptedHost {
    fn new(replies: Vec<(&'static str, Option<Value>)>) -> Self {
        Self {
            replies,
            asked: Vec::new(),
            headings: Vec::new(),
            notes: Vec::new(),
        }
    }
}

impl FormHost for ScriptedHost {
    fn heading(&mut self, title: &str, depth: usize) {
        self.headings.push((title.to_string(), depth));
    }

    fn note(&mut self, text: &str) {
        self.notes.push(text.to_string());
    }

    fn input(&mut self, field: &FieldSchema, current: Option<&Value>) -> Option<Value> {
        self.asked.push((field.key.clone(), current.cloned()));
        self.replies
            .iter()
            .find(|(key, _)| *key == field.key)
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| current.cloned())
    }
}

#[test]
fn present_reveals_dependents_in_the_same_pass() {
    let f = form();
    let mut store = AnswerStore::new("test");
    let mut host = ScriptedHost::new(vec![("focality", Some(Value::from("Multiple")))]);

    let rejected = present(&f, &mut store, &mut host);
    assert!(rejected.is_empty());
    assert_eq!(host.headings, vec![("TUMOR".to_string(), 0)]);
    assert_eq!(host.notes, vec!["Select all that apply.".to_string()]);

    let asked: Vec<&str> = host.asked.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        asked,
        ["focality", "num_tumors", "size_cm", "satellitosis", "procedure_date"]
    );
    // The default is offered and kept.
    assert_eq!(host.asked[1].1, Some(Value::from(1_i64)));
    assert_eq!(store.get("num_tumors"), Some(&Value::from(1_i64)));
}

#[test]
fn present_skips_hidden_fields_and_collects_rejections() {
    let f = form();
    let mut store = AnswerStore::new("test").with("num_tumors", 3_i64);
    let mut host = ScriptedHost::new(vec![
        ("focality", Some(Value::from("Solitary"))),
        ("size_cm", Some(Value::from("large"))),
        ("satellitosis", None),
    ]);

    let rejected = present(&f, &mut store, &mut host);
    assert_eq!(rejected.len(), 1);
    assert!(matches!(rejected[0], CoreError::KindMismatch { .. }));
    assert!(!host.asked.iter().any(|(k, _)| k == "num_tumors"));

    // Hidden answers are left alone; rejected and cleared ones are absent.
    assert_eq!(store.get("num_tumors"), Some(&Value::from(3_i64)));
    assert!(store.get("size_cm").is_none());
    assert!(store.get("satellitosis").is_none());
}

#[test]
fn present_refuses_foreign_store() {
    let f = form();
    let mut store = AnswerStore::new("kidney");
    let mut host = ScriptedHost::new(Vec::new());
    let rejected = present(&f, &mut store, &mut host);
    assert!(matches!(rejected[0], CoreError::FormMismatch { .. }));
    assert!(host.asked.is_empty());
}
