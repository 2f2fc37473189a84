use synoptic_core::{AnswerStore, Condition, Value, VisibilityRule, is_visible};

fn store() -> AnswerStore {
    AnswerStore::new("test")
        .with("histologic_type", "Mixed neuroendocrine-non-neuroendocrine neoplasm (MiNEN)")
        .with("ln_status", "Regional lymph nodes present")
        .with("num_tumors", 3_i64)
        .with("vascular_small", true)
        .with("vascular_large", false)
        .with("blank", "   ")
}

#[test]
fn empty_rule_is_always_visible() {
    assert!(is_visible(&VisibilityRule::always(), &AnswerStore::new("test")));
}

#[test]
fn equals_matches_exact_text_only() {
    let s = store();
    assert!(Condition::equals("ln_status", "Regional lymph nodes present").evaluate(&s));
    assert!(!Condition::equals("ln_status", "Regional lymph nodes present ").evaluate(&s));
    assert!(!Condition::equals("ln_status", "No lymph nodes submitted or found").evaluate(&s));
}

#[test]
fn one_of_and_contains() {
    let s = store();
    assert!(
        Condition::one_of("ln_status", &["Other", "Regional lymph nodes present"]).evaluate(&s)
    );
    assert!(Condition::contains("histologic_type", "MiNEN").evaluate(&s));
    assert!(!Condition::contains("histologic_type", "G4").evaluate(&s));
}

#[test]
fn checked_requires_true() {
    let s = store();
    assert!(Condition::checked("vascular_small").evaluate(&s));
    assert!(!Condition::checked("vascular_large").evaluate(&s));
}

#[test]
fn at_least_compares_numbers() {
    let s = store();
    assert!(Condition::at_least("num_tumors", 2.0).evaluate(&s));
    assert!(Condition::at_least("num_tumors", 3.0).evaluate(&s));
    assert!(!Condition::at_least("num_tumors", 4.0).evaluate(&s));
}

#[test]
fn absent_or_blank_keys_are_never_visible() {
    let s = store();
    assert!(!Condition::answered("missing").evaluate(&s));
    assert!(!Condition::answered("blank").evaluate(&s));
    assert!(!Condition::equals("missing", "x").evaluate(&s));
    assert!(!Condition::at_least("missing", 0.0).evaluate(&s));
}

#[test]
fn rule_is_conjunction() {
    let s = store();
    let rule = VisibilityRule::when(Condition::checked("vascular_small"))
        .and(Condition::at_least("num_tumors", 2.0));
    assert!(rule.is_satisfied(&s));

    let rule = rule.and(Condition::checked("vascular_large"));
    assert!(!rule.is_satisfied(&s));
}

#[test]
fn value_answered_semantics() {
    assert!(!Value::from("").is_answered());
    assert!(!Value::from(" \n").is_answered());
    assert!(!Value::from(false).is_answered());
    assert!(Value::from(true).is_answered());
    assert!(Value::from(0_i64).is_answered());
}

#[test]
fn value_display() {
    assert_eq!(Value::from(3_i64).to_string(), "3");
    assert_eq!(Value::from(3.5).to_string(), "3.5");
    assert_eq!(Value::from("  Solitary ").to_string(), "Solitary");
    assert_eq!(
        Value::from(jiff::civil::date(2025, 6, 1)).to_string(),
        "2025-06-01"
    );
}

#[test]
fn store_serializes_as_plain_map() {
    let s = AnswerStore::new("hcc")
        .with("case_id", "S25-001")
        .with("num_tumors", 2_i64)
        .with("wedge_resection", true);
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["form_id"], "hcc");
    assert_eq!(json["values"]["case_id"], "S25-001");
    assert_eq!(json["values"]["num_tumors"], 2.0);
    assert_eq!(json["values"]["wedge_resection"], true);

    let back: AnswerStore = serde_json::from_value(json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn date_shaped_text_survives_a_json_round_trip() {
    let parsed: Value = serde_json::from_str("\"2025-06-01\"").unwrap();
    assert_eq!(parsed, Value::from("2025-06-01"));

    let s = AnswerStore::new("hcc").with("case_id", "2025-06-01");
    let json = serde_json::to_string(&s).unwrap();
    let back: AnswerStore = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn date_answers_read_back_from_text() {
    let date = jiff::civil::date(2025, 6, 1);
    let s = AnswerStore::new("hcc").with("procedure_date", date);
    let back: AnswerStore = serde_json::from_value(serde_json::to_value(&s).unwrap()).unwrap();
    assert_eq!(back.get("procedure_date").and_then(Value::as_date), Some(date));
    assert_eq!(back.get("procedure_date").unwrap().to_string(), "2025-06-01");
    assert_eq!(Value::from("June 1st").as_date(), None);
}
