use std::collections::HashSet;

use synoptic_checklists::error::ChecklistError;
use synoptic_checklists::{all_checklists, get_checklist, require_checklist};
use synoptic_core::{AnswerStore, FieldKind, FormSchema};

#[test]
fn every_checklist_schema_is_well_formed() {
    for checklist in all_checklists() {
        let result = checklist.schema().validate();
        assert_eq!(result, Ok(()), "checklist {} has schema issues", checklist.id());
    }
}

#[test]
fn registry_holds_four_checklists_with_unique_ids_and_slugs() {
    let checklists = all_checklists();
    assert_eq!(checklists.len(), 4);

    let ids: HashSet<&str> = checklists.iter().map(|c| c.id()).collect();
    assert_eq!(
        ids,
        HashSet::from(["hcc", "ampulla_vater", "colorectal", "kidney"])
    );

    let slugs: HashSet<&str> = checklists.iter().map(|c| c.schema().slug.as_str()).collect();
    assert_eq!(slugs.len(), 4);

    for checklist in &checklists {
        assert_eq!(checklist.schema().id, checklist.id());
        assert_eq!(checklist.schema().name, checklist.name());
        assert!(checklist.schema().title.ends_with("PATHOLOGY REPORT"));
    }
}

#[test]
fn lookup_by_id() {
    let kidney = get_checklist("kidney").expect("kidney is registered");
    assert_eq!(kidney.name(), "Kidney");
    assert!(get_checklist("lung").is_none());

    match require_checklist("lung") {
        Err(ChecklistError::UnknownChecklist(id)) => assert_eq!(id, "lung"),
        other => panic!("expected UnknownChecklist, got {:?}", other.map(|c| c.id().to_string())),
    }
}

#[test]
fn field_lookup_rejects_undeclared_keys() {
    let hcc = require_checklist("hcc").unwrap();
    assert_eq!(hcc.field("num_tumors").unwrap().kind, FieldKind::Number);

    let err = hcc.field("no_such_field").unwrap_err();
    match err {
        ChecklistError::UnknownField { checklist_id, key } => {
            assert_eq!(checklist_id, "hcc");
            assert_eq!(key, "no_such_field");
        }
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn radio_groups_default_to_their_first_option() {
    let kidney = require_checklist("kidney").unwrap();
    let size_method = kidney.field("size_method").unwrap();
    assert_eq!(size_method.kind, FieldKind::SingleSelect);
    assert_eq!(
        size_method.default.as_ref().and_then(|v| v.as_text()),
        Some(size_method.options[0].as_str())
    );

    // Plain selects start unanswered.
    assert!(kidney.field("procedure").unwrap().default.is_none());
}

#[test]
fn out_of_range_visible_numbers_are_reported() {
    let kidney = require_checklist("kidney").unwrap();
    let answers = AnswerStore::new("kidney")
        .with("age", 150.0)
        .with("necrosis", "Present")
        .with("necrosis_percentage", 40.0);

    let errors = kidney.validate_answers(&answers);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "age");
    assert_eq!(errors[0].value, 150.0);
}

#[test]
fn hidden_numbers_are_not_validated() {
    let kidney = require_checklist("kidney").unwrap();
    // One tumor is below the multifocal minimum, but the field is hidden.
    let answers = AnswerStore::new("kidney")
        .with("focality", "Unifocal")
        .with("tumor_number", 1.0);
    assert!(kidney.validate_answers(&answers).is_empty());

    let answers = answers.with("focality", "Multifocal");
    let errors = kidney.validate_answers(&answers);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "tumor_number");
}

#[test]
fn hcc_tumor_sections_follow_nodule_count() {
    let hcc = require_checklist("hcc").unwrap();
    let schema = hcc.schema();

    let titles: Vec<&str> = schema.sections.iter().filter_map(|s| s.title.as_deref()).collect();
    for n in 1..=5 {
        let title = format!("TUMOR {n} CHARACTERISTICS");
        assert!(titles.contains(&title.as_str()), "missing {title}");
    }

    let answers = AnswerStore::new("hcc")
        .with("num_tumors", 2.0)
        .with("tumor_id_0", "A")
        .with("tumor_id_1", "B")
        .with("tumor_id_2", "C");
    let resolved = schema.resolve(&answers);
    assert!(resolved.is_field_visible("tumor_id_0"));
    assert!(resolved.is_field_visible("tumor_id_1"));
    assert!(!resolved.is_field_visible("tumor_id_2"));
    assert_eq!(resolved.display("tumor_id_1").as_deref(), Some("B"));
    assert!(resolved.get("tumor_id_2").is_none());
}

#[test]
fn ampulla_margin_details_cascade_from_checkboxes() {
    let ampulla = require_checklist("ampulla_vater").unwrap();
    let answers = AnswerStore::new("ampulla_vater")
        .with("hgd_cannot_determine", false)
        .with("hgd_cannot_detail", "fragmented");
    let resolved = ampulla.schema().resolve(&answers);
    assert!(!resolved.is_field_visible("hgd_cannot_detail"));
}

#[test]
fn schemas_serialize_for_hosts() {
    for checklist in all_checklists() {
        let json = serde_json::to_string(checklist.schema()).unwrap();
        let back: FormSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, checklist.schema());
    }
}
