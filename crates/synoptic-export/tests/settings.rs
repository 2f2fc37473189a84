use synoptic_export::settings::CURRENT_VERSION;
use synoptic_export::{ExportError, ReportSettings, load_settings, save_settings};

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("report-settings.json");

    let mut settings = ReportSettings {
        indent_width: 3,
        ..ReportSettings::default()
    };
    settings.styles.body_font = "Courier New".to_string();
    save_settings(&path, &settings).unwrap();

    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded, settings);
    assert!(!dir.path().join("nested").join("report-settings.json.tmp").exists());
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let stale = ReportSettings {
        config_version: 0,
        ..ReportSettings::default()
    };
    save_settings(&path, &stale).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["config_version"], CURRENT_VERSION);
}

#[test]
fn unversioned_settings_load_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "indent_width": 4 }"#).unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.config_version, CURRENT_VERSION);
    assert_eq!(settings.indent_width, 4);
    assert_eq!(settings.list_separator, ", ");
    assert_eq!(settings.styles, ReportSettings::default().styles);
}

#[test]
fn unreadable_version_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "config_version": "one" }"#).unwrap();

    assert!(matches!(
        load_settings(&path),
        Err(ExportError::InvalidSettings(_))
    ));
}

#[test]
fn newer_settings_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "config_version": 99, "indent_width": 2 }"#).unwrap();

    match load_settings(&path) {
        Err(ExportError::UnsupportedSettingsVersion { found, supported }) => {
            assert_eq!(found, 99);
            assert_eq!(supported, CURRENT_VERSION);
        }
        other => panic!("expected UnsupportedSettingsVersion, got {other:?}"),
    }
}

#[test]
fn non_object_settings_are_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(matches!(
        load_settings(&path),
        Err(ExportError::InvalidSettings(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_settings(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(ExportError::Io(_))));
}
