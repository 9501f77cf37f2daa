use lufa_app::config::{
    CredentialSource, DEFAULT_MODEL_ID, LufaConfig, config_info, load_config_from, migrate,
    save_config_to,
};
use lufa_core::profile::ProfileKind;
use serde_json::json;

fn v0_config() -> serde_json::Value {
    json!({
        "region": "ca-central-1",
        "credentials": { "type": "profile", "profile_name": "lufa" },
        "created_at": "2026-01-10T12:00:00Z"
    })
}

#[test]
fn v0_config_gains_profile_and_model() {
    let migrated = migrate(v0_config(), 0).unwrap();

    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["validation_profile"], "extended");
    assert_eq!(migrated["model_id"], DEFAULT_MODEL_ID);
    assert_eq!(migrated["region"], "ca-central-1");
}

#[test]
fn migration_keeps_existing_values() {
    let mut raw = v0_config();
    raw["validation_profile"] = json!("minimal");

    let migrated = migrate(raw, 0).unwrap();

    assert_eq!(migrated["validation_profile"], "minimal");
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(v0_config(), 99).unwrap_err();

    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn v0_file_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, v0_config().to_string()).unwrap();

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.config_version, 1);
    assert_eq!(config.validation_profile, ProfileKind::Extended);
    assert!(config.output_dir.is_none());
    assert!(config.page_geometry.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = LufaConfig::first_run();
    config.validation_profile = ProfileKind::Minimal;
    config.output_dir = Some(dir.path().join("planes"));

    save_config_to(dir.path(), &config).unwrap();
    let loaded = load_config_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(loaded.validation_profile, ProfileKind::Minimal);
    assert_eq!(loaded.output_dir, config.output_dir);
    assert_eq!(loaded.created_at, config.created_at);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    save_config_to(dir.path(), &LufaConfig::first_run()).unwrap();

    let mode = std::fs::metadata(dir.path().join("config.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn config_info_redacts_access_key() {
    let mut config = LufaConfig::first_run();
    config.credentials = CredentialSource::Inline {
        access_key_id: "AKIAABCDEFGHIJKL7890".to_string(),
        secret_access_key: "secret".to_string(),
        session_token: None,
    };

    let info = config_info(&config);

    assert_eq!(info.credential_type, "inline");
    assert_eq!(info.access_key_hint.as_deref(), Some("AKIA...7890"));
    assert!(!serde_json::to_string(&info).unwrap().contains("secret"));
}

#[test]
fn config_info_reports_profile_name() {
    let mut config = LufaConfig::first_run();
    config.credentials = CredentialSource::Profile {
        profile_name: "lufa".to_string(),
    };

    let info = config_info(&config);

    assert_eq!(info.credential_type, "profile");
    assert_eq!(info.profile_name.as_deref(), Some("lufa"));
    assert!(info.access_key_hint.is_none());
}
