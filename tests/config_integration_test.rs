use authz_plugin_info::config::ConfigManager;
use authz_plugin_info::plugin::QueryMode;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_file_integration() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("authz-info.toml");

    let config_content = r#"
[base]
console-level = "debug"
log-format = "json"
log-file = "/tmp/authz-info-test.log"

[builder]
query-mode = "sequential"

[extension]
responses-file = "/srv/authz/responses.json"
"#;

    fs::write(&config_path, config_content).expect("Failed to write config file");

    let manager = ConfigManager::load_from_file(config_path).expect("Failed to load config");

    assert_eq!(manager.get_log_level("base", "console-level").unwrap(), Some(log::LevelFilter::Debug));
    assert_eq!(manager.get_value("base", "log-format").unwrap(), "json");
    assert_eq!(manager.get_builder_config().unwrap().query_mode, QueryMode::Sequential);
    assert_eq!(
        manager.get_path("extension", "responses-file"),
        Some(PathBuf::from("/srv/authz/responses.json"))
    );
}

#[test]
fn test_config_section_selection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("authz-info.toml");

    let config_content = r#"
[builder]
query-mode = "concurrent"

[debugging]
query-mode = "sequential"
console-level = "trace"
"#;

    fs::write(&config_path, config_content).expect("Failed to write config file");

    let mut manager = ConfigManager::load_from_file(config_path).expect("Failed to load config");
    assert_eq!(manager.get_builder_config().unwrap().query_mode, QueryMode::Concurrent);

    manager.select_section("debugging".to_string());
    assert_eq!(manager.get_builder_config().unwrap().query_mode, QueryMode::Sequential);
    assert_eq!(manager.get_log_level("base", "console-level").unwrap(), Some(log::LevelFilter::Trace));
}

#[test]
fn test_invalid_query_mode_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("authz-info.toml");
    fs::write(&config_path, "[builder]\nquery-mode = \"eventually\"\n").expect("Failed to write config file");

    let manager = ConfigManager::load_from_file(config_path).expect("Failed to load config");
    let error = manager.get_builder_config().unwrap_err();

    assert!(format!("{:#}", error).contains("eventually"));
}
