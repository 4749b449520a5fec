use expense_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert_eq!(cfg.export_file_name, "expenses.csv");
    assert!(cfg.ui_color_enabled);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        currency: "EUR".to_string(),
        default_export_dir: Some(dir.path().join("exports")),
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(
        loaded.resolve_export_path(),
        dir.path().join("exports").join("expenses.csv")
    );
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), r#"{ "currency": "INR" }"#).expect("seed config");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, "INR");
    assert_eq!(loaded.export_file_name, "expenses.csv");
    assert!(loaded.ui_color_enabled);
}

#[test]
fn malformed_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), "{ not json").expect("seed config");

    let err = manager.load().expect_err("malformed config must fail");
    assert!(matches!(err, expense_config::ConfigError::Serde(_)));
}
