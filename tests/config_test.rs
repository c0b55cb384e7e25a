//! Integration tests for Settings loading from an explicit config file.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rscookbook::config::Settings;
use rscookbook::CookbookError;

#[test]
fn given_config_file_when_load_then_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rscookbook.toml");
    fs::write(
        &path,
        r#"
separator = " | "
sleep_millis = 10
sample_dir = "/srv/samples"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert_eq!(settings.separator, " | ");
    assert_eq!(settings.sleep_millis, 10);
    assert_eq!(settings.sample_dir, PathBuf::from("/srv/samples"));
    // untouched keys keep their defaults
    assert_eq!(settings.null_text, "null");
    assert_eq!(settings.rule_width, 70);
}

#[test]
fn given_missing_explicit_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load(Some(dir.path().join("absent.toml").as_path()));
    assert!(matches!(result, Err(CookbookError::Config { .. })));
}

#[test]
fn given_settings_when_to_toml_then_round_trips() {
    let settings = Settings::default();
    let rendered = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, settings);
}
