use annc_kernel::config::{ConfigError, load_config};
use annc_kernel::domain::config::AppConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("annc.toml");
    fs::write(&path, "[logging]\nlevel = \"debug\"\njson = true\nmax_files = 3\n")?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.max_files, 3);
    assert!(cfg.logging.directory.is_none());
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let tmp = tempdir().expect("temp dir");
    let path = tmp.path().join("absent.toml");

    let err = load_config::<AppConfig>(Some(&path)).expect_err("file is required");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn malformed_values_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("annc.json");
    fs::write(&path, r#"{ "logging": { "max_files": "many" } }"#)?;

    let err = load_config::<AppConfig>(Some(&path)).expect_err("max_files is numeric");
    assert!(err.to_string().contains("Failed to deserialize config"), "got: {err}");
    Ok(())
}
