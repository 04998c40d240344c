use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const PACKS: &str = r#"[
    { "name": "platform-1-pack", "files": ["approach.mp3", "arrival.mp3"] },
    { "name": "silent", "files": [] }
]"#;

fn annc(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_annc"));
    cmd.current_dir(workdir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn fields_lists_column_headers() {
    let tmp = tempdir().expect("temp dir");
    annc(tmp.path())
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("On Approach").and(predicate::str::contains("Transfer 3")));
}

#[test]
fn fields_lists_pack_keys() {
    let tmp = tempdir().expect("temp dir");
    annc(tmp.path())
        .args(["fields", "packs"])
        .assert()
        .success()
        .stdout(predicate::eq(" 1  name\n 2  files\n"));
}

#[test]
fn check_accepts_conforming_packs() {
    let tmp = tempdir().expect("temp dir");
    let path = tmp.path().join("packs.json");
    fs::write(&path, PACKS).expect("write fixture");

    annc(tmp.path())
        .args(["check", "packs"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document conforms"));
}

#[test]
fn check_rejects_nonconforming_programmes() {
    let tmp = tempdir().expect("temp dir");
    let path = tmp.path().join("programmes.json");
    fs::write(&path, r#"[{ "Route": "42", "Station": "Central" }]"#).expect("write fixture");

    annc(tmp.path())
        .args(["check", "programmes"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 1 programmes documents do not conform"));
}

#[test]
fn check_rejects_unknown_kind() {
    let tmp = tempdir().expect("temp dir");
    annc(tmp.path()).args(["check", "timetables", "x.json"]).assert().failure();
}

#[test]
fn transcode_roundtrips_through_postcard() {
    let tmp = tempdir().expect("temp dir");
    let json = tmp.path().join("packs.json");
    let bin = tmp.path().join("packs.bin");
    let back = tmp.path().join("back.json");
    fs::write(&json, PACKS).expect("write fixture");

    annc(tmp.path()).args(["transcode", "packs"]).arg(&json).arg(&bin).assert().success();
    annc(tmp.path()).args(["transcode", "packs"]).arg(&bin).arg(&back).assert().success();

    let original: serde_json::Value = serde_json::from_str(PACKS).expect("fixture is JSON");
    let restored: serde_json::Value =
        serde_json::from_slice(&fs::read(&back).expect("read output")).expect("output is JSON");
    assert_eq!(original, restored);
}

#[test]
fn config_file_enables_file_logging() {
    let tmp = tempdir().expect("temp dir");
    let logs = tmp.path().join("logs");
    let config = tmp.path().join("annc.toml");
    fs::write(&config, format!("[logging]\nlevel = \"debug\"\ndirectory = {:?}\n", logs))
        .expect("write config");
    let packs = tmp.path().join("packs.json");
    fs::write(&packs, PACKS).expect("write fixture");

    annc(tmp.path()).args(["check", "packs"]).arg(&packs).assert().success();

    let has_log = fs::read_dir(&logs)
        .expect("log directory is created")
        .flatten()
        .any(|entry| entry.path().extension().is_some_and(|ext| ext == "log"));
    assert!(has_log, "a rolling log file should be written");
}

#[test]
fn invalid_level_fails_early() {
    let tmp = tempdir().expect("temp dir");
    annc(tmp.path())
        .arg("fields")
        .env("ANNC__LOGGING__LEVEL", "loud")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level 'loud'"));
}
