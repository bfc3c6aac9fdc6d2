use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".tumortarget").join("config.json")
}

/// Write a config with a short tick so headless runs finish quickly
fn write_fast_config(dir: &tempfile::TempDir) {
    let config_path = config_file_path(dir);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{ "tick_interval_ms": 10 }"#).unwrap();
}

const BINARY_NAME: &str = "tumortarget";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Sections command lists every section id in order.
fn sections_lists_ids() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("sections")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(
            contains("1  overview")
                .and(contains("clinical-data"))
                .and(contains("ai-engine"))
                .and(contains("7  team")),
        );
}

#[test]
/// Headless JSON mode prints one object per tick with the section's metrics.
fn headless_json_prints_metrics() {
    let tmp = temp_config_dir();
    write_fast_config(&tmp);

    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args([
            "start",
            "--headless",
            "--json",
            "--ticks",
            "2",
            "--seed",
            "7",
            "--section",
            "monitoring",
        ])
        .env("HOME", tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    for (index, line) in lines.iter().enumerate() {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(record["tick"], (index + 1) as u64);
        assert_eq!(record["section"], "monitoring");
        let heart_rate = record["metrics"]["heart_rate"].as_f64().unwrap();
        assert!((40.0..=180.0).contains(&heart_rate));
    }
}

#[test]
/// An unknown section is reported and the deck stays on the overview.
fn headless_unknown_section_warns() {
    let tmp = temp_config_dir();
    write_fast_config(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args([
        "start",
        "--headless",
        "--ticks",
        "1",
        "--section",
        "not-a-real-id",
    ])
    .env("HOME", tmp.path())
    .assert()
    .success()
    .stderr(contains("Unknown section"))
    .stdout(contains("Overview has no live metrics"));
}

#[test]
/// --json only makes sense with --headless.
fn json_requires_headless() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--json"]).assert().failure();
}

#[test]
/// Config init writes the defaults, show prints them.
fn config_init_then_show() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["config", "init"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Config written"));
    assert!(config_path.exists());

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["config", "show"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("\"tick_interval_ms\": 2000"));
}

#[test]
/// Config reset should delete an existing config file.
fn config_reset_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["config", "reset"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Config reset"));

    assert!(!config_path.exists());
}

#[test]
/// A malformed config file is reported instead of silently ignored.
fn start_rejects_invalid_config() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--ticks", "1"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}
