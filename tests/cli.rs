use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const CONFIG: &str = r#"{
    "common_numbers": ["123"],
    "special_chars": ["!"],
    "numbers_range": [0, 5],
    "years_range": [1990, 1992],
    "leet_map": {"o": ["0"], "e": ["3"]},
    "passwd_patterns": ["{name}{pet}{number}", "{name}{symbol}{number}"]
}"#;

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, CONFIG).unwrap();
    path
}

fn wind(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wind").unwrap();
    cmd.current_dir(dir).arg("--config").arg(write_config(dir));
    cmd
}

#[test]
fn writes_sorted_wordlist_to_default_file() {
    let tmp = tempdir().unwrap();

    wind(tmp.path())
        .args(["John", "-p", "rex", "-b", "15/06/1990", "-m", "4", "-M", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wordlist saved as"));

    let content = fs::read_to_string(tmp.path().join("john.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    for expected in ["johnrex15", "johnrex06", "johnrex1990", "johnrex15061990"] {
        assert_eq!(lines.iter().filter(|l| **l == expected).count(), 1);
    }
    let mut sorted = lines.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(lines, sorted);
}

#[test]
fn honours_output_and_expansion_flags() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("lists").join("joe_full.txt");

    wind(tmp.path())
        .args(["joe", "-m", "4", "-M", "10", "-s", "-c", "-l", "-q", "-o"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    for expected in ["joe!1990", "JOE!1990", "Joe!1990", "j03!1990", "J0E!1990"] {
        assert!(lines.contains(&expected), "missing {expected}");
    }
}

#[test]
fn empty_result_exits_distinctly_without_file() {
    let tmp = tempdir().unwrap();

    wind(tmp.path())
        .args(["john", "-m", "50", "-M", "50"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("No words generated"));

    assert!(!tmp.path().join("john.txt").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = tempdir().unwrap();

    wind(tmp.path())
        .args(["john", "-p", "rex,max", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        // 2 pets x 1 keyword x 2 patterns x 1 symbol x 10 numbers
        .stdout(predicate::str::contains("Pattern instantiations: 40"));

    assert!(!tmp.path().join("john.txt").exists());
}

#[test]
fn malformed_config_fails() {
    let tmp = tempdir().unwrap();
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, r#"{"passwd_patterns": ["{name}"]}"#).unwrap();

    Command::cargo_bin("wind")
        .unwrap()
        .current_dir(tmp.path())
        .args(["john", "--config"])
        .arg(&bad)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn missing_name_is_usage_error() {
    Command::cargo_bin("wind").unwrap().assert().failure();
}
