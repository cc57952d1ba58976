//! Integration tests for the hangar CLI
//!
//! These tests exercise the binary end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE_PARTS: &str = "\
engine A fast
fuselage B light

cabin C two-seat
armor D plate
wings E small
weapon F laser
weapon G cannon
";

/// Helper to get a hangar command
fn hangar() -> Command {
    Command::cargo_bin("hangar").unwrap()
}

/// Helper to write a parts file into a fresh temp directory
fn setup_parts_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    (tmp, path)
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    hangar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("random vehicle"));
}

#[test]
fn test_version_displays() {
    hangar()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hangar"));
}

#[test]
fn test_unknown_match_policy_rejected() {
    hangar()
        .args(["--match", "fuzzy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Generation Tests
// ============================================================================

#[test]
fn test_generates_vehicle_from_given_file() {
    let (_tmp, path) = setup_parts_file("parts.txt", SAMPLE_PARTS);

    hangar()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("parts loaded from:"))
        .stderr(predicate::str::contains(
            "Engine: engine A fast, Fuselage: fuselage B light, Cabin: cabin C two-seat, \
             Wings: Large None, Small wings E small, Armor: armor D plate",
        ))
        .stderr(predicate::str::contains("weapon F laser"))
        .stderr(predicate::str::contains("weapon G cannon"));
}

#[test]
fn test_uses_default_parts_file() {
    let (tmp, _path) = setup_parts_file("vehicle_parts.txt", SAMPLE_PARTS);

    hangar()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("parts loaded from: vehicle_parts.txt"))
        .stderr(predicate::str::contains("Engine: engine A fast"));
}

#[test]
fn test_missing_armor_fails() {
    let (_tmp, path) = setup_parts_file(
        "parts.txt",
        "engine A\nfuselage B\ncabin C\nweapon F laser\n",
    );

    hangar()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot find armor"));
}

#[test]
fn test_empty_file_fails_on_engine() {
    let (_tmp, path) = setup_parts_file("parts.txt", "");

    hangar()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot find engine"));
}

#[test]
fn test_missing_file_warns_then_fails_on_engine() {
    let tmp = TempDir::new().unwrap();

    hangar()
        .arg(tmp.path().join("does-not-exist.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not open"))
        .stderr(predicate::str::contains("Cannot find engine"));
}

#[test]
fn test_quiet_suppresses_status_line() {
    let (_tmp, path) = setup_parts_file("parts.txt", SAMPLE_PARTS);

    hangar()
        .arg(&path)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("parts loaded from").not());
}

#[test]
fn test_verbose_prints_bucket_summary() {
    let (_tmp, path) = setup_parts_file("parts.txt", SAMPLE_PARTS);

    hangar()
        .arg(&path)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("7 records"))
        .stderr(predicate::str::contains("  cabin     1\n"))
        .stderr(predicate::str::contains("  fuselage  1\n"))
        .stderr(predicate::str::contains("large 0, small 1"));
}

#[test]
fn test_json_output() {
    let (_tmp, path) = setup_parts_file("parts.txt", SAMPLE_PARTS);

    let output = hangar()
        .arg(&path)
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["engine"], "engine A fast");
    assert_eq!(json["armor"], "armor D plate");
    assert!(json["large_wings"].is_null());
    assert_eq!(json["small_wings"], "wings E small");
    assert_eq!(json["weapons"].as_array().unwrap().len(), 2);
}

#[test]
fn test_substring_match_policy() {
    let (_tmp, path) = setup_parts_file(
        "parts.txt",
        "heavy-engine X\nfuselage B\ncabin C\narmor D\n",
    );

    hangar()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot find engine"));

    hangar()
        .arg(&path)
        .args(["--match", "substring", "--format", "text"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Engine: heavy-engine X"));
}

#[test]
fn test_weapon_loadout_capped_at_four() {
    let mut parts = String::from("engine A\nfuselage B\ncabin C\narmor D\n");
    for i in 0..8 {
        parts.push_str(&format!("weapon W{}\n", i));
    }
    let (_tmp, path) = setup_parts_file("parts.txt", &parts);

    let output = hangar()
        .arg(&path)
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["weapons"].as_array().unwrap().len(), 4);
}

#[test]
fn test_styled_format_prints_summary_block() {
    let (_tmp, path) = setup_parts_file("parts.txt", SAMPLE_PARTS);

    hangar()
        .arg(&path)
        .args(["--format", "styled"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Vehicle"))
        .stderr(predicate::str::contains("Engine: engine A fast, Fuselage:").not());
}
