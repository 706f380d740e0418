// Integration tests for the seoscore CLI surface: flags, argument
// validation and the text utilities that need no snapshot files.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the seoscore binary.
fn seoscore() -> Command {
    let mut cmd = Command::cargo_bin("seoscore").expect("binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    seoscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seoscore"));
}

#[test]
fn cli_help_flag() {
    seoscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deterministic SEO scoring"));
}

#[test]
fn media_requires_file() {
    seoscore()
        .arg("media")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    seoscore()
        .args(["-q", "-v", "slug", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn slug_folds_vietnamese() {
    seoscore()
        .args(["slug", "Máy lọc nước A.O.Smith"])
        .assert()
        .code(0)
        .stdout("may-loc-nuoc-aosmith\n");
}

#[test]
fn slug_with_filename_builds_timestamped_name() {
    seoscore()
        .args(["slug", "Bình nóng lạnh", "--filename", "IMG_0001.JPG"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_match(r"^binh-nong-lanh-\d{14}\.jpg\n$").expect("valid regex"));
}

#[test]
fn check_alt_accepts_descriptive_text() {
    seoscore()
        .args(["check-alt", "Máy lọc nước A.O Smith đặt trong nhà bếp"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("meets SEO guidelines"));
}

#[test]
fn check_alt_rejects_spam_and_short_text() {
    seoscore()
        .args(["check-alt", "Click here for the best price"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("spam"));

    seoscore()
        .args(["check-alt", "short"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("too short"));
}

#[test]
fn missing_snapshot_is_a_runtime_failure() {
    seoscore()
        .args(["media", "/nonexistent/path/banner.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
