#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BANNER: &str = r#"
kind = "media"
filepath = "/static/uploads/banner.jpg"
filename = "banner.jpg"
alt_text = "Máy lọc nước A.O Smith chính hãng giá tốt nhất"
album = "Banner"
width = 1920
height = 1080
file_size = 150000
"#;

const HERO: &str = r#"
kind = "media"
filepath = "/img/hero.jpg"
filename = "hero.jpg"
alt_text = "Under-sink water filter in a bright kitchen"
"#;

const POST: &str = r#"{
  "kind": "blog",
  "slug": "water-filter-guide",
  "title": "Water filter buying guide for families",
  "focus_keyword": "water filter",
  "image": "/img/hero.jpg"
}"#;

/// Command rooted in `root`, isolated from the caller's config and log level.
fn seoscore(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seoscore").expect("binary should compile");
    cmd.current_dir(root).env("HOME", root).env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should be created");
    }
    fs::write(path, content).expect("fixture should write");
}

#[test]
fn media_banner_scores_eighty_with_grade_a() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "banner.toml", BANNER);

    seoscore(root.path())
        .args(["media", "banner.toml", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 80"))
        .stdout(predicate::str::contains("\"grade\": \"A\""))
        .stdout(predicate::str::contains("\"grade_class\": \"success\""));
}

#[test]
fn media_markdown_report() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "banner.toml", BANNER);

    seoscore(root.path())
        .args(["media", "banner.toml"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# SEO Report: banner.jpg"))
        .stdout(predicate::str::contains("Score: 80/100 (A, Very good)"))
        .stdout(predicate::str::contains("- ✓ Contains primary keyword \"máy lọc nước\""));
}

#[test]
fn empty_media_fails_with_grade_f() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "empty.json", r#"{"kind": "media"}"#);

    seoscore(root.path())
        .args(["media", "empty.json", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"grade\": \"F\""))
        .stdout(predicate::str::contains("Missing alt text"));
}

#[test]
fn blog_uses_media_library_for_featured_image() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "posts/guide.json", POST);
    write(root.path(), "media/hero.toml", HERO);

    seoscore(root.path())
        .args([
            "blog",
            "posts/guide.json",
            "--format",
            "json",
            "--media-library",
            "media",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Featured image alt text contains the keyword",
        ))
        .stdout(predicate::str::contains("\"reading_time_minutes\": 1"));

    seoscore(root.path())
        .args(["blog", "posts/guide.json", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Featured image has no alt text"));
}

#[test]
fn snapshot_kind_mismatch_is_a_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "banner.toml", BANNER);

    seoscore(root.path())
        .args(["blog", "banner.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected a blog snapshot"));
}

#[test]
fn project_config_changes_keyword_tiers() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "banner.toml", BANNER);
    write(
        root.path(),
        "seoscore.toml",
        "[keywords]\nprimary = [\"kitchen sink\"]\n",
    );

    seoscore(root.path())
        .args(["media", "banner.toml", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 77"))
        .stdout(predicate::str::contains("\"grade\": \"B+\""));
}

#[test]
fn explicit_config_flag_overrides_project_file() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "banner.toml", BANNER);
    write(
        root.path(),
        "seoscore.toml",
        "[keywords]\nprimary = [\"kitchen sink\"]\n",
    );
    write(root.path(), "alt/config.toml", "[cache]\nmax_age_secs = 10\n");

    seoscore(root.path())
        .args(["--config", "alt/config.toml", "media", "banner.toml", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 80"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "banner.toml", BANNER);
    write(root.path(), "seoscore.toml", "[keywords.scores]\nprimary = 30\n");

    seoscore(root.path())
        .args(["media", "banner.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: config parse error"));
}

#[test]
fn batch_scores_directory_and_reuses_cache() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "content/banner.toml", BANNER);
    write(root.path(), "content/hero.toml", HERO);
    write(root.path(), "content/guide.json", POST);
    write(root.path(), "content/broken.json", "{ not json");

    seoscore(root.path())
        .args(["batch", "content"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("- entities: 3"))
        .stdout(predicate::str::contains("- served from cache: 0"))
        .stdout(predicate::str::contains("media banner.toml"));
    assert!(root.path().join(".seoscore/cache.json").exists());

    seoscore(root.path())
        .args(["batch", "content", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"cached\": 3"));

    write(
        root.path(),
        "content/banner.toml",
        &BANNER.replace("album = \"Banner\"\n", ""),
    );
    seoscore(root.path())
        .args(["batch", "content", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"cached\": 2"));
}

#[test]
fn batch_rescores_cached_entries_after_config_change() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "content/banner.toml", BANNER);

    seoscore(root.path())
        .args(["batch", "content", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 80"));

    write(
        root.path(),
        "seoscore.toml",
        "[keywords]\nprimary = [\"kitchen sink\"]\n",
    );
    seoscore(root.path())
        .args(["batch", "content", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 77"))
        .stdout(predicate::str::contains("\"cached\": false"))
        .stdout(predicate::str::contains("\"cached\": 0"));

    seoscore(root.path())
        .args(["batch", "content", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 77"))
        .stdout(predicate::str::contains("\"cached\": 1"));
}

#[test]
fn batch_without_cache_leaves_no_state() {
    let root = TempDir::new().expect("temp dir should be created");
    write(root.path(), "content/banner.toml", BANNER);

    seoscore(root.path())
        .args(["batch", "content", "--no-cache"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[A]  80/100 media banner.toml (0 issues)"));
    assert!(!root.path().join(".seoscore").exists());
}

#[test]
fn batch_of_missing_directory_is_a_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");

    seoscore(root.path())
        .args(["batch", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
