use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("apipost");
    cmd.current_dir(dir.path())
        .env_remove("APIPOST_INPUT")
        .env_remove("APIPOST_BASE_URL")
        .env_remove("APIPOST_ENDPOINT")
        .env_remove("APIPOST_TIMEOUT_SECS")
        .env("RUST_LOG", "info");
    cmd
}

#[test]
fn help_lists_options() {
    let dir = TempDir::new().expect("create temp dir");
    cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--base-url").and(contains("--timeout-secs")));
}

#[test]
fn missing_default_input_fails_without_output() {
    let dir = TempDir::new().expect("create temp dir");
    cmd(&dir)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("file not found: example.json"));
}

#[test]
fn malformed_input_fails_before_sending() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("broken.json"), "{\"a\": ").expect("write input");
    cmd(&dir)
        .arg("broken.json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("JSON parsing error in input file").and(contains("sending POST").not()));
}

#[test]
fn plain_http_target_is_refused() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("example.json"), r#"{"a":{"private":false}}"#).expect("write input");
    cmd(&dir)
        .args(["--base-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("request failed"));
}

#[test]
fn input_path_from_environment() {
    let dir = TempDir::new().expect("create temp dir");
    cmd(&dir)
        .env("APIPOST_INPUT", "from-env.json")
        .assert()
        .failure()
        .stderr(contains("file not found: from-env.json"));
}

#[test]
fn invalid_base_url_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    cmd(&dir)
        .args(["--base-url", "::nope::"])
        .assert()
        .failure()
        .stderr(contains("invalid configuration"));
}
