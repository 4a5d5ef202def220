//! Integration tests for the `ws` CLI.
//!
//! Each test creates a temp workspace root, runs `ws` as a subprocess,
//! and verifies stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use workspaces::io::store::{CheckpointStore, Store};
use workspaces::model::Workspace;

/// Get the path to the built `ws` binary.
fn ws_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ws");
    path
}

/// Create a workspace root with a few project directories and some noise.
fn create_test_root(root: &Path) {
    for name in ["gamma", "alpha", "beta"] {
        fs::create_dir_all(root.join(name)).unwrap();
    }
    fs::write(root.join("notes.txt"), "not a workspace").unwrap();
    fs::write(root.join(".DS_Store"), "").unwrap();
}

/// Run `ws` against `root`, isolated from the user's config and environment.
fn run_ws(root: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ws_bin())
        .args(args)
        .arg("--root")
        .arg(root)
        .arg("--config")
        .arg(root.join("missing-config.toml"))
        .env("HOME", root)
        .current_dir(root)
        .output()
        .expect("failed to run ws");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `ws` expecting success, return stdout.
fn run_ws_ok(root: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ws(root, args);
    if !success {
        panic!(
            "ws {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn test_list_sorted_by_name() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_root(tmp.path());

    let out = run_ws_ok(tmp.path(), &["list"]);
    let names: Vec<&str> = out
        .lines()
        .map(|l| l.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    assert!(out.lines().next().unwrap().trim_start().starts_with("1  alpha"));
    assert!(!out.contains("notes.txt"));
    assert!(!out.contains(".DS_Store"));
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_root(tmp.path());

    let out = run_ws_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["position"], 1);
    assert_eq!(entries[0]["name"], "alpha");
    assert_eq!(
        entries[2]["path"],
        tmp.path().join("gamma").display().to_string()
    );
    let modified = entries[0]["modified"].as_str().unwrap();
    assert_eq!(modified.len(), 10);
}

#[test]
fn test_list_empty_root() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ws_ok(tmp.path(), &["list", "--json"]);
    assert_eq!(out.trim(), "[]");
}

#[test]
fn test_list_missing_root_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = Command::new(ws_bin())
        .args(["list", "--root"])
        .arg(tmp.path().join("nope"))
        .arg("--config")
        .arg(tmp.path().join("missing-config.toml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: could not read workspace root"));
}

// ---------------------------------------------------------------------------
// checkpoints
// ---------------------------------------------------------------------------

fn seed_checkpoints(root: &Path) {
    let mut store = Store::open(root.join("workspaces.sql")).unwrap();
    let alpha = Workspace::new(root, "alpha");
    store.insert_checkpoint(&alpha, "  first note\n").unwrap();
    store.insert_checkpoint(&alpha, "second note").unwrap();
    store.close().unwrap();
}

#[test]
fn test_checkpoints_text() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_root(tmp.path());
    seed_checkpoints(tmp.path());

    let out = run_ws_ok(tmp.path(), &["checkpoints", "alpha"]);
    assert!(out.contains("  first note"));
    assert!(out.contains("  second note"));
    assert!(out.find("first note").unwrap() < out.find("second note").unwrap());
}

#[test]
fn test_checkpoints_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_root(tmp.path());
    seed_checkpoints(tmp.path());

    let out = run_ws_ok(tmp.path(), &["checkpoints", "alpha", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["value"], "first note");
    assert_eq!(entries[1]["workspace"], "alpha");
}

#[test]
fn test_checkpoints_unknown_workspace_is_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_root(tmp.path());

    let out = run_ws_ok(tmp.path(), &["checkpoints", "ghost"]);
    assert!(out.is_empty());
}

#[test]
fn test_checkpoints_without_store_leaves_root_untouched() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_root(tmp.path());

    let out = run_ws_ok(tmp.path(), &["checkpoints", "alpha", "--json"]);
    assert_eq!(out.trim(), "[]");
    assert!(!tmp.path().join("workspaces.sql").exists());
    assert!(!tmp.path().join("workspaces.log").exists());
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_root(tmp.path());
    let config = tmp.path().join("config.toml");
    fs::write(&config, "max_rows = [").unwrap();

    let output = Command::new(ws_bin())
        .args(["list", "--root"])
        .arg(tmp.path())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: could not parse"));
}
