// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}

fn wuzzer(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wuzzer"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("WUZZER_LOG");
    cmd
}

fn project_tree() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write_file(&dir.path().join("README.md"), "fuzzy search tool\n");
    write_file(&dir.path().join("src/main.go"), "package main\nfunc searchLines() {}\n");
    write_file(&dir.path().join("vendor/dep.go"), "func searchVendor() {}\n");
    write_file(&dir.path().join(".git/notes.txt"), "search hidden\n");
    write_file(&dir.path().join("build/out.txt"), "search build\n");
    dir
}

#[test]
fn stats_reports_scanned_and_skipped_dirs() {
    let dir = project_tree();
    let assert = wuzzer(dir.path())
        .args(["--format", "json", "stats"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let stats: Value = serde_json::from_str(&stdout).expect("json");

    assert_eq!(stats["files_scanned"], 2);
    assert_eq!(stats["lines_indexed"], 3);
    assert_eq!(stats["dirs_scanned"], 2);
    assert_eq!(stats["dirs_skipped"], 3);
}

#[test]
fn stats_text_output() {
    let dir = project_tree();
    wuzzer(dir.path())
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files scanned: 2"))
        .stdout(predicate::str::contains("Skipped directories: 3"));
}

#[test]
fn repl_answers_until_quit() {
    let dir = project_tree();
    wuzzer(dir.path())
        .args(["repl"])
        .write_stdin("search\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 3 lines"))
        .stdout(predicate::str::contains("Search results for query 'search':"))
        .stdout(predicate::str::contains("README.md:1"))
        .stdout(predicate::str::contains("searchVendor").not());
}

#[test]
fn repl_exits_on_end_of_input() {
    let dir = project_tree();
    wuzzer(dir.path())
        .args(["repl", "-g", "*.md"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 1 lines"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = project_tree();
    wuzzer(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wuzzer"));
}
