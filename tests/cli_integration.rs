//! End-to-end runs of the emdoc binary over a temp project tree.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn write_project(dir: &std::path::Path) {
    fs::write(
        dir.join("Emdocfile"),
        "docs:\n  - files: [\"src.txt\"]\n    template: \"README.emdoc.md\"\n    no_footer: true\n",
    )
    .unwrap();
    fs::write(dir.join("src.txt"), "/*{ intro\nHello.\n}*/\n").unwrap();
    fs::write(dir.join("README.emdoc.md"), "# Demo\n\n@intro\n").unwrap();
}

#[test]
fn generates_documents_from_a_config_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_project(dir.path());

    Command::cargo_bin("emdoc")
        .expect("binary")
        .arg("-f")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"));

    let out = fs::read_to_string(dir.path().join("README.md")).expect("output written");
    assert_eq!(out, "# Demo\n\nHello.\n");
}

#[test]
fn dump_values_prints_the_store_as_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_project(dir.path());

    Command::cargo_bin("emdoc")
        .expect("binary")
        .arg("-f")
        .arg(dir.path())
        .arg("--dump-values")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"intro\""))
        .stdout(predicate::str::contains("Hello."));
}

#[test]
fn unknown_value_reference_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("Emdocfile"),
        "docs:\n  - files: []\n    template: \"BAD.emdoc.md\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("BAD.emdoc.md"), "@nope\n").unwrap();

    Command::cargo_bin("emdoc")
        .expect("binary")
        .arg("-f")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't find value"));

    assert!(!dir.path().join("BAD.md").exists());
}

#[test]
fn missing_config_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");

    Command::cargo_bin("emdoc")
        .expect("binary")
        .arg("-f")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't read config"));
}
