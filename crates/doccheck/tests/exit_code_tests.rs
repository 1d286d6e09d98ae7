use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Exit-code contract tests
///
/// 0  - no problems found
/// 1  - one or more problems found
/// 2  - input file not found
/// 21 - input is not a regular file
/// 22 - invalid arguments or options
fn doccheck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_doccheck"))
}

#[test]
fn no_arguments_is_invalid_usage() {
    doccheck().assert().code(22);
}

#[test]
fn unknown_subcommand_is_invalid_usage() {
    doccheck().arg("frobnicate").assert().code(22);
}

#[test]
fn unknown_flag_is_invalid_usage() {
    doccheck()
        .args(["validate", "--no-such-flag", "x.adoc"])
        .assert()
        .code(22);
}

#[test]
fn help_is_success() {
    doccheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("doccheck"));
}

#[test]
fn version_is_success() {
    doccheck().arg("--version").assert().success();
}

#[test]
fn missing_file_exits_2() {
    let temp = TempDir::new().unwrap();
    doccheck()
        .current_dir(temp.path())
        .args(["validate", "con_missing.adoc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn directory_input_exits_21() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("dir.adoc")).unwrap();

    doccheck()
        .current_dir(temp.path())
        .args(["validate", "dir.adoc"])
        .assert()
        .code(21)
        .stderr(predicate::str::contains("not a regular file"));
}

#[test]
fn wrong_extension_exits_22() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "text").unwrap();

    doccheck()
        .current_dir(temp.path())
        .args(["validate", "notes.txt"])
        .assert()
        .code(22)
        .stderr(predicate::str::contains("unexpected file extension"));
}

#[test]
fn clean_document_exits_0() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("con_clean.adoc"),
        ":context: clean\n\n= A clean module\n",
    )
    .unwrap();

    doccheck()
        .current_dir(temp.path())
        .args(["validate", "con_clean.adoc"])
        .assert()
        .success();
}

#[test]
fn problems_exit_1() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("proc_bad.adoc"), "no steps at all\n").unwrap();

    doccheck()
        .current_dir(temp.path())
        .args(["validate", "proc_bad.adoc"])
        .assert()
        .code(1);
}

#[test]
fn preflight_runs_before_any_report() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("con_ok.adoc"), ":context: ok\n").unwrap();

    // The second argument fails preflight, so not even the first file's
    // report is produced
    doccheck()
        .current_dir(temp.path())
        .args(["validate", "con_ok.adoc", "con_gone.adoc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Checked").not());
}
