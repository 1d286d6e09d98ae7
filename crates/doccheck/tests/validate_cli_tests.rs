use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Integration tests for `doccheck validate`
///
/// Cover the end-to-end contract:
/// 1. Rule failures are reported line by line and counted in the summary
/// 2. Pass results stay silent unless --verbose is given
/// 3. Failures never abort the scan; every file is processed
/// 4. The style configuration file overrides the built-in tables
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        Command::new(env!("CARGO_BIN_EXE_doccheck"))
            .current_dir(self.temp_dir.path())
            .args(args)
            .assert()
    }
}

#[test]
fn empty_procedure_module_reports_three_problems() {
    let ctx = TestContext::new();
    ctx.write_file("proc_example.adoc", "[id='foo']\n");

    ctx.run(&["validate", "proc_example.adoc"])
        .code(1)
        .stdout(predicate::str::contains("found 3 problem(s)."))
        .stdout(predicate::str::contains("context"))
        .stdout(predicate::str::contains("step"))
        .stdout(predicate::str::contains("identifier 'foo'"));
}

#[test]
fn clean_module_exits_zero() {
    let ctx = TestContext::new();
    ctx.write_file(
        "con_overview.adoc",
        ":context: overview\n\n[id='overview_{context}']\n= Product overview\n\nBody text.\n",
    );

    ctx.run(&["validate", "con_overview.adoc"])
        .success()
        .stdout(predicate::str::contains("found 0 problem(s)."));
}

#[test]
fn pass_results_are_silent_by_default() {
    let ctx = TestContext::new();
    ctx.write_file("con_quiet.adoc", ":context: quiet\n");

    let output = ctx
        .run(&["validate", "con_quiet.adoc"])
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    // Only the summary line
    assert!(!stdout.contains("pass "), "unexpected pass lines:\n{}", stdout);
    assert!(stdout.contains("Checked"));
}

#[test]
fn verbose_reports_passes_too() {
    let ctx = TestContext::new();
    ctx.write_file("con_quiet.adoc", ":context: quiet\n");

    ctx.run(&["validate", "--verbose", "con_quiet.adoc"])
        .success()
        .stdout(predicate::str::contains("pass "))
        .stdout(predicate::str::contains("file name signals"));
}

#[test]
fn failures_do_not_stop_later_documents() {
    let ctx = TestContext::new();
    ctx.write_file("proc_broken.adoc", "[id='broken']\n");
    ctx.write_file("con_fine.adoc", ":context: fine\n");

    // The second document's checks still run and count
    ctx.run(&["validate", "proc_broken.adoc", "con_fine.adoc"])
        .code(1)
        .stdout(predicate::str::contains("found 3 problem(s)."));
}

#[test]
fn commented_out_markup_is_not_validated() {
    let ctx = TestContext::new();
    ctx.write_file(
        "con_commented.adoc",
        ":context: commented\n////\n. A step inside a comment block\n////\n",
    );

    // A step inside a comment must not trip the steps-forbidden rule
    ctx.run(&["validate", "con_commented.adoc"]).success();
}

#[test]
fn config_file_overrides_terminology() {
    let ctx = TestContext::new();
    ctx.write_file(
        "doccheck.toml",
        "[terminology]\n\"login to\" = \"log in to\"\n",
    );
    ctx.write_file("con_terms.adoc", ":context: terms\nThen login to the console.\n");

    ctx.run(&["validate", "--config", "doccheck.toml", "con_terms.adoc"])
        .code(1)
        .stdout(predicate::str::contains("login to"))
        .stdout(predicate::str::contains("log in to"));
}

#[test]
fn config_file_is_picked_up_from_working_directory() {
    let ctx = TestContext::new();
    ctx.write_file(
        "doccheck.toml",
        "[terminology]\n\"kill the process\" = \"stop the process\"\n",
    );
    ctx.write_file("con_terms.adoc", ":context: terms\nNow kill the process.\n");

    ctx.run(&["validate", "con_terms.adoc"])
        .code(1)
        .stdout(predicate::str::contains("stop the process"));
}

#[test]
fn unknown_file_name_fails_naming_rule() {
    let ctx = TestContext::new();
    ctx.write_file("notes.adoc", ":context: notes\n");

    ctx.run(&["validate", "notes.adoc"])
        .code(1)
        .stdout(predicate::str::contains("does not signal a document type"));
}
