//! The `validate` subcommand: run the style rules over documents and
//! report a summary.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::StyleConfig;
use crate::document::Document;
use crate::errors::preflight;
use crate::output::{ExitCode, OutputContext};
use crate::report::Report;
use crate::rules::Registry;

/// Options for one `validate` run.
pub struct ValidateOptions {
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

/// Check every file, stream outcomes, print the summary, and derive the
/// exit code. Rule failures never stop the scan; only precondition
/// failures abort before any report is produced.
pub fn run(files: &[PathBuf], opts: &ValidateOptions) -> Result<ExitCode> {
    // All preconditions are verified before any document is processed
    for file in files {
        preflight(file, &["adoc"])?;
    }

    let style = StyleConfig::load(opts.config.as_deref())?;
    let ctx = OutputContext::new(opts.verbose, false);
    let registry = Registry::default_rules();
    let mut report = Report::new(ctx);

    for file in files {
        let doc = Document::open(file)?;
        registry.run(&doc, &style, &mut report);
    }

    report.summary();

    Ok(if report.is_clean() {
        ExitCode::Success
    } else {
        ExitCode::GenericError
    })
}

/// Run the rules over one already-loaded document. Used by embedding tests
/// and tools that manage their own report.
pub fn check_document(doc: &Document, style: &StyleConfig, report: &mut Report) {
    Registry::default_rules().run(doc, style, report);
}
