//! The `check-links` subcommand: extract link targets from documents and
//! probe their reachability.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::document::strip_comments;
use crate::errors::preflight;
use crate::links::{ensure_xmllint, expand_includes, extract_links, probe_all, Prober, Verdict};
use crate::output::{ExitCode, OutputContext};

/// Options for one `check-links` run.
pub struct CheckLinksOptions {
    pub all: bool,
    pub color: bool,
    pub expand_includes: bool,
    pub list: bool,
    pub parallel: bool,
    pub jobs: Option<usize>,
}

/// Check every file's links and derive the exit code. Probe failures are
/// classified and printed, never fatal; only precondition failures abort.
pub fn run(files: &[PathBuf], opts: &CheckLinksOptions) -> Result<ExitCode> {
    // All preconditions are verified before any document is processed
    for file in files {
        preflight(file, &["adoc", "xml"])?;
    }
    if opts.expand_includes {
        ensure_xmllint()?;
    }

    let ctx = OutputContext::new(opts.all, opts.color);
    if opts.color {
        // Keep the tags colored even when output is piped
        colored::control::set_override(true);
    }

    if opts.list {
        for file in files {
            for link in collect_links(file, opts.expand_includes)? {
                ctx.print_data(link);
            }
        }
        return Ok(ExitCode::Success);
    }

    let prober = Prober::new();
    let mut unreachable = 0u64;

    for file in files {
        let links = collect_links(file, opts.expand_includes)?;
        let workers = if opts.parallel {
            opts.jobs.unwrap_or(links.len()).max(1)
        } else {
            1
        };

        probe_all(
            &links,
            workers,
            |url| prober.probe(url),
            |url, verdict| {
                if verdict == Verdict::Unreachable {
                    unreachable += 1;
                }
                if opts.all || verdict == Verdict::Unreachable {
                    ctx.print_data(verdict_line(&ctx, verdict, url));
                }
            },
        );
    }

    Ok(if unreachable == 0 {
        ExitCode::Success
    } else {
        ExitCode::GenericError
    })
}

/// Extract the deduplicated link targets from one file. AsciiDoc sources
/// are comment-stripped first; XML sources are optionally rendered through
/// include expansion.
fn collect_links(path: &Path, expand: bool) -> Result<Vec<String>> {
    let is_xml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xml"));

    let content = if is_xml {
        if expand {
            expand_includes(path)?
        } else {
            std::fs::read_to_string(path)?
        }
    } else {
        let raw = std::fs::read_to_string(path)?;
        strip_comments(&raw)
    };

    Ok(extract_links(&content))
}

/// One self-contained report line: fixed-width verdict tag plus target.
fn verdict_line(ctx: &OutputContext, verdict: Verdict, url: &str) -> String {
    let tag = format!("{:<8}", verdict.tag());
    let tag = if ctx.use_color() {
        match verdict {
            Verdict::Reachable => tag.green().to_string(),
            Verdict::Unreachable => tag.red().to_string(),
            Verdict::Ignored => tag.yellow().to_string(),
        }
    } else {
        tag
    };
    format!("{}{}", tag, url)
}
