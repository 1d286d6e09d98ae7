//! doccheck
//!
//! Style and link conformance checker for modular AsciiDoc documentation.
//! Classifies documents by their file names, runs the applicable style
//! rules, and verifies that external links are reachable.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use doccheck::cli::{Cli, Commands};
use doccheck::commands::check_links::{self, CheckLinksOptions};
use doccheck::commands::validate::{self, ValidateOptions};
use doccheck::errors::PreflightError;
use doccheck::output::ExitCode;

/// Helper to determine exit code from an error
fn error_to_exit_code(error: &anyhow::Error) -> ExitCode {
    if let Some(preflight) = error.downcast_ref::<PreflightError>() {
        return preflight.exit_code();
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return match io_error.kind() {
            std::io::ErrorKind::NotFound => ExitCode::NotFound,
            std::io::ErrorKind::PermissionDenied => ExitCode::PermissionDenied,
            _ => ExitCode::GenericError,
        };
    }

    ExitCode::GenericError
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            error_to_exit_code(&e)
        }
    };

    if exit_code != ExitCode::Success {
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<ExitCode> {
    // Route parse errors ourselves: the exit-code contract reserves 22 for
    // invalid arguments, while help and version remain successes
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArgument,
            });
        }
    };

    match cli.command {
        Commands::Validate {
            verbose,
            config,
            files,
        } => validate::run(&files, &ValidateOptions { verbose, config }),

        Commands::CheckLinks {
            all,
            color,
            expand_includes,
            list,
            parallel,
            jobs,
            files,
        } => check_links::run(
            &files,
            &CheckLinksOptions {
                all,
                color,
                expand_includes,
                list,
                parallel,
                jobs,
            },
        ),
    }
}
