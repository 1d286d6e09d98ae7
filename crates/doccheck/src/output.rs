//! Output formatting and process exit codes.
//!
//! All report lines go to standard output; errors go to standard error.
//! Writers tolerate broken pipes so the tool behaves well when piped into
//! `head` or similar.

use std::fmt::Display;
use std::io::{self, Write};

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes for the `doccheck` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// No problems found (0)
    Success = 0,

    /// One or more problems found, or a generic error (1)
    GenericError = 1,

    /// Input file not found (2)
    NotFound = 2,

    /// Input file permission denied (13)
    PermissionDenied = 13,

    /// Input is not a regular file (21)
    NotRegularFile = 21,

    /// Invalid arguments or options (22)
    InvalidArgument = 22,
}

impl ExitCode {
    /// Convert exit code to i32 for `std::process::exit`
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Get a description of what this exit code means
    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "No problems found",
            ExitCode::GenericError => "One or more problems found, or a generic error occurred",
            ExitCode::NotFound => "Input file not found",
            ExitCode::PermissionDenied => "Input file permission denied",
            ExitCode::NotRegularFile => "Input is not a regular file",
            ExitCode::InvalidArgument => "Invalid arguments or options",
        }
    }
}

// ============================================================================
// Output Context
// ============================================================================

/// Context for controlling report verbosity and coloring.
///
/// Shared read-only by everything that prints; the flags are set once from
/// the command line and never change during a run.
#[derive(Debug, Clone, Copy)]
pub struct OutputContext {
    verbose: bool,
    color: bool,
}

impl OutputContext {
    /// Create a new output context
    pub fn new(verbose: bool, color: bool) -> Self {
        Self { verbose, color }
    }

    /// Check if pass results should be reported as well as failures
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if status tags should be colorized
    pub fn use_color(&self) -> bool {
        self.color
    }

    /// Print a report line to standard output
    pub fn print_data(&self, msg: impl Display) {
        writeln_safe(&format!("{}", msg));
    }

    /// Print an informational line, suppressed unless verbose
    pub fn print_info(&self, msg: impl Display) {
        if self.verbose {
            writeln_safe(&format!("{}", msg));
        }
    }

    /// Print an error line to standard error
    pub fn print_error(&self, msg: impl Display) {
        writeln_safe_stderr(&format!("Error: {}", msg));
    }
}

impl Default for OutputContext {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Safe println that handles broken pipes gracefully
fn writeln_safe(msg: &str) {
    match writeln!(io::stdout(), "{}", msg) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            // Expected when piping to head, etc.
            std::process::exit(0);
        }
        Err(_) => {}
    }
}

/// Safe eprintln that handles broken pipes gracefully
fn writeln_safe_stderr(msg: &str) {
    match writeln!(io::stderr(), "{}", msg) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            std::process::exit(0);
        }
        Err(_) => {}
    }
}
