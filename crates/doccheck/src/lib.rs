//! doccheck library
//!
//! Core functionality for the doccheck conformance auditor: document
//! classification and element extraction, the style rule registry, and the
//! external link checker. The `doccheck` binary is a thin CLI over these
//! modules; the library form exists primarily for testing and embedding.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod errors;
pub mod links;
pub mod output;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use config::StyleConfig;
pub use document::{DocType, Document};
pub use errors::{preflight, PreflightError};
pub use links::{Prober, Verdict};
pub use output::{ExitCode, OutputContext};
pub use report::{Outcome, Report, Status};
pub use rules::{Registry, Rule};
