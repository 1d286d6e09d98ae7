//! Subcommand implementations.

pub mod check_links;
pub mod validate;
