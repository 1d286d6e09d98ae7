//! Line-oriented element extraction from preprocessed content.
//!
//! Each pass is an independent scan returning an ordered sequence; lines
//! that do not match are simply skipped, so partial or malformed markup is
//! never an error. This is targeted pattern matching, not a markup grammar.

use regex::Regex;
use std::sync::OnceLock;

static ID_REGEX: OnceLock<Regex> = OnceLock::new();
static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
static STEP_REGEX: OnceLock<Regex> = OnceLock::new();

/// Explicit id declaration: `[id='value']` or `[id="value"]`.
fn id_regex() -> &'static Regex {
    ID_REGEX.get_or_init(|| {
        Regex::new(r#"^\[id=["']([^"']+)["']\]"#).expect("Id regex should compile")
    })
}

/// Section heading: one or more `=` markers followed by a title.
fn heading_regex() -> &'static Regex {
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"^=+\s+(\S.*)").expect("Heading regex should compile"))
}

/// Numbered step: one or more `.` markers followed by content.
fn step_regex() -> &'static Regex {
    STEP_REGEX.get_or_init(|| Regex::new(r"^\.+\s+\S").expect("Step regex should compile"))
}

/// Extract every declared identifier value, in order, duplicates preserved.
pub fn identifiers(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            id_regex()
                .captures(line.trim_end())
                .map(|caps| caps[1].to_string())
        })
        .collect()
}

/// Extract every heading title, in order, duplicates preserved.
pub fn headings(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            heading_regex()
                .captures(line)
                .map(|caps| caps[1].trim_end().to_string())
        })
        .collect()
}

/// True if at least one line is a numbered step.
pub fn has_steps(content: &str) -> bool {
    content.lines().any(|line| step_regex().is_match(line))
}

/// True if the content defines attribute `name` with a non-empty value,
/// i.e. contains a line `:name: value`.
pub fn attribute_defined(content: &str, name: &str) -> bool {
    let pattern = format!(r"^:{}:\s*\S", regex::escape(name));
    let re = Regex::new(&pattern).expect("Attribute regex should compile");
    content.lines().any(|line| re.is_match(line))
}

/// True if the content declares attribute `name` at all, with or without
/// a value.
pub fn attribute_declared(content: &str, name: &str) -> bool {
    let pattern = format!(r"^:{}:", regex::escape(name));
    let re = Regex::new(&pattern).expect("Attribute regex should compile");
    content.lines().any(|line| re.is_match(line))
}
