//! Comment stripping for AsciiDoc source.
//!
//! Produces the logical content stream that both the style rules and the
//! link extractor operate on, so commented-out example text is never
//! mistaken for real structure or real links. Block comments are delimited
//! by lines consisting solely of `////`; line comments start with `//`
//! followed by whitespace. An unterminated block runs to end of input.

/// Delimiter line for block comments.
const BLOCK_DELIMITER: &str = "////";

/// Remove block and line comments, preserving the order of surviving lines.
/// Idempotent: stripping already-stripped content is a no-op.
pub fn strip_comments(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_block = false;

    for line in raw.lines() {
        if line.trim_end() == BLOCK_DELIMITER {
            in_block = !in_block;
            continue;
        }
        if in_block || is_line_comment(line) {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

fn is_line_comment(line: &str) -> bool {
    line.strip_prefix("//")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace()))
}
