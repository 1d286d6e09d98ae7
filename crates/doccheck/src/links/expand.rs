//! XML include expansion through `xmllint`.
//!
//! DocBook books assemble chapters through XInclude; link extraction has to
//! see the expanded document. Expansion is delegated to `xmllint` as a black
//! box, and its presence is verified before any processing begins.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Verify that `xmllint` is available before any processing begins.
pub fn ensure_xmllint() -> Result<()> {
    if which::which("xmllint").is_err() {
        bail!(
            "xmllint is not installed\n\n\
             xmllint is required for XML include expansion.\n\n\
             Install libxml2:\n\
             - Ubuntu/Debian: apt install libxml2-utils\n\
             - Fedora/RHEL: dnf install libxml2\n\
             - macOS: brew install libxml2"
        );
    }
    Ok(())
}

/// Render the document with XIncludes resolved and entities substituted.
pub fn expand_includes(path: &Path) -> Result<String> {
    let output = Command::new("xmllint")
        .arg("--xinclude")
        .arg("--noent")
        .arg(path)
        .output()
        .with_context(|| format!("Failed to run xmllint on {}", path.display()))?;

    if !output.status.success() {
        bail!(
            "xmllint failed on {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
