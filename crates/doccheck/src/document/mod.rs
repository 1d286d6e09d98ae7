//! Documents under test: a path, an inferred type, and the comment-stripped
//! content every check operates on.

mod doctype;
pub mod elements;
mod preprocess;

pub use doctype::DocType;
pub use preprocess::strip_comments;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// One documentation file loaded for checking.
///
/// The content is comment-stripped exactly once, at load time, and cached
/// for the document's lifetime; every extraction pass reads the same
/// normalized stream.
pub struct Document {
    path: PathBuf,
    abs_path: PathBuf,
    doc_type: DocType,
    content: String,
}

impl Document {
    /// Read a file from disk and prepare it for checking.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::from_raw(path, &raw))
    }

    /// Build a document from in-memory text. The path still drives type
    /// classification and reporting.
    pub fn from_raw(path: &Path, raw: &str) -> Self {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let doc_type = DocType::classify(file_name);
        let content = strip_comments(raw);
        let abs_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        Self {
            path: path.to_path_buf(),
            abs_path,
            doc_type,
            content,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The resolved absolute path, falling back to the given path when the
    /// file does not exist on disk.
    pub fn abs_path(&self) -> &Path {
        &self.abs_path
    }

    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    /// The comment-stripped content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn identifiers(&self) -> Vec<String> {
        elements::identifiers(&self.content)
    }

    pub fn headings(&self) -> Vec<String> {
        elements::headings(&self.content)
    }

    pub fn has_steps(&self) -> bool {
        elements::has_steps(&self.content)
    }

    pub fn defines_attribute(&self, name: &str) -> bool {
        elements::attribute_defined(&self.content, name)
    }

    pub fn declares_attribute(&self, name: &str) -> bool {
        elements::attribute_declared(&self.content, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_classifies_and_strips() {
        let doc = Document::from_raw(
            Path::new("modules/proc_installing.adoc"),
            "// editorial note\n= Installing\n\n. Run the installer\n",
        );
        assert_eq!(doc.doc_type(), DocType::Procedure);
        assert!(!doc.content().contains("editorial note"));
        assert!(doc.has_steps());
        assert_eq!(doc.headings(), vec!["Installing"]);
    }

    #[test]
    fn commented_out_elements_are_invisible() {
        let doc = Document::from_raw(
            Path::new("con_overview.adoc"),
            "////\n. Fake step\n[id='fake']\n////\n= Overview\n",
        );
        assert!(!doc.has_steps());
        assert!(doc.identifiers().is_empty());
    }

    #[test]
    fn file_name_ignores_directories() {
        let doc = Document::from_raw(Path::new("a/b/c/ref_options.adoc"), "");
        assert_eq!(doc.file_name(), "ref_options.adoc");
        assert_eq!(doc.doc_type(), DocType::Reference);
    }

    #[test]
    fn open_missing_file_is_an_error() {
        assert!(Document::open(Path::new("/no/such/con_x.adoc")).is_err());
    }
}
