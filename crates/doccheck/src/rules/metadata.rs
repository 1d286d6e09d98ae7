//! Metadata rules: required and forbidden attribute definitions, and the
//! canonical location of attribute files.

use crate::config::StyleConfig;
use crate::document::{DocType, Document};
use crate::report::Outcome;

use super::Rule;

/// Every document must define a non-empty `:context:` attribute so its
/// identifiers stay reusable across assemblies.
pub struct ContextAttributeDefined;

impl Rule for ContextAttributeDefined {
    fn name(&self) -> &'static str {
        "context-attribute-defined"
    }

    fn applies_to(&self, _doc_type: DocType) -> bool {
        true
    }

    fn check(&self, doc: &Document, _style: &StyleConfig) -> Vec<Outcome> {
        let outcome = if doc.defines_attribute("context") {
            Outcome::pass(format!(
                "{}: the context attribute is defined",
                doc.file_name()
            ))
        } else {
            Outcome::fail(format!(
                "{}: the context attribute is missing or empty",
                doc.file_name()
            ))
        };
        vec![outcome]
    }
}

/// Published documents must not declare the `:internal:` editorial marker.
pub struct NoInternalAttribute;

impl Rule for NoInternalAttribute {
    fn name(&self) -> &'static str {
        "no-internal-attribute"
    }

    fn applies_to(&self, _doc_type: DocType) -> bool {
        true
    }

    fn check(&self, doc: &Document, _style: &StyleConfig) -> Vec<Outcome> {
        let outcome = if doc.declares_attribute("internal") {
            Outcome::fail(format!(
                "{}: the internal attribute is declared; remove it before publishing",
                doc.file_name()
            ))
        } else {
            Outcome::pass(format!(
                "{}: no internal attribute declared",
                doc.file_name()
            ))
        };
        vec![outcome]
    }
}

/// Attribute files must live in the canonical directory so every assembly
/// resolves the same definitions.
pub struct AttributesFileLocation;

impl Rule for AttributesFileLocation {
    fn name(&self) -> &'static str {
        "attributes-file-location"
    }

    fn applies_to(&self, doc_type: DocType) -> bool {
        doc_type == DocType::Attributes
    }

    fn check(&self, doc: &Document, style: &StyleConfig) -> Vec<Outcome> {
        let in_place = doc
            .abs_path()
            .parent()
            .is_some_and(|parent| parent.ends_with(&style.attributes_dir));

        let outcome = if in_place {
            Outcome::pass(format!(
                "{}: attributes file is stored in '{}/'",
                doc.file_name(),
                style.attributes_dir
            ))
        } else {
            Outcome::fail(format!(
                "{}: attributes file is not stored in '{}/'",
                doc.file_name(),
                style.attributes_dir
            ))
        };
        vec![outcome]
    }
}
