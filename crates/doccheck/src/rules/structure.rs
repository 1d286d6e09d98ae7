//! Structural rules: naming conventions and step usage per module type.

use crate::config::StyleConfig;
use crate::document::{DocType, Document};
use crate::report::Outcome;

use super::Rule;

/// The file name must signal a recognized document type.
pub struct FilenameSignalsType;

impl Rule for FilenameSignalsType {
    fn name(&self) -> &'static str {
        "filename-signals-type"
    }

    fn applies_to(&self, _doc_type: DocType) -> bool {
        true
    }

    fn check(&self, doc: &Document, _style: &StyleConfig) -> Vec<Outcome> {
        let outcome = if doc.doc_type() == DocType::Unknown {
            Outcome::fail(format!(
                "{}: file name does not signal a document type",
                doc.file_name()
            ))
        } else {
            Outcome::pass(format!(
                "{}: file name signals the '{}' type",
                doc.file_name(),
                doc.doc_type()
            ))
        };
        vec![outcome]
    }
}

/// Procedure modules must contain at least one numbered step.
pub struct StepsRequired;

impl Rule for StepsRequired {
    fn name(&self) -> &'static str {
        "steps-required"
    }

    fn applies_to(&self, doc_type: DocType) -> bool {
        doc_type == DocType::Procedure
    }

    fn check(&self, doc: &Document, _style: &StyleConfig) -> Vec<Outcome> {
        let outcome = if doc.has_steps() {
            Outcome::pass(format!(
                "{}: procedure module contains at least one step",
                doc.file_name()
            ))
        } else {
            Outcome::fail(format!(
                "{}: no step found in procedure module",
                doc.file_name()
            ))
        };
        vec![outcome]
    }
}

/// Concept and reference modules must not contain numbered steps.
pub struct StepsForbidden;

impl Rule for StepsForbidden {
    fn name(&self) -> &'static str {
        "steps-forbidden"
    }

    fn applies_to(&self, doc_type: DocType) -> bool {
        matches!(doc_type, DocType::Concept | DocType::Reference)
    }

    fn check(&self, doc: &Document, _style: &StyleConfig) -> Vec<Outcome> {
        let outcome = if doc.has_steps() {
            Outcome::fail(format!(
                "{}: step found in a {} module; steps belong in procedure modules",
                doc.file_name(),
                doc.doc_type()
            ))
        } else {
            Outcome::pass(format!(
                "{}: {} module contains no steps",
                doc.file_name(),
                doc.doc_type()
            ))
        };
        vec![outcome]
    }
}
