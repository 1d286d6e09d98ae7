//! Validation rule registry and runner.
//!
//! Each rule is a named check conditioned on document type. The runner
//! selects the applicable subset for a document and streams every outcome
//! into the report as it is produced, so output ordering matches evaluation
//! order. Rules are stateless: they read documents and the style
//! configuration but never mutate either, and a failing rule never stops
//! the run.

mod metadata;
mod structure;
mod style;

use crate::config::StyleConfig;
use crate::document::{DocType, Document};
use crate::report::{Outcome, Report};

/// A named validation check conditioned on document type.
///
/// `check` returns one outcome per applicable document, or one outcome per
/// extracted element for per-element rules (identifiers, headings).
pub trait Rule {
    fn name(&self) -> &'static str;

    fn applies_to(&self, doc_type: DocType) -> bool;

    fn check(&self, doc: &Document, style: &StyleConfig) -> Vec<Outcome>;
}

/// Registry of validation rules.
pub struct Registry {
    rules: Vec<Box<dyn Rule>>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a registry with all built-in rules registered.
    pub fn default_rules() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(structure::FilenameSignalsType));
        registry.register(Box::new(metadata::ContextAttributeDefined));
        registry.register(Box::new(metadata::NoInternalAttribute));
        registry.register(Box::new(structure::StepsRequired));
        registry.register(Box::new(structure::StepsForbidden));
        registry.register(Box::new(style::IdentifierReusable));
        registry.register(Box::new(style::HeadingUsesAbbreviation));
        registry.register(Box::new(style::NoDeprecatedTerminology));
        registry.register(Box::new(metadata::AttributesFileLocation));

        registry
    }

    /// Registers a rule.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every applicable rule against one document, streaming outcomes
    /// into the report in evaluation order.
    pub fn run(&self, doc: &Document, style: &StyleConfig, report: &mut Report) {
        for rule in &self.rules {
            if !rule.applies_to(doc.doc_type()) {
                continue;
            }
            for outcome in rule.check(doc, style) {
                report.record(outcome);
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::default_rules()
    }
}
