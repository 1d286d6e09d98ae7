//! Wording rules: identifier reusability, abbreviation usage in headings,
//! and deprecated terminology.

use regex::Regex;

use crate::config::StyleConfig;
use crate::document::{DocType, Document};
use crate::report::Outcome;

use super::Rule;

/// Every declared identifier must embed the `{context}` placeholder so the
/// section stays addressable when the module is reused in another assembly.
pub struct IdentifierReusable;

const CONTEXT_PLACEHOLDER: &str = "{context}";

impl Rule for IdentifierReusable {
    fn name(&self) -> &'static str {
        "identifier-reusable"
    }

    fn applies_to(&self, _doc_type: DocType) -> bool {
        true
    }

    fn check(&self, doc: &Document, _style: &StyleConfig) -> Vec<Outcome> {
        doc.identifiers()
            .into_iter()
            .map(|id| {
                if id.contains(CONTEXT_PLACEHOLDER) {
                    Outcome::pass(format!(
                        "{}: identifier '{}' includes the context placeholder",
                        doc.file_name(),
                        id
                    ))
                } else {
                    Outcome::fail(format!(
                        "{}: identifier '{}' does not include the {} placeholder",
                        doc.file_name(),
                        id,
                        CONTEXT_PLACEHOLDER
                    ))
                }
            })
            .collect()
    }
}

/// Headings must use a configured abbreviation rather than its expansion.
///
/// A heading that uses neither form produces no outcome; only
/// abbreviation-present passes and expansion-present failures are worth
/// reporting.
pub struct HeadingUsesAbbreviation;

impl Rule for HeadingUsesAbbreviation {
    fn name(&self) -> &'static str {
        "heading-uses-abbreviation"
    }

    fn applies_to(&self, _doc_type: DocType) -> bool {
        true
    }

    fn check(&self, doc: &Document, style: &StyleConfig) -> Vec<Outcome> {
        let mut outcomes = Vec::new();

        for heading in doc.headings() {
            for abbr in &style.abbreviations {
                if heading.contains(&abbr.long) {
                    outcomes.push(Outcome::fail(format!(
                        "{}: heading uses '{}' instead of '{}': {}",
                        doc.file_name(),
                        abbr.long,
                        abbr.short,
                        heading
                    )));
                } else if word_present(&heading, &abbr.short) {
                    outcomes.push(Outcome::pass(format!(
                        "{}: heading uses the abbreviation '{}': {}",
                        doc.file_name(),
                        abbr.short,
                        heading
                    )));
                }
            }
        }

        outcomes
    }
}

/// The content must not mention any term from the deprecated-terminology
/// glossary.
pub struct NoDeprecatedTerminology;

impl Rule for NoDeprecatedTerminology {
    fn name(&self) -> &'static str {
        "no-deprecated-terminology"
    }

    fn applies_to(&self, _doc_type: DocType) -> bool {
        true
    }

    fn check(&self, doc: &Document, style: &StyleConfig) -> Vec<Outcome> {
        let mut outcomes = Vec::new();

        for (old, new) in &style.terminology {
            if term_present(doc.content(), old) {
                outcomes.push(Outcome::fail(format!(
                    "{}: deprecated term '{}' found; use '{}' instead",
                    doc.file_name(),
                    old,
                    new
                )));
            }
        }

        if outcomes.is_empty() {
            outcomes.push(Outcome::pass(format!(
                "{}: no deprecated terminology found",
                doc.file_name()
            )));
        }

        outcomes
    }
}

/// Case-sensitive whole-word match, for abbreviations.
fn word_present(text: &str, word: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(word));
    Regex::new(&pattern)
        .expect("Word regex should compile")
        .is_match(text)
}

/// Case-insensitive whole-word match, for glossary terms.
fn term_present(text: &str, term: &str) -> bool {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
    Regex::new(&pattern)
        .expect("Term regex should compile")
        .is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Status;
    use std::path::Path;

    fn doc(raw: &str) -> Document {
        Document::from_raw(Path::new("con_example.adoc"), raw)
    }

    #[test]
    fn one_outcome_per_identifier() {
        let d = doc("[id='good_{context}']\n[id='bad']\n[id='also_{context}']\n");
        let outcomes = IdentifierReusable.check(&d, &StyleConfig::default());
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].status, Status::Pass);
        assert_eq!(outcomes[1].status, Status::Fail);
        assert_eq!(outcomes[2].status, Status::Pass);
    }

    #[test]
    fn no_identifiers_no_outcomes() {
        let d = doc("plain text\n");
        assert!(IdentifierReusable.check(&d, &StyleConfig::default()).is_empty());
    }

    #[test]
    fn heading_with_expansion_fails() {
        let d = doc("= Installing Red Hat Enterprise Linux\n");
        let outcomes = HeadingUsesAbbreviation.check(&d, &StyleConfig::default());
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, Status::Fail);
        assert!(outcomes[0].message.contains("RHEL"));
    }

    #[test]
    fn heading_with_abbreviation_passes() {
        let d = doc("= Installing RHEL\n");
        let outcomes = HeadingUsesAbbreviation.check(&d, &StyleConfig::default());
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, Status::Pass);
    }

    #[test]
    fn heading_with_neither_form_is_silent() {
        let d = doc("= Installing the product\n");
        assert!(HeadingUsesAbbreviation
            .check(&d, &StyleConfig::default())
            .is_empty());
    }

    #[test]
    fn abbreviation_must_match_whole_word() {
        // "OCPX" must not count as a use of "OCP"
        let d = doc("= About OCPX\n");
        assert!(HeadingUsesAbbreviation
            .check(&d, &StyleConfig::default())
            .is_empty());
    }

    #[test]
    fn deprecated_term_fails_with_replacement() {
        let d = doc("Add the host to the whitelist.\n");
        let outcomes = NoDeprecatedTerminology.check(&d, &StyleConfig::default());
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, Status::Fail);
        assert!(outcomes[0].message.contains("allowlist"));
    }

    #[test]
    fn term_match_is_case_insensitive() {
        let d = doc("Never use a Blacklist here.\n");
        let outcomes = NoDeprecatedTerminology.check(&d, &StyleConfig::default());
        assert_eq!(outcomes[0].status, Status::Fail);
    }

    #[test]
    fn clean_content_passes_once() {
        let d = doc("Nothing objectionable.\n");
        let outcomes = NoDeprecatedTerminology.check(&d, &StyleConfig::default());
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, Status::Pass);
    }

    #[test]
    fn multiple_deprecated_terms_each_fail() {
        let d = doc("The whitelist and the blacklist.\n");
        let outcomes = NoDeprecatedTerminology.check(&d, &StyleConfig::default());
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.status == Status::Fail));
    }
}
