//! Document type classification from file names.
//!
//! Modular documentation signals a file's role through its name: type
//! prefixes (`con_`, `ref_`, `proc_`, `assembly_`), the assembly entry point
//! `master.<ext>`, and the attribute-file conventions (`attributes.<ext>`,
//! `local-attributes.<ext>`). Classification is a pure function of the base
//! name; the directory part is ignored.

use std::fmt;

/// The inferred role of a documentation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    Concept,
    Reference,
    Procedure,
    Assembly,
    Master,
    Attributes,
    Unknown,
}

impl DocType {
    /// Classify a file by its base name. Prefixes take priority over the
    /// `master` and attributes-file conventions.
    pub fn classify(file_name: &str) -> DocType {
        if file_name.starts_with("con_") {
            return DocType::Concept;
        }
        if file_name.starts_with("ref_") {
            return DocType::Reference;
        }
        if file_name.starts_with("proc_") {
            return DocType::Procedure;
        }
        if file_name.starts_with("assembly_") {
            return DocType::Assembly;
        }

        let stem = match file_name.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => return DocType::Unknown,
        };

        if stem == "master" {
            return DocType::Master;
        }
        if stem == "attributes" || stem.ends_with("-attributes") {
            return DocType::Attributes;
        }

        DocType::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Concept => "concept",
            DocType::Reference => "reference",
            DocType::Procedure => "procedure",
            DocType::Assembly => "assembly",
            DocType::Master => "master",
            DocType::Attributes => "attributes",
            DocType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn prefixes_classify_module_types() {
        assert_eq!(DocType::classify("con_overview.adoc"), DocType::Concept);
        assert_eq!(DocType::classify("ref_settings.adoc"), DocType::Reference);
        assert_eq!(DocType::classify("proc_installing.adoc"), DocType::Procedure);
        assert_eq!(
            DocType::classify("assembly_getting-started.adoc"),
            DocType::Assembly
        );
    }

    #[test]
    fn master_and_attribute_conventions() {
        assert_eq!(DocType::classify("master.adoc"), DocType::Master);
        assert_eq!(DocType::classify("master.xml"), DocType::Master);
        assert_eq!(DocType::classify("attributes.adoc"), DocType::Attributes);
        assert_eq!(
            DocType::classify("local-attributes.adoc"),
            DocType::Attributes
        );
    }

    #[test]
    fn prefix_wins_over_other_conventions() {
        assert_eq!(DocType::classify("proc_master.adoc"), DocType::Procedure);
        assert_eq!(DocType::classify("con_attributes.adoc"), DocType::Concept);
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(DocType::classify("overview.adoc"), DocType::Unknown);
        assert_eq!(DocType::classify("masterpiece.adoc"), DocType::Unknown);
        assert_eq!(DocType::classify("README"), DocType::Unknown);
        assert_eq!(DocType::classify(""), DocType::Unknown);
    }

    proptest! {
        #[test]
        fn prop_prefixed_names_always_classify(name in "[a-z][a-z0-9-]{0,20}\\.adoc") {
            prop_assert_eq!(DocType::classify(&format!("con_{}", name)), DocType::Concept);
            prop_assert_eq!(DocType::classify(&format!("ref_{}", name)), DocType::Reference);
            prop_assert_eq!(DocType::classify(&format!("proc_{}", name)), DocType::Procedure);
            prop_assert_eq!(DocType::classify(&format!("assembly_{}", name)), DocType::Assembly);
        }

        #[test]
        fn prop_classify_never_panics(name in "\\PC{0,40}") {
            let _ = DocType::classify(&name);
        }
    }
}
