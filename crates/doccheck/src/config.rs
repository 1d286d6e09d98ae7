//! House style configuration.
//!
//! The word-level rules (deprecated terminology, required abbreviations) and
//! the canonical attributes-file location are data, not code: they ship with
//! built-in defaults and can be overridden per documentation set through a
//! `doccheck.toml` file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// File name probed in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "doccheck.toml";

/// House style settings consumed by the validation rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Directory that canonical attribute files must live in.
    pub attributes_dir: String,

    /// Abbreviations that headings must use instead of their expansions.
    pub abbreviations: Vec<Abbreviation>,

    /// Deprecated term mapped to its replacement.
    pub terminology: BTreeMap<String, String>,
}

/// One abbreviation pair: the short form headings should use and the long
/// form they should not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviation {
    pub short: String,
    pub long: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let mut terminology = BTreeMap::new();
        terminology.insert("whitelist".to_string(), "allowlist".to_string());
        terminology.insert("blacklist".to_string(), "blocklist".to_string());
        terminology.insert("sanity check".to_string(), "confidence check".to_string());

        Self {
            attributes_dir: "common".to_string(),
            abbreviations: vec![
                Abbreviation {
                    short: "RHEL".to_string(),
                    long: "Red Hat Enterprise Linux".to_string(),
                },
                Abbreviation {
                    short: "OCP".to_string(),
                    long: "OpenShift Container Platform".to_string(),
                },
            ],
            terminology,
        }
    }
}

impl StyleConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read style config from {:?}", path))?;

        let config: StyleConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse style config from {:?}", path))?;

        Ok(config)
    }

    /// Resolve the effective configuration: an explicit path if given,
    /// otherwise `./doccheck.toml` when present, otherwise the built-in
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
