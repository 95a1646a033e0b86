//! Emdocfile loading.
//!
//! The configuration is a single YAML file:
//!
//! ```yaml
//! docs:
//!   - files: ["src/**/*.rs"]
//!     template: "docs/*.emdoc.md"
//!     no_footer: false
//! extractors:
//!   fn-list: '_ #2 /fn\s+(\w+)/'
//! decorators:
//!   code: '/`%s`/ _'
//! ```
//!
//! `docs` entries are processed in order; `files` globs are resolved
//! relative to each matched template's directory. The two preset tables
//! map names to spec strings usable from `//!` and `//^` switch lines.

use crate::emdoc::error::EmdocError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct EmdocConfig {
    pub docs: Vec<DocEntry>,
    #[serde(default)]
    pub extractors: BTreeMap<String, String>,
    #[serde(default)]
    pub decorators: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocEntry {
    pub files: Vec<String>,
    pub template: String,
    #[serde(default)]
    pub no_footer: bool,
}

/// Preset spec tables handed to the scanner.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub extractors: BTreeMap<String, String>,
    pub decorators: BTreeMap<String, String>,
}

impl EmdocConfig {
    pub fn from_string(text: &str) -> Result<Self, EmdocError> {
        serde_yaml::from_str(text).map_err(|e| EmdocError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EmdocError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EmdocError::Io(format!("can't read config {}: {}", path.display(), e)))?;
        Self::from_string(&text)
    }

    pub fn presets(&self) -> Presets {
        Presets {
            extractors: self.extractors.clone(),
            decorators: self.decorators.clone(),
        }
    }
}
