//! Extractors derive one string from one source line.
//!
//! An extractor is built from a short spec token:
//!
//! - `#N` — the 1-based Nth whitespace-separated field of the line
//! - `/regex/` — capture group 1 of the first match
//! - `"text"` — the quoted literal
//! - `_` — the empty string
//! - any other bare word — that word as a literal
//!
//! Extraction itself never fails: a missing field, a non-matching
//! pattern, or an absent capture group all yield the empty string.

use crate::emdoc::error::EmdocError;
use once_cell::sync::Lazy;
use regex::Regex;

static FIELD_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(\d+)$").expect("field index pattern"));

#[derive(Debug, Clone)]
pub enum Extractor {
    Constant(String),
    FieldSplit(usize),
    RegexGroup(Regex),
}

impl Extractor {
    pub fn build(spec: &str) -> Result<Self, EmdocError> {
        if spec.is_empty() {
            return Err(EmdocError::InvalidSpec("empty extractor spec".to_string()));
        }
        if spec == "_" {
            return Ok(Extractor::Constant(String::new()));
        }
        if spec.starts_with('#') {
            let caps = FIELD_INDEX.captures(spec).ok_or_else(|| {
                EmdocError::InvalidSpec(format!("field extractor has wrong field index: {}", spec))
            })?;
            let index: usize = caps[1].parse().map_err(|_| {
                EmdocError::InvalidSpec(format!("field extractor has wrong field index: {}", spec))
            })?;
            if index == 0 {
                return Err(EmdocError::InvalidSpec(format!(
                    "field index is 1-based: {}",
                    spec
                )));
            }
            return Ok(Extractor::FieldSplit(index));
        }
        if spec.starts_with('/') {
            let inner = delimited(spec, '/').ok_or_else(|| {
                EmdocError::InvalidSpec(format!("unterminated pattern: {}", spec))
            })?;
            let regex = Regex::new(inner)
                .map_err(|e| EmdocError::InvalidSpec(format!("bad pattern {}: {}", spec, e)))?;
            return Ok(Extractor::RegexGroup(regex));
        }
        if spec.starts_with('"') {
            let inner = delimited(spec, '"').ok_or_else(|| {
                EmdocError::InvalidSpec(format!("unterminated literal: {}", spec))
            })?;
            return Ok(Extractor::Constant(inner.to_string()));
        }
        Ok(Extractor::Constant(spec.to_string()))
    }

    pub fn apply(&self, line: &str) -> String {
        match self {
            Extractor::Constant(text) => text.clone(),
            Extractor::FieldSplit(index) => line
                .split_whitespace()
                .nth(index - 1)
                .unwrap_or("")
                .to_string(),
            Extractor::RegexGroup(regex) => regex
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|group| group.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Interior of `spec` if it both starts and ends with `delim`.
fn delimited(spec: &str, delim: char) -> Option<&str> {
    spec.strip_prefix(delim)?.strip_suffix(delim)
}
