//! Decorators wrap extracted strings in surrounding text.
//!
//! Specs: `/pattern/` with a single `%s` insertion slot, or `_` for the
//! identity decorator.

use crate::emdoc::error::EmdocError;

/// Insertion slot inside a pattern spec.
pub const SLOT: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decorator {
    Identity,
    Pattern(String),
}

impl Decorator {
    pub fn build(spec: &str) -> Result<Self, EmdocError> {
        if spec.is_empty() {
            return Err(EmdocError::InvalidSpec("empty decorator spec".to_string()));
        }
        if spec == "_" {
            return Ok(Decorator::Identity);
        }
        if let Some(stripped) = spec.strip_prefix('/') {
            let inner = stripped.strip_suffix('/').ok_or_else(|| {
                EmdocError::InvalidSpec(format!("unterminated pattern: {}", spec))
            })?;
            if inner.matches(SLOT).count() != 1 {
                return Err(EmdocError::InvalidSpec(format!(
                    "pattern needs exactly one {} slot: {}",
                    SLOT, spec
                )));
            }
            return Ok(Decorator::Pattern(inner.to_string()));
        }
        Err(EmdocError::InvalidSpec(format!(
            "unknown decorator spec: {}",
            spec
        )))
    }

    /// Empty input stays empty; decorators never invent text.
    pub fn apply(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        match self {
            Decorator::Identity => value.to_string(),
            Decorator::Pattern(pattern) => pattern.replacen(SLOT, value, 1),
        }
    }
}
