//! Per-run parsing state threaded through every scanner call.
//!
//! All cross-line state lives here: the active extractor and decorator
//! lists, the pending description buffer, and the value store. Keeping
//! it an explicit argument means several files and several template runs
//! can be processed without cross-contamination.

use crate::emdoc::decorating::Decorator;
use crate::emdoc::extracting::Extractor;
use crate::emdoc::store::{Item, ValueStore};
use log::info;

#[derive(Debug, Default)]
pub struct ParseContext {
    pub pending_comment: String,
    pub extractors: Vec<Extractor>,
    pub decorators: Vec<Decorator>,
    pub values: ValueStore,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-run state. Global-prefixed values survive.
    pub fn reset(&mut self) {
        self.values.retain_globals();
        self.extractors.clear();
        self.decorators.clear();
        self.pending_comment.clear();
    }

    /// Record one captured item under `name`.
    ///
    /// A blank inline comment consumes (and clears) the pending
    /// description buffer. A non-empty key appends to the value's item
    /// list; the default item is overwritten either way.
    pub fn add_val(
        &mut self,
        name: &str,
        key: &str,
        payload: &str,
        extracted: &[String],
        inline_comment: &str,
    ) {
        let comment = if inline_comment.trim().is_empty() {
            std::mem::take(&mut self.pending_comment)
        } else {
            inline_comment.to_string()
        };

        let item = Item {
            key: key.to_string(),
            payload: payload.to_string(),
            comment,
            extracted: extracted.to_vec(),
        };

        let value = self.values.get_or_create(name);
        if !key.is_empty() {
            value.items.push(item.clone());
        }
        value.default = item;

        info!("added val: {}.{}={}", name, key, payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_overwrites_default_without_appending() {
        let mut ctx = ParseContext::new();
        ctx.add_val("name", "", "first", &[], "");
        ctx.add_val("name", "", "second", &[], "");

        let value = ctx.values.get("name").unwrap();
        assert!(value.items.is_empty());
        assert_eq!(value.default.payload, "second");
    }

    #[test]
    fn keyed_items_append_and_overwrite_default() {
        let mut ctx = ParseContext::new();
        ctx.add_val("name", "a", "1", &[], "");
        ctx.add_val("name", "b", "2", &[], "");

        let value = ctx.values.get("name").unwrap();
        assert_eq!(value.items.len(), 2);
        assert_eq!(value.items[0].key, "a");
        assert_eq!(value.items[1].key, "b");
        assert_eq!(value.default.key, "b");
    }

    #[test]
    fn blank_inline_comment_drains_pending_buffer() {
        let mut ctx = ParseContext::new();
        ctx.pending_comment = "accumulated\n".to_string();
        ctx.add_val("name", "k", "p", &[], "  ");

        assert_eq!(ctx.values.get("name").unwrap().default.comment, "accumulated\n");
        assert_eq!(ctx.pending_comment, "");
    }

    #[test]
    fn inline_comment_leaves_pending_buffer_alone() {
        let mut ctx = ParseContext::new();
        ctx.pending_comment = "accumulated\n".to_string();
        ctx.add_val("name", "k", "p", &[], "inline note");

        assert_eq!(ctx.values.get("name").unwrap().default.comment, "inline note");
        assert_eq!(ctx.pending_comment, "accumulated\n");
    }
}
