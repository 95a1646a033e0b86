//! Test support factories shared by unit and integration tests.

use crate::emdoc::config::Presets;
use crate::emdoc::context::ParseContext;
use crate::emdoc::scanning::scan_file;

/// Scan a source snippet into a fresh context with no presets.
pub fn parsed(source: &str) -> ParseContext {
    let mut ctx = ParseContext::new();
    scan_file(&mut ctx, source, &Presets::default()).expect("source to scan");
    ctx
}

/// A context whose named values carry only a default payload.
pub fn with_defaults(pairs: &[(&str, &str)]) -> ParseContext {
    let mut ctx = ParseContext::new();
    for (name, payload) in pairs {
        ctx.add_val(name, "", payload, &[], "");
    }
    ctx
}

/// A context with one value holding keyed items: (key, payload, comment).
pub fn with_items(name: &str, items: &[(&str, &str, &str)]) -> ParseContext {
    let mut ctx = ParseContext::new();
    for (key, payload, comment) in items {
        ctx.add_val(name, key, payload, &[], comment);
    }
    ctx
}
