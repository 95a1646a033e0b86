//! Line scanner and sentinel dispatch.
//!
//! Walks a source file line by line. Each line is checked for the four
//! start sentinels in one pass; whichever literal occurs earliest in the
//! line wins, so no sentinel takes priority by declaration order.
//! Description text (`//>`) is harvested on every cursor advance,
//! whatever else the line meant.
//!
//! Annotation vocabulary:
//!
//! ```text
//! /*{ name        opens a block captured verbatim until a }*/ line
//! //!<specs>      switches the active extractor list
//! //^<specs>      switches the active decorator list
//! //*             captures one item through the active extractors
//! //> text        appends text to the pending description buffer
//! ```

use crate::emdoc::config::Presets;
use crate::emdoc::context::ParseContext;
use crate::emdoc::decorating::Decorator;
use crate::emdoc::error::EmdocError;
use crate::emdoc::extracting::Extractor;
use log::info;
use std::collections::BTreeMap;

pub const TERM_BLOCK_START: &str = "/*{";
pub const TERM_BLOCK_END: &str = "}*/";
pub const TERM_EXTRACTOR: &str = "//!";
pub const TERM_DECORATOR: &str = "//^";
pub const TERM_ITEM: &str = "//*";
pub const TERM_DESC: &str = "//>";

const START_TERMS: [&str; 4] = [TERM_BLOCK_START, TERM_EXTRACTOR, TERM_DECORATOR, TERM_ITEM];

/// Scan one source file, accumulating captures into the context.
pub fn scan_file(ctx: &mut ParseContext, source: &str, presets: &Presets) -> Result<(), EmdocError> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut pos = 0;
    while pos < lines.len() {
        pos = scan_line(ctx, &lines, pos, presets)?;
    }
    Ok(())
}

fn scan_line(
    ctx: &mut ParseContext,
    lines: &[&str],
    pos: usize,
    presets: &Presets,
) -> Result<usize, EmdocError> {
    if let Some((at, term)) = find_start_term(lines[pos]) {
        return match term {
            TERM_BLOCK_START => scan_block(ctx, lines, pos),
            TERM_EXTRACTOR => switch_extractors(ctx, lines, pos, at, presets),
            TERM_DECORATOR => switch_decorators(ctx, lines, pos, at, presets),
            TERM_ITEM => capture_item(ctx, lines, pos, at),
            other => Err(EmdocError::MalformedTerm(format!("unknown term: {}", other))),
        };
    }
    Ok(advance(ctx, lines, pos))
}

/// Earliest start-sentinel occurrence in the line, by byte position.
fn find_start_term(line: &str) -> Option<(usize, &'static str)> {
    START_TERMS
        .iter()
        .filter_map(|term| line.find(term).map(|at| (at, *term)))
        .min_by_key(|(at, _)| *at)
}

/// Consume the current line: harvest trailing description text, move on.
fn advance(ctx: &mut ParseContext, lines: &[&str], pos: usize) -> usize {
    if let Some(at) = lines[pos].find(TERM_DESC) {
        ctx.pending_comment
            .push_str(lines[pos][at + TERM_DESC.len()..].trim());
        ctx.pending_comment.push('\n');
    }
    pos + 1
}

/// `/*{ name` up to (exclusive) a line containing `}*/`. The body becomes
/// the named value's default payload; the end line is left for the main
/// loop, which may dispatch further sentinels on it.
fn scan_block(ctx: &mut ParseContext, lines: &[&str], pos: usize) -> Result<usize, EmdocError> {
    let name = lines[pos]
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| {
            EmdocError::MalformedTerm(format!("block start without a name: {:?}", lines[pos].trim()))
        })?
        .to_string();

    let mut pos = advance(ctx, lines, pos);
    let mut body: Vec<&str> = Vec::new();
    while pos < lines.len() && !lines[pos].contains(TERM_BLOCK_END) {
        body.push(lines[pos]);
        pos = advance(ctx, lines, pos);
    }

    ctx.add_val(&name, "", &body.join("\n"), &[], "");
    Ok(pos)
}

fn switch_extractors(
    ctx: &mut ParseContext,
    lines: &[&str],
    pos: usize,
    at: usize,
    presets: &Presets,
) -> Result<usize, EmdocError> {
    let rest = &lines[pos][at + TERM_EXTRACTOR.len()..];
    let specs = resolve_specs(rest, &presets.extractors);
    if specs.is_empty() {
        return Err(EmdocError::InvalidSpec("empty extractor switch".to_string()));
    }

    let mut extractors = Vec::with_capacity(specs.len().max(3));
    for spec in &specs {
        extractors.push(Extractor::build(spec)?);
    }
    // Positions name/key/payload must always exist.
    if extractors.len() == 1 {
        extractors.push(Extractor::Constant(String::new()));
    }
    if extractors.len() == 2 {
        extractors.push(Extractor::Constant("undefined".to_string()));
    }

    info!("extractors switched: {}", specs.join(", "));
    ctx.extractors = extractors;
    ctx.decorators.clear();
    Ok(advance(ctx, lines, pos))
}

fn switch_decorators(
    ctx: &mut ParseContext,
    lines: &[&str],
    pos: usize,
    at: usize,
    presets: &Presets,
) -> Result<usize, EmdocError> {
    let rest = &lines[pos][at + TERM_DECORATOR.len()..];
    let specs = resolve_specs(rest, &presets.decorators);
    if specs.is_empty() {
        return Err(EmdocError::InvalidSpec("empty decorator switch".to_string()));
    }

    let mut decorators = Vec::with_capacity(specs.len());
    for spec in &specs {
        decorators.push(Decorator::build(spec)?);
    }

    info!("decorators switched: {}", specs.join(", "));
    ctx.decorators = decorators;
    Ok(advance(ctx, lines, pos))
}

fn capture_item(
    ctx: &mut ParseContext,
    lines: &[&str],
    pos: usize,
    at: usize,
) -> Result<usize, EmdocError> {
    let line = lines[pos];
    if ctx.extractors.is_empty() {
        return Err(EmdocError::MalformedTerm(format!(
            "item marker with no active extractors: {:?}",
            line.trim()
        )));
    }
    let rest = &line[at + TERM_ITEM.len()..];

    // The marker itself never counts as a field.
    let input = format!("{}{}", &line[..at], rest);
    let mut fields: Vec<String> = ctx.extractors.iter().map(|e| e.apply(&input)).collect();
    for (field, decorator) in fields.iter_mut().zip(&ctx.decorators) {
        let decorated = decorator.apply(field);
        *field = decorated;
    }

    let name = fields.first().cloned().unwrap_or_default();
    let key = fields.get(1).cloned().unwrap_or_default();
    let payload = fields.get(2).cloned().unwrap_or_default();

    info!("item found {}.{}", name, key);
    ctx.add_val(&name, &key, &payload, &fields, rest.trim());
    Ok(advance(ctx, lines, pos))
}

/// A single token naming a configured preset expands to the preset's
/// spec string; anything else is taken as inline specs.
fn resolve_specs<'a>(rest: &'a str, presets: &'a BTreeMap<String, String>) -> Vec<&'a str> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if let [single] = tokens.as_slice() {
        if let Some(preset) = presets.get(*single) {
            return preset.split_whitespace().collect();
        }
    }
    tokens
}
