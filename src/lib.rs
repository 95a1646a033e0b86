//! # emdoc
//!
//! Extracts documentation fragments embedded as sentinel comments in
//! source files and renders them into output documents via template
//! placeholder substitution.
//!
//! Source annotations:
//! - `/*{ name` ... `}*/` captures a block of text under `name`
//! - `//!` switches the active extractor list
//! - `//^` switches the active decorator list
//! - `//*` captures one item through the active extractors
//! - `//>` accumulates description text for the next item
//!
//! Templates reference captured values with `@name` or `@name|command`.

pub mod emdoc;
