//! Template placeholder substitution.
//!
//! Templates are plain text with `@name` or `@name|command` directives;
//! `command` defaults to `plain`. A directive token may contain ASCII
//! letters, digits, `|`, `.`, `-`, and `@`; a token starting with `@`
//! (i.e. a doubled sentinel) is emitted literally, which is the escape
//! for writing `@` in output. A trailing `@` with nothing after it is
//! copied verbatim.

use crate::emdoc::commands;
use crate::emdoc::context::ParseContext;
use crate::emdoc::error::EmdocError;
use log::info;

/// Placeholder sentinel character.
pub const TERM_INSERT: char = '@';

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'|' || b == b'.' || b == b'-' || b == b'@'
}

/// Expand every placeholder in `content` against the value store.
pub fn substitute(ctx: &mut ParseContext, content: &str) -> Result<String, EmdocError> {
    let mut result = String::new();
    let mut rest = content;
    while !rest.is_empty() {
        let at = match rest.find(TERM_INSERT) {
            Some(at) if at + 1 < rest.len() => at,
            _ => {
                result.push_str(rest);
                break;
            }
        };
        result.push_str(&rest[..at]);
        rest = &rest[at + 1..];

        let token_end = rest
            .bytes()
            .position(|b| !is_token_byte(b))
            .unwrap_or(rest.len());
        let token = &rest[..token_end];
        rest = &rest[token_end..];

        if token.is_empty() {
            result.push(TERM_INSERT);
            continue;
        }
        if token.starts_with(TERM_INSERT) {
            result.push_str(token);
            continue;
        }

        let mut parts = token.split('|');
        let name = parts.next().unwrap_or_default();
        let command = parts.next().unwrap_or("plain");

        info!("command found: {}/{}", command, name);
        result.push_str(&commands::run(ctx, command, name)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_sentinels_is_unchanged() {
        let mut ctx = ParseContext::new();
        let text = "plain text, no directives.";
        assert_eq!(substitute(&mut ctx, text).unwrap(), text);
    }

    #[test]
    fn doubled_sentinel_escapes() {
        let mut ctx = ParseContext::new();
        assert_eq!(substitute(&mut ctx, "a@@bold").unwrap(), "a@bold");
        assert_eq!(substitute(&mut ctx, "@@").unwrap(), "@");
    }

    #[test]
    fn trailing_sentinel_is_copied() {
        let mut ctx = ParseContext::new();
        assert_eq!(substitute(&mut ctx, "cost@").unwrap(), "cost@");
    }

    #[test]
    fn bare_sentinel_before_non_token_text_is_copied() {
        let mut ctx = ParseContext::new();
        assert_eq!(substitute(&mut ctx, "@ nothing").unwrap(), "@ nothing");
    }

    #[test]
    fn default_payload_is_expanded_recursively() {
        let mut ctx = ParseContext::new();
        ctx.add_val("a", "", "see @b", &[], "");
        ctx.add_val("b", "", "B", &[], "");
        assert_eq!(substitute(&mut ctx, "@a").unwrap(), "see B");
    }

    #[test]
    fn missing_value_is_fatal() {
        let mut ctx = ParseContext::new();
        let err = substitute(&mut ctx, "@missing").unwrap_err();
        assert_eq!(err, EmdocError::UnknownValue("missing".to_string()));
    }
}
