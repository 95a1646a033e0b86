//! Rendering commands invoked by template placeholders.
//!
//! Each command turns a value's items (or its default) into one string.
//! Before formatting an item, its extracted fields are re-registered in
//! the store under the positional names "1", "2", ... so the item's own
//! comment and payload text can reference them as `@1`, `@2`, ...

use crate::emdoc::context::ParseContext;
use crate::emdoc::error::EmdocError;
use crate::emdoc::store::{Item, Value};
use crate::emdoc::substituting::substitute;

pub fn run(ctx: &mut ParseContext, command: &str, name: &str) -> Result<String, EmdocError> {
    let value: Value = ctx
        .values
        .get(name)
        .cloned()
        .ok_or_else(|| EmdocError::UnknownValue(name.to_string()))?;

    match command {
        "plain" => {
            // Positional field names short-circuit the recursion;
            // without this, a comment mentioning @1 would re-expand
            // forever once a command re-registers field "1".
            if is_positional(name) {
                Ok(value.default.payload)
            } else {
                substitute(ctx, &value.default.payload)
            }
        }
        "description" => {
            let mut out = Vec::new();
            for item in &value.items {
                register_fields(ctx, item);
                out.push(format!("### {}", item.key));
                out.push(String::new());
                out.push(substitute(ctx, &item.comment)?);
            }
            Ok(out.join("\n"))
        }
        "comment-list" => {
            let mut out = Vec::new();
            for item in &value.items {
                register_fields(ctx, item);
                out.push(format!("* {}", item.comment));
            }
            Ok(out.join("\n"))
        }
        "signature-list" => {
            let mut out = Vec::new();
            for item in &value.items {
                register_fields(ctx, item);
                out.push(format!("`{}`<br>{}", item.payload, item.comment));
            }
            Ok(out.join("<br><br>\n"))
        }
        "options" => {
            let mut out = Vec::new();
            for item in &value.items {
                register_fields(ctx, item);
                out.push(item.payload.clone());
            }
            Ok(out.join("|"))
        }
        "contents-table" => {
            let mut out = Vec::new();
            for item in &value.items {
                register_fields(ctx, item);
                out.push(format!(
                    "## {}\n{}\n\n[More details...]({})",
                    item.key, item.comment, item.payload
                ));
            }
            Ok(out.join("\n"))
        }
        "links" => {
            let mut out = Vec::new();
            for item in &value.items {
                register_fields(ctx, item);
                out.push(format!("[{}]({})", item.key, item.payload));
            }
            Ok(out.join(", "))
        }
        "links-list" => {
            let mut out = String::new();
            for item in &value.items {
                register_fields(ctx, item);
                out.push_str(&format!("  * [{}]({})\n", item.key, item.payload));
            }
            Ok(out)
        }
        _ => Err(EmdocError::UnknownCommand(command.to_string())),
    }
}

fn is_positional(name: &str) -> bool {
    name.len() == 1 && name.as_bytes()[0].is_ascii_digit()
}

fn register_fields(ctx: &mut ParseContext, item: &Item) {
    for (idx, field) in item.extracted.iter().enumerate() {
        ctx.add_val(&(idx + 1).to_string(), "", field, &[], "");
    }
}
