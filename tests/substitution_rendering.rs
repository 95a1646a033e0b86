//! Rendering commands over prepared value stores.

use emdoc::emdoc::substituting::substitute;
use emdoc::emdoc::testing::{with_defaults, with_items};

#[test]
fn plain_renders_the_default_payload() {
    let mut ctx = with_defaults(&[("count", "42")]);
    assert_eq!(substitute(&mut ctx, "Value is @count").unwrap(), "Value is 42");
}

#[test]
fn options_join_payloads_with_pipes() {
    let mut ctx = with_items("items", &[("k1", "a", ""), ("k2", "b", ""), ("k3", "c", "")]);
    let out = substitute(&mut ctx, "@items|options").unwrap();
    insta::assert_snapshot!(out, @"a|b|c");
}

#[test]
fn links_join_with_commas() {
    let mut ctx = with_items("pages", &[("a", "u1", ""), ("b", "u2", "")]);
    let out = substitute(&mut ctx, "@pages|links").unwrap();
    insta::assert_snapshot!(out, @"[a](u1), [b](u2)");
}

#[test]
fn links_list_concatenates_indented_entries() {
    let mut ctx = with_items("pages", &[("a", "u1", ""), ("b", "u2", "")]);
    let out = substitute(&mut ctx, "@pages|links-list").unwrap();
    assert_eq!(out, "  * [a](u1)\n  * [b](u2)\n");
}

#[test]
fn comment_list_renders_bullets() {
    let mut ctx = with_items("notes", &[("k1", "p1", "first"), ("k2", "p2", "second")]);
    let out = substitute(&mut ctx, "@notes|comment-list").unwrap();
    assert_eq!(out, "* first\n* second");
}

#[test]
fn signature_list_renders_code_styled_payloads() {
    let mut ctx = with_items(
        "fns",
        &[("one", "fn one()", "first"), ("two", "fn two()", "second")],
    );
    let out = substitute(&mut ctx, "@fns|signature-list").unwrap();
    assert_eq!(out, "`fn one()`<br>first<br><br>\n`fn two()`<br>second");
}

#[test]
fn description_renders_headed_sections() {
    let mut ctx = with_items("api", &[("GET /users", "u", "List users"), ("POST /users", "u", "Create a user")]);
    let out = substitute(&mut ctx, "@api|description").unwrap();
    assert_eq!(
        out,
        "### GET /users\n\nList users\n### POST /users\n\nCreate a user"
    );
}

#[test]
fn contents_table_renders_heading_blurb_and_link() {
    let mut ctx = with_items("toc", &[("Alpha", "docs/alpha.md", "Intro blurb")]);
    let out = substitute(&mut ctx, "@toc|contents-table").unwrap();
    assert_eq!(out, "## Alpha\nIntro blurb\n\n[More details...](docs/alpha.md)");
}

#[test]
fn commands_compose_inside_one_template() {
    let mut ctx = with_items("opts", &[("a", "1", ""), ("b", "2", "")]);
    ctx.add_val("title", "", "Options", &[], "");

    let out = substitute(&mut ctx, "# @title\n\nAllowed: @opts|options\n").unwrap();
    assert_eq!(out, "# Options\n\nAllowed: 1|2\n");
}
