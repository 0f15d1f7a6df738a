//! Integration tests for message parsing.
//!
//! These cover the full surface grammar: text, paired tags, void tags,
//! placeholders, escapes, and the lenient recovery behavior for malformed
//! markup.

use tml::{Node, ParseError, parse};

fn text(s: &str) -> Node {
    Node::Text(s.into())
}

fn tag(name: &str, children: Vec<Node>) -> Node {
    Node::Tag {
        name: name.into(),
        children,
    }
}

fn void(name: &str) -> Node {
    Node::VoidTag { name: name.into() }
}

fn placeholder(name: &str) -> Node {
    Node::Placeholder { name: name.into() }
}

// =============================================================================
// Plain text and placeholders
// =============================================================================

#[test]
fn test_empty_string() {
    assert_eq!(parse("").unwrap(), vec![]);
}

#[test]
fn test_plain_text() {
    assert_eq!(parse("Hello, world!").unwrap(), vec![text("Hello, world!")]);
}

#[test]
fn test_unicode_text() {
    assert_eq!(
        parse("Настройки сохранены").unwrap(),
        vec![text("Настройки сохранены")]
    );
}

#[test]
fn test_placeholder() {
    assert_eq!(
        parse("Hello, %name%!").unwrap(),
        vec![text("Hello, "), placeholder("name"), text("!")]
    );
}

#[test]
fn test_adjacent_placeholders() {
    assert_eq!(
        parse("%a%%b%").unwrap(),
        vec![placeholder("a"), placeholder("b")]
    );
}

#[test]
fn test_escaped_percent() {
    assert_eq!(parse("100%% done").unwrap(), vec![text("100% done")]);
}

#[test]
fn test_escaped_percent_then_placeholder() {
    assert_eq!(
        parse("%%%x%").unwrap(),
        vec![text("%"), placeholder("x")]
    );
}

#[test]
fn test_placeholder_name_is_exact() {
    // Names are whitespace-sensitive; the engine does not trim them.
    assert_eq!(parse("% n %").unwrap(), vec![placeholder(" n ")]);
}

// =============================================================================
// Tags
// =============================================================================

#[test]
fn test_balanced_tag() {
    assert_eq!(
        parse("a <b>c</b> d").unwrap(),
        vec![text("a "), tag("b", vec![text("c")]), text(" d")]
    );
}

#[test]
fn test_empty_tag() {
    assert_eq!(parse("<b></b>").unwrap(), vec![tag("b", vec![])]);
}

#[test]
fn test_nested_tags() {
    assert_eq!(
        parse("<a>x<b>y</b></a>").unwrap(),
        vec![tag("a", vec![text("x"), tag("b", vec![text("y")])])]
    );
}

#[test]
fn test_sibling_tags() {
    assert_eq!(
        parse("<a>x</a><b>y</b>").unwrap(),
        vec![tag("a", vec![text("x")]), tag("b", vec![text("y")])]
    );
}

#[test]
fn test_placeholder_inside_tag() {
    assert_eq!(
        parse("<a>%n% files</a>").unwrap(),
        vec![tag("a", vec![placeholder("n"), text(" files")])]
    );
}

#[test]
fn test_void_tag() {
    assert_eq!(
        parse("line<br/>break").unwrap(),
        vec![text("line"), void("br"), text("break")]
    );
}

#[test]
fn test_void_tag_inside_tag() {
    assert_eq!(
        parse("<p>a<br/>b</p>").unwrap(),
        vec![tag("p", vec![text("a"), void("br"), text("b")])]
    );
}

#[test]
fn test_closing_tag_name_is_trimmed() {
    assert_eq!(
        parse("<b>c</b >").unwrap(),
        vec![tag("b", vec![text("c")])]
    );
    assert_eq!(
        parse("<b>c</ b>").unwrap(),
        vec![tag("b", vec![text("c")])]
    );
}

#[test]
fn test_tag_names_are_case_sensitive() {
    // '<B>' never matches '</b>', so the opener is left dangling.
    assert!(parse("<B>c</b>").is_err());
}

// =============================================================================
// Unbalanced tags
// =============================================================================

#[test]
fn test_unclosed_tag_fails() {
    let err = parse("<b>unclosed").unwrap_err();
    let ParseError::UnbalancedTags { input } = err;
    assert_eq!(input, "<b>unclosed");
}

#[test]
fn test_unmatched_closing_tag_fails() {
    assert!(parse("a</b>").is_err());
}

#[test]
fn test_unclosed_outer_tag_fails() {
    assert!(parse("<a><b>x</b>").is_err());
}

// =============================================================================
// Lenient recovery
//
// The recovery behavior below is deliberate: translated content in the
// wild contains bare '<' and '%' characters, and those degrade to literal
// text instead of failing the parse.
// =============================================================================

#[test]
fn test_bare_less_than_is_text() {
    assert_eq!(parse("50 < 100").unwrap(), vec![text("50 < 100")]);
}

#[test]
fn test_unterminated_tag_at_end_is_text() {
    assert_eq!(parse("oops <b").unwrap(), vec![text("oops <b")]);
}

#[test]
fn test_unterminated_placeholder_at_end_is_text() {
    assert_eq!(parse("100% complete").unwrap(), vec![text("100% complete")]);
}

#[test]
fn test_stray_open_angle_restarts_the_tag() {
    // The abandoned '<b' buffer folds back into text; the fresh '<c>'
    // still parses as a tag.
    assert_eq!(
        parse("a <b<c>x</c>").unwrap(),
        vec![text("a <b"), tag("c", vec![text("x")])]
    );
}

#[test]
fn test_unmatched_inner_opener_becomes_text_child() {
    assert_eq!(
        parse("<a>x<b>y</a>").unwrap(),
        vec![tag("a", vec![text("x"), text("<b>"), text("y")])]
    );
}
