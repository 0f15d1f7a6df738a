//! Integration tests for the structural validator.

use tml::{is_structurally_equivalent, parse, strings_structurally_equivalent};

fn equivalent(base: &str, target: &str) -> bool {
    let base = parse(base).unwrap();
    let target = parse(target).unwrap();
    is_structurally_equivalent(&base, &target)
}

// =============================================================================
// Text is never compared
// =============================================================================

#[test]
fn test_translated_text_is_equivalent() {
    assert!(equivalent("<a>hi</a> %n%", "<a>salut</a> %n%"));
}

#[test]
fn test_text_only_messages_are_equivalent() {
    assert!(equivalent("hello", "bonjour"));
    assert!(equivalent("hello", ""));
}

#[test]
fn test_extra_text_runs_do_not_matter() {
    assert!(equivalent("%n%", "environ %n% !"));
}

// =============================================================================
// Order insensitivity per level
// =============================================================================

#[test]
fn test_reordered_siblings_are_equivalent() {
    assert!(equivalent("<a>x</a> %n%", "%n% <a>y</a>"));
}

#[test]
fn test_reordered_children_are_equivalent() {
    assert!(equivalent("<a><b/><c/></a>", "<a><c/><b/></a>"));
}

// =============================================================================
// Dropped or changed structure
// =============================================================================

#[test]
fn test_dropped_tag_is_not_equivalent() {
    assert!(!equivalent("<a>hi</a> %n%", "hi %n%"));
}

#[test]
fn test_dropped_placeholder_is_not_equivalent() {
    assert!(!equivalent("%count% items", "items"));
}

#[test]
fn test_added_placeholder_is_not_equivalent() {
    assert!(!equivalent("%a%", "%a% %b%"));
}

#[test]
fn test_renamed_tag_is_not_equivalent() {
    assert!(!equivalent("<a>x</a>", "<b>x</b>"));
}

#[test]
fn test_names_are_case_sensitive() {
    assert!(!equivalent("%Name%", "%name%"));
}

#[test]
fn test_variant_matters_for_same_name() {
    // A placeholder and a void tag with the same name are different shapes.
    assert!(!equivalent("%x%", "<x/>"));
}

// =============================================================================
// Nesting sensitivity
// =============================================================================

#[test]
fn test_moved_out_of_tag_is_not_equivalent() {
    assert!(!equivalent("<a><b/></a>", "<a></a><b/>"));
}

#[test]
fn test_deep_mismatch_fails_the_whole_comparison() {
    assert!(!equivalent("<a><b>t</b></a>", "<a><c>t</c></a>"));
}

#[test]
fn test_deep_match_succeeds() {
    assert!(equivalent(
        "<p>Read <a>%title%</a>.</p>",
        "<p><a>%title%</a> lesen.</p>"
    ));
}

// =============================================================================
// String-level convenience
// =============================================================================

#[test]
fn test_string_level_comparison() {
    assert!(strings_structurally_equivalent("<a>hi</a>", "<a>yo</a>").unwrap());
    assert!(!strings_structurally_equivalent("<a>hi</a>", "yo").unwrap());
}

#[test]
fn test_string_level_comparison_propagates_parse_errors() {
    assert!(strings_structurally_equivalent("<a>hi</a>", "<b>oops").is_err());
}
