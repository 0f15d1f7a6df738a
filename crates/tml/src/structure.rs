//! Structural comparison of parsed messages.
//!
//! A translated message must keep every tag and placeholder of its source
//! message so no substitution point is lost in translation. Only presence,
//! name, and nesting are compared; literal text is a translator's business
//! and never participates. Comparison is order-insensitive within each
//! nesting level because translators legitimately reorder inline markup.

use crate::parser::{Node, ParseError, parse};

/// Check that two parsed messages share the same structural shape.
///
/// Text nodes are dropped from both sibling sequences; the remaining
/// sequences must have equal length and every base node must find a
/// (variant, name) match somewhere at the same level of the target.
/// Matched tag pairs recurse into their children; a mismatch at any depth
/// fails the whole comparison.
///
/// # Example
///
/// ```
/// use tml::{is_structurally_equivalent, parse};
///
/// let base = parse("<a>hi</a> %n%").unwrap();
/// let fr = parse("%n% <a>salut</a>").unwrap();
/// assert!(is_structurally_equivalent(&base, &fr));
///
/// let broken = parse("salut %n%").unwrap();
/// assert!(!is_structurally_equivalent(&base, &broken));
/// ```
pub fn is_structurally_equivalent(base: &[Node], target: &[Node]) -> bool {
    let base_nodes: Vec<&Node> = base.iter().filter(|n| n.is_structural()).collect();
    let target_nodes: Vec<&Node> = target.iter().filter(|n| n.is_structural()).collect();

    if base_nodes.len() != target_nodes.len() {
        return false;
    }

    base_nodes.iter().all(|&node| {
        let Some(&candidate) = target_nodes.iter().find(|&&candidate| same_kind(node, candidate))
        else {
            return false;
        };
        match (node, candidate) {
            (
                Node::Tag {
                    children: base_children,
                    ..
                },
                Node::Tag {
                    children: target_children,
                    ..
                },
            ) => is_structurally_equivalent(base_children, target_children),
            _ => true,
        }
    })
}

/// Parse both messages and compare their structure.
///
/// # Errors
///
/// Propagates a [`ParseError`] from either side.
pub fn strings_structurally_equivalent(base: &str, target: &str) -> Result<bool, ParseError> {
    let base_ast = parse(base)?;
    let target_ast = parse(target)?;
    Ok(is_structurally_equivalent(&base_ast, &target_ast))
}

/// Same (variant, name), ignoring children and text.
fn same_kind(base: &Node, target: &Node) -> bool {
    match (base, target) {
        (Node::Tag { name: base_name, .. }, Node::Tag { name: target_name, .. })
        | (Node::VoidTag { name: base_name }, Node::VoidTag { name: target_name })
        | (Node::Placeholder { name: base_name }, Node::Placeholder { name: target_name }) => {
            base_name == target_name
        }
        _ => false,
    }
}
