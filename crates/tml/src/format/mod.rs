//! Message formatting.
//!
//! Walks a parsed message depth-first and substitutes caller-supplied
//! values: text passes through, placeholders and void tags are replaced by
//! their value's textual form, and paired tags hand their rendered children
//! to a wrapper value. Every named node must have an entry in the value
//! map; a missing entry is an error, not an empty string.

mod error;

use std::collections::HashMap;
use std::fmt::Display;

use crate::parser::{Node, parse};
use crate::types::{Fragment, Value};

pub use error::{FormatError, RenderError, compute_suggestions};

/// Format a parsed message by substituting values for its named nodes.
///
/// Nodes are visited depth-first, left to right:
/// - `Text` is copied through unchanged.
/// - `Tag` renders its children to a single string first, then resolves
///   its value: a [`Value::Func`] receives the child string; a string or
///   number value replaces the tag wholesale and the children are
///   discarded.
/// - `VoidTag` and `Placeholder` resolve their value directly; a function
///   value is invoked with an empty child string.
///
/// # Errors
///
/// Returns [`FormatError::MissingValue`] when a node's name has no entry
/// in `values`.
pub fn format<T: Display>(
    ast: &[Node],
    values: &HashMap<String, Value<T>>,
) -> Result<Vec<Fragment<T>>, FormatError> {
    let mut output = Vec::with_capacity(ast.len());
    for node in ast {
        match node {
            Node::Text(value) => output.push(Fragment::Text(value.clone())),
            Node::Tag { name, children } => {
                let rendered = format_to_string(children, values)?;
                output.push(substitute(name, rendered, values)?);
            }
            Node::VoidTag { name } | Node::Placeholder { name } => {
                output.push(substitute(name, String::new(), values)?);
            }
        }
    }
    Ok(output)
}

/// Format a parsed message and concatenate the fragments into one string.
pub fn format_to_string<T: Display>(
    ast: &[Node],
    values: &HashMap<String, Value<T>>,
) -> Result<String, FormatError> {
    let fragments = format(ast, values)?;
    let mut out = String::new();
    for fragment in &fragments {
        out.push_str(&fragment.to_string());
    }
    Ok(out)
}

/// Parse and format a message string in one call.
///
/// # Example
///
/// ```
/// use tml::{Value, render};
///
/// let values = tml::values! { "b" => Value::func(|c: String| format!("<{c}>")) };
/// let fragments = render("a <b>c</b> d", &values).unwrap();
/// let joined: String = fragments.iter().map(ToString::to_string).collect();
/// assert_eq!(joined, "a <c> d");
/// ```
pub fn render<T: Display>(
    input: &str,
    values: &HashMap<String, Value<T>>,
) -> Result<Vec<Fragment<T>>, RenderError> {
    let ast = parse(input)?;
    Ok(format(&ast, values)?)
}

/// Parse and format a message string, concatenating to a single string.
pub fn render_to_string<T: Display>(
    input: &str,
    values: &HashMap<String, Value<T>>,
) -> Result<String, RenderError> {
    let ast = parse(input)?;
    Ok(format_to_string(&ast, values)?)
}

/// Resolve one named node against the value map.
fn substitute<T: Display>(
    name: &str,
    children: String,
    values: &HashMap<String, Value<T>>,
) -> Result<Fragment<T>, FormatError> {
    match values.get(name) {
        Some(Value::Text(s)) => Ok(Fragment::Text(s.clone())),
        Some(Value::Number(n)) => Ok(Fragment::Text(n.to_string())),
        Some(Value::Float(x)) => Ok(Fragment::Text(x.to_string())),
        Some(Value::Func(f)) => Ok(Fragment::Rendered(f(children))),
        None => Err(FormatError::MissingValue {
            name: name.to_string(),
            suggestions: compute_suggestions(name, values.keys()),
        }),
    }
}
