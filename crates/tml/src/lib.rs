//! Localization template engine for markup messages.
//!
//! Messages are plain strings interspersed with tags (`<b>...</b>`), void
//! tags (`<br/>`), and placeholders (`%name%`). The engine parses them into
//! a small AST, formats the AST by substituting caller-supplied values,
//! verifies that a translation preserves its source's structural shape, and
//! resolves locale plural rules to pick a form out of a pipe-delimited
//! string. Every operation is a pure, synchronous function.

pub mod format;
pub mod parser;
pub mod plural;
pub mod structure;
pub mod types;

pub use format::{
    FormatError, RenderError, compute_suggestions, format, format_to_string, render,
    render_to_string,
};
pub use parser::{Node, ParseError, parse};
pub use plural::{PluralError, form_count, form_index, select_form, supported_locales};
pub use structure::{is_structurally_equivalent, strings_structurally_equivalent};
pub use types::{Fragment, Value};

/// Creates a `HashMap<String, Value<T>>` from key-value pairs.
///
/// Values are converted via `Into<Value<T>>`, so you can pass integers,
/// floats, and strings directly; wrapper functions go through
/// [`Value::func`].
///
/// # Example
///
/// ```
/// use tml::{Value, values};
///
/// let v: std::collections::HashMap<String, Value<String>> =
///     values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value<_>>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value<_>>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::into($value));
            )+
            map
        }
    };
}
