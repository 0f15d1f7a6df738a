use std::fmt;

/// A caller-supplied substitution value for one named node in a message.
///
/// Strings and numbers substitute directly. A function value receives the
/// tag's rendered children and may produce an arbitrary output type `T`,
/// which is how a UI layer wraps message content in its own elements while
/// the engine stays presentation-agnostic.
///
/// # Example
///
/// ```
/// use tml::Value;
///
/// let count: Value<String> = 42.into();
/// let name: Value<String> = "Alice".into();
/// let link = Value::func(|children: String| format!("[{children}]"));
/// ```
pub enum Value<T> {
    /// A literal string.
    Text(String),

    /// An integer, rendered via its decimal form.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A wrapper: called with the rendered children of the node it
    /// substitutes, producing the caller's output type.
    Func(Box<dyn Fn(String) -> T>),
}

impl<T> Value<T> {
    /// Wrap a closure as a function value.
    pub fn func(f: impl Fn(String) -> T + 'static) -> Self {
        Value::Func(Box::new(f))
    }
}

impl<T> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Func(_) => f.write_str("Func(..)"),
        }
    }
}

// From implementations for common types

impl<T> From<i32> for Value<T> {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl<T> From<i64> for Value<T> {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl<T> From<u32> for Value<T> {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl<T> From<usize> for Value<T> {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl<T> From<f32> for Value<T> {
    fn from(n: f32) -> Self {
        Value::Float(n.into())
    }
}

impl<T> From<f64> for Value<T> {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl<T> From<String> for Value<T> {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T> From<&str> for Value<T> {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
