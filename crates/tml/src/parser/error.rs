//! Parse error types.

use thiserror::Error;

/// An error that occurred while parsing a message string.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An opening tag was never closed, or a closing tag had no matching
    /// opener. Carries the whole source message for diagnosis; the message
    /// itself is a content bug and callers should not retry.
    #[error("unbalanced tags in message: {input:?}")]
    UnbalancedTags { input: String },
}
