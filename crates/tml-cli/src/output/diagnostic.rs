//! Miette diagnostic wrapper for catalog findings.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a problem with one catalog message.
///
/// The message text is attached as the source code so the fancy handler
/// prints it under the finding.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(tml::catalog))]
pub struct MessageDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("in this message")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl MessageDiagnostic {
    /// Create a diagnostic for one catalog message.
    ///
    /// `origin` names where the message lives (file and key).
    pub fn new(origin: impl AsRef<str>, message_text: &str, problem: impl Into<String>) -> Self {
        MessageDiagnostic {
            src: NamedSource::new(origin, message_text.to_string()),
            span: (0, message_text.len()).into(),
            message: problem.into(),
            help: None,
        }
    }
}
