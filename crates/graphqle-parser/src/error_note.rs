use crate::ByteSpan;
use crate::SmallVec;

/// The kind of an error note (determines how the note is rendered).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum ErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    /// Example: "`{` opened here" (with span pointing to the opener)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    Help,
}

/// A note providing additional context about a [`ParseError`](crate::ParseError).
///
/// Notes augment the primary error message with an explanation, a
/// suggestion, or a related source location (e.g. where a delimiter was
/// opened).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: ErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional span pointing to a related location.
    pub span: Option<ByteSpan>,
}

impl ErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(message: impl Into<String>, span: ByteSpan) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap
/// allocation in the common case.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
