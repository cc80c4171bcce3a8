use crate::ByteSpan;
use crate::ErrorNote;
use crate::ErrorNoteKind;
use crate::ErrorNotes;
use crate::ParseErrorKind;
use crate::SourcePosition;
use std::path::Path;

/// A parse error with location information and contextual notes.
///
/// Errors only carry byte offsets. Line and column numbers are computed from
/// the source text when the error is formatted, so callers pass the source
/// to [`format_detailed()`](Self::format_detailed) and
/// [`format_oneline()`](Self::format_oneline).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:` after field name", "unclosed `{`"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For end-of-input errors: an empty span at the end of input
    /// - For "unclosed delimiter" errors: the position where closing was
    ///   expected
    span: ByteSpan,

    /// Categorized error kind for programmatic handling.
    kind: ParseErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    notes: ErrorNotes,
}

impl ParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: ByteSpan,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: ErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: ByteSpan,
        kind: ParseErrorKind,
        notes: ErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: ByteSpan) {
        self.notes.push(ErrorNote::general_with_span(message, span));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:` after field name
    ///   --> schema.graphqle:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    |
    ///    = help: add `:` between the field name and its type
    /// ```
    pub fn format_detailed(&self, source: &str, file_path: Option<&Path>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let start = SourcePosition::from_byte_offset(source, self.span.start as usize);
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            display_file_name(file_path),
            start.line() + 1,
            start.col_utf8() + 1,
        ));

        if let Some(snippet) = self.format_source_snippet(source, &start) {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                ErrorNoteKind::General => "note",
                ErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let Some(note_span) = note.span
                && let Some(snippet) = format_note_snippet(source, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// schema.graphqle:5:12: error: expected `:` after field name
    /// ```
    pub fn format_oneline(&self, source: &str, file_path: Option<&Path>) -> String {
        let start = SourcePosition::from_byte_offset(source, self.span.start as usize);
        format!(
            "{}:{}:{}: error: {}",
            display_file_name(file_path),
            start.line() + 1,
            start.col_utf8() + 1,
            self.message,
        )
    }

    /// Formats the source snippet for the primary error span.
    fn format_source_snippet(
        &self,
        source: &str,
        start: &SourcePosition,
    ) -> Option<String> {
        let line_content = nth_line(source, start.line())?;
        let display_line_num = start.line() + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();

        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        // Spans that continue onto later lines are underlined to the end of
        // the first line.
        let end = SourcePosition::from_byte_offset(source, self.span.end as usize);
        let col_start = start.col_utf8();
        let col_end = if end.line() == start.line() {
            end.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}

/// Formats a source snippet for a note's span.
fn format_note_snippet(source: &str, span: ByteSpan) -> Option<String> {
    let position = SourcePosition::from_byte_offset(source, span.start as usize);
    let line_content = nth_line(source, position.line())?;
    let display_line_num = position.line() + 1;
    let line_num_width = display_line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!(
        "     {display_line_num:>line_num_width$} | {line_content}\n"
    ));
    output.push_str(&format!(
        "     {:>width$} | {:>padding$}-\n",
        "",
        "",
        width = line_num_width,
        padding = position.col_utf8()
    ));

    Some(output)
}

fn display_file_name(file_path: Option<&Path>) -> String {
    file_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<input>".to_string())
}

/// Returns the text of the 0-based line `line_num`, using the same line
/// terminators as [`SourcePosition`] (`\n`, `\r` and `\r\n`).
fn nth_line(source: &str, line_num: usize) -> Option<&str> {
    let bytes = source.as_bytes();
    let mut line = 0;
    let mut line_start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        let is_cr = bytes[idx] == b'\r';
        if is_cr || bytes[idx] == b'\n' {
            if line == line_num {
                return Some(&source[line_start..idx]);
            }
            if is_cr && bytes.get(idx + 1) == Some(&b'\n') {
                idx += 1;
            }
            line += 1;
            line_start = idx + 1;
        }
        idx += 1;
    }

    (line == line_num).then(|| &source[line_start..])
}
