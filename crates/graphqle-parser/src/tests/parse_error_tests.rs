//! Tests for `ParseError` construction and formatting.

use crate::ByteSpan;
use crate::ErrorNoteKind;
use crate::ParseError;
use crate::ParseErrorKind;
use std::path::Path;

fn unexpected(found: &str, span: ByteSpan) -> ParseError {
    ParseError::new(
        format!("expected `:`, found `{found}`"),
        span,
        ParseErrorKind::UnexpectedToken {
            expected: vec![":".to_string()],
            found: found.to_string(),
        },
    )
}

/// Verifies the accessors and that `Display` is the message.
#[test]
fn test_accessors_and_display() {
    let error = unexpected("String", ByteSpan::new(16, 22));

    assert_eq!(error.message(), "expected `:`, found `String`");
    assert_eq!(error.span(), ByteSpan::new(16, 22));
    assert!(matches!(error.kind(), ParseErrorKind::UnexpectedToken { .. }));
    assert!(error.notes().is_empty());
    assert_eq!(error.to_string(), "expected `:`, found `String`");
}

/// Verifies that notes keep their kind, order and span.
#[test]
fn test_notes() {
    let mut error = ParseError::new(
        "unclosed `{`",
        ByteSpan::empty_at(8),
        ParseErrorKind::UnclosedDelimiter {
            delimiter: "{".to_string(),
        },
    );
    error.add_note_with_span("`{` opened here", ByteSpan::new(7, 8));
    error.add_help("add `}`");
    error.add_note("plain note");

    let notes = error.notes();
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].kind, ErrorNoteKind::General);
    assert_eq!(notes[0].span, Some(ByteSpan::new(7, 8)));
    assert_eq!(notes[1].kind, ErrorNoteKind::Help);
    assert_eq!(notes[2].span, None);
}

/// Verifies the rustc-style snippet: location header, source line and
/// caret underline under the span.
#[test]
fn test_format_detailed() {
    let source = "type A {\n  name String\n}";
    let error = unexpected("String", ByteSpan::new(16, 22));
    let output = error.format_detailed(source, Some(Path::new("schema.graphqle")));

    assert!(output.starts_with("error: expected `:`, found `String`\n"));
    assert!(output.contains("  --> schema.graphqle:2:8\n"), "{output}");
    assert!(output.contains(" 2 |   name String\n"), "{output}");
    assert!(output.contains("   |        ^^^^^^\n"), "{output}");
}

/// Verifies that notes are rendered after the snippet, with a marker under
/// a note's span.
#[test]
fn test_format_detailed_with_notes() {
    let source = "type A {";
    let mut error = ParseError::new(
        "unclosed `{` in fields definition",
        ByteSpan::empty_at(8),
        ParseErrorKind::UnclosedDelimiter {
            delimiter: "{".to_string(),
        },
    );
    error.add_note_with_span("`{` opened here", ByteSpan::new(7, 8));
    error.add_help("add `}`");
    let output = error.format_detailed(source, None);

    assert!(output.contains("  --> <input>:1:9\n"), "{output}");
    assert!(output.contains("   = note: `{` opened here\n"), "{output}");
    assert!(output.contains("      1 | type A {\n"), "{output}");
    assert!(output.contains("        |        -\n"), "{output}");
    assert!(output.contains("   = help: add `}`\n"), "{output}");
}

/// Verifies the single-line format.
#[test]
fn test_format_oneline() {
    let source = "scalar A\nscalar";
    let error = ParseError::new(
        "expected `name`, found end of input",
        ByteSpan::empty_at(15),
        ParseErrorKind::UnexpectedEof {
            expected: vec!["name".to_string()],
        },
    );

    assert_eq!(
        error.format_oneline(source, Some(Path::new("a.graphqle"))),
        "a.graphqle:2:7: error: expected `name`, found end of input",
    );
    assert_eq!(
        error.format_oneline(source, None),
        "<input>:2:7: error: expected `name`, found end of input",
    );
}
