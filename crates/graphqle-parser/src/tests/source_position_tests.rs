//! Tests for the `SourcePosition` struct.
//!
//! These tests verify:
//! - Accessor methods return the constructed values
//! - `from_byte_offset()` counts lines and both column kinds
//! - All three line terminators are recognized

use crate::SourcePosition;

/// Verify that `SourcePosition::new(0, 0, 0, 0)` represents the very start
/// of a document.
#[test]
fn test_constructor_document_start() {
    let pos = SourcePosition::new(0, 0, 0, 0);
    assert_eq!(pos.line(), 0, "First line should be 0");
    assert_eq!(pos.col_utf8(), 0, "First column (UTF-8) should be 0");
    assert_eq!(pos.col_utf16(), 0, "First column (UTF-16) should be 0");
    assert_eq!(pos.byte_offset(), 0, "First byte offset should be 0");
}

/// Verify that a position on a later line reports its 0-based line and
/// column.
#[test]
fn test_from_byte_offset_second_line() {
    let source = "type A\n  field";
    let pos = SourcePosition::from_byte_offset(source, 9);
    assert_eq!(pos, SourcePosition::new(1, 2, 2, 9));
}

/// Verify that `\r\n` counts as a single line break while lone `\r` and
/// `\n` count as one each.
#[test]
fn test_from_byte_offset_line_terminators() {
    let source = "a\r\nb\rc\nd";
    assert_eq!(SourcePosition::from_byte_offset(source, 3).line(), 1);
    assert_eq!(SourcePosition::from_byte_offset(source, 5).line(), 2);
    assert_eq!(SourcePosition::from_byte_offset(source, 7).line(), 3);
    assert_eq!(SourcePosition::from_byte_offset(source, 7).col_utf8(), 0);
}

/// Verify that characters outside the BMP advance the UTF-16 column by two
/// and the UTF-8 (character) column by one.
#[test]
fn test_from_byte_offset_dual_columns() {
    let source = "\"🎉\" x";
    // `x` is preceded by `"`, the 4-byte emoji, `"` and a space.
    let pos = SourcePosition::from_byte_offset(source, 7);
    assert_eq!(pos.col_utf8(), 4);
    assert_eq!(pos.col_utf16(), 5);
    assert_eq!(pos.byte_offset(), 7);
}

/// Verify that offsets past the end are clamped to the source length.
#[test]
fn test_from_byte_offset_clamps() {
    let pos = SourcePosition::from_byte_offset("ab", 100);
    assert_eq!(pos.byte_offset(), 2);
    assert_eq!(pos.col_utf8(), 2);
}
