//! Tests for `Token` and `TokenKind` helpers.

use crate::token::Token;
use crate::token::TokenKind;
use crate::ByteSpan;

/// Verifies the trivia classification.
#[test]
fn test_trivia_kinds() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(TokenKind::Comma.is_trivia());
    assert!(!TokenKind::Identifier.is_trivia());
    assert!(!TokenKind::Invalid.is_trivia());
}

/// Verifies that keywords count as names but punctuators do not.
#[test]
fn test_name_like_kinds() {
    assert!(TokenKind::Identifier.is_name_like());
    assert!(TokenKind::Type.is_name_like());
    assert!(TokenKind::True.is_name_like());
    assert!(!TokenKind::Colon.is_name_like());
    assert!(!TokenKind::StringLiteral.is_name_like());
}

/// Verifies the definition-start keywords.
#[test]
fn test_definition_keywords() {
    assert!(TokenKind::Import.is_definition_keyword());
    assert!(TokenKind::Schema.is_definition_keyword());
    assert!(!TokenKind::Implements.is_definition_keyword());
    assert!(!TokenKind::Null.is_definition_keyword());
}

/// Verifies display names used in error messages.
#[test]
fn test_display_names() {
    assert_eq!(TokenKind::CurlyBraceClose.display_name(), "}");
    assert_eq!(TokenKind::Interface.display_name(), "interface");
    assert_eq!(TokenKind::Identifier.display_name(), "name");
    assert_eq!(TokenKind::Eof.display_name(), "end of input");
}

/// Verifies `comment_body()` strips only the leading `#`.
#[test]
fn test_comment_body() {
    let token = Token::new(TokenKind::Comment, "## hi", ByteSpan::new(4, 9));
    assert_eq!(token.comment_body(), Some("# hi"));
    assert_eq!(token.start(), 4);
    assert_eq!(token.end(), 9);

    let name = Token::new(TokenKind::Identifier, "hi", ByteSpan::new(0, 2));
    assert_eq!(name.comment_body(), None);
}
