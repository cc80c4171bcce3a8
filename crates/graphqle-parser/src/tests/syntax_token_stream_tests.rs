//! Tests for the `SyntaxTokenStream` cursor, error helpers and recursion
//! guard.

use crate::syntax::NodeKind;
use crate::token::TokenKind;
use crate::token_source::StrIdlTokenSource;
use crate::ByteSpan;
use crate::ParseErrorKind;
use crate::SyntaxTokenStream;

fn stream(source: &str) -> SyntaxTokenStream<'_> {
    SyntaxTokenStream::new(source, StrIdlTokenSource::new(source))
}

// =============================================================================
// Cursor
// =============================================================================

/// Verifies that lookahead skips whitespace, commas and comments.
#[test]
fn test_lookahead_skips_trivia() {
    let s = stream("a, # note\n b");

    assert_eq!(s.current(), TokenKind::Identifier);
    assert_eq!(s.current_token().map(|t| t.text), Some("a"));
    assert_eq!(s.nth_token(1).map(|t| t.text), Some("b"));
    assert_eq!(s.nth(2), TokenKind::Eof);
    assert!(s.at_any(&[TokenKind::Colon, TokenKind::Identifier]));
}

/// Verifies the end-of-input state: `Eof` kind, an empty span at the end,
/// and `advance()` doing nothing.
#[test]
fn test_end_of_input() {
    let mut s = stream("a  ");
    s.advance();

    assert!(s.at_end());
    assert!(s.at(TokenKind::Eof));
    assert_eq!(s.current_span(), ByteSpan::empty_at(3));
    assert_eq!(s.position(), 1);
    s.advance();
    assert_eq!(s.position(), 1);
}

/// Verifies `eat()` only consumes a matching token.
#[test]
fn test_eat() {
    let mut s = stream(": a");

    assert!(!s.eat(TokenKind::Identifier));
    assert_eq!(s.position(), 0);
    assert!(s.eat(TokenKind::Colon));
    assert!(s.eat(TokenKind::Identifier));
    assert!(s.errors().is_empty());
}

// =============================================================================
// Errors
// =============================================================================

/// Verifies that a failed `expect()` records an error at the current token
/// and consumes nothing.
#[test]
fn test_expect_mismatch() {
    let mut s = stream("a");

    assert!(!s.expect(TokenKind::Colon));
    assert_eq!(s.position(), 0);
    let error = &s.errors()[0];
    assert_eq!(error.message(), "expected `:`, found `a`");
    assert_eq!(error.span(), ByteSpan::new(0, 1));
    assert_eq!(
        error.kind(),
        &ParseErrorKind::UnexpectedToken {
            expected: vec![":".to_string()],
            found: "a".to_string(),
        },
    );
}

/// Verifies the end-of-input variant of `expect()`.
#[test]
fn test_expect_at_end() {
    let mut s = stream("  ");

    assert!(!s.expect(TokenKind::CurlyBraceClose));
    let error = &s.errors()[0];
    assert_eq!(error.message(), "expected `}`, found end of input");
    assert_eq!(error.span(), ByteSpan::empty_at(2));
    assert!(matches!(error.kind(), ParseErrorKind::UnexpectedEof { .. }));
}

/// Verifies how several expected alternatives are listed.
#[test]
fn test_error_expected_lists_alternatives() {
    let mut s = stream("!");
    s.error_expected(&["name", "[", "{"]);

    assert_eq!(s.errors()[0].message(), "expected `name`, `[` or `{`, found `!`");
}

/// Verifies that consuming an invalid character reports a lexer error.
#[test]
fn test_advance_reports_invalid_character() {
    let mut s = stream("$");
    assert_eq!(s.current(), TokenKind::Invalid);
    s.advance();

    let error = &s.errors()[0];
    assert_eq!(error.kind(), &ParseErrorKind::LexerError);
    assert_eq!(error.message(), "unexpected character `$`");
}

/// Verifies that consuming an unterminated string reports a lexer error
/// with a hint.
#[test]
fn test_advance_reports_unterminated_string() {
    let mut s = stream("\"abc\nx");
    assert_eq!(s.current(), TokenKind::StringLiteral);
    s.advance();

    let error = &s.errors()[0];
    assert_eq!(error.kind(), &ParseErrorKind::LexerError);
    assert_eq!(error.message(), "unterminated string literal");
    assert_eq!(error.notes().len(), 1);
    // The string stops before the line break.
    assert_eq!(error.span(), ByteSpan::new(0, 4));
}

/// Verifies that a block string whose only closing quotes are escaped is
/// reported as unterminated, even though its text ends in `"""`.
#[test]
fn test_advance_reports_block_string_closed_only_by_escape() {
    let source = "\"\"\"abc\\\"\"\"\"";
    let mut s = stream(source);
    assert_eq!(s.current(), TokenKind::StringLiteral);
    s.advance();

    let error = &s.errors()[0];
    assert_eq!(error.kind(), &ParseErrorKind::LexerError);
    assert_eq!(error.message(), "unterminated string literal");
    assert_eq!(error.span(), ByteSpan::new(0, source.len() as u32));
}

// =============================================================================
// Recursion guard
// =============================================================================

/// Verifies that a rule cannot be re-entered at the same position, but can
/// be once input was consumed.
#[test]
fn test_enter_rule_same_position() {
    let mut s = stream("a b");

    assert!(s.enter_rule("value"));
    assert!(!s.enter_rule("value"));
    assert!(s.enter_rule("type"));
    s.advance();
    assert!(s.enter_rule("value"));
    assert_eq!(s.rule_depth(), 3);

    s.exit_rule();
    s.exit_rule();
    s.exit_rule();
    assert_eq!(s.rule_depth(), 0);
    assert!(s.errors().is_empty());
}

/// Verifies that the guard refuses to nest deeper than `MAX_RULE_DEPTH` and
/// reports it.
#[test]
fn test_enter_rule_depth_limit() {
    let source = "[".repeat(SyntaxTokenStream::MAX_RULE_DEPTH + 1);
    let mut s = stream(&source);

    for _ in 0..SyntaxTokenStream::MAX_RULE_DEPTH {
        assert!(s.enter_rule("list"));
        s.advance();
    }
    assert!(!s.enter_rule("list"));
    assert_eq!(s.rule_depth(), SyntaxTokenStream::MAX_RULE_DEPTH);
    assert_eq!(s.errors().len(), 1);
    assert_eq!(s.errors()[0].kind(), &ParseErrorKind::NestingTooDeep);
}

// =============================================================================
// Finishing
// =============================================================================

/// Verifies that `with_root_span()` keeps absolute token offsets and makes
/// the root cover exactly the requested range.
#[test]
fn test_with_root_span() {
    let source = "xx scalar A yy";
    let span = ByteSpan::new(3, 11);
    let mut s =
        SyntaxTokenStream::with_root_span(span, StrIdlTokenSource::with_range(source, span));

    let root = s.mark();
    s.advance();
    s.advance();
    root.complete(&mut s, NodeKind::Document);
    let result = s.finish();

    assert_eq!(result.tree().span, span);
    assert_eq!(result.tree().text(source), "scalar A");
    assert_eq!(result.tokens()[0].span, ByteSpan::new(3, 9));
}
