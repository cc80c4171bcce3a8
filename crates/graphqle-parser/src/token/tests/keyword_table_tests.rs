//! Tests for `KeywordTable`.

use crate::token::TokenKind;
use crate::token::IDL_KEYWORDS;

/// Verifies that the table is sorted, which `lookup()` relies on.
#[test]
fn test_idl_keywords_are_sorted() {
    let texts: Vec<&str> = IDL_KEYWORDS.iter().map(|(text, _)| text).collect();
    let mut sorted = texts.clone();
    sorted.sort_unstable();
    assert_eq!(texts, sorted);
}

/// Verifies that each entry agrees with `TokenKind::as_keyword_str()`.
#[test]
fn test_entries_match_token_kinds() {
    for (text, kind) in IDL_KEYWORDS.iter() {
        assert!(kind.is_keyword());
        assert_eq!(kind.as_keyword_str(), Some(text));
    }
}

/// Verifies lookups of present and absent words.
#[test]
fn test_lookup() {
    assert_eq!(IDL_KEYWORDS.lookup("implements"), Some(TokenKind::Implements));
    assert_eq!(IDL_KEYWORDS.lookup("null"), Some(TokenKind::Null));
    assert_eq!(IDL_KEYWORDS.lookup("query"), None);
    assert_eq!(IDL_KEYWORDS.lookup("Type"), None);
    assert!(!IDL_KEYWORDS.contains(""));
    assert_eq!(IDL_KEYWORDS.len(), 12);
}
