use crate::token::TokenKind;

/// The reserved words of the GraphQL Endpoint IDL.
///
/// Entries are sorted by text so [`KeywordTable::lookup()`] can binary
/// search. `query`, `mutation` and `subscription` are deliberately absent:
/// they are ordinary identifiers that the schema-definition rule checks by
/// text.
pub static IDL_KEYWORDS: KeywordTable = KeywordTable::new(&[
    ("enum", TokenKind::Enum),
    ("false", TokenKind::False),
    ("implements", TokenKind::Implements),
    ("import", TokenKind::Import),
    ("input", TokenKind::Input),
    ("interface", TokenKind::Interface),
    ("null", TokenKind::Null),
    ("scalar", TokenKind::Scalar),
    ("schema", TokenKind::Schema),
    ("true", TokenKind::True),
    ("type", TokenKind::Type),
    ("union", TokenKind::Union),
]);

/// An immutable mapping from reserved word to [`TokenKind`].
///
/// Built at compile time and shared by `&'static` reference; lexers never
/// mutate it.
#[derive(Debug)]
pub struct KeywordTable {
    entries: &'static [(&'static str, TokenKind)],
}

impl KeywordTable {
    /// Creates a table over `entries`, which must be sorted by text.
    pub const fn new(entries: &'static [(&'static str, TokenKind)]) -> Self {
        Self { entries }
    }

    /// Returns the keyword kind for `text`, if it is a reserved word.
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        self.entries
            .binary_search_by(|(keyword, _)| (*keyword).cmp(text))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Returns `true` if `text` is a reserved word.
    pub fn contains(&self, text: &str) -> bool {
        self.lookup(text).is_some()
    }

    /// Iterates over all `(text, kind)` entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
