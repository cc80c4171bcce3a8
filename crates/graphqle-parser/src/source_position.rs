/// Source position information for diagnostics, with dual column tracking.
///
/// Tokens and nodes only carry byte offsets ([`ByteSpan`](crate::ByteSpan));
/// line and column values are computed on demand from the source text with
/// [`SourcePosition::from_byte_offset()`] when an error has to be shown to a
/// human or handed to an LSP-style client.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// # Dual Column Tracking
///
/// For ASCII text both columns are equal. For text containing characters
/// outside the Basic Multilingual Plane (e.g. emoji) they differ:
/// - `col_utf8` advances by 1 for each character
/// - `col_utf16` advances by the character's UTF-16 length (1 or 2 code units)
///
/// Line terminators are `\n`, `\r` and `\r\n` (counted once).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition from already-computed values.
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Computes the position of `byte_offset` within `source`.
    ///
    /// Offsets past the end of `source` are clamped to `source.len()`.
    /// Offsets that fall inside a multi-byte character are attributed to
    /// the start of that character.
    pub fn from_byte_offset(source: &str, byte_offset: usize) -> Self {
        let byte_offset = byte_offset.min(source.len());
        let mut line = 0;
        let mut col_utf8 = 0;
        let mut col_utf16 = 0;
        let mut last_char_was_cr = false;

        for (idx, ch) in source.char_indices() {
            if idx >= byte_offset {
                break;
            }
            match ch {
                '\n' if last_char_was_cr => {
                    // Second half of a `\r\n` pair: already counted.
                    last_char_was_cr = false;
                },
                '\n' => {
                    line += 1;
                    col_utf8 = 0;
                    col_utf16 = 0;
                },
                '\r' => {
                    line += 1;
                    col_utf8 = 0;
                    col_utf16 = 0;
                    last_char_was_cr = true;
                },
                _ => {
                    col_utf8 += 1;
                    col_utf16 += ch.len_utf16();
                    last_char_was_cr = false;
                },
            }
        }

        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// For LSP compatibility, prefer this over [`col_utf8()`](Self::col_utf8).
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
