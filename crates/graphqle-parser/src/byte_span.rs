/// Compact byte-offset span. 8 bytes per token and per node.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// original source buffer. Both offsets are 0-based. Spans of tokens lexed
/// from a sub-range (e.g. a single comment) are still offsets into the
/// enclosing buffer, never into a copy.
///
/// `u32` offsets support documents up to 4 GiB, which is far beyond any
/// single `.graphqle` file an editor would hand to the parser.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
#[repr(C)]
pub struct ByteSpan {
    /// Byte offset of the first byte (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end
    /// (exclusive) byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "inverted span {start}..{end}");
        Self { start, end }
    }

    /// Creates a span from `usize` offsets.
    ///
    /// Offsets beyond `u32::MAX` saturate.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Self::new(clamp(start), clamp(end))
    }

    /// A zero-width span at `offset`.
    pub fn empty_at(offset: u32) -> Self {
        Self { start: offset, end: offset }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `offset` lies inside `[start, end)`.
    pub fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The smallest span covering both `self` and `other`.
    pub fn cover(&self, other: ByteSpan) -> ByteSpan {
        ByteSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The byte range of this span, for slicing the source text.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Slices the source text covered by this span.
    ///
    /// Returns `None` if the span does not fall on character boundaries
    /// of `source` or exceeds its length.
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.range())
    }
}
