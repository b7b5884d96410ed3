use core::ops::Range;

/// A half-open byte range `start..end` into the scanned input.
///
/// An empty span means the field is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub(crate) const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice `input` with this span. Returns an empty string if the span does
    /// not fall on valid boundaries of `input` (it always does for the input
    /// it was produced from).
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.range()).unwrap_or("")
    }
}

/// Byte offsets of every field of a scanned URL.
///
/// Input: `"http://user@example.com:8080/path?query#hash"`
/// - `protocol`: 0..4 (`http`, colon excluded)
/// - `host`: 12..23 (`example.com`, userinfo discarded)
/// - `port`: 24..28 (`8080`)
/// - `path`: 28..33 (`/path`, leading slash included)
/// - `query`: 34..39 (`query`, `?` excluded)
/// - `fragment`: 40..44 (`hash`, `#` excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UrlComponents {
    pub protocol: Span,
    pub host: Span,
    pub port: Span,
    pub path: Span,
    pub query: Span,
    pub fragment: Span,
}

impl UrlComponents {
    /// Create a new `UrlComponents` with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over `(name, span)` for all six fields, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Span)> {
        [
            ("protocol", self.protocol),
            ("host", self.host),
            ("port", self.port),
            ("path", self.path),
            ("query", self.query),
            ("fragment", self.fragment),
        ]
        .into_iter()
    }
}
