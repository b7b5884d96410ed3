use crate::url_components::{Span, UrlComponents};

/// Cursor marks and the output record for a single scan.
///
/// The scanner never slices the input; it only moves marks and asks the
/// assembler to commit `[mark, end)` ranges into fields.
///
/// Commit rules:
/// - `protocol`, `host` and `fragment` overwrite whatever was there
/// - `path` and `query` keep the first non-empty value
/// - `port` is only written when `port_mark > host_mark`, so a colon seen
///   before the current host began (inside userinfo or an IP literal) can
///   never produce a port
#[derive(Debug, Default)]
pub struct Assembler {
    mark: usize,
    host_mark: usize,
    port_mark: usize,
    components: UrlComponents,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of the current path, query or fragment
    #[inline]
    pub fn set_mark(&mut self, pos: usize) {
        self.mark = pos;
    }

    /// Restart host scanning at `pos`
    #[inline]
    pub fn set_host_mark(&mut self, pos: usize) {
        self.host_mark = pos;
    }

    /// First byte after a colon that may begin a port
    #[inline]
    pub fn set_port_mark(&mut self, pos: usize) {
        self.port_mark = pos;
    }

    #[inline]
    pub fn port_mark(&self) -> usize {
        self.port_mark
    }

    /// `protocol = [0, end)`
    pub fn commit_protocol(&mut self, end: usize) {
        self.components.protocol = Span::new(0, end);
    }

    /// `host = [host_mark, end)`
    pub fn commit_host(&mut self, end: usize) {
        self.components.host = Span::new(self.host_mark, end);
    }

    /// `port = [port_mark, end)`, guarded by `port_mark > host_mark`
    pub fn commit_port(&mut self, end: usize) {
        if self.port_mark > self.host_mark {
            self.components.port = Span::new(self.port_mark, end);
        }
    }

    /// `path = [mark, end)` unless a path was already committed
    pub fn commit_path(&mut self, end: usize) {
        if self.components.path.is_empty() {
            self.components.path = Span::new(self.mark, end);
        }
    }

    /// `query = [mark, end)` unless a query was already committed
    pub fn commit_query(&mut self, end: usize) {
        if self.components.query.is_empty() {
            self.components.query = Span::new(self.mark, end);
        }
    }

    /// `fragment = [mark, end)`
    pub fn commit_fragment(&mut self, end: usize) {
        self.components.fragment = Span::new(self.mark, end);
    }

    pub fn finish(self) -> UrlComponents {
        self.components
    }
}
