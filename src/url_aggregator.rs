use core::fmt;

use crate::error::{ParseError, Result};
use crate::url_components::{Span, UrlComponents};

/// A scanned URL: the input it was parsed from plus the offsets of each field.
///
/// Getters are zero-copy slices of the input. A field that the input does
/// not contain is the empty string. Nothing is decoded or normalized:
/// `"http://h/a"` and `"http://h/a/"` have different paths, `%41` stays
/// `%41`, and userinfo is skipped rather than returned.
///
/// ```
/// use fasturl::Url;
///
/// let url = Url::parse("https://user@example.com:8443/a/b?x=1#top").unwrap();
/// assert_eq!(url.protocol(), "https");
/// assert_eq!(url.host(), "example.com");
/// assert_eq!(url.port(), "8443");
/// assert_eq!(url.path(), "/a/b");
/// assert_eq!(url.query(), "x=1");
/// assert_eq!(url.fragment(), "top");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Url<'a> {
    input: &'a str,
    components: UrlComponents,
}

impl<'a> Url<'a> {
    /// Scan `input` in a single pass.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the input does not match the accepted grammar.
    pub fn parse(input: &'a str) -> Result<Self> {
        let components = crate::parser::scan(input.as_bytes())?;
        Ok(Self { input, components })
    }

    /// Scan raw bytes, such as a line read from a log file.
    ///
    /// Every byte the grammar accepts is printable ASCII, so a successful
    /// scan always yields string slices.
    ///
    /// ```
    /// use fasturl::Url;
    ///
    /// let url = Url::parse_bytes(b"GET-target.example/index.html").unwrap();
    /// assert_eq!(url.path(), "/index.html");
    /// assert!(Url::parse_bytes(b"http://h/\xc3\xa9").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the bytes do not match the accepted grammar.
    pub fn parse_bytes(input: &'a [u8]) -> Result<Self> {
        let components = crate::parser::scan(input)?;
        let input = core::str::from_utf8(input).map_err(|_| ParseError)?;
        Ok(Self { input, components })
    }

    /// Check whether `input` would scan, without building a [`Url`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fasturl::Url;
    ///
    /// assert!(Url::can_parse("http://example.com"));
    /// assert!(Url::can_parse("localhost:8080"));
    /// assert!(!Url::can_parse("not a url"));
    /// ```
    pub fn can_parse(input: &str) -> bool {
        crate::parser::scan(input.as_bytes()).is_ok()
    }

    fn get_component(&self, span: Span) -> &'a str {
        span.slice(self.input)
    }

    /// The whole input, unchanged
    pub fn as_str(&self) -> &'a str {
        self.input
    }

    /// Scheme without the trailing colon (e.g. `"http"`)
    pub fn protocol(&self) -> &'a str {
        self.get_component(self.components.protocol)
    }

    /// Host, with brackets for IP literals and without userinfo
    pub fn host(&self) -> &'a str {
        self.get_component(self.components.host)
    }

    /// Port digits, without the colon
    pub fn port(&self) -> &'a str {
        self.get_component(self.components.port)
    }

    /// The port as a number. `None` if there is no port, if it holds
    /// anything but digits, or if it does not fit in a `u16`. No default
    /// port is inferred from the scheme.
    pub fn port_number(&self) -> Option<u16> {
        let port = self.port();
        if port.bytes().all(|b| b.is_ascii_digit()) {
            port.parse().ok()
        } else {
            None
        }
    }

    /// Path, including its leading `/` or `\`
    pub fn path(&self) -> &'a str {
        self.get_component(self.components.path)
    }

    /// Query, without the leading `?`
    pub fn query(&self) -> &'a str {
        self.get_component(self.components.query)
    }

    /// Fragment, without the leading `#`
    pub fn fragment(&self) -> &'a str {
        self.get_component(self.components.fragment)
    }

    /// Byte offsets of every field in [`as_str`](Self::as_str)
    pub fn components(&self) -> &UrlComponents {
        &self.components
    }
}

impl fmt::Display for Url<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input)
    }
}

impl<'a> TryFrom<&'a str> for Url<'a> {
    type Error = ParseError;

    fn try_from(input: &'a str) -> Result<Self> {
        Self::parse(input)
    }
}
