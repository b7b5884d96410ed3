//! Single-pass splitting of URL-like strings into protocol, host, port, path,
//! query and fragment.
//!
//! The scanner looks at every byte once, never allocates, and returns slices
//! of the input. It accepts a permissive superset of RFC 3986 (bare
//! `host:port`, `mailto:`/`tel:` style schemes, backslash separators) and
//! rejects anything outside it with a single [`ParseError`].
//!
//! ```
//! let url = fasturl::parse("localhost:8080/health?verbose").unwrap();
//! assert_eq!(url.protocol(), "");
//! assert_eq!(url.host(), "localhost");
//! assert_eq!(url.port(), "8080");
//! assert_eq!(url.path(), "/health");
//! assert_eq!(url.query(), "verbose");
//!
//! assert!(fasturl::parse("not a url").is_err());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod ipv6;
mod parser;
mod url_aggregator;
mod url_components;

// Public API
pub use error::{ParseError, Result};
pub use url_aggregator::Url;
pub use url_components::{Span, UrlComponents};

/// Scan `input` into a [`Url`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input does not match the accepted grammar.
pub fn parse(input: &str) -> Result<Url<'_>> {
    Url::parse(input)
}

/// Check whether `input` would scan successfully.
pub fn can_parse(input: &str) -> bool {
    Url::can_parse(input)
}
