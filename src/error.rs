/// The input did not match the accepted URL grammar.
///
/// This is the only way a scan fails. The scanner does not classify or
/// localize failures; callers that need diagnostics must validate the
/// rejected input themselves (or enable the `tracing` feature, which logs
/// the offset at which the scan was rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseError;

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("input did not match the accepted URL grammar")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
