/// Errors reported by the strict parsing entry points.
///
/// Every store operation is infallible; only `SearchStore::try_parse`
/// and `Location::parse` can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `%` not followed by two hex digits
    InvalidPercentEncoding,
    /// Percent-decoded bytes are not valid UTF-8
    InvalidUtf8,
    /// Path part of an href does not start with `/`
    InvalidPathname,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::InvalidUtf8 => "Invalid UTF-8 in decoded component",
            Self::InvalidPathname => "Pathname must start with '/'",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for strict parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
