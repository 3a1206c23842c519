/// Errors reported by the conversion routines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// URL has no "://" scheme delimiter
    MalformedUrl,
    /// Nothing to encode
    EmptyInput,
    /// UTF-8 sequence runs past the end of the string
    TruncatedSequence,
    /// Caller-supplied output buffer is smaller than required
    BufferTooSmall,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MalformedUrl => "Malformed URL: missing \"://\"",
            Self::EmptyInput => "Empty input",
            Self::TruncatedSequence => "Truncated UTF-8 sequence",
            Self::BufferTooSmall => "Output buffer too small",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for conversion operations
pub type Result<T> = core::result::Result<T, Error>;
