use crate::compat::{String, ToString};
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;

/// Components of a split URL.
///
/// Every field except a defaulted `path` is a view into the buffer that was
/// passed to [`split_url`](crate::split_url), so the parts cannot outlive it.
///
/// Layout for `"https://example.com:8080/path#hash"`:
/// - `scheme`: "https" (lower-cased in the buffer)
/// - `host`: "example.com"
/// - `port`: 8080
/// - `path`: "/path" (fragment excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub host: &'a str,
    pub port: u32,
    pub path: &'a str,
}

impl UrlParts<'_> {
    /// Get the scheme type
    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(self.scheme)
    }

    /// Check if the port equals the scheme's default
    pub fn has_default_port(&self) -> bool {
        self.port == self.scheme_type().default_port()
    }

    /// Copy every component out of the source buffer (requires allocation)
    pub fn to_owned_parts(&self) -> OwnedUrlParts {
        OwnedUrlParts {
            scheme: self.scheme.to_string(),
            host: self.host.to_string(),
            port: self.port,
            path: self.path.to_string(),
        }
    }
}

impl core::fmt::Display for UrlParts<'_> {
    /// Writes `scheme://host:port/path`; the port is omitted when it is 0.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if self.port != 0 {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(self.path)
    }
}

/// Owned copy of [`UrlParts`], independent of the parsed buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedUrlParts {
    pub scheme: String,
    pub host: String,
    pub port: u32,
    pub path: String,
}

impl OwnedUrlParts {
    /// Borrow as [`UrlParts`]
    pub fn as_parts(&self) -> UrlParts<'_> {
        UrlParts {
            scheme: &self.scheme,
            host: &self.host,
            port: self.port,
            path: &self.path,
        }
    }
}
