//! URL splitter. Carves scheme, host, port and path out of a caller-owned
//! buffer without copying.

use crate::checkers::parse_port;
use crate::error::{Error, Result};
use crate::helpers::{find_scheme_delimiter, prune_fragment};
use crate::scheme::get_scheme_type;
use crate::url_components::UrlParts;

/// Path reported when the URL has no '/' after the authority
const DEFAULT_PATH: &str = "/";

/// Split a URL of the form `scheme://host[:port][/path][#fragment]`.
///
/// The scheme is lower-cased in place inside `url`; all returned parts borrow
/// from it. A missing port falls back to 80 for `http`, 443 for `https` and 0
/// for anything else. A URL without a path reports `"/"`. The fragment is
/// excluded from the path.
///
/// # Examples
///
/// ```
/// let mut url = String::from("HTTPS://Example.com/a/b#frag");
/// let parts = strutils::split_url(&mut url).unwrap();
/// assert_eq!(parts.scheme, "https");
/// assert_eq!(parts.host, "Example.com");
/// assert_eq!(parts.port, 443);
/// assert_eq!(parts.path, "/a/b");
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedUrl`] if `url` contains no `"://"`.
pub fn split_url(url: &mut str) -> Result<UrlParts<'_>> {
    let scheme_end = find_scheme_delimiter(url).ok_or(Error::MalformedUrl)?;
    url[..scheme_end].make_ascii_lowercase();

    let url: &str = url;
    let scheme = &url[..scheme_end];
    let rest = &url[scheme_end + 3..];

    // Authority ends at the first '/', which also starts the path
    let (authority, path) = match memchr::memchr(b'/', rest.as_bytes()) {
        Some(slash) => (&rest[..slash], prune_fragment(&rest[slash..])),
        None => (rest, DEFAULT_PATH),
    };

    let (host, mut port) = match memchr::memchr(b':', authority.as_bytes()) {
        Some(colon) => (&authority[..colon], parse_port(&authority[colon + 1..])),
        None => (authority, 0),
    };

    if port == 0 {
        port = get_scheme_type(scheme).default_port();
    }

    Ok(UrlParts {
        scheme,
        host,
        port,
        path,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::String;

    fn split(input: &str) -> (String, String, u32, String) {
        let mut buf = String::from(input);
        let parts = split_url(&mut buf).unwrap();
        (
            parts.scheme.into(),
            parts.host.into(),
            parts.port,
            parts.path.into(),
        )
    }

    #[test]
    fn test_split_basic() {
        let (scheme, host, port, path) = split("http://example.com/");
        assert_eq!(scheme, "http");
        assert_eq!(host, "example.com");
        assert_eq!(port, 80);
        assert_eq!(path, "/");
    }

    #[test]
    fn test_split_uppercase_scheme_with_fragment() {
        let (scheme, host, port, path) = split("HTTPS://Example.com/a/b#frag");
        assert_eq!(scheme, "https");
        assert_eq!(host, "Example.com");
        assert_eq!(port, 443);
        assert_eq!(path, "/a/b");
    }

    #[test]
    fn test_split_explicit_port() {
        let (_, host, port, path) = split("http://example.com:8080/path");
        assert_eq!(host, "example.com");
        assert_eq!(port, 8080);
        assert_eq!(path, "/path");
    }

    #[test]
    fn test_split_without_path() {
        let (_, host, port, path) = split("https://example.com:8443");
        assert_eq!(host, "example.com");
        assert_eq!(port, 8443);
        assert_eq!(path, "/");
    }

    #[test]
    fn test_split_unknown_scheme_has_no_default_port() {
        let (scheme, _, port, _) = split("Gopher://example.com/1");
        assert_eq!(scheme, "gopher");
        assert_eq!(port, 0);
    }

    #[test]
    fn test_split_empty_host() {
        let (_, host, port, path) = split("http:///only/path");
        assert_eq!(host, "");
        assert_eq!(port, 80);
        assert_eq!(path, "/only/path");
    }

    #[test]
    fn test_split_bad_port_falls_back_to_default() {
        assert_eq!(split("http://h:abc/").2, 80);
        assert_eq!(split("http://h:0/").2, 80);
        assert_eq!(split("ftp://h:/").2, 0);
        assert_eq!(split("http://h:81x/").2, 81);
    }

    #[test]
    fn test_port_with_leading_space_or_plus() {
        assert_eq!(split("http://h: 8080/").2, 8080);
        assert_eq!(split("http://h:+8080/").2, 8080);
        assert_eq!(split("https://h:-1/").2, 443);
    }

    #[test]
    fn test_colon_in_path_is_not_a_port() {
        let (_, host, port, path) = split("http://h/a:99");
        assert_eq!(host, "h");
        assert_eq!(port, 80);
        assert_eq!(path, "/a:99");
    }

    #[test]
    fn test_lowercases_scheme_in_buffer_only() {
        let mut buf = String::from("HtTp://HOST/PATH");
        split_url(&mut buf).unwrap();
        assert_eq!(buf, "http://HOST/PATH");
    }

    #[test]
    fn test_missing_delimiter() {
        let mut buf = String::from("example.com/path");
        assert_eq!(split_url(&mut buf), Err(Error::MalformedUrl));

        let mut buf = String::from("mailto:user@example.com");
        assert_eq!(split_url(&mut buf), Err(Error::MalformedUrl));

        let mut buf = String::new();
        assert_eq!(split_url(&mut buf), Err(Error::MalformedUrl));
    }

    #[test]
    fn test_first_delimiter_wins() {
        let (scheme, host, _, path) = split("a://b://c/d");
        assert_eq!(scheme, "a");
        assert_eq!(host, "b");
        assert_eq!(path, "//c/d");
    }
}
