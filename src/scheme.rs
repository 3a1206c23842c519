use crate::types::SchemeType;

/// Get the scheme type from an already lower-cased scheme string.
/// Filters by length + first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        _ => SchemeType::Other,
    }
}
