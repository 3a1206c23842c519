use crate::character_sets::is_c_space;

/// Parse a port the way C `atoi` does: skip leading whitespace, accept an
/// optional '+', then consume the leading run of decimal digits and stop at
/// the first other byte.
/// Returns 0 when there are no digits (a '-' sign included, since ports are
/// unsigned); saturates at `u32::MAX`.
pub fn parse_port(port: &str) -> u32 {
    let bytes = port.as_bytes();
    let start = bytes
        .iter()
        .position(|&b| !is_c_space(b))
        .unwrap_or(bytes.len());
    let digits = &bytes[start..];
    let digits = digits.strip_prefix(b"+").unwrap_or(digits);

    digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}
