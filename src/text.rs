use crate::character_sets::is_c_space;
use crate::compat::String;
use crate::helpers::c_str_len;

/// Byte index of the first occurrence of `c` in `s`, or `None` when absent.
pub fn index_of(s: &str, c: char) -> Option<usize> {
    if c.is_ascii() {
        memchr::memchr(c as u8, s.as_bytes())
    } else {
        s.find(c)
    }
}

/// Length of `bytes` once trailing whitespace is removed.
/// The length is checked before each byte is looked at, so an empty or
/// all-whitespace input yields 0.
pub fn trimmed_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rposition(|&b| !is_c_space(b))
        .map_or(0, |pos| pos + 1)
}

/// Remove trailing whitespace in place. Truncates without reallocating.
pub fn trim_trailing_whitespace(s: &mut String) {
    // Whitespace is ASCII, so the cut always lands on a char boundary
    s.truncate(trimmed_len(s.as_bytes()));
}

/// Trim trailing whitespace from a NUL-terminated byte buffer.
///
/// The logical string ends at the first NUL (or the end of `buf`). A NUL is
/// written at the new end when anything was removed. Returns the new length.
pub fn trim_trailing_whitespace_bytes(buf: &mut [u8]) -> usize {
    let len = c_str_len(buf);
    let new_len = trimmed_len(&buf[..len]);
    if new_len < len {
        buf[new_len] = 0;
    }
    new_len
}
