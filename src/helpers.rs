/// Length of the logical string held in a byte buffer: everything before the
/// first NUL, or the whole slice when there is none.
pub fn c_str_len(bytes: &[u8]) -> usize {
    memchr::memchr(0, bytes).unwrap_or(bytes.len())
}

/// Find the "://" scheme delimiter.
/// Uses memchr's SIMD-accelerated substring search.
pub fn find_scheme_delimiter(input: &str) -> Option<usize> {
    memchr::memmem::find(input.as_bytes(), b"://")
}

/// Prune fragment (#hash) from a path.
/// Returns the path up to, but not including, the first '#'.
pub fn prune_fragment(input: &str) -> &str {
    memchr::memchr(b'#', input.as_bytes()).map_or(input, |pos| &input[..pos])
}
