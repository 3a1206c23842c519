/// Standard base64 alphabet (RFC 4648, no URL-safe variant)
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base64 padding character
pub const BASE64_PAD: u8 = b'=';

/// Hex digit to nibble value. Anything that is not a hex digit maps to 0.
const HEX_NIBBLE_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = i - b'0';
        i += 1;
    }
    let mut i = b'a';
    while i <= b'f' {
        table[i as usize] = i - b'a' + 10;
        table[(i - 32) as usize] = i - b'a' + 10; // Uppercase
        i += 1;
    }

    table
};

/// Convert a hex digit to its 4-bit value (lossy: non-hex bytes yield 0)
pub fn hex_nibble(b: u8) -> u8 {
    HEX_NIBBLE_TABLE[b as usize]
}

/// Whitespace as classified by C `isspace` in the "C" locale.
/// Unlike `u8::is_ascii_whitespace` this includes vertical tab (0x0B).
pub fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Check if a byte is a UTF-8 continuation byte (10xxxxxx)
pub fn is_continuation_byte(b: u8) -> bool {
    b & 0xC0 == 0x80
}
