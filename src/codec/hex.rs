//! Hex string decoding into caller-supplied byte buffers.

use crate::character_sets::hex_nibble;
use crate::compat::Vec;
use crate::error::{Error, Result};

/// Convert a hex digit to its 4-bit value; non-hex characters yield 0.
pub fn nibble(c: u8) -> u8 {
    hex_nibble(c)
}

/// Number of bytes produced from `n` hex characters: `ceil(n / 2)`.
pub fn hex_decoded_len(n: usize) -> usize {
    n.div_ceil(2)
}

/// Decode a hex string such as `"A489B1"` into `[0xA4, 0x89, 0xB1]`.
///
/// Invalid characters decode as a zero nibble rather than failing. With an
/// odd number of characters the first one is the low nibble of the first
/// byte (its high nibble is 0) and the remaining characters pair up, so
/// `"489B1"` decodes to `[0x04, 0x89, 0xB1]`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if `output` holds fewer than
/// [`hex_decoded_len`] bytes. Nothing is written in that case.
pub fn hex_to_bytes(output: &mut [u8], input: impl AsRef<[u8]>) -> Result<usize> {
    let input = input.as_ref();
    let needed = hex_decoded_len(input.len());
    if output.len() < needed {
        return Err(Error::BufferTooSmall);
    }

    decode_into(output, input);
    Ok(needed)
}

/// Decode `input` into the front of `output`, which the caller has sized to
/// at least [`hex_decoded_len`] bytes.
fn decode_into(output: &mut [u8], input: &[u8]) {
    let odd_length = input.len() & 1 == 1;
    let mut slots = output.iter_mut();
    let mut current = 0u8;

    for (index, &c) in input.iter().enumerate() {
        // Which index parity carries the high nibble depends on the length parity
        let is_high = (index & 1 == 1) == odd_length;
        if is_high {
            current = nibble(c) << 4;
        } else {
            if let Some(slot) = slots.next() {
                *slot = current | nibble(c);
            }
            current = 0;
        }
    }
}

/// Decode a hex string into a freshly allocated vector
pub fn hex_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    let input = input.as_ref();
    let mut bytes = Vec::new();
    bytes.resize(hex_decoded_len(input.len()), 0);
    decode_into(&mut bytes, input);
    bytes
}
