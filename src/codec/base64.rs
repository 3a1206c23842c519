//! Base64 encoding (standard alphabet, padded). Decoding is not provided.

use crate::character_sets::{BASE64_ALPHABET, BASE64_PAD};
use crate::compat::{String, Vec};
use crate::error::{Error, Result};

/// Encoded length of `n` input bytes: `4 * ceil(n / 3)`, without terminator.
pub fn base64_encoded_size(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Map the low six bits of `v` to an alphabet character
fn sextet(v: u32) -> u8 {
    BASE64_ALPHABET[(v & 0x3F) as usize]
}

/// Base64-encode `input` into `output` and return the encoded text.
///
/// `output` must hold at least [`base64_encoded_size`] bytes. When it has
/// room for one more, a NUL terminator is written after the text, so a
/// C-style buffer of `base64_encoded_size(n) + 1` bytes ends up terminated.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `input` is empty.
/// - [`Error::BufferTooSmall`] if `output` cannot hold the encoded text.
pub fn base64_encode<'o>(input: &[u8], output: &'o mut [u8]) -> Result<&'o str> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    let encoded_len = base64_encoded_size(input.len());
    if output.len() < encoded_len {
        return Err(Error::BufferTooSmall);
    }

    for (group, quad) in input.chunks(3).zip(output.chunks_exact_mut(4)) {
        // Pack up to 3 bytes big-endian into the low 24 bits
        let v = group
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &b)| acc | (u32::from(b) << (16 - 8 * i)));

        quad[0] = sextet(v >> 18);
        quad[1] = sextet(v >> 12);
        quad[2] = if group.len() > 1 {
            sextet(v >> 6)
        } else {
            BASE64_PAD
        };
        quad[3] = if group.len() > 2 {
            sextet(v)
        } else {
            BASE64_PAD
        };
    }

    if let Some(terminator) = output.get_mut(encoded_len) {
        *terminator = 0;
    }

    // Alphabet and padding are ASCII
    Ok(core::str::from_utf8(&output[..encoded_len]).unwrap_or_default())
}

/// Base64-encode `input` into a new string (requires allocation).
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `input` is empty.
pub fn base64_encode_to_string(input: &[u8]) -> Result<String> {
    let mut buffer = Vec::new();
    buffer.resize(base64_encoded_size(input.len()), 0);
    base64_encode(input, &mut buffer).map(String::from)
}
