//! In-place UTF-8 to Latin-1 (ISO-8859-1) transcoding.
//!
//! Every code point collapses to exactly one output byte, so the output is
//! never longer than the input and can overwrite it while it is read.

use super::utf8::decode_code_point;
use crate::compat::Vec;
use crate::error::Result;
use crate::helpers::c_str_len;

/// Byte emitted for code points that have no Latin-1 representation
pub const PLACEHOLDER: u8 = b'_';

/// Map a decoded code point to Latin-1.
/// Values above 0xFF, malformed sequences and a multi-byte encoded NUL all
/// become [`PLACEHOLDER`].
fn to_latin1(value: Option<u32>) -> u8 {
    match value {
        Some(v @ 1..=0xFF) => v as u8,
        _ => PLACEHOLDER,
    }
}

/// Decode one code point at `*pos` and return its Latin-1 byte.
///
/// On success `*pos` advances past the whole sequence.
///
/// # Errors
///
/// Returns [`Error::TruncatedSequence`](crate::Error::TruncatedSequence) if
/// the sequence runs past the end of `bytes` or into a NUL. `*pos` is left
/// unchanged.
pub fn decode_latin1_char(bytes: &[u8], pos: &mut usize) -> Result<u8> {
    let rest = bytes.get(*pos..).unwrap_or_default();
    let (value, len) = decode_code_point(rest)?;
    *pos += len;
    Ok(to_latin1(value))
}

/// Transcode the UTF-8 string in `buf` to Latin-1 in place.
///
/// The string ends at the first NUL or at the end of `buf`. Code points above
/// 0xFF become `'_'`; a sequence cut off by the end of the string becomes a
/// single `'_'`. A NUL terminator is written after the result when it fits.
///
/// Returns the transcoded length, which never exceeds the input length.
pub fn utf8_to_latin1(buf: &mut [u8]) -> usize {
    let mut read = 0;
    let mut write = 0;

    while buf.get(read).is_some_and(|&b| b != 0) {
        let byte = match decode_latin1_char(buf, &mut read) {
            Ok(byte) => byte,
            Err(_) => {
                // Swallow the truncated tail
                read += c_str_len(&buf[read..]);
                PLACEHOLDER
            }
        };
        buf[write] = byte;
        write += 1;
    }

    if let Some(terminator) = buf.get_mut(write) {
        *terminator = 0;
    }
    write
}

/// Like [`utf8_to_latin1`], but rejects a truncated sequence instead of
/// substituting it. The buffer is left untouched on error.
///
/// # Errors
///
/// Returns [`Error::TruncatedSequence`](crate::Error::TruncatedSequence) if a
/// sequence runs past the end of the string.
pub fn try_utf8_to_latin1(buf: &mut [u8]) -> Result<usize> {
    let end = c_str_len(buf);
    let mut pos = 0;
    while pos < end {
        let (_, len) = decode_code_point(&buf[pos..end])?;
        pos += len;
    }
    Ok(utf8_to_latin1(buf))
}

/// Transcode a byte vector in place and truncate it to the Latin-1 result
pub fn utf8_to_latin1_vec(bytes: &mut Vec<u8>) {
    let len = utf8_to_latin1(bytes);
    bytes.truncate(len);
}
