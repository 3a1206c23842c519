use crate::character_sets::is_continuation_byte;
use crate::error::{Error, Result};

/// Length of the UTF-8 sequence introduced by `lead`, from 1 to 6.
///
/// Uses the original RFC 2279 layout that allows 5- and 6-byte sequences:
/// `0xxxxxxx` → 1, `110xxxxx` → 2, `1110xxxx` → 3, `11110xxx` → 4,
/// `111110xx` → 5, `1111110x` → 6. Only the bits below the top one are
/// tested, so a stray continuation byte is sized by bits 5..2 the same way
/// (0x80 → 2, 0xA0 → 3, 0xB0 → 4, 0xB8 → 5, 0xBC → 6) and `0xFE`/`0xFF`
/// count as 6.
pub fn utf8_char_len(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead & 0x20 == 0 {
        2
    } else if lead & 0x10 == 0 {
        3
    } else if lead & 0x08 == 0 {
        4
    } else if lead & 0x04 == 0 {
        5
    } else {
        6
    }
}

/// Decode the code point at the start of `bytes`.
///
/// Returns the decoded value and the number of bytes it occupies. The value
/// is `None` when a byte inside the sequence is not a continuation byte; the
/// whole sequence is still consumed. A NUL byte inside the sequence ends the
/// string.
///
/// # Errors
///
/// Returns [`Error::TruncatedSequence`] if `bytes` is empty or ends before
/// the sequence does.
pub fn decode_code_point(bytes: &[u8]) -> Result<(Option<u32>, usize)> {
    let Some(&lead) = bytes.first() else {
        return Err(Error::TruncatedSequence);
    };
    let len = utf8_char_len(lead);
    if len == 1 {
        return Ok((Some(u32::from(lead)), 1));
    }

    let continuation = bytes
        .get(1..len)
        .filter(|tail| !tail.contains(&0))
        .ok_or(Error::TruncatedSequence)?;

    // Mask off the length marker, then append 6 payload bits per byte
    let initial = u32::from(lead & (0xFF >> (len + 1)));
    let value = continuation.iter().try_fold(initial, |acc, &b| {
        is_continuation_byte(b).then(|| (acc << 6) | u32::from(b & 0x3F))
    });

    Ok((value, len))
}
