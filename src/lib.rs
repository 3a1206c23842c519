//! Small in-place text and encoding utilities: URL splitting, hex decoding,
//! base64 encoding, character search, trailing-whitespace trimming and
//! UTF-8 to Latin-1 transcoding.
//!
//! The core routines never allocate; they work on caller-supplied buffers.
//! Owned convenience wrappers are available with `std` (or `alloc`).
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod codec;
mod error;
mod helpers;
mod parser;
mod scheme;
mod text;
mod types;
mod unicode;
mod url_components;

// Public API
pub use codec::base64::{base64_encode, base64_encode_to_string, base64_encoded_size};
pub use codec::hex::{hex_decoded_len, hex_to_bytes, hex_to_vec, nibble};
pub use error::{Error, Result};
pub use parser::split_url;
pub use text::{
    index_of, trim_trailing_whitespace, trim_trailing_whitespace_bytes, trimmed_len,
};
pub use types::SchemeType;
pub use unicode::latin1::{
    PLACEHOLDER, decode_latin1_char, try_utf8_to_latin1, utf8_to_latin1, utf8_to_latin1_vec,
};
pub use unicode::utf8::{decode_code_point, utf8_char_len};
pub use url_components::{OwnedUrlParts, UrlParts};
