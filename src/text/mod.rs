//! Code point and code unit helpers.
//!
//! This module holds the bit-level pieces shared by the encoder and the
//! decoder: UTF-8 lead byte classification and emission in [`utf8`], and
//! surrogate pair handling plus `String` assembly in [`utf16`].
//!
//! ```
//! use utf8_codec::text::{utf16, utf8};
//!
//! assert_eq!(utf8::encoded_len(0x1F389), 4);
//! assert_eq!(utf16::combine_surrogates(0xD83C, 0xDF89), 0x1F389);
//! assert_eq!(utf16::units_to_string(&[0x68, 0x69]), "hi");
//! ```

pub mod utf16;
pub mod utf8;

/// U+FFFD, substituted for anything that cannot be encoded or decoded.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// U+FEFF, the byte order mark.
pub const BYTE_ORDER_MARK: u32 = 0xFEFF;

/// The largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;
