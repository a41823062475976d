//! UTF-16 code unit helpers and `String` assembly.
//!
//! Code points above U+FFFF are carried as a high/low surrogate pair:
//!
//! ```text
//! high = 0xD800 | ((cp - 0x10000) >> 10)
//! low  = 0xDC00 | (cp & 0x3FF)
//! cp   = 0x10000 + ((high & 0x3FF) << 10) + (low & 0x3FF)
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::Error;

/// Maximum number of code units converted per block by [`units_to_string`].
pub const MAX_ASSEMBLY_BLOCK: usize = 65536;

/// Check if a code unit is a high (leading) surrogate, 0xD800-0xDBFF.
#[inline(always)]
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// Check if a code unit is a low (trailing) surrogate, 0xDC00-0xDFFF.
#[inline(always)]
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combine a high and a low surrogate into the code point they encode.
#[inline]
pub fn combine_surrogates(high: u16, low: u16) -> u32 {
    0x10000 + (((high as u32) & 0x3FF) << 10) + ((low as u32) & 0x3FF)
}

/// Split a code point above U+FFFF into its surrogate pair.
#[inline]
pub fn split_code_point(cp: u32) -> (u16, u16) {
    let offset = cp - 0x10000;
    (
        (0xD800 | (offset >> 10)) as u16,
        (0xDC00 | (cp & 0x3FF)) as u16,
    )
}

/// Assemble a `String` from UTF-16 code units.
///
/// Lone surrogates become U+FFFD. The conversion runs in blocks of at most
/// [`MAX_ASSEMBLY_BLOCK`] units so that no single reservation exceeds the
/// worst case for one block.
///
/// # Examples
///
/// ```
/// use utf8_codec::text::utf16::units_to_string;
///
/// assert_eq!(units_to_string(&[0xD83C, 0xDF89]), "🎉");
/// assert_eq!(units_to_string(&[0xD800, 0x41]), "\u{FFFD}A");
/// ```
pub fn units_to_string(units: &[u16]) -> String {
    units_to_string_in_blocks(units, MAX_ASSEMBLY_BLOCK)
}

/// Assemble a `String` from UTF-16 code units, `block_size` units at a time.
///
/// A block never ends between the two halves of a surrogate pair, so the
/// result does not depend on `block_size`. Values below 2 are treated as 2.
pub fn units_to_string_in_blocks(units: &[u16], block_size: usize) -> String {
    let block_size = block_size.max(2);
    let mut out = String::new();
    let mut rest = units;

    while !rest.is_empty() {
        let mut take = block_size.min(rest.len());
        if take < rest.len() && is_high_surrogate(rest[take - 1]) && is_low_surrogate(rest[take]) {
            take -= 1;
        }

        let (block, tail) = rest.split_at(take);
        append_block(&mut out, block);
        rest = tail;
    }

    out
}

fn append_block(out: &mut String, block: &[u16]) {
    // Each unit expands to at most 3 bytes; a pair is 2 units for 4 bytes
    out.reserve(block.len() * 3);
    out.extend(
        char::decode_utf16(block.iter().copied())
            .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

/// Read a UTF-16LE byte region as a sequence of code units.
///
/// Returns [`Error::InvalidArgument`] if the region has an odd length, since it
/// cannot then be a UTF-16 string.
///
/// ```
/// use utf8_codec::text::utf16::units_from_le_bytes;
///
/// assert_eq!(units_from_le_bytes(&[0x41, 0x00, 0xAC, 0x20]).unwrap(), [0x41, 0x20AC]);
/// assert!(units_from_le_bytes(&[0x41]).is_err());
/// ```
pub fn units_from_le_bytes(bytes: &[u8]) -> Result<Vec<u16>, Error> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidArgument {
            reason: "UTF-16LE source has an odd number of bytes",
        });
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
