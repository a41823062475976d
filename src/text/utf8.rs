//! UTF-8 byte classification and emission.
//!
//! ## UTF-8 Encoding Rules
//!
//! UTF-8 is a variable-width encoding that uses 1-4 bytes per character:
//!
//! | Bytes | First byte    | Continuation bytes | Code point range     |
//! |-------|---------------|-------------------|----------------------|
//! | 1     | `0xxxxxxx`    | -                 | U+0000 - U+007F      |
//! | 2     | `110xxxxx`    | `10xxxxxx`        | U+0080 - U+07FF      |
//! | 3     | `1110xxxx`    | `10xxxxxx` × 2    | U+0800 - U+FFFF      |
//! | 4     | `1111xxxx`    | `10xxxxxx` × 3    | U+10000 - U+10FFFF   |
//!
//! The decoder treats every byte outside the first three rows as a 4-byte lead,
//! stray `10xxxxxx` bytes included, and keeps only its low three bits; values
//! that end up above U+10FFFF are replaced afterwards.

/// Check if a byte is a UTF-8 continuation byte (`10xxxxxx`).
#[inline(always)]
pub fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Get the sequence length announced by a byte in sequence-start position.
///
/// Continuation bytes and `F8`-`FF` are read as 4-byte leads.
#[inline]
pub fn sequence_length(lead_byte: u8) -> usize {
    match lead_byte {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0x80..=0xBF | 0xF0..=0xFF => 4,
    }
}

/// The payload bits a lead byte contributes, already shifted into place.
///
/// `len` must be the value [`sequence_length`] returned for `lead_byte`.
#[inline]
pub fn lead_bits(lead_byte: u8, len: usize) -> u32 {
    let byte = lead_byte as u32;
    match len {
        2 => (byte & 0x1F) << 6,
        3 => (byte & 0x0F) << 12,
        4 => (byte & 0x07) << 18,
        _ => byte & 0x7F,
    }
}

/// Number of bytes the UTF-8 form of `cp` occupies.
///
/// # Examples
///
/// ```
/// use utf8_codec::text::utf8::encoded_len;
///
/// assert_eq!(encoded_len('A' as u32), 1);
/// assert_eq!(encoded_len('é' as u32), 2);
/// assert_eq!(encoded_len('日' as u32), 3);
/// assert_eq!(encoded_len('🎉' as u32), 4);
/// ```
#[inline]
pub fn encoded_len(cp: u32) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x10000 {
        3
    } else {
        4
    }
}

/// Write the UTF-8 form of `cp` to the front of `dst`.
///
/// Returns the number of bytes written, which is always [`encoded_len`]`(cp)`.
/// `cp` must not exceed U+10FFFF.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`encoded_len`]`(cp)`.
///
/// # Examples
///
/// ```
/// use utf8_codec::text::utf8::write_code_point;
///
/// let mut buf = [0u8; 4];
/// let len = write_code_point(0x1F389, &mut buf);
/// assert_eq!(&buf[..len], "🎉".as_bytes());
/// ```
#[inline]
pub fn write_code_point(cp: u32, dst: &mut [u8]) -> usize {
    if cp < 0x80 {
        dst[0] = cp as u8;
        1
    } else if cp < 0x800 {
        dst[..2].copy_from_slice(&[0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8]);
        2
    } else if cp < 0x10000 {
        dst[..3].copy_from_slice(&[
            0xE0 | (cp >> 12) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]);
        3
    } else {
        dst[..4].copy_from_slice(&[
            0xF0 | ((cp >> 18) & 0x07) as u8,
            0x80 | ((cp >> 12) & 0x3F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]);
        4
    }
}
