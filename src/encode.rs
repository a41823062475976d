//! Portable UTF-16 to UTF-8 encoder.
//!
//! Encoding runs in two passes. [`preflight`] walks the code units once,
//! pairing surrogates into code points and summing the exact UTF-8 length.
//! The emission pass then fills a buffer allocated at exactly that length, so
//! the output never reallocates and carries no spare capacity.
//!
//! ## Surrogate Handling
//!
//! | Input                                    | Code point       | Units consumed |
//! |------------------------------------------|------------------|----------------|
//! | unit outside 0xD800-0xDFFF               | the unit itself  | 1              |
//! | high surrogate followed by low surrogate | combined pair    | 2              |
//! | high surrogate followed by anything else | U+FFFD           | 1              |
//! | high surrogate at end of input           | U+FFFD           | 1              |
//! | lone low surrogate                       | U+FFFD           | 1              |

use alloc::vec;
use alloc::vec::Vec;

use crate::text::utf16::{combine_surrogates, is_high_surrogate, is_low_surrogate};
use crate::text::utf8::{encoded_len, write_code_point};
use crate::text::REPLACEMENT_CHARACTER;

/// Result of the sizing pass over a UTF-16 source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    /// Code points in source order, with unpaired surrogates replaced.
    pub code_points: Vec<u32>,
    /// Exact number of bytes the UTF-8 encoding occupies.
    pub utf8_len: usize,
}

/// Convert UTF-16 code units to code points and measure their UTF-8 length.
///
/// # Examples
///
/// ```
/// use utf8_codec::encode::preflight;
///
/// let pre = preflight(&[0x41, 0xD83C, 0xDF89]);
/// assert_eq!(pre.code_points, [0x41, 0x1F389]);
/// assert_eq!(pre.utf8_len, 5);
/// ```
pub fn preflight(source: &[u16]) -> Preflight {
    // Worst case: one code point per code unit
    let mut code_points = Vec::with_capacity(source.len());
    let mut utf8_len = 0;
    let mut units = source.iter().copied().peekable();

    while let Some(unit) = units.next() {
        let cp = if is_low_surrogate(unit) {
            REPLACEMENT_CHARACTER
        } else if is_high_surrogate(unit) {
            // The unit after an unpaired high surrogate is scanned on its own
            match units.next_if(|&next| is_low_surrogate(next)) {
                Some(low) => combine_surrogates(unit, low),
                None => REPLACEMENT_CHARACTER,
            }
        } else {
            unit as u32
        };

        utf8_len += encoded_len(cp);
        code_points.push(cp);
    }

    Preflight {
        code_points,
        utf8_len,
    }
}

/// Encode UTF-16 code units as UTF-8 without consulting any native codec.
///
/// Never fails: unpaired surrogates are encoded as U+FFFD. The returned
/// buffer's length and capacity both equal the encoded size.
///
/// # Examples
///
/// ```
/// use utf8_codec::encode::encode_portable;
///
/// let units: Vec<u16> = "日本".encode_utf16().collect();
/// assert_eq!(encode_portable(&units), "日本".as_bytes());
/// assert_eq!(encode_portable(&[0xD800]), [0xEF, 0xBF, 0xBD]);
/// ```
pub fn encode_portable(source: &[u16]) -> Vec<u8> {
    let Preflight {
        code_points,
        utf8_len,
    } = preflight(source);

    let mut data = vec![0u8; utf8_len];
    let mut pos = 0;
    for cp in code_points {
        pos += write_code_point(cp, &mut data[pos..]);
    }
    debug_assert_eq!(pos, utf8_len);

    data
}
