//! Portable UTF-8 to UTF-16 decoder.
//!
//! Decoding is a single pass over the input driven by a small state machine.
//! In [`Scan::Next`] the decoder waits for a sequence start; in
//! [`Scan::Need`] it waits for the continuation bytes of the current
//! sequence.
//!
//! ## Transitions from `Next`
//!
//! | Byte          | Meaning         | Action                                              |
//! |---------------|-----------------|-----------------------------------------------------|
//! | `0xxxxxxx`    | 1-byte sequence | emit the byte                                       |
//! | `110xxxxx`    | 2-byte lead     | need 1 more, or emit U+FFFD if the input ends first |
//! | `1110xxxx`    | 3-byte lead     | need 2 more, or emit U+FFFD if the input ends first |
//! | anything else | 4-byte lead     | need 3 more, or emit U+FFFD if the input ends first |
//!
//! A stray continuation byte therefore opens a 4-byte sequence and, like any
//! other 4-byte lead, contributes its low three bits.
//!
//! ## Transitions from `Need`
//!
//! A continuation byte merges its six payload bits into the pending code point.
//! Any other byte aborts the sequence: U+FFFD is emitted and the same byte is
//! scanned again from `Next`, so a byte that breaks a sequence is never lost.
//!
//! A completed value above U+10FFFF is emitted as U+FFFD. Overlong forms and
//! encoded surrogates are passed through as the value they spell.
//!
//! ## Output
//!
//! Every sequence that consumes `n` bytes yields at most `n` code units, so the
//! output buffer is sized to the input length up front and truncated in place
//! afterwards. Unless `ignore_bom` is set, a U+FEFF is dropped while nothing
//! has been written yet, so every leading byte order mark goes; any U+FEFF
//! after the first written unit is kept.

use alloc::vec;
use alloc::vec::Vec;

use crate::text::utf16::split_code_point;
use crate::text::utf8::{is_continuation_byte, lead_bits, sequence_length};
use crate::text::{BYTE_ORDER_MARK, MAX_CODE_POINT, REPLACEMENT_CHARACTER};

/// Decoder state between input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Awaiting the first byte of a sequence.
    Next,
    /// Awaiting `remaining` continuation bytes of a sequence.
    Need {
        /// Continuation bytes still expected (1-3).
        remaining: u32,
        /// Payload bits collected so far.
        code_point: u32,
    },
}

/// Destination for decoded code points.
struct UnitSink {
    units: Vec<u16>,
    len: usize,
    ignore_bom: bool,
}

impl UnitSink {
    fn with_capacity(capacity: usize, ignore_bom: bool) -> Self {
        Self {
            units: vec![0; capacity],
            len: 0,
            ignore_bom,
        }
    }

    #[inline]
    fn push(&mut self, cp: u32) {
        if cp >= 0x10000 {
            let (high, low) = split_code_point(cp);
            self.units[self.len] = high;
            self.units[self.len + 1] = low;
            self.len += 2;
        } else if self.len > 0 || cp != BYTE_ORDER_MARK || self.ignore_bom {
            self.units[self.len] = cp as u16;
            self.len += 1;
        }
    }

    fn finish(mut self) -> Vec<u16> {
        self.units.truncate(self.len);
        self.units
    }
}

/// Decode UTF-8 bytes into UTF-16 code units without consulting any native codec.
///
/// Never fails: malformed input is replaced with U+FFFD and decoding resumes
/// at the byte that broke the sequence.
///
/// # Examples
///
/// ```
/// use utf8_codec::decode::decode_portable;
///
/// assert_eq!(decode_portable("日本".as_bytes(), false), [0x65E5, 0x672C]);
///
/// // 3-byte lead cut short by '('
/// assert_eq!(decode_portable(&[0xE2, 0x28], false), [0xFFFD, 0x28]);
///
/// // Leading byte order mark
/// assert_eq!(decode_portable(&[0xEF, 0xBB, 0xBF, 0x78], false), [0x78]);
/// assert_eq!(decode_portable(&[0xEF, 0xBB, 0xBF, 0x78], true), [0xFEFF, 0x78]);
/// ```
pub fn decode_portable(source: &[u8], ignore_bom: bool) -> Vec<u16> {
    let length = source.len();
    if length == 0 {
        return Vec::new();
    }

    // Worst case: every byte becomes one code unit
    let mut sink = UnitSink::with_capacity(length, ignore_bom);
    let mut scan = Scan::Next;
    let mut pos = 0;

    while pos < length {
        let byte = source[pos];
        match scan {
            Scan::Next => {
                match sequence_length(byte) {
                    1 => sink.push(byte as u32),
                    len if length - pos > len - 1 => {
                        scan = Scan::Need {
                            remaining: len as u32 - 1,
                            code_point: lead_bits(byte, len),
                        };
                    }
                    _ => sink.push(REPLACEMENT_CHARACTER),
                }
                pos += 1;
            }
            Scan::Need {
                remaining,
                code_point,
            } => {
                if !is_continuation_byte(byte) {
                    // Rescan this byte as a sequence start
                    sink.push(REPLACEMENT_CHARACTER);
                    scan = Scan::Next;
                    continue;
                }

                let remaining = remaining - 1;
                let code_point = code_point | (((byte & 0x3F) as u32) << (6 * remaining));
                pos += 1;

                if remaining == 0 {
                    sink.push(if code_point > MAX_CODE_POINT {
                        REPLACEMENT_CHARACTER
                    } else {
                        code_point
                    });
                    scan = Scan::Next;
                } else {
                    scan = Scan::Need {
                        remaining,
                        code_point,
                    };
                }
            }
        }
    }

    // Leads only start a sequence when enough bytes follow to finish it
    debug_assert_eq!(scan, Scan::Next);

    sink.finish()
}
