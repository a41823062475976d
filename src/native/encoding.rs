//! Native backend built on `encoding_rs`.
//!
//! `encoding_rs::mem` converts between UTF-16 and UTF-8 with SIMD-accelerated
//! ASCII fast paths. Its encoder replaces unpaired surrogates exactly like the
//! portable one. Its decoder replaces malformed UTF-8 per maximal subpart,
//! which the portable decoder does not, so decoding only takes valid input and
//! declines the rest. It does no BOM handling of its own.

use alloc::vec;
use alloc::vec::Vec;

use super::NativeCodec;

/// Native codec backed by `encoding_rs::mem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRsCodec;

impl EncodingRsCodec {
    /// Create the backend.
    pub const fn new() -> Self {
        Self
    }
}

impl NativeCodec for EncodingRsCodec {
    fn name(&self) -> &'static str {
        "encoding_rs"
    }

    /// Converts into a worst-case buffer, then shrinks it to the written
    /// length. The shrink copies once; `encoding_rs` has no sizing pass.
    fn try_encode(&self, source: &[u16]) -> Option<Vec<u8>> {
        let capacity = source.len().checked_mul(3)?.checked_add(1)?;
        let mut data = vec![0u8; capacity];
        let written = encoding_rs::mem::convert_utf16_to_utf8(source, &mut data);
        data.truncate(written);
        data.shrink_to_fit();
        Some(data)
    }

    /// Declines anything that is not valid UTF-8.
    fn try_decode(&self, source: &[u8], ignore_bom: bool) -> Option<Vec<u16>> {
        let mut body = source;
        if !ignore_bom {
            // In valid input a leading U+FEFF can only come from these three bytes
            while let [0xEF, 0xBB, 0xBF, rest @ ..] = body {
                body = rest;
            }
        }

        let mut units = vec![0u16; body.len().checked_add(1)?];
        let written =
            encoding_rs::mem::convert_utf8_to_utf16_without_replacement(body, &mut units)?;
        units.truncate(written);
        Some(units)
    }
}
