//! Native backend built on the standard library's own UTF-16 and UTF-8 support.

use alloc::string::String;
use alloc::vec::Vec;

use super::NativeCodec;

/// Native codec backed by `char::decode_utf16` and `core::str::from_utf8`.
///
/// Decoding declines anything that is not valid UTF-8, since the standard
/// library's lossy replacement differs from the portable decoder's.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdCodec;

impl StdCodec {
    /// Create the backend.
    pub const fn new() -> Self {
        Self
    }
}

impl NativeCodec for StdCodec {
    fn name(&self) -> &'static str {
        "std"
    }

    fn try_encode(&self, source: &[u16]) -> Option<Vec<u8>> {
        let text: String = char::decode_utf16(source.iter().copied())
            .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        let mut data = text.into_bytes();
        data.shrink_to_fit();
        Some(data)
    }

    fn try_decode(&self, source: &[u8], ignore_bom: bool) -> Option<Vec<u16>> {
        let text = core::str::from_utf8(source).ok()?;
        let text = if ignore_bom {
            text
        } else {
            text.trim_start_matches('\u{FEFF}')
        };
        Some(text.encode_utf16().collect())
    }
}
