//! Codec dispatch between native and portable implementations.
//!
//! A [`Utf8Codec`] owns a [`Capability`] and routes each call to the native
//! backend when its probe has passed and the options allow it, and to the
//! portable implementation otherwise. Both paths produce the same output for
//! every input, because a backend declines whatever it cannot match.
//!
//! ```
//! use utf8_codec::{DecodeOptions, EncodeOptions, Utf8Codec};
//!
//! // A codec that never consults a native backend
//! let codec = Utf8Codec::portable();
//! let units: Vec<u16> = "日本".encode_utf16().collect();
//! let bytes = codec.encode_with(&units, &EncodeOptions::default());
//! assert_eq!(codec.decode_to_string(&bytes, &DecodeOptions::default()), "日本");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::decode::decode_portable;
use crate::encode::encode_portable;
use crate::native::{Capability, NativeCodec, Unavailable};
use crate::text::utf16::{units_from_le_bytes, units_to_string};
use crate::{DecodeOptions, EncodeOptions, Error};

/// UTF-8 encoder and decoder with an optional native fast path.
#[derive(Debug)]
pub struct Utf8Codec<N> {
    capability: Capability<N>,
}

impl<N> Utf8Codec<N> {
    /// Create a codec that prefers `native` once it passes its probes.
    pub const fn new(native: N) -> Self {
        Self {
            capability: Capability::new(native),
        }
    }

    /// The backend and its cached probe verdicts.
    pub fn capability(&self) -> &Capability<N> {
        &self.capability
    }
}

impl Utf8Codec<Unavailable> {
    /// Create a codec that always uses the portable implementation.
    pub const fn portable() -> Self {
        Self::new(Unavailable)
    }
}

impl<N: Default> Default for Utf8Codec<N> {
    fn default() -> Self {
        Self::new(N::default())
    }
}

impl<N: NativeCodec> Utf8Codec<N> {
    /// Encode UTF-16 code units as UTF-8 using default options.
    #[inline]
    pub fn encode(&self, source: &[u16]) -> Vec<u8> {
        self.encode_with(source, &EncodeOptions::default())
    }

    /// Encode UTF-16 code units as UTF-8.
    pub fn encode_with(&self, source: &[u16], options: &EncodeOptions) -> Vec<u8> {
        if !options.force_portable {
            if let Some(native) = self.capability.encoder() {
                if let Some(data) = native.try_encode(source) {
                    return data;
                }
                tracing::trace!(backend = native.name(), "native encoder declined");
            }
        }

        encode_portable(source)
    }

    /// Encode a UTF-16LE byte region as UTF-8.
    ///
    /// Fails with [`Error::InvalidArgument`] before any conversion if the
    /// region has an odd number of bytes.
    pub fn encode_le_bytes(
        &self,
        source: &[u8],
        options: &EncodeOptions,
    ) -> Result<Vec<u8>, Error> {
        let units = units_from_le_bytes(source)?;
        Ok(self.encode_with(&units, options))
    }

    /// Decode UTF-8 bytes into UTF-16 code units using default options.
    #[inline]
    pub fn decode(&self, source: &[u8]) -> Vec<u16> {
        self.decode_with(source, &DecodeOptions::default())
    }

    /// Decode UTF-8 bytes into UTF-16 code units.
    pub fn decode_with(&self, source: &[u8], options: &DecodeOptions) -> Vec<u16> {
        if source.is_empty() {
            return Vec::new();
        }

        if !options.force_portable {
            if let Some(native) = self.capability.decoder(options.ignore_bom) {
                if let Some(units) = native.try_decode(source, options.ignore_bom) {
                    return units;
                }
                tracing::trace!(backend = native.name(), "native decoder declined");
            }
        }

        decode_portable(source, options.ignore_bom)
    }

    /// Decode UTF-8 bytes and assemble the result into a [`String`].
    ///
    /// Decoded lone surrogates become U+FFFD in the returned string.
    pub fn decode_to_string(&self, source: &[u8], options: &DecodeOptions) -> String {
        units_to_string(&self.decode_with(source, options))
    }
}
