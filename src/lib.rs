//! # utf8-codec
//!
//! Conversion between UTF-16 code units and UTF-8 bytes.
//!
//! The crate exposes two total functions: [`encode()`] turns a sequence of UTF-16
//! code units into an exactly-sized UTF-8 buffer, and [`decode()`] turns an
//! arbitrary byte sequence back into UTF-16 code units. Neither ever fails on
//! well-typed input: unpaired surrogates and malformed UTF-8 are replaced with
//! U+FFFD.
//!
//! ## Module Organization
//!
//! - [`mod@encode`] - Portable encoder with an exact preflight sizing pass
//! - [`mod@decode`] - Portable decoder (byte-sequence state machine)
//! - [`native`] - Native codec backends and the probed capability cache
//! - [`codec`] - [`Utf8Codec`], which dispatches between native and portable paths
//! - [`text`] - Code point and code unit helpers shared by both directions
//!
//! ## Quick Start
//!
//! ```
//! use utf8_codec::{decode, encode, DecodeOptions};
//!
//! let units: Vec<u16> = "héllo 🎉".encode_utf16().collect();
//! let bytes = encode(&units);
//! assert_eq!(bytes, "héllo 🎉".as_bytes());
//! assert_eq!(decode(&bytes), units);
//!
//! // A leading byte order mark is dropped unless asked for
//! assert_eq!(decode(&[0xEF, 0xBB, 0xBF, b'x']), [0x78]);
//! let keep = DecodeOptions::default().with_ignore_bom(true);
//! assert_eq!(utf8_codec::decode_with(&[0xEF, 0xBB, 0xBF, b'x'], &keep), [0xFEFF, 0x78]);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Enables the `std`-backed native codec
//! - `native` (default) - Enables the `encoding_rs`-backed native codec
//! - `serde` - Serialization/deserialization of [`EncodeOptions`] and [`DecodeOptions`]

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

use alloc::string::String;
use alloc::vec::Vec;

// =============================================================================
// Core modules
// =============================================================================

/// Code point and code unit helpers.
pub mod text;

/// Portable UTF-16 to UTF-8 encoder.
pub mod encode;

/// Portable UTF-8 to UTF-16 decoder.
pub mod decode;

/// Native codec backends and capability probing.
pub mod native;

/// Codec dispatch between native and portable implementations.
pub mod codec;

mod error;
mod options;

// =============================================================================
// Public re-exports
// =============================================================================

pub use codec::Utf8Codec;
pub use error::Error;
pub use native::{Capability, DefaultNative, NativeCodec, Slot, Unavailable};
pub use options::{DecodeOptions, EncodeOptions};

#[cfg(feature = "native")]
pub use native::EncodingRsCodec;

#[cfg(feature = "std")]
pub use native::StdCodec;

// =============================================================================
// Process-wide default codec
// =============================================================================

/// The codec behind the free functions. Its verdicts are probed on first use
/// and kept for the lifetime of the process.
static DEFAULT_CODEC: Utf8Codec<DefaultNative> = Utf8Codec::new(DefaultNative::new());

/// The process-wide codec used by [`encode()`] and [`decode()`].
#[inline]
pub fn default_codec() -> &'static Utf8Codec<DefaultNative> {
    &DEFAULT_CODEC
}

/// Encode UTF-16 code units as UTF-8 using default options.
///
/// # Examples
///
/// ```
/// use utf8_codec::encode;
///
/// assert_eq!(encode(&[0x41, 0xE9]), [0x41, 0xC3, 0xA9]);
///
/// // An unpaired surrogate becomes U+FFFD
/// assert_eq!(encode(&[0xD800]), [0xEF, 0xBF, 0xBD]);
/// ```
#[inline]
pub fn encode(source: &[u16]) -> Vec<u8> {
    DEFAULT_CODEC.encode(source)
}

/// Encode UTF-16 code units as UTF-8.
#[inline]
pub fn encode_with(source: &[u16], options: &EncodeOptions) -> Vec<u8> {
    DEFAULT_CODEC.encode_with(source, options)
}

/// Encode a UTF-16LE byte region as UTF-8.
///
/// The region must hold whole code units; an odd byte count is rejected with
/// [`Error::InvalidArgument`].
///
/// ```
/// use utf8_codec::{encode_le_bytes, EncodeOptions};
///
/// let options = EncodeOptions::default();
/// assert_eq!(encode_le_bytes(&[0xAC, 0x20], &options).unwrap(), "€".as_bytes());
/// assert!(encode_le_bytes(&[0xAC], &options).is_err());
/// ```
#[inline]
pub fn encode_le_bytes(source: &[u8], options: &EncodeOptions) -> Result<Vec<u8>, Error> {
    DEFAULT_CODEC.encode_le_bytes(source, options)
}

/// Decode UTF-8 bytes into UTF-16 code units using default options.
///
/// # Examples
///
/// ```
/// use utf8_codec::decode;
///
/// assert_eq!(decode(b"A"), [0x41]);
///
/// // A broken sequence yields U+FFFD and the breaking byte is read again
/// assert_eq!(decode(&[0xE2, 0x28]), [0xFFFD, 0x28]);
/// ```
#[inline]
pub fn decode(source: &[u8]) -> Vec<u16> {
    DEFAULT_CODEC.decode(source)
}

/// Decode UTF-8 bytes into UTF-16 code units.
#[inline]
pub fn decode_with(source: &[u8], options: &DecodeOptions) -> Vec<u16> {
    DEFAULT_CODEC.decode_with(source, options)
}

/// Decode the bytes of any plain-data buffer without copying it first.
///
/// The buffer is viewed one byte at a time in memory order.
///
/// ```
/// use utf8_codec::{decode_pod, DecodeOptions};
///
/// let words = [u32::from_ne_bytes(*b"abcd")];
/// assert_eq!(decode_pod(&words, &DecodeOptions::default()), [0x61, 0x62, 0x63, 0x64]);
/// ```
#[inline]
pub fn decode_pod<T: bytemuck::Pod>(source: &[T], options: &DecodeOptions) -> Vec<u16> {
    DEFAULT_CODEC.decode_with(bytemuck::cast_slice(source), options)
}

/// Decode UTF-8 bytes straight into a Rust [`String`].
#[inline]
pub fn decode_to_string(source: &[u8], options: &DecodeOptions) -> String {
    DEFAULT_CODEC.decode_to_string(source, options)
}
