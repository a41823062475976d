//! Native codec backends and capability probing.
//!
//! A native backend is any trusted converter that can stand in for the
//! portable encoder and decoder. Before a backend is used it must pass a fixed
//! self-test; the verdict is cached per [`Slot`] in a [`Capability`] and never
//! recomputed. A backend that fails its probe, or declines a call by returning
//! `None`, simply hands the work back to the portable implementation.
//!
//! ## Backends
//!
//! | Backend             | Feature  | Converter                                  |
//! |---------------------|----------|--------------------------------------------|
//! | [`EncodingRsCodec`] | `native` | `encoding_rs::mem` bulk conversion         |
//! | [`StdCodec`]        | `std`    | `char::decode_utf16` / `core::str::from_utf8` |
//! | [`Unavailable`]     | -        | none; every probe fails                    |
//!
//! Both real backends decode valid UTF-8 only and decline everything else, so
//! malformed input always takes the portable replacement path.
//!
//! [`DefaultNative`] names the first backend the enabled features provide.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "std")]
mod builtin;
#[cfg(feature = "native")]
mod encoding;

#[cfg(feature = "std")]
pub use builtin::StdCodec;
#[cfg(feature = "native")]
pub use encoding::EncodingRsCodec;

/// The native backend used by [`crate::default_codec`].
#[cfg(feature = "native")]
pub type DefaultNative = EncodingRsCodec;

/// The native backend used by [`crate::default_codec`].
#[cfg(all(feature = "std", not(feature = "native")))]
pub type DefaultNative = StdCodec;

/// The native backend used by [`crate::default_codec`].
#[cfg(not(any(feature = "std", feature = "native")))]
pub type DefaultNative = Unavailable;

/// A trusted UTF-8 converter that may replace the portable implementation.
///
/// Implementations must behave exactly like [`encode_portable`] and
/// [`decode_portable`] on every input they accept, including removal of
/// leading U+FEFF units unless `ignore_bom` is set. Returning `None` declines
/// the call and hands it to the portable implementation.
///
/// [`encode_portable`]: crate::encode::encode_portable
/// [`decode_portable`]: crate::decode::decode_portable
pub trait NativeCodec {
    /// Short backend name used in log output.
    fn name(&self) -> &'static str;

    /// Encode UTF-16 code units as UTF-8.
    fn try_encode(&self, source: &[u16]) -> Option<Vec<u8>>;

    /// Decode UTF-8 bytes into UTF-16 code units.
    fn try_decode(&self, source: &[u8], ignore_bom: bool) -> Option<Vec<u16>>;
}

/// A backend that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Unavailable {
    /// Create the backend.
    pub const fn new() -> Self {
        Self
    }
}

impl NativeCodec for Unavailable {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn try_encode(&self, _source: &[u16]) -> Option<Vec<u8>> {
        None
    }

    fn try_decode(&self, _source: &[u8], _ignore_bom: bool) -> Option<Vec<u16>> {
        None
    }
}

// =============================================================================
// Capability cache
// =============================================================================

/// The independently probed uses of a native backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Encoding.
    Encoder,
    /// Decoding with a leading byte order mark removed.
    Decoder,
    /// Decoding with a leading byte order mark kept (`ignore_bom`).
    DecoderKeepBom,
}

const UNKNOWN: u8 = 0;
const AVAILABLE: u8 = 1;
const UNAVAILABLE: u8 = 2;

/// A probe result written at most once per slot.
///
/// Concurrent first uses may both run the probe; they store the same value.
#[derive(Debug)]
struct Verdict(AtomicU8);

impl Verdict {
    const fn new() -> Self {
        Self(AtomicU8::new(UNKNOWN))
    }

    fn get(&self) -> Option<bool> {
        match self.0.load(Ordering::Acquire) {
            AVAILABLE => Some(true),
            UNAVAILABLE => Some(false),
            _ => None,
        }
    }

    fn get_or_probe(&self, probe: impl FnOnce() -> bool) -> bool {
        if let Some(available) = self.get() {
            return available;
        }
        let available = probe();
        let state = if available { AVAILABLE } else { UNAVAILABLE };
        self.0.store(state, Ordering::Release);
        available
    }
}

/// "test" as UTF-16.
const PROBE_UNITS: [u16; 4] = [0x74, 0x65, 0x73, 0x74];
const PROBE_BYTES: &[u8] = b"test";
/// A byte order mark followed by "x".
const PROBE_BOM_BYTES: [u8; 4] = [0xEF, 0xBB, 0xBF, 0x78];

/// A native backend together with its cached probe verdicts.
///
/// # Examples
///
/// ```
/// use utf8_codec::native::{Capability, Slot, Unavailable};
///
/// let capability = Capability::new(Unavailable);
/// assert_eq!(capability.probed(Slot::Encoder), None);
/// assert!(capability.encoder().is_none());
/// assert_eq!(capability.probed(Slot::Encoder), Some(false));
/// ```
#[derive(Debug)]
pub struct Capability<N> {
    native: N,
    encoder: Verdict,
    decoder: Verdict,
    decoder_keep_bom: Verdict,
}

impl<N> Capability<N> {
    /// Wrap a backend. No probe runs until a slot is first requested.
    pub const fn new(native: N) -> Self {
        Self {
            native,
            encoder: Verdict::new(),
            decoder: Verdict::new(),
            decoder_keep_bom: Verdict::new(),
        }
    }

    /// The wrapped backend, whether or not it passed any probe.
    pub fn native(&self) -> &N {
        &self.native
    }

    /// The cached verdict for `slot`, or `None` if it has not been probed.
    pub fn probed(&self, slot: Slot) -> Option<bool> {
        self.verdict(slot).get()
    }

    fn verdict(&self, slot: Slot) -> &Verdict {
        match slot {
            Slot::Encoder => &self.encoder,
            Slot::Decoder => &self.decoder,
            Slot::DecoderKeepBom => &self.decoder_keep_bom,
        }
    }
}

impl<N: NativeCodec> Capability<N> {
    /// The backend if it is usable for encoding, probing on first use.
    pub fn encoder(&self) -> Option<&N> {
        self.usable(Slot::Encoder)
    }

    /// The backend if it is usable for decoding with the given BOM handling,
    /// probing on first use.
    pub fn decoder(&self, ignore_bom: bool) -> Option<&N> {
        let slot = if ignore_bom {
            Slot::DecoderKeepBom
        } else {
            Slot::Decoder
        };
        self.usable(slot)
    }

    fn usable(&self, slot: Slot) -> Option<&N> {
        let available = self.verdict(slot).get_or_probe(|| {
            let available = probe(&self.native, slot);
            tracing::debug!(
                backend = self.native.name(),
                slot = ?slot,
                available,
                "probed native codec"
            );
            available
        });
        available.then_some(&self.native)
    }
}

/// Run the self-test for one slot.
fn probe<N: NativeCodec>(native: &N, slot: Slot) -> bool {
    match slot {
        Slot::Encoder => native
            .try_encode(&PROBE_UNITS)
            .is_some_and(|bytes| bytes == PROBE_BYTES),
        Slot::Decoder => probe_decoder(native, false, &[0x78]),
        Slot::DecoderKeepBom => probe_decoder(native, true, &[0xFEFF, 0x78]),
    }
}

fn probe_decoder<N: NativeCodec>(native: &N, ignore_bom: bool, expected_bom: &[u16]) -> bool {
    let plain = native
        .try_decode(PROBE_BYTES, ignore_bom)
        .is_some_and(|units| units == PROBE_UNITS);
    plain
        && native
            .try_decode(&PROBE_BOM_BYTES, ignore_bom)
            .is_some_and(|units| units == expected_bom)
}
