//! Native and portable paths must produce identical output.
//!
//! A backend either reproduces the portable result or declines the call, so
//! every public entry point gives the same answer whichever path runs.

use proptest::prelude::*;
use utf8_codec::decode::decode_portable;
use utf8_codec::encode::encode_portable;
use utf8_codec::{default_codec, DecodeOptions, NativeCodec, Utf8Codec};

#[cfg(feature = "native")]
use utf8_codec::EncodingRsCodec;
#[cfg(feature = "std")]
use utf8_codec::StdCodec;

/// Inputs where maximal-subpart replacement and the portable state machine
/// part ways.
const MALFORMED: &[&[u8]] = &[
    &[0x80],
    &[0x80, 0x80, 0x80, 0x80],
    &[0x41, 0x80, 0x42],
    &[0xFE],
    &[0xC3],
    &[0xE2, 0x28],
    &[0xE2, 0x82],
    &[0x41, 0xE6, 0x97],
    &[0xF0, 0x9F, 0x8E],
    &[0xF0, 0x9F, 0x8E, 0x41],
    &[0xC0, 0x80],
    &[0xE0, 0x81, 0x81],
    &[0xED, 0xA0, 0x80],
    &[0xF4, 0x90, 0x80, 0x80],
    &[0xC3, 0xC3, 0xA9],
    &[0xEF, 0xBB, 0xBF, 0xEF, 0xBB, 0xBF, 0x78],
    &[0xEF, 0xBB, 0xBF, 0xFF],
    &[0x80, 0xEF, 0xBB, 0xBF],
];

type Decoder = Box<dyn Fn(&[u8], &DecodeOptions) -> Vec<u16>>;

/// The default codec plus every available native codec in its own dispatcher.
fn decoders() -> Vec<(&'static str, Decoder)> {
    let mut decoders: Vec<(&'static str, Decoder)> = Vec::new();
    decoders.push((
        "default",
        Box::new(|bytes: &[u8], options: &DecodeOptions| {
            default_codec().decode_with(bytes, options)
        }),
    ));
    #[cfg(feature = "native")]
    decoders.push((
        "encoding_rs",
        Box::new(|bytes: &[u8], options: &DecodeOptions| {
            Utf8Codec::new(EncodingRsCodec::new()).decode_with(bytes, options)
        }),
    ));
    #[cfg(feature = "std")]
    decoders.push((
        "std",
        Box::new(|bytes: &[u8], options: &DecodeOptions| {
            Utf8Codec::new(StdCodec::new()).decode_with(bytes, options)
        }),
    ));
    decoders
}

fn encoders() -> Vec<Box<dyn Fn(&[u16]) -> Option<Vec<u8>>>> {
    #[allow(unused_mut)]
    let mut encoders: Vec<Box<dyn Fn(&[u16]) -> Option<Vec<u8>>>> = Vec::new();
    #[cfg(feature = "native")]
    encoders.push(Box::new(|units: &[u16]| EncodingRsCodec.try_encode(units)));
    #[cfg(feature = "std")]
    encoders.push(Box::new(|units: &[u16]| StdCodec.try_encode(units)));
    encoders
}

fn assert_decoders_agree(bytes: &[u8]) {
    for ignore_bom in [false, true] {
        let options = DecodeOptions::default().with_ignore_bom(ignore_bom);
        let portable = decode_portable(bytes, ignore_bom);
        for (name, decode) in decoders() {
            assert_eq!(
                decode(bytes, &options),
                portable,
                "{} on {:02X?}, ignore_bom {}",
                name,
                bytes,
                ignore_bom
            );
        }
    }
}

#[test]
fn malformed_corpus_matches_portable() {
    for bytes in MALFORMED {
        assert_decoders_agree(bytes);
    }
}

#[test]
fn truncated_four_byte_sequence() {
    assert_eq!(utf8_codec::decode(&[0xF0, 0x9F, 0x8E]), [0xFFFD, 0xFFFD, 0xFFFD]);
}

#[test]
fn overlong_and_surrogate_forms_pass_through() {
    assert_eq!(utf8_codec::decode(&[0xC0, 0x80]), [0x0000]);
    assert_eq!(utf8_codec::decode(&[0xED, 0xA0, 0x80]), [0xD800]);
}

#[test]
fn repeated_leading_boms() {
    let bytes = [0xEF, 0xBB, 0xBF, 0xEF, 0xBB, 0xBF, 0x78];
    assert_eq!(utf8_codec::decode(&bytes), [0x78]);
    let keep = DecodeOptions::default().with_ignore_bom(true);
    assert_eq!(utf8_codec::decode_with(&bytes, &keep), [0xFEFF, 0xFEFF, 0x78]);
}

#[test]
fn portable_codec_matches_free_functions() {
    let codec = Utf8Codec::portable();
    let text: Vec<u16> = "Mixed: café 日本 🎉".encode_utf16().collect();
    assert_eq!(codec.encode(&text), utf8_codec::encode(&text));
    assert_eq!(codec.decode(&codec.encode(&text)), text);
}

proptest! {
    #[test]
    fn prop_encode_agrees(input in prop::collection::vec(any::<u16>(), 0..128)) {
        let portable = encode_portable(&input);
        for encode in encoders() {
            prop_assert_eq!(encode(&input).unwrap(), portable.clone());
        }
    }
}

proptest! {
    #[test]
    fn prop_encode_agrees_near_surrogates(
        input in prop::collection::vec(0xD7F0u16..=0xE010, 0..64)
    ) {
        let portable = encode_portable(&input);
        for encode in encoders() {
            prop_assert_eq!(encode(&input).unwrap(), portable.clone());
        }
    }
}

proptest! {
    #[test]
    fn prop_decode_arbitrary_bytes_agrees(
        bytes in prop::collection::vec(any::<u8>(), 0..256),
        ignore_bom in any::<bool>()
    ) {
        let options = DecodeOptions::default().with_ignore_bom(ignore_bom);
        let portable = default_codec().decode_with(&bytes, &options.with_force_portable(true));
        for (_, decode) in decoders() {
            prop_assert_eq!(decode(&bytes, &options), portable.clone());
        }
    }
}

proptest! {
    #[test]
    fn prop_decode_byte_soup_agrees(
        bytes in prop::collection::vec(
            prop_oneof![
                Just(0xEFu8),
                Just(0xBB),
                Just(0xBF),
                0x80u8..=0xBF,
                0xC0u8..=0xFF,
                0x00u8..=0x7F
            ],
            0..64
        )
    ) {
        assert_decoders_agree(&bytes);
    }
}

proptest! {
    #[test]
    fn prop_decode_valid_agrees(s in any::<String>(), ignore_bom in any::<bool>()) {
        let options = DecodeOptions::default().with_ignore_bom(ignore_bom);
        let portable = decode_portable(s.as_bytes(), ignore_bom);
        for (_, decode) in decoders() {
            prop_assert_eq!(decode(s.as_bytes(), &options), portable.clone());
        }
    }
}

proptest! {
    #[test]
    fn prop_decode_with_leading_boms_agrees(
        boms in 0usize..4,
        s in "\\PC*",
        ignore_bom in any::<bool>()
    ) {
        let mut bytes = [0xEF, 0xBB, 0xBF].repeat(boms);
        bytes.extend_from_slice(s.as_bytes());
        let options = DecodeOptions::default().with_ignore_bom(ignore_bom);
        let portable = decode_portable(&bytes, ignore_bom);
        for (_, decode) in decoders() {
            prop_assert_eq!(decode(&bytes, &options), portable.clone());
        }
    }
}

#[cfg(feature = "native")]
proptest! {
    #[test]
    fn prop_encoding_rs_accepts_only_what_it_matches(
        bytes in prop::collection::vec(any::<u8>(), 0..128),
        ignore_bom in any::<bool>()
    ) {
        match EncodingRsCodec.try_decode(&bytes, ignore_bom) {
            Some(units) => {
                prop_assert!(core::str::from_utf8(&bytes).is_ok());
                prop_assert_eq!(units, decode_portable(&bytes, ignore_bom));
            }
            None => {
                prop_assert!(core::str::from_utf8(&bytes).is_err());
            }
        }
    }
}
