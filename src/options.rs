//! Options for encoding and decoding.

use alloc::string::ToString;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Options controlling [`encode_with`](crate::encode_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct EncodeOptions {
    /// Always use the portable encoder (default: false)
    pub force_portable: bool,
}

impl EncodeOptions {
    /// Set whether to bypass the native encoder.
    pub fn with_force_portable(mut self, force_portable: bool) -> Self {
        self.force_portable = force_portable;
        self
    }
}

/// Options controlling [`decode_with`](crate::decode_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct DecodeOptions {
    /// Keep U+FEFF units at the start of the output (default: false)
    #[cfg_attr(feature = "serde", serde(rename = "ignoreBOM"))]
    pub ignore_bom: bool,
    /// Always use the portable decoder (default: false)
    pub force_portable: bool,
}

impl DecodeOptions {
    /// Set whether a leading byte order mark is kept.
    pub fn with_ignore_bom(mut self, ignore_bom: bool) -> Self {
        self.ignore_bom = ignore_bom;
        self
    }

    /// Set whether to bypass the native decoder.
    pub fn with_force_portable(mut self, force_portable: bool) -> Self {
        self.force_portable = force_portable;
        self
    }
}

/// Split a comma-separated flag list, skipping blanks.
fn flags<'a>(s: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    s.split(',').map(str::trim).filter(|flag| !flag.is_empty())
}

impl FromStr for EncodeOptions {
    type Err = Error;

    /// Parse a flag list such as `"force-portable"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self::default();
        for flag in flags(s) {
            match flag {
                "force-portable" => options.force_portable = true,
                other => {
                    return Err(Error::UnknownOption {
                        name: other.to_string(),
                    })
                }
            }
        }
        Ok(options)
    }
}

impl FromStr for DecodeOptions {
    type Err = Error;

    /// Parse a flag list such as `"ignore-bom, force-portable"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self::default();
        for flag in flags(s) {
            match flag {
                "ignore-bom" => options.ignore_bom = true,
                "force-portable" => options.force_portable = true,
                other => {
                    return Err(Error::UnknownOption {
                        name: other.to_string(),
                    })
                }
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_false() {
        assert!(!EncodeOptions::default().force_portable);
        let decode = DecodeOptions::default();
        assert!(!decode.ignore_bom);
        assert!(!decode.force_portable);
    }

    #[test]
    fn builders() {
        let options = DecodeOptions::default()
            .with_ignore_bom(true)
            .with_force_portable(true);
        assert_eq!(
            options,
            DecodeOptions {
                ignore_bom: true,
                force_portable: true
            }
        );
        assert!(EncodeOptions::default().with_force_portable(true).force_portable);
    }

    #[test]
    fn parse_flag_lists() {
        assert_eq!("".parse::<DecodeOptions>().unwrap(), DecodeOptions::default());
        assert_eq!(
            " ignore-bom , force-portable ".parse::<DecodeOptions>().unwrap(),
            DecodeOptions {
                ignore_bom: true,
                force_portable: true
            }
        );
        assert!("force-portable,".parse::<EncodeOptions>().unwrap().force_portable);
    }

    #[test]
    fn parse_rejects_unknown_flags() {
        assert_eq!(
            "ignore-bom".parse::<EncodeOptions>().unwrap_err(),
            Error::UnknownOption {
                name: "ignore-bom".into()
            }
        );
        assert!("fatal".parse::<DecodeOptions>().is_err());
    }

    #[cfg(feature = "serde")]
    mod serde_config {
        use super::*;

        #[test]
        fn camel_case_names() {
            let options: DecodeOptions =
                serde_json::from_str(r#"{"ignoreBOM": true, "forcePortable": false}"#).unwrap();
            assert!(options.ignore_bom);
            assert!(!options.force_portable);

            let json = serde_json::to_string(&EncodeOptions::default().with_force_portable(true))
                .unwrap();
            assert_eq!(json, r#"{"forcePortable":true}"#);
        }

        #[test]
        fn missing_fields_default() {
            let options: DecodeOptions = serde_json::from_str("{}").unwrap();
            assert_eq!(options, DecodeOptions::default());
        }

        #[test]
        fn malformed_config_rejected() {
            assert!(serde_json::from_str::<DecodeOptions>(r#"{"ignoreBom": true}"#).is_err());
            assert!(serde_json::from_str::<EncodeOptions>(r#"{"forcePortable": "yes"}"#).is_err());
            assert!(serde_json::from_str::<EncodeOptions>("true").is_err());
        }
    }
}
