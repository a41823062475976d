//! Error type for contract violations.
//!
//! Malformed text is never an error: both directions substitute U+FFFD and
//! carry on. Only arguments that are not text or not a valid configuration are
//! rejected, before any data is touched.

use alloc::string::String;

/// Errors raised for arguments that violate the codec's contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source is not a text or byte buffer of the expected shape.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },

    /// An options value named a flag that does not exist.
    #[error("unknown option `{name}`")]
    UnknownOption {
        /// The offending flag as it was written.
        name: String,
    },
}
