//! Error type for the S-AES boundary checks.

use thiserror::Error;

/// Rejections raised when a caller hands in a value wider than 16 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The cipher key does not fit in 16 bits.
    #[error("key {value:#x} does not fit in 16 bits")]
    InvalidKeyWidth {
        /// Offending key value.
        value: u64,
    },

    /// A block handed to encrypt or decrypt does not fit in 16 bits.
    #[error("{what} {value:#x} is out of the 16-bit range")]
    OutOfRange {
        /// Which input was rejected.
        what: &'static str,
        /// Offending value.
        value: u64,
    },
}

/// Result alias for fallible S-AES entry points.
pub type Result<T> = core::result::Result<T, Error>;
