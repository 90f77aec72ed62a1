/*
    Crate wide error type.

    Every parse or decode failure is reported through this enum.
    DegenerateCurveOperation is the odd one out: it only shows up when
    point arithmetic is handed points that are not on the curve.
*/

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was missing or out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text that is not a valid decimal or hexadecimal number
    #[error("Malformed number: {0}")]
    MalformedNumber(String),

    /// Symbol outside the Base58 alphabet
    #[error("Invalid base58 character: {0:?}")]
    InvalidBase58Character(char),

    /// Base58Check checksum did not match the payload
    #[error("Bad checksum")]
    ChecksumMismatch,

    /// Decoded Base58Check data was too short to hold a checksum (and version)
    #[error("Decoded payload too short: {0} bytes")]
    PayloadTooShort(usize),

    /// WIF text with an unknown network/compression marker or bad framing
    #[error("Invalid WIF format: {0}")]
    InvalidWifFormat(String),

    /// Modular inverse of zero during point arithmetic
    #[error("Degenerate curve operation: denominator has no inverse")]
    DegenerateCurveOperation
}

pub type Result<T> = std::result::Result<T, Error>;
