// Joseph Prichard
// 10/16/2026
// Error types for encoding, decoding and archive io

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum CodecError {
    // There are no symbols to encode, or a header declares zero symbols
    #[error("input is empty: nothing to encode")]
    EmptyInput,

    // The header cannot be parsed into a frequency table
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    // A tree build was attempted with no leaves
    #[error("malformed input: {0}")]
    MalformedInput(String),

    // The payload ran out of bits before every symbol was decoded
    #[error("payload truncated: decoded {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: u64, expected: u64 },

    #[error("not a huffpack archive: bad signature {0:#018x}")]
    BadSignature(u64),

    #[error("io failure: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    pub fn malformed_header(msg: impl Into<String>) -> Self {
        CodecError::MalformedHeader(msg.into())
    }

    pub fn malformed_input(msg: impl Into<String>) -> Self {
        CodecError::MalformedInput(msg.into())
    }
}
