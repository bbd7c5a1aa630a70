//! Byte to text decoding at the file and stdin boundary.
//!
//! The normalizer only ever sees valid UTF-8; this module decides what happens
//! to bytes that are not.

use std::borrow::Cow;

use thiserror::Error;

/// How invalid UTF-8 is handled when reading input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Invalid sequences are an error; nothing is rewritten.
    Strict,
    /// Each invalid sequence becomes U+FFFD and processing continues.
    #[default]
    ReplaceInvalid,
}

/// Input was not valid UTF-8 under [`DecodeMode::Strict`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid UTF-8 at byte offset {offset}")]
pub struct DecodeError {
    /// Offset of the first invalid byte within the decoded chunk.
    pub offset: usize,
}

impl DecodeMode {
    /// Decode `bytes` according to this mode. Borrows when the input is already valid.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, DecodeError> {
        match self {
            DecodeMode::ReplaceInvalid => Ok(String::from_utf8_lossy(bytes)),
            DecodeMode::Strict => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| DecodeError {
                    offset: e.valid_up_to(),
                }),
        }
    }
}
