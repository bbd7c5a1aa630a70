//! Whole-stream mode: read everything, normalize once, write it back out.

use std::io::{Read, Write};

use super::decode::DecodeMode;
use super::error::{CleanupError, Result};
use super::normalize::Normalizer;

/// Normalize all of `reader` into `writer`. Empty input writes nothing.
pub fn normalize_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    mode: DecodeMode,
) -> Result<()> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(CleanupError::Stream)?;
    if buf.is_empty() {
        return Ok(());
    }
    let text = mode.decode(&buf).map_err(CleanupError::StreamDecode)?;
    let cleaned = Normalizer::shared().apply(&text);
    writer
        .write_all(cleaned.as_bytes())
        .map_err(CleanupError::Stream)?;
    writer.flush().map_err(CleanupError::Stream)
}
