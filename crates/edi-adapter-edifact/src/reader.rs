//! Message input decoding

use crate::{Error, Result};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a message file into text.
///
/// See [`decode_message`] for how bytes are interpreted.
pub fn read_message(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path.display(), e))?;
    let text = decode_message(&bytes).into_owned();
    debug!(path = %path.display(), bytes = bytes.len(), "Read message");
    Ok(text)
}

/// Decode raw message bytes.
///
/// Valid UTF-8 is used as-is (minus a leading BOM). Anything else is taken
/// to be ISO-8859-1, which maps every byte to the code point of equal value.
pub fn decode_message(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("Input is not UTF-8, decoding as ISO-8859-1");
            Cow::Owned(bytes.iter().copied().map(char::from).collect())
        }
    }
}
