//! The recode steps: text → windows-1251 bytes → UTF-8 text.

use encoding_rs::WINDOWS_1251;

use crate::error::RecodeError;

/// Encode `text` to windows-1251 bytes, strictly.
///
/// `encoding_rs` substitutes numeric character references for unmappable
/// characters instead of failing; here any unmappable character is an error,
/// reported with its byte offset in `text`.
pub fn encode_windows_1251(text: &str) -> Result<Vec<u8>, RecodeError> {
    let (bytes, _, had_unmappable) = WINDOWS_1251.encode(text);
    if had_unmappable {
        let (offset, ch) = first_unmappable(text).unwrap_or((0, '\u{fffd}'));
        return Err(RecodeError::Unmappable { ch, offset });
    }
    Ok(bytes.into_owned())
}

fn first_unmappable(text: &str) -> Option<(usize, char)> {
    let mut buf = [0u8; 4];
    text.char_indices().find(|&(_, ch)| {
        let (_, _, bad) = WINDOWS_1251.encode(ch.encode_utf8(&mut buf));
        bad
    })
}

/// Decode `bytes` as UTF-8, strictly.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String, RecodeError> {
    String::from_utf8(bytes).map_err(|e| RecodeError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Reverse a UTF-8-read-as-windows-1251 mojibake.
///
/// The input was originally UTF-8, got decoded as windows-1251, and was
/// re-saved as UTF-8. Encoding it back to windows-1251 recovers the original
/// bytes, which are then decoded as the UTF-8 they always were.
pub fn repair(text: &str) -> Result<String, RecodeError> {
    let bytes = encode_windows_1251(text)?;
    decode_utf8(bytes)
}
