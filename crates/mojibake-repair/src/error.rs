use thiserror::Error;

/// Failure kinds of the two recode steps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecodeError {
    /// The text contains a character with no windows-1251 mapping, so the
    /// original byte sequence cannot be recovered from it.
    #[error("character {ch:?} at byte offset {offset} has no windows-1251 mapping")]
    Unmappable { ch: char, offset: usize },
    /// The recovered bytes are not valid UTF-8. `valid_up_to` is the length
    /// of the longest valid prefix.
    #[error("recovered bytes are not valid UTF-8 past offset {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}
