//! Tests for the recode operations.

use encoding_rs::WINDOWS_1251;
use mojibake_repair::{decode_utf8, encode_windows_1251, repair, RecodeError};

/// Garble `text` the way the damage originally happened: take its UTF-8
/// bytes and decode them as windows-1251.
fn garble(text: &str) -> String {
    let (garbled, _, had_errors) = WINDOWS_1251.decode(text.as_bytes());
    assert!(!had_errors, "fixture bytes must all be mapped by windows-1251");
    garbled.into_owned()
}

#[test]
fn canonical_fixture() {
    assert_eq!(repair("РїСЂРёРІРµС‚").unwrap(), "привет");
}

#[test]
fn round_trips_garbled_cyrillic() {
    let original = "привет, мир";
    assert_eq!(repair(&garble(original)).unwrap(), original);
}

#[test]
fn round_trips_mixed_ascii_and_cyrillic() {
    let original = "export const label = \"Панель адміністратора\";";
    assert_eq!(repair(&garble(original)).unwrap(), original);
}

#[test]
fn ascii_passes_through() {
    assert_eq!(repair("hello, world").unwrap(), "hello, world");
}

#[test]
fn empty_input() {
    assert_eq!(repair("").unwrap(), "");
}

#[test]
fn unmappable_character_is_reported_with_offset() {
    let err = repair("abc→def").unwrap_err();
    assert_eq!(err, RecodeError::Unmappable { ch: '→', offset: 3 });
}

#[test]
fn already_correct_cyrillic_fails_decode() {
    // "я" encodes to the single byte 0xFF, which is not valid UTF-8. A file
    // that was never garbled fails the second step instead of being mangled.
    let err = repair("я").unwrap_err();
    assert_eq!(err, RecodeError::InvalidUtf8 { valid_up_to: 0 });
}

#[test]
fn invalid_utf8_reports_valid_prefix_length() {
    // "abя" recovers to [0x61, 0x62, 0xFF]; the valid prefix is "ab".
    let err = repair("abя").unwrap_err();
    assert_eq!(err, RecodeError::InvalidUtf8 { valid_up_to: 2 });
}

#[test]
fn encode_step_recovers_original_bytes() {
    let original = "кіт";
    let bytes = encode_windows_1251(&garble(original)).unwrap();
    assert_eq!(bytes, original.as_bytes());
}

#[test]
fn decode_step_rejects_truncated_sequence() {
    let err = decode_utf8(vec![0xD0]).unwrap_err();
    assert_eq!(err, RecodeError::InvalidUtf8 { valid_up_to: 0 });
}
