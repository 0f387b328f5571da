//! mojibake-repair — undo a UTF-8-read-as-windows-1251 mis-encoding.
//!
//! A UTF-8 file was opened as windows-1251 and re-saved as UTF-8, turning
//! Cyrillic text into mojibake. Encoding the garbled text back to
//! windows-1251 recovers the original bytes, which then decode as UTF-8.
//!
//! # Example
//!
//! ```
//! use mojibake_repair::repair;
//!
//! assert_eq!(repair("РїСЂРёРІРµС‚").unwrap(), "привет");
//! ```

pub mod cli;
mod error;
mod recode;

pub use error::RecodeError;
pub use recode::{decode_utf8, encode_windows_1251, repair};
