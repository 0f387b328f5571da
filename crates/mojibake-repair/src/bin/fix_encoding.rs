//! `fix-encoding` — repair a UTF-8-read-as-windows-1251 file in place.
//!
//! Usage:
//!   fix-encoding <file>

use mojibake_repair::cli::{repair_file, CliError};
use mojibake_repair::RecodeError;
use std::path::PathBuf;

fn main() {
    let path = match std::env::args_os().nth(1) {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("usage: fix-encoding <file>");
            std::process::exit(2);
        }
    };

    match repair_file(&path) {
        Ok(()) => {
            println!("Successfully fixed encoding.");
        }
        Err(CliError::Recode(e @ RecodeError::Unmappable { .. })) => {
            println!("{e}");
            println!("Failed to encode back to windows-1251. Content might have mixed encoding or a different source.");
            std::process::exit(1);
        }
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    }
}
