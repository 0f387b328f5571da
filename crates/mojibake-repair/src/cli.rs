//! File-level logic behind the `fix-encoding` binary.

use std::fs;
use std::path::Path;

use crate::error::RecodeError;
use crate::recode::repair;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    Recode(RecodeError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Recode(e) => write!(f, "{e}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self { CliError::Io(e) }
}

impl From<RecodeError> for CliError {
    fn from(e: RecodeError) -> Self { CliError::Recode(e) }
}

// ── fix-encoding ──────────────────────────────────────────────────────────

/// Repair the file at `path` in place.
///
/// The file is rewritten only after the full repair succeeds; any failure
/// leaves it untouched.
pub fn repair_file(path: &Path) -> Result<(), CliError> {
    let content = fs::read_to_string(path)?;
    let fixed = repair(&content)?;
    fs::write(path, fixed)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
