//! Exit status plumbing shared by every tool.
//!
//! Each tool owns a static [`ExitCodeTable`] describing its non-zero status
//! codes. Helpers return typed errors implementing [`ExitStatus`]; only
//! `main` turns them into a process exit code through [`finish`].

use std::fmt;
use std::process::ExitCode;

use crate::errors::LookupError;

/// Status for a failure that fits no other class.
pub const GENERIC_FAILURE: u8 = 1;

/// Status for an unrecognised option or a missing option value.
pub const ILLEGAL_OPTION: u8 = 2;

/// Maps an error to the status code the process exits with.
pub trait ExitStatus {
    fn exit_code(&self) -> u8;
}

/// One documented status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodeEntry {
    pub code: u8,
    pub name: &'static str,
    pub details: &'static [&'static str],
}

/// A tool's full set of documented status codes.
#[derive(Debug, Clone, Copy)]
pub struct ExitCodeTable {
    entries: &'static [ExitCodeEntry],
}

impl ExitCodeTable {
    pub const fn new(entries: &'static [ExitCodeEntry]) -> Self {
        Self { entries }
    }

    pub fn get(&self, code: u8) -> Option<&ExitCodeEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn entries(&self) -> &[ExitCodeEntry] {
        self.entries
    }

    /// Resolve a user-supplied code into its printable description.
    ///
    /// Only the leading integer of `raw` is read, so `"3x"` means 3. Input
    /// with no leading integer, or whose integer is zero, is rejected as
    /// [`LookupError::NotACode`]; numbers outside the table as
    /// [`LookupError::Unknown`].
    pub fn describe(&self, raw: &str) -> Result<String, LookupError> {
        let code = match leading_integer(raw) {
            Some(0) | None => return Err(LookupError::NotACode(raw.to_string())),
            Some(n) => n,
        };

        let entry = u8::try_from(code)
            .ok()
            .and_then(|c| self.get(c))
            .ok_or(LookupError::Unknown(code))?;

        let mut text = format!("{}: {}\n", entry.code, entry.name);
        for line in entry.details {
            text.push_str(line);
            text.push('\n');
        }
        Ok(text)
    }
}

/// Optional sign and digits after leading whitespace; the rest is ignored.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let unsigned = s.trim_start_matches(['+', '-']);
    let sign_len = s.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Single point of process termination for a tool run.
///
/// Prints the error to stderr and selects its status code; success maps
/// to status 0.
pub fn finish<E>(result: Result<(), E>) -> ExitCode
where
    E: ExitStatus + fmt::Display,
{
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            tracing::debug!(code, "run failed: {e}");
            eprintln!("{e}");
            ExitCode::from(code)
        }
    }
}
