//! Literal pattern scanning for the grep-like tools.
//!
//! [`scanner`] holds the per-line matcher; [`lines`] and [`file`] feed it
//! from disk one line at a time.

pub mod errors;
pub mod file;
pub mod lines;
pub mod record;
pub mod scanner;

pub use errors::ScanError;
pub use file::{open_lines, scan_file, LineMatches, ScanLines};
pub use lines::Lines;
pub use record::MatchRecord;
pub use scanner::{scan, scan_overlapping, LiteralScanner, Scan, ScanMode};
