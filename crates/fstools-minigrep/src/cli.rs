use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use fstools_common::CommonArgs;
use fstools_scan::ScanMode;

/// Count occurrences of a pattern in the given file(s).
#[derive(Parser, Debug)]
#[command(name = "minigrep", about, override_usage = "minigrep [OPTION]... -e PATTERN [FILE]...")]
pub struct Args {
    /// Report the count of every line with a match.
    #[arg(short = 'n', long = "line-number")]
    pub line_numbers: bool,

    /// The pattern to count.
    #[arg(short = 'e', long, value_name = "PATTERN")]
    pub pattern: Option<OsString>,

    /// Count overlapping occurrences too.
    #[arg(long)]
    pub overlapping: bool,

    #[command(flatten)]
    pub common: CommonArgs,

    /// The file(s) to read.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn scan_mode(&self) -> ScanMode {
        if self.overlapping {
            ScanMode::Overlapping
        } else {
            ScanMode::Naive
        }
    }
}
