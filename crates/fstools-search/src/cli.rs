use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use fstools_common::CommonArgs;
use fstools_scan::ScanMode;

/// Search for a string literal in the given file(s).
#[derive(Parser, Debug)]
#[command(name = "search", about, override_usage = "search [OPTION]... LITERAL [FILE]...")]
pub struct Args {
    /// Include line numbers for each line with a literal found.
    #[arg(short = 'n', long = "line-number")]
    pub line_numbers: bool,

    /// Print more detailed search info.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the search results to the specified file.
    #[arg(short, long, value_name = "OUTFILE")]
    pub outfile: Option<PathBuf>,

    /// Count every occurrence, including overlapping ones, instead of
    /// restarting after each match.
    #[arg(long)]
    pub overlapping: bool,

    #[command(flatten)]
    pub common: CommonArgs,

    /// The string literal to search for.
    #[arg(value_name = "LITERAL")]
    pub literal: Option<OsString>,

    /// The file(s) to search.
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
