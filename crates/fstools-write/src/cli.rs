use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use fstools_common::CommonArgs;

/// Write the given content to file(s).
#[derive(Parser, Debug)]
#[command(name = "write", about, override_usage = "write [OPTION]... CONTENT FILE...")]
pub struct Args {
    /// Append to the file(s) instead of replacing their contents.
    #[arg(short, long)]
    pub append: bool,

    #[command(flatten)]
    pub common: CommonArgs,

    /// The content to write to the file(s).
    #[arg(value_name = "CONTENT")]
    pub content: Option<OsString>,

    /// The file(s) to write the content to.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
