use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use fstools_common::CommonArgs;

/// Search for a file by name in the given directory (or directories).
#[derive(Parser, Debug)]
#[command(
    name = "explore",
    about,
    override_usage = "explore [OPTION]... FILENAME [DIRECTORY]..."
)]
pub struct Args {
    /// Print more detailed search info.
    #[arg(short, long)]
    pub verbose: bool,

    /// Recursively search the given directory (or directories).
    #[arg(short, long)]
    pub recursive: bool,

    /// Write the search results to the specified file.
    #[arg(short, long, value_name = "OUTFILE")]
    pub outfile: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// The filename to search for.
    #[arg(value_name = "FILENAME")]
    pub filename: Option<OsString>,

    /// The directory (or directories) to search in.
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<PathBuf>,
}
