use std::path::PathBuf;

use clap::Parser;
use fstools_common::CommonArgs;

/// List the contents of a given directory (or directories).
#[derive(Parser, Debug)]
#[command(name = "list", about, override_usage = "list [OPTION]... DIRECTORY...")]
pub struct Args {
    /// Print each directory entry's serial number.
    #[arg(short, long)]
    pub ino: bool,

    /// Read each regular file and print basic header information.
    #[arg(short, long)]
    pub files: bool,

    /// Print more detailed progress while running.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub common: CommonArgs,

    /// The directory (or directories) to look through.
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<PathBuf>,
}
