//! write: write a content string to one or more files.

mod cli;
mod errors;
mod write;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: cli::Args = match fstools_common::parse_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    fstools_common::logging::init(args.common.log_level.as_deref());
    tracing::debug!("write v{} starting", fstools_common::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fstools_common::finish(write::run(&args, &mut out))
}
