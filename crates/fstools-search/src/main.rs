//! search: count occurrences of a string literal in files.

mod cli;
mod errors;
mod search;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: cli::Args = match fstools_common::parse_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    fstools_common::logging::init(args.common.log_level.as_deref());
    tracing::debug!("search v{} starting", fstools_common::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fstools_common::finish(search::run(&args, &mut out))
}
