//! list: list the contents of one or more directories.

mod cli;
mod errors;
mod list;
mod probe;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: cli::Args = match fstools_common::parse_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    fstools_common::logging::init(args.common.log_level.as_deref());
    tracing::debug!("list v{} starting", fstools_common::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fstools_common::finish(list::run(&args, &mut out))
}
