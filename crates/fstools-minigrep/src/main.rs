//! minigrep: total occurrences of a literal pattern per file.

mod cli;
mod errors;
mod grep;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: cli::Args = match fstools_common::parse_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    fstools_common::logging::init(args.common.log_level.as_deref());
    tracing::debug!("minigrep v{} starting", fstools_common::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fstools_common::finish(grep::run(&args, &mut out))
}
