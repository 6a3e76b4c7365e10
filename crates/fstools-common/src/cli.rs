//! Command-line helpers shared by the tool binaries.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use crate::errors::LookupError;
use crate::exit::{ExitCodeTable, ILLEGAL_OPTION};

/// Version string printed by `-V/--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flags every tool accepts next to its own options.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Show the program version and exit.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Determine the meaning of a non-zero status code and exit.
    #[arg(short = 'l', long, value_name = "CODE")]
    pub lookup: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl CommonArgs {
    /// Answer `--version` or `--lookup` if either was given.
    ///
    /// Returns `Ok(true)` when a request was answered and the tool should
    /// stop without doing any work.
    pub fn answer_info_request<E>(
        &self,
        table: &ExitCodeTable,
        out: &mut dyn Write,
    ) -> Result<bool, E>
    where
        E: From<LookupError> + From<std::io::Error>,
    {
        if self.version {
            writeln!(out, "{VERSION}")?;
            return Ok(true);
        }
        if let Some(raw) = &self.lookup {
            let text = table.describe(raw)?;
            out.write_all(text.as_bytes())?;
            return Ok(true);
        }
        Ok(false)
    }
}

/// Status a clap parse failure maps to: help and version requests are
/// successes, everything else is an illegal option.
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => ILLEGAL_OPTION,
    }
}

/// Parse the given argument list, printing clap's output on failure.
pub fn parse_from_or_exit<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args).map_err(|e| {
        let code = parse_exit_code(&e);
        if let Err(print_err) = e.print() {
            tracing::warn!("failed to print usage: {print_err}");
        }
        if code == ILLEGAL_OPTION {
            println!("unrecognized option detected. run with '-h'/'--help' to see valid options");
        }
        ExitCode::from(code)
    })
}

/// Parse the process arguments.
pub fn parse_or_exit<P: Parser>() -> Result<P, ExitCode> {
    parse_from_or_exit(std::env::args_os())
}
