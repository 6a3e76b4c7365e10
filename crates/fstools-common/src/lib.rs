pub mod cli;
pub mod errors;
pub mod exit;
pub mod logging;
pub mod sink;

pub use cli::{parse_or_exit, CommonArgs, VERSION};
pub use errors::{LookupError, SinkError};
pub use exit::{finish, ExitCodeEntry, ExitCodeTable, ExitStatus, GENERIC_FAILURE, ILLEGAL_OPTION};
pub use sink::AppendSink;
