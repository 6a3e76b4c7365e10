use fstools_common::{
    ExitCodeEntry, ExitCodeTable, ExitStatus, LookupError, GENERIC_FAILURE, ILLEGAL_OPTION,
};
use fstools_walk::WalkError;

use crate::probe::ProbeError;

pub const ERROR_NO_DIRECTORIES_GIVEN: u8 = 3;
pub const ERROR_DIR_OPEN: u8 = 4;
pub const ERROR_DIR_READ: u8 = 5;
pub const ERROR_FILE_OPEN: u8 = 6;
pub const ERROR_FREAD: u8 = 7;
pub const INVALID_LOOKUP_CODE: u8 = 8;

const ENTRIES: &[ExitCodeEntry] = &[
    ExitCodeEntry {
        code: GENERIC_FAILURE,
        name: "ERROR_GENERIC",
        details: &["The program has failed for a nonspecific reason."],
    },
    ExitCodeEntry {
        code: ILLEGAL_OPTION,
        name: "ERROR_INVALID_OPTION",
        details: &[
            "The program was given an unrecognized option or argument.",
            "Run with '-h' or '--help' to see available options.",
        ],
    },
    ExitCodeEntry {
        code: ERROR_NO_DIRECTORIES_GIVEN,
        name: "ERROR_NO_DIRECTORIES_GIVEN",
        details: &[
            "The program was not given a directory to list.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: ERROR_DIR_OPEN,
        name: "ERROR_DIR_OPEN",
        details: &[
            "The program was unable to open the given directory by name.",
            "Ensure all given directory values are valid paths.",
        ],
    },
    ExitCodeEntry {
        code: ERROR_DIR_READ,
        name: "ERROR_DIR_READ",
        details: &["The program was unable to read an entry of a directory after opening it."],
    },
    ExitCodeEntry {
        code: ERROR_FILE_OPEN,
        name: "ERROR_FILE_OPEN",
        details: &["The program was unable to open a regular file to read its header."],
    },
    ExitCodeEntry {
        code: ERROR_FREAD,
        name: "ERROR_FREAD",
        details: &[
            "The program was unable to read a file header.",
            "Files of 1 to 4 bytes are too short to hold one.",
        ],
    },
    ExitCodeEntry {
        code: INVALID_LOOKUP_CODE,
        name: "INVALID_LOOKUP_CODE",
        details: &["The program was given an unrecognized lookup code."],
    },
];

pub const EXIT_CODES: ExitCodeTable = ExitCodeTable::new(ENTRIES);

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("fatal: no directories given")]
    NoDirectories,

    #[error("fatal: {0}")]
    Walk(#[from] WalkError),

    #[error("fatal: {0}")]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("fatal: failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ExitStatus for ListError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::NoDirectories => ERROR_NO_DIRECTORIES_GIVEN,
            Self::Walk(WalkError::Open { .. }) => ERROR_DIR_OPEN,
            Self::Walk(WalkError::Read { .. }) => ERROR_DIR_READ,
            Self::Probe(ProbeError::Open { .. }) => ERROR_FILE_OPEN,
            Self::Probe(
                ProbeError::Read { .. }
                | ProbeError::ShortRead { .. }
                | ProbeError::MissingClass { .. },
            ) => ERROR_FREAD,
            Self::Lookup(_) => INVALID_LOOKUP_CODE,
            Self::Output(_) => GENERIC_FAILURE,
        }
    }
}
