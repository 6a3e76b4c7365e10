use fstools_common::{
    ExitCodeEntry, ExitCodeTable, ExitStatus, LookupError, GENERIC_FAILURE, ILLEGAL_OPTION,
};
use fstools_scan::ScanError;

pub const NO_PATTERN_GIVEN: u8 = 3;
pub const NO_FILES_GIVEN: u8 = 4;
pub const FILE_OPEN_FAILURE: u8 = 5;
pub const FILE_READ_FAILURE: u8 = 6;
pub const INVALID_LOOKUP_CODE: u8 = 7;

const ENTRIES: &[ExitCodeEntry] = &[
    ExitCodeEntry {
        code: GENERIC_FAILURE,
        name: "nonspecific error",
        details: &["The program has failed for a nonspecific reason."],
    },
    ExitCodeEntry {
        code: ILLEGAL_OPTION,
        name: "ILLEGAL_OPTION",
        details: &[
            "The program was given an unrecognized option or argument.",
            "Run with '-h' or '--help' to see available options.",
        ],
    },
    ExitCodeEntry {
        code: NO_PATTERN_GIVEN,
        name: "NO_PATTERN_GIVEN",
        details: &[
            "The program was not given a pattern with '-e'.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: NO_FILES_GIVEN,
        name: "NO_FILES_GIVEN",
        details: &["The program was not given a file to read."],
    },
    ExitCodeEntry {
        code: FILE_OPEN_FAILURE,
        name: "FILE_OPEN_FAILURE",
        details: &["The program was unable to open a given file for reading."],
    },
    ExitCodeEntry {
        code: FILE_READ_FAILURE,
        name: "FILE_READ_FAILURE",
        details: &["The program was unable to read a line from a given file."],
    },
    ExitCodeEntry {
        code: INVALID_LOOKUP_CODE,
        name: "INVALID_LOOKUP_CODE",
        details: &["The program was given an unrecognized lookup code."],
    },
];

pub const EXIT_CODES: ExitCodeTable = ExitCodeTable::new(ENTRIES);

#[derive(Debug, thiserror::Error)]
pub enum GrepError {
    #[error("no pattern given")]
    NoPattern,

    #[error("no file(s) given")]
    NoFiles,

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ExitStatus for GrepError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::NoPattern => NO_PATTERN_GIVEN,
            Self::NoFiles => NO_FILES_GIVEN,
            Self::Scan(ScanError::Open { .. }) => FILE_OPEN_FAILURE,
            Self::Scan(ScanError::Read { .. }) => FILE_READ_FAILURE,
            Self::Lookup(_) => INVALID_LOOKUP_CODE,
            Self::Output(_) => GENERIC_FAILURE,
        }
    }
}
