use fstools_common::{
    ExitCodeEntry, ExitCodeTable, ExitStatus, LookupError, SinkError, GENERIC_FAILURE,
    ILLEGAL_OPTION,
};
use fstools_scan::ScanError;

pub const NO_LITERAL_GIVEN: u8 = 3;
pub const NO_FILES_GIVEN: u8 = 4;
pub const FILE_OPEN_FAILURE: u8 = 5;
pub const FILE_READ_FAILURE: u8 = 6;
pub const OUTFILE_OPEN_FAILURE: u8 = 7;
pub const OUTFILE_WRITE_FAILURE: u8 = 8;
pub const INVALID_LOOKUP_CODE: u8 = 9;

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
        code: NO_LITERAL_GIVEN,
        name: "NO_LITERAL_GIVEN",
        details: &[
            "The program was not given a string literal to search for.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: NO_FILES_GIVEN,
        name: "NO_FILES_GIVEN",
        details: &[
            "The program was not given a file to search in.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: FILE_OPEN_FAILURE,
        name: "FILE_OPEN_FAILURE",
        details: &[
            "The program was unable to open a given file for reading.",
            "Ensure all given file values are valid paths.",
        ],
    },
    ExitCodeEntry {
        code: FILE_READ_FAILURE,
        name: "FILE_READ_FAILURE",
        details: &["The program was unable to read a line from a given file."],
    },
    ExitCodeEntry {
        code: OUTFILE_OPEN_FAILURE,
        name: "OUTFILE_OPEN_FAILURE",
        details: &[
            "The program was unable to open the given output file by name.",
            "Ensure the given output file name is available to use.",
        ],
    },
    ExitCodeEntry {
        code: OUTFILE_WRITE_FAILURE,
        name: "OUTFILE_WRITE_FAILURE",
        details: &["The program was unable to write a result to the output file."],
    },
    ExitCodeEntry {
        code: INVALID_LOOKUP_CODE,
        name: "INVALID_LOOKUP_CODE",
        details: &["The program was given an unrecognized lookup code."],
    },
];

pub const EXIT_CODES: ExitCodeTable = ExitCodeTable::new(ENTRIES);

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no literal given")]
    NoLiteral,

    #[error("no file(s) given")]
    NoFiles,

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Outfile(#[from] SinkError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ExitStatus for SearchError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::NoLiteral => NO_LITERAL_GIVEN,
            Self::NoFiles => NO_FILES_GIVEN,
            Self::Scan(ScanError::Open { .. }) => FILE_OPEN_FAILURE,
            Self::Scan(ScanError::Read { .. }) => FILE_READ_FAILURE,
            Self::Outfile(SinkError::Open { .. }) => OUTFILE_OPEN_FAILURE,
            Self::Outfile(SinkError::Write { .. }) => OUTFILE_WRITE_FAILURE,
            Self::Lookup(_) => INVALID_LOOKUP_CODE,
            Self::Output(_) => GENERIC_FAILURE,
        }
    }
}
