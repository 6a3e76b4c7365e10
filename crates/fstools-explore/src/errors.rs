use fstools_common::{
    ExitCodeEntry, ExitCodeTable, ExitStatus, LookupError, SinkError, GENERIC_FAILURE,
    ILLEGAL_OPTION,
};
use fstools_walk::WalkError;

pub const DIRECTORY_OPEN_FAILURE: u8 = 3;
pub const DIRECTORY_READ_FAILURE: u8 = 4;
pub const NO_FILENAME_GIVEN: u8 = 5;
pub const NO_DIRECTORY_GIVEN: u8 = 6;
pub const INVALID_LOOKUP_CODE: u8 = 7;
pub const OUTFILE_OPEN_FAILURE: u8 = 8;
pub const OUTFILE_WRITE_FAILURE: u8 = 9;

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
        code: DIRECTORY_OPEN_FAILURE,
        name: "DIRECTORY_OPEN_FAILURE",
        details: &[
            "The program was unable to open the given directory by name.",
            "Ensure all given directory values are valid paths.",
        ],
    },
    ExitCodeEntry {
        code: DIRECTORY_READ_FAILURE,
        name: "DIRECTORY_READ_FAILURE",
        details: &["The program was unable to read an entry of a directory after opening it."],
    },
    ExitCodeEntry {
        code: NO_FILENAME_GIVEN,
        name: "NO_FILENAME_GIVEN",
        details: &[
            "The program was not given a filename to search for.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: NO_DIRECTORY_GIVEN,
        name: "NO_DIRECTORY_GIVEN",
        details: &[
            "The program was not given a directory to search for a filename in.",
            "Run with '-h' or '--help' to see CLI syntax.",
        ],
    },
    ExitCodeEntry {
        code: INVALID_LOOKUP_CODE,
        name: "INVALID_LOOKUP_CODE",
        details: &["The program was given an unrecognized lookup code."],
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
];

pub const EXIT_CODES: ExitCodeTable = ExitCodeTable::new(ENTRIES);

#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    #[error("no filename given")]
    NoFilename,

    #[error("no directory given")]
    NoDirectory,

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Outfile(#[from] SinkError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ExitStatus for ExploreError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::NoFilename => NO_FILENAME_GIVEN,
            Self::NoDirectory => NO_DIRECTORY_GIVEN,
            Self::Walk(WalkError::Open { .. }) => DIRECTORY_OPEN_FAILURE,
            Self::Walk(WalkError::Read { .. }) => DIRECTORY_READ_FAILURE,
            Self::Outfile(SinkError::Open { .. }) => OUTFILE_OPEN_FAILURE,
            Self::Outfile(SinkError::Write { .. }) => OUTFILE_WRITE_FAILURE,
            Self::Lookup(_) => INVALID_LOOKUP_CODE,
            Self::Output(_) => GENERIC_FAILURE,
        }
    }
}
